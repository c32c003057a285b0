pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod model;
pub mod processor;
pub mod report;
pub mod sink;
pub mod stream;

pub use error::{FieldError, Result};
pub use processor::{FieldProcessor, RunSummary, run};

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("line {line}: malformed field header {header:?}, expected two integers")]
    MalformedDimensions { line: usize, header: String },

    #[error("line {line}: field dimensions {rows}x{cols} out of range")]
    OutOfRangeDimensions { line: usize, rows: i64, cols: i64 },

    #[error("field #{field}: expected {expected} rows, only {available} available")]
    ShortField {
        field: usize,
        expected: usize,
        available: usize,
    },

    #[error("input ended after {fields} fields without a 0 0 terminator")]
    MissingTerminator { fields: usize },

    #[error("field #{field}: row {row} is {width} wide, field has {cols} columns")]
    RowTooWide {
        field: usize,
        row: usize,
        width: usize,
        cols: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FieldError {
    /// True for errors raised by a header line that cannot start a field.
    pub fn is_malformed_header(&self) -> bool {
        matches!(
            self,
            Self::MalformedDimensions { .. } | Self::OutOfRangeDimensions { .. }
        )
    }
}

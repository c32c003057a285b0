use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    report::ReportFormat,
    sink::{FileSink, ReportSink, WriterSink},
};

pub const DEFAULT_INPUT: &str = "mines.txt";
pub const DEFAULT_OUTPUT: &str = "minesweeper_output.txt";

/// Marker for stdin / stdout in place of a path.
const STDIO: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn parse(value: &str) -> Self {
        if value == STDIO {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        let reader: Box<dyn BufRead> = match self {
            Self::Stdin => Box::new(io::stdin().lock()),
            Self::File(path) => Box::new(BufReader::new(File::open(path)?)),
        };
        Ok(reader)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn parse(value: &str) -> Self {
        if value == STDIO {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }

    /// Opens the sink. With `truncate` a file output is emptied first; otherwise blocks
    /// are appended after whatever it already holds.
    pub fn open(&self, truncate: bool) -> io::Result<Box<dyn ReportSink>> {
        let sink: Box<dyn ReportSink> = match self {
            Self::Stdout => Box::new(WriterSink::new(io::stdout())),
            Self::File(path) => {
                let sink = FileSink::new(path);
                if truncate {
                    sink.truncate()?;
                }
                Box::new(sink)
            }
        };
        Ok(sink)
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputSource,
    pub output: OutputSink,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub truncate: bool,
}

impl Config {
    pub fn new(input: InputSource, output: OutputSink) -> Self {
        Self {
            input,
            output,
            format: ReportFormat::default(),
            truncate: false,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            InputSource::parse(DEFAULT_INPUT),
            OutputSink::parse(DEFAULT_OUTPUT),
        )
    }
}

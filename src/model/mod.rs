use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum Cell {
    #[serde(rename = "mine")]
    Mine,
    #[serde(rename = "count")]
    Count { adjacent: u8 },
}

impl Cell {
    /// The single character used for this cell in a text report. A count that isn't a
    /// single digit shows as `?`.
    pub fn glyph(&self) -> char {
        match self {
            Self::Mine => '*',
            Self::Count { adjacent } => char::from_digit(u32::from(*adjacent), 10).unwrap_or('?'),
        }
    }
}

/// A field's counts as written by the JSON report format.
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldReport {
    pub field: usize,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Cell>>,
}

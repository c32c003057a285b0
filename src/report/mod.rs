use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{error::Result, logic::NeighborAccumulator, model::FieldReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Renders the block for the `index`-th field (1-based) in this format.
    pub fn render(&self, index: usize, accumulator: &NeighborAccumulator) -> Result<String> {
        match self {
            Self::Text => Ok(format_block(index, accumulator)),
            Self::Json => format_json(index, accumulator),
        }
    }
}

/// The text report block for one field.
///
/// ```text
/// Field #1:
/// *100
/// 2210
/// ```
///
/// Blocks after the first start with a blank line so that appended blocks are
/// separated by exactly one empty line.
pub fn format_block(index: usize, accumulator: &NeighborAccumulator) -> String {
    let dimensions = accumulator.dimensions();
    let mut output = String::with_capacity(16 + dimensions.rows * (dimensions.cols + 1));

    if index > 1 {
        output.push('\n');
    }
    output.push_str(&format!("Field #{index}:\n"));

    for row in 0..dimensions.rows {
        output.extend(accumulator.row_cells(row).map(|cell| cell.glyph()));
        output.push('\n');
    }

    output
}

/// One JSON object on its own line.
pub fn format_json(index: usize, accumulator: &NeighborAccumulator) -> Result<String> {
    let dimensions = accumulator.dimensions();
    let report = FieldReport {
        field: index,
        rows: dimensions.rows,
        cols: dimensions.cols,
        cells: (0..dimensions.rows)
            .map(|row| accumulator.row_cells(row).collect())
            .collect(),
    };

    let mut line = serde_json::to_string(&report)?;
    line.push('\n');
    Ok(line)
}

use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::Config,
    data::Field,
    error::{FieldError, Result},
    logic::{NeighborAccumulator, mine_locations},
    report::ReportFormat,
    sink::ReportSink,
    stream::FieldStreamReader,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub fields: usize,
    pub mines: usize,
    pub cells: usize,
}

/// Places every mine of `field` on a fresh accumulator. `index` is the field's 1-based
/// position, used in errors.
pub fn build_accumulator(index: usize, field: &Field) -> Result<NeighborAccumulator> {
    let cols = field.dimensions.cols;
    let mut accumulator = NeighborAccumulator::new(field.dimensions);

    for (row, line) in field.lines.iter().enumerate() {
        let line = line.trim_end();
        let width = line.chars().count();
        if width > cols {
            return Err(FieldError::RowTooWide {
                field: index,
                row,
                width,
                cols,
            });
        }

        let mines = mine_locations(line);
        if mines.is_empty() {
            continue;
        }
        for col in mines {
            accumulator.place_mine(row, col);
        }
    }

    Ok(accumulator)
}

/// Turns a stream of fields into report blocks, appending each block to the sink as soon
/// as it is ready.
pub struct FieldProcessor<S> {
    sink: S,
    format: ReportFormat,
}

impl<S: ReportSink> FieldProcessor<S> {
    pub fn new(sink: S, format: ReportFormat) -> Self {
        Self { sink, format }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Processes fields until the `0 0` terminator. Stops at the first error; blocks
    /// appended before it stay in the sink.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (offset, field) in FieldStreamReader::new(input).enumerate() {
            let field = field?;
            let index = offset + 1;
            let dimensions = field.dimensions;
            debug!(
                "Field #{} is {} rows by {} columns",
                index, dimensions.rows, dimensions.cols
            );

            let accumulator = build_accumulator(index, &field)?;
            let block = self.format.render(index, &accumulator)?;
            self.sink.append(&block)?;

            summary.fields += 1;
            summary.mines += accumulator.mine_count();
            summary.cells += dimensions.area();
        }

        info!(
            "Processed {} fields ({} cells, {} mines)",
            summary.fields, summary.cells, summary.mines
        );
        Ok(summary)
    }
}

/// Runs the whole pipeline described by `config`.
pub fn run(config: &Config) -> Result<RunSummary> {
    let input = config.input.open()?;
    let sink = config.output.open(config.truncate)?;
    debug!("Reading {} and writing {}", config.input, config.output);

    FieldProcessor::new(sink, config.format).run(input)
}

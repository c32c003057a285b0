use std::{
    io::{self, BufRead, Lines},
    iter::FusedIterator,
};

use tracing::debug;

use crate::{
    data::{Dimensions, Field, MAX_DIMENSION},
    error::{FieldError, Result},
};

/// Parses a `<rows> <cols>` header line. `line` is its 1-based position in the input.
///
/// Both values must lie in `0..=100`, and a zero is only accepted as part of the `0 0`
/// terminator.
pub fn parse_header(header: &str, line: usize) -> Result<Dimensions> {
    let malformed = || FieldError::MalformedDimensions {
        line,
        header: header.to_string(),
    };

    let mut tokens = header.split_whitespace();
    let (Some(rows), Some(cols), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let rows: i64 = rows.parse().map_err(|_| malformed())?;
    let cols: i64 = cols.parse().map_err(|_| malformed())?;

    let max = MAX_DIMENSION as i64;
    let in_range = (0..=max).contains(&rows) && (0..=max).contains(&cols);
    let half_zero = (rows == 0) != (cols == 0);
    if !in_range || half_zero {
        return Err(FieldError::OutOfRangeDimensions { line, rows, cols });
    }

    Ok(Dimensions::new(rows as usize, cols as usize))
}

/// Pulls fields one at a time out of a line-oriented source.
///
/// Yields `Ok(field)` for each field and stops silently at the `0 0` header. Input that
/// ends where a header is expected yields `MissingTerminator`. The reader stops after
/// yielding the first error.
pub struct FieldStreamReader<R> {
    lines: Lines<R>,
    line: usize,
    fields: usize,
    finished: bool,
}

impl<R: BufRead> FieldStreamReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
            fields: 0,
            finished: false,
        }
    }

    /// Number of fields yielded so far.
    pub fn fields_read(&self) -> usize {
        self.fields
    }

    fn next_line(&mut self) -> Option<io::Result<String>> {
        let line = self.lines.next()?;
        self.line += 1;
        Some(line)
    }

    fn read_field(&mut self) -> Result<Option<Field>> {
        let header = match self.next_line() {
            Some(header) => header?,
            None => {
                return Err(FieldError::MissingTerminator {
                    fields: self.fields,
                });
            }
        };

        let dimensions = parse_header(&header, self.line)?;
        if dimensions.is_terminator() {
            debug!("Reached terminator at line {}", self.line);
            return Ok(None);
        }

        let index = self.fields + 1;
        let mut lines = Vec::with_capacity(dimensions.rows);
        while lines.len() < dimensions.rows {
            match self.next_line() {
                Some(line) => lines.push(line?),
                None => {
                    return Err(FieldError::ShortField {
                        field: index,
                        expected: dimensions.rows,
                        available: lines.len(),
                    });
                }
            }
        }

        self.fields = index;
        Ok(Some(Field::new(dimensions, lines)))
    }
}

impl<R: BufRead> Iterator for FieldStreamReader<R> {
    type Item = Result<Field>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_field() {
            Ok(Some(field)) => Some(Ok(field)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for FieldStreamReader<R> {}

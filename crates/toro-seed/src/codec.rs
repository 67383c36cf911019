//! Plaintext grid codec.
//!
//! Decoding is a single pass over the input bytes. The dimension is the
//! number of markers before the first line terminator; every later row
//! must match it. Rows without markers are skipped so that trailing
//! blank lines are accepted. Bytes that are neither markers nor line
//! terminators are ignored.

use toro_arena::Grid;
use toro_core::{Cell, FormatError};

use crate::error::SeedError;
use crate::{DEAD_MARKER, LIVE_MARKER};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

fn marker_cell(b: u8) -> Option<Cell> {
    match b {
        LIVE_MARKER => Some(true),
        DEAD_MARKER => Some(false),
        _ => None,
    }
}

/// Count markers on the first line.
fn infer_dimension(data: &[u8]) -> usize {
    data.iter()
        .take_while(|&&b| b != CR && b != LF)
        .filter(|&&b| marker_cell(b).is_some())
        .count()
}

/// Count lines holding at least one marker.
fn count_marker_rows(data: &[u8]) -> usize {
    data.split(|&b| b == CR || b == LF)
        .filter(|line| line.iter().any(|&b| marker_cell(b).is_some()))
        .count()
}

/// Accumulates rows into the grid, tracking how many have been seen.
struct RowSink {
    grid: Grid,
    row: Vec<Cell>,
    rows_seen: usize,
}

impl RowSink {
    /// Close the row ending on `line`.
    fn finish_row(&mut self, line: usize) -> Result<(), FormatError> {
        if self.row.is_empty() {
            return Ok(());
        }
        let n = self.grid.dimension();
        if self.row.len() != n {
            return Err(FormatError::RowLength {
                line,
                expected: n,
                found: self.row.len(),
            });
        }
        if self.rows_seen < n {
            let start = self.rows_seen * n;
            self.grid.as_mut_slice()[start..start + n].copy_from_slice(&self.row);
        }
        self.rows_seen += 1;
        self.row.clear();
        Ok(())
    }
}

/// Parse grid definition bytes.
///
/// LF, CRLF and bare CR all terminate a line.
///
/// # Errors
///
/// - [`FormatError::EmptyFirstLine`] if the first line has no markers
/// - [`FormatError::RowLength`] if a non-blank row has the wrong length
/// - [`FormatError::RowCount`] if there are not exactly N non-blank rows
pub fn decode(data: &[u8]) -> Result<Grid, SeedError> {
    let dimension = infer_dimension(data);
    if dimension == 0 {
        return Err(FormatError::EmptyFirstLine.into());
    }
    // N rows of N markers need at least N² bytes; reject before allocating.
    if data.len() < dimension.saturating_mul(dimension) {
        return Err(FormatError::RowCount {
            expected: dimension,
            found: count_marker_rows(data),
        }
        .into());
    }

    let mut sink = RowSink {
        grid: Grid::new(dimension)?,
        row: Vec::with_capacity(dimension),
        rows_seen: 0,
    };

    let mut line = 1;
    let mut bytes = data.iter().copied().peekable();
    while let Some(b) = bytes.next() {
        match b {
            LF => {
                sink.finish_row(line)?;
                line += 1;
            }
            CR => {
                bytes.next_if_eq(&LF);
                sink.finish_row(line)?;
                line += 1;
            }
            _ => {
                if let Some(cell) = marker_cell(b) {
                    sink.row.push(cell);
                }
            }
        }
    }
    // Final row without a terminator.
    sink.finish_row(line)?;

    if sink.rows_seen != dimension {
        return Err(FormatError::RowCount {
            expected: dimension,
            found: sink.rows_seen,
        }
        .into());
    }
    Ok(sink.grid)
}

/// Render a grid in the plaintext format, one LF-terminated row per line.
pub fn encode(grid: &Grid) -> String {
    let n = grid.dimension();
    let mut out = String::with_capacity(n * (n + 1));
    for row in grid.rows() {
        out.extend(row.iter().map(|&alive| {
            if alive {
                LIVE_MARKER as char
            } else {
                DEAD_MARKER as char
            }
        }));
        out.push('\n');
    }
    out
}

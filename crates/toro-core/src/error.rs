//! Error types shared across the toro workspace.
//!
//! Organised by subsystem: grid construction ([`GridError`]) and the
//! plaintext grid definition format ([`FormatError`]).

use std::error::Error;
use std::fmt;

/// Errors from constructing grids or topologies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The dimension exceeds the largest supported grid.
    DimensionTooLarge {
        /// The requested dimension.
        value: usize,
        /// The largest supported dimension.
        max: usize,
    },
    /// Two grids that must share a dimension do not.
    DimensionMismatch {
        /// Dimension of the first grid.
        expected: usize,
        /// Dimension of the second grid.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "grid dimension {value} exceeds maximum of {max}")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "grid dimension mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl Error for GridError {}

/// A grid definition file does not form a valid NxN grid.
///
/// Line numbers are 1-based and count every line of the input,
/// including blank ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The first line holds no marker characters, so no dimension
    /// can be inferred.
    EmptyFirstLine,
    /// A row holds a different number of markers than the first row.
    RowLength {
        /// 1-based line number of the offending row.
        line: usize,
        /// Dimension inferred from the first row.
        expected: usize,
        /// Markers found on the offending row.
        found: usize,
    },
    /// The number of non-blank rows differs from the inferred dimension.
    RowCount {
        /// Dimension inferred from the first row.
        expected: usize,
        /// Non-blank rows found in the input.
        found: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstLine => {
                write!(f, "first line holds no cells; cannot infer grid dimension")
            }
            Self::RowLength {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: expected {expected} cells, found {found}; \
                 input is not a correctly formatted NxN grid"
            ),
            Self::RowCount { expected, found } => write!(
                f,
                "expected {expected} rows, found {found}; \
                 input is not a correctly formatted NxN grid"
            ),
        }
    }
}

impl Error for FormatError {}

//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use toro_core::GridError;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Grid construction failed or two buffers disagree on dimension.
    Grid(GridError),
    /// A cell buffer does not hold `dimension * dimension` cells.
    CellCount {
        /// Number of cells required.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
    /// `publish()` was called without a preceding `begin_tick()`.
    NoTickInProgress,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::CellCount { expected, found } => {
                write!(f, "cell buffer holds {found} cells, expected {expected}")
            }
            Self::NoTickInProgress => {
                write!(f, "publish() called without a preceding begin_tick()")
            }
        }
    }
}

impl Error for ArenaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ArenaError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

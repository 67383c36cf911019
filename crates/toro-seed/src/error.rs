//! Error types for grid loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

use toro_core::{FormatError, GridError};

/// Errors that can occur while building the initial grid.
#[derive(Debug)]
pub enum SeedError {
    /// The grid definition file could not be read or written.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The grid definition does not form a valid NxN grid.
    Format(FormatError),
    /// The requested dimension cannot hold a grid.
    Grid(GridError),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            Self::Format(e) => write!(f, "invalid grid file: {e}"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<FormatError> for SeedError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<GridError> for SeedError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

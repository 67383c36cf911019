//! Grid definition file reader.

use std::fs;
use std::path::Path;

use toro_arena::Grid;

use crate::codec::decode;
use crate::error::SeedError;

/// Read and parse a grid definition file.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read and
/// [`SeedError::Format`] if its contents are not a valid NxN grid.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Grid, SeedError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&data)
}

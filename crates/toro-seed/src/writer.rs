//! Grid definition file writer.
//!
//! [`write_grid`] streams the plaintext format to any `Write` sink so
//! tests can use `Vec<u8>` and production code can use `BufWriter<File>`.
//!
//! # Examples
//!
//! ```
//! use toro_arena::Grid;
//! use toro_seed::{decode, write_grid};
//!
//! let mut grid = Grid::new(3).unwrap();
//! grid.set(1, 0, true);
//! grid.set(1, 1, true);
//! grid.set(1, 2, true);
//!
//! let mut buf = Vec::new();
//! write_grid(&mut buf, &grid).unwrap();
//! assert_eq!(buf, b"...\nxxx\n...\n");
//! assert_eq!(decode(&buf).unwrap(), grid);
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use toro_arena::Grid;

use crate::codec::encode;
use crate::error::SeedError;

/// Write `grid` in the plaintext format.
pub fn write_grid<W: Write>(writer: &mut W, grid: &Grid) -> io::Result<()> {
    writer.write_all(encode(grid).as_bytes())
}

/// Write `grid` to a file at `path`, replacing any existing content.
pub fn save_to_file(path: impl AsRef<Path>, grid: &Grid) -> Result<(), SeedError> {
    let path = path.as_ref();
    let io_err = |source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    write_grid(&mut out, grid).map_err(io_err)?;
    out.flush().map_err(io_err)
}

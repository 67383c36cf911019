//! Initial grid construction for toro simulations.
//!
//! Builds the seeded generation either from a plaintext grid definition
//! file or from a seeded random generator.
//!
//! # Architecture
//!
//! - [`decode`] parses grid definition bytes; [`load_from_file`] reads
//!   and parses a file
//! - [`encode`], [`write_grid`] and [`save_to_file`] emit the same format
//! - [`load_random`] fills a grid from any [`rand::Rng`];
//!   [`seed_rng`] builds the deterministic generator the binary passes in
//! - [`create_empty`] allocates an all-dead grid
//!
//! # Format
//!
//! ```text
//! ..x..
//! ...x.
//! .xxx.
//! .....
//! .....
//! ```
//!
//! One row per line, `x` for a live cell and `.` for a dead one, LF or
//! CRLF terminated. The dimension is the number of markers on the first
//! line. Line `i` is row `i`; character `j` of a line is column `j`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod random;
pub mod reader;
pub mod writer;

pub use codec::{decode, encode};
pub use error::SeedError;
pub use random::{clock_seed, create_empty, load_random, seed_rng, SeedRng};
pub use reader::load_from_file;
pub use writer::{save_to_file, write_grid};

/// Marker for a live cell.
pub const LIVE_MARKER: u8 = b'x';

/// Marker for a dead cell.
pub const DEAD_MARKER: u8 = b'.';

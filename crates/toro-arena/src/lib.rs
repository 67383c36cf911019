//! Grid storage and double buffering for toro simulations.
//!
//! # Architecture
//!
//! The arena uses a double-buffered ("ping-pong") design:
//!
//! ```text
//! PingPong (orchestrator)
//! ├── Grid × 2 (alternating current/next)
//! │   └── Vec<bool>, row-major, dimension²
//! ├── active: usize (0 or 1, index of the current grid)
//! └── Generation (incremented on publish)
//! ```
//!
//! The current grid is read-only for the duration of a tick; the step
//! engine writes the next generation into the other grid, then
//! [`PingPong::publish`] flips the active index. No grid is allocated
//! after construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod pingpong;

pub use error::ArenaError;
pub use grid::Grid;
pub use pingpong::{PingPong, TickGuard};

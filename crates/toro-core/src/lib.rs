//! Core types and traits for the toro Game of Life simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the toro workspace:
//! the cell and generation types, grid error types, and the traits at
//! the display and input boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{FormatError, GridError};
pub use id::{Cell, Generation, ALIVE, DEAD};
pub use traits::{EventSource, GridView, Renderer, TerminationSignal};

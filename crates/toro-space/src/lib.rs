//! Toroidal topology for toro simulations.
//!
//! This crate defines [`Torus`], a square grid whose edges wrap around:
//! the neighbour of the last row is the first row, and likewise for
//! columns. It owns the wrap-around addressing used by the step engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod torus;

#[cfg(test)]
pub(crate) mod compliance;

pub use torus::{wrap_axis, Torus, OFFSETS_8};

//! Simulation engine for toro.
//!
//! Drives Conway's Game of Life (B3/S23) on a toroidal grid:
//!
//! - [`step`] and [`count_neighbours`] compute one generation from the
//!   previous one
//! - [`Simulation`] alternates the two buffers, rendering the current
//!   generation and polling for termination each tick
//! - [`KeyListener`] hands terminal input to the loop from a background
//!   thread
//! - [`LifeConfig`] and [`SeedSource`] describe a run and build its first
//!   generation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod input;
pub mod metrics;
pub mod sim;
pub mod step;

pub use config::{
    ConfigError, LifeConfig, SeedSource, DEFAULT_DIMENSION, DEFAULT_FRAME_DELAY, MAX_FRAME_DELAY,
};
pub use input::KeyListener;
pub use metrics::StepMetrics;
pub use sim::{RunSummary, SimError, Simulation, TickOutcome, TickReport};
pub use step::{count_neighbours, next_state, step};

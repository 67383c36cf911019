//! toro: Conway's Game of Life on a toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! toro sub-crates. For most users, adding `toro` as a single dependency is
//! sufficient. The terminal front end lives in the `toro-term` binary.
//!
//! # Quick start
//!
//! ```rust
//! use toro::prelude::*;
//!
//! // A renderer that only counts frames.
//! struct Counter(u64);
//! impl Renderer for Counter {
//!     fn render(&mut self, _grid: &dyn GridView) -> std::io::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! // Stop after three frames.
//! struct StopAfter(u32);
//! impl TerminationSignal for StopAfter {
//!     fn poll_termination(&mut self) -> bool {
//!         self.0 -= 1;
//!         self.0 == 0
//!     }
//! }
//!
//! let grid = decode(b".....\n.....\n.xxx.\n.....\n.....\n").unwrap();
//! let mut sim = Simulation::new(grid.clone(), Counter(0), StopAfter(3))
//!     .with_frame_delay(std::time::Duration::ZERO);
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.frames, 3);
//! assert_eq!(sim.renderer().0, 3);
//!
//! // A blinker has period 2.
//! let mut next = Grid::dead(*grid.torus());
//! step(&grid, &mut next);
//! assert_ne!(next, grid);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toro-core` | Cell and generation types, error types, boundary traits |
//! | [`space`] | `toro-space` | Toroidal topology and wrap addressing |
//! | [`arena`] | `toro-arena` | `Grid` storage and the `PingPong` double buffer |
//! | [`seed`] | `toro-seed` | Grid files and random fill |
//! | [`engine`] | `toro-engine` | Step engine, simulation loop, configuration, input thread |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`toro-core`).
///
/// Contains the [`types::Cell`] and [`types::Generation`] types and the
/// boundary traits ([`types::Renderer`], [`types::TerminationSignal`],
/// [`types::EventSource`]).
pub use toro_core as types;

/// Toroidal topology (`toro-space`).
pub use toro_space as space;

/// Grid storage and double buffering (`toro-arena`).
///
/// Most users only need [`arena::Grid`] from this module; it is also
/// available in the [`prelude`].
pub use toro_arena as arena;

/// Initial grid construction (`toro-seed`).
///
/// Read and write grid definition files with [`seed::load_from_file`] and
/// [`seed::save_to_file`], or fill a grid with [`seed::load_random`].
pub use toro_seed as seed;

/// Step engine and simulation loop (`toro-engine`).
///
/// [`engine::Simulation`] runs the loop; [`engine::KeyListener`] feeds it
/// termination requests from a background thread.
pub use toro_engine as engine;

/// Common imports for typical toro usage.
///
/// ```rust
/// use toro::prelude::*;
/// ```
///
/// This imports the most frequently used types: the grid, the boundary
/// traits, the loaders, the step functions and the simulation loop.
pub mod prelude {
    // Core types and traits
    pub use toro_core::{Cell, EventSource, Generation, GridView, Renderer, TerminationSignal};

    // Errors
    pub use toro_core::{FormatError, GridError};
    pub use toro_seed::SeedError;

    // Storage
    pub use toro_arena::{Grid, PingPong};

    // Loaders
    pub use toro_seed::{create_empty, decode, encode, load_from_file, load_random, seed_rng};

    // Engine
    pub use toro_engine::{
        count_neighbours, step, ConfigError, KeyListener, LifeConfig, RunSummary, SeedSource,
        SimError, Simulation, StepMetrics, TickOutcome,
    };
}

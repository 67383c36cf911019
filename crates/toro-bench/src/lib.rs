//! Benchmark profiles for the toro simulator.
//!
//! Provides pre-built seeded grids for benchmarking:
//!
//! - [`reference_grid`]: 100x100 grid (10K cells), half alive
//! - [`stress_grid`]: 316x316 grid (~100K cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use toro_arena::Grid;
use toro_engine::{ConfigError, LifeConfig, SeedSource};

/// Side length of the reference profile.
pub const REFERENCE_DIMENSION: usize = 100;

/// Side length of the stress profile.
pub const STRESS_DIMENSION: usize = 316;

fn seeded(dimension: usize, seed: u64) -> Result<Grid, ConfigError> {
    let mut config = LifeConfig::new(SeedSource::Random { dimension });
    config.seed = Some(seed);
    config.load_grid()
}

/// Build the reference profile: a 100x100 random grid from `seed`.
pub fn reference_grid(seed: u64) -> Result<Grid, ConfigError> {
    seeded(REFERENCE_DIMENSION, seed)
}

/// Build the stress profile: a 316x316 random grid from `seed`.
pub fn stress_grid(seed: u64) -> Result<Grid, ConfigError> {
    seeded(STRESS_DIMENSION, seed)
}

//! Random and empty grid construction.
//!
//! Respects the determinism contract: the generator is passed in
//! explicitly, so the same seed always yields the same grid. The binary
//! seeds a ChaCha8 generator once at startup from `--seed` or the clock.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toro_arena::Grid;

use crate::error::SeedError;

/// Generator used to seed random grids.
pub type SeedRng = ChaCha8Rng;

/// Probability that a randomly seeded cell starts alive.
pub const ALIVE_PROBABILITY: f64 = 0.5;

/// Build the seed generator from a fixed seed.
pub fn seed_rng(seed: u64) -> SeedRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A seed derived from the wall clock, for runs without `--seed`.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Fill a `dimension`×`dimension` grid, each cell independently alive
/// with probability 1/2.
///
/// Returns `Err(SeedError::Grid)` if `dimension` is 0.
pub fn load_random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Grid, SeedError> {
    let mut grid = Grid::new(dimension)?;
    for cell in grid.as_mut_slice() {
        *cell = rng.random_bool(ALIVE_PROBABILITY);
    }
    Ok(grid)
}

/// Allocate an all-dead `dimension`×`dimension` grid.
pub fn create_empty(dimension: usize) -> Result<Grid, SeedError> {
    Ok(Grid::new(dimension)?)
}

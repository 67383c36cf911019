//! Run configuration, validation, and error types.
//!
//! [`LifeConfig`] is the builder-input for a simulation run: where the
//! first generation comes from, how long to wait between frames, and
//! the optional RNG seed. [`validate()`](LifeConfig::validate) checks
//! structural invariants at startup; [`load_grid()`](LifeConfig::load_grid)
//! builds the seeded generation.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use toro_arena::Grid;
use toro_seed::{clock_seed, load_from_file, load_random, seed_rng, SeedError};

/// Side length of the random grid used when no source is given.
pub const DEFAULT_DIMENSION: usize = 40;

/// Delay between frames when none is configured.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Longest accepted delay between frames. A keypress is only observed
/// once per frame, so this bounds how long termination can take.
pub const MAX_FRAME_DELAY: Duration = Duration::from_secs(10);

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`LifeConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Both a grid size and an input file were given.
    ConflictingSources,
    /// The requested grid size is negative.
    NegativeSize {
        /// The value supplied.
        value: i64,
    },
    /// The requested grid size does not fit in `usize`.
    SizeTooLarge {
        /// The value supplied.
        value: i64,
    },
    /// The requested grid size is zero.
    ZeroDimension,
    /// The frame delay exceeds [`MAX_FRAME_DELAY`].
    InvalidFrameDelay {
        /// The configured delay.
        value: Duration,
    },
    /// The initial grid could not be built.
    Seed(SeedError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingSources => {
                write!(f, "--size and --input are mutually exclusive")
            }
            Self::NegativeSize { value } => {
                write!(f, "grid size must be positive, got {value}")
            }
            Self::SizeTooLarge { value } => {
                write!(f, "grid size {value} is too large for this platform")
            }
            Self::ZeroDimension => write!(f, "grid size must be at least 1"),
            Self::InvalidFrameDelay { value } => write!(
                f,
                "frame delay {}ms exceeds maximum of {}ms",
                value.as_millis(),
                MAX_FRAME_DELAY.as_millis()
            ),
            Self::Seed(e) => write!(f, "initial grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SeedError> for ConfigError {
    fn from(e: SeedError) -> Self {
        Self::Seed(e)
    }
}

// ── SeedSource ─────────────────────────────────────────────────────

/// Where the first generation comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// A `dimension`×`dimension` grid with each cell alive with
    /// probability 1/2.
    Random {
        /// Side length of the grid.
        dimension: usize,
    },
    /// A grid definition file.
    File(PathBuf),
}

impl Default for SeedSource {
    fn default() -> Self {
        Self::Random {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl SeedSource {
    /// Resolve the two mutually exclusive command-line sources.
    ///
    /// With neither given, falls back to a random grid of
    /// [`DEFAULT_DIMENSION`]. Runs before any grid is built.
    pub fn from_flags(size: Option<i64>, input: Option<PathBuf>) -> Result<Self, ConfigError> {
        match (size, input) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingSources),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Ok(Self::default()),
            (Some(value), None) => {
                if value < 0 {
                    return Err(ConfigError::NegativeSize { value });
                }
                if value == 0 {
                    return Err(ConfigError::ZeroDimension);
                }
                let dimension =
                    usize::try_from(value).map_err(|_| ConfigError::SizeTooLarge { value })?;
                Ok(Self::Random { dimension })
            }
        }
    }
}

// ── LifeConfig ─────────────────────────────────────────────────────

/// Complete configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct LifeConfig {
    /// Source of the first generation.
    pub source: SeedSource,
    /// Sleep between frames. Default: 100 ms.
    pub frame_delay: Duration,
    /// RNG seed for random grids. `None` derives one from the clock.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::new(SeedSource::default())
    }
}

impl LifeConfig {
    /// A configuration with the given source and default timing.
    pub fn new(source: SeedSource) -> Self {
        Self {
            source,
            frame_delay: DEFAULT_FRAME_DELAY,
            seed: None,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == (SeedSource::Random { dimension: 0 }) {
            return Err(ConfigError::ZeroDimension);
        }
        if self.frame_delay > MAX_FRAME_DELAY {
            return Err(ConfigError::InvalidFrameDelay {
                value: self.frame_delay,
            });
        }
        Ok(())
    }

    /// Build the first generation from the configured source.
    ///
    /// Random grids use [`seed`](Self::seed) or, failing that, a seed
    /// taken from the clock. The seed actually used is logged at info
    /// level so a run can be reproduced.
    pub fn load_grid(&self) -> Result<Grid, ConfigError> {
        self.validate()?;
        let grid = match &self.source {
            SeedSource::Random { dimension } => {
                let seed = self.seed.unwrap_or_else(clock_seed);
                tracing::info!(dimension, seed, "seeding random grid");
                load_random(*dimension, &mut seed_rng(seed))?
            }
            SeedSource::File(path) => {
                tracing::info!(path = %path.display(), "loading grid file");
                load_from_file(path)?
            }
        };
        tracing::debug!(
            dimension = grid.dimension(),
            population = grid.population(),
            "initial grid ready"
        );
        Ok(grid)
    }
}

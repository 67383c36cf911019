//! Double-buffered ping-pong grid orchestrator.
//!
//! [`PingPong`] owns two grids of identical dimension that alternate
//! between "current" (readable) and "next" (writable) roles. On
//! [`PingPong::publish`], the next grid becomes current and the old
//! current grid becomes the next write target.
//!
//! The lifecycle per tick is:
//! 1. `begin_tick()`: borrow current (read) and next (write) by index
//! 2. The step engine fills `next` from `current`
//! 3. `publish()`: flip the active index, advance the generation

use toro_core::{Generation, GridError};

use crate::error::ArenaError;
use crate::grid::Grid;

/// Split borrow of both buffers during a tick.
///
/// Created by [`PingPong::begin_tick()`] and dropped before
/// [`PingPong::publish()`]. Holds the only mutable borrow of the next
/// buffer, so the current buffer cannot be written while the guard
/// lives.
#[must_use]
pub struct TickGuard<'a> {
    /// The generation being read this tick.
    pub current: &'a Grid,
    /// The buffer receiving the following generation.
    pub next: &'a mut Grid,
}

/// Two grids plus the index of the current one.
///
/// # Buffer layout
///
/// ```text
/// buffers[0]  ←─── current on even generations / next on odd
/// buffers[1]  ←─── next on even generations / current on odd
/// ```
///
/// Buffer 0 holds the seeded grid and is current on the first tick.
#[derive(Clone, Debug)]
pub struct PingPong {
    buffers: [Grid; 2],
    /// Index of the current buffer (0 or 1).
    active: usize,
    /// Generation held by the current buffer.
    generation: Generation,
    /// Whether `begin_tick()` has been called without a matching `publish()`.
    tick_in_progress: bool,
}

impl PingPong {
    /// Wrap a seeded grid, allocating an all-dead second buffer of the
    /// same dimension.
    pub fn new(initial: Grid) -> Self {
        let next = Grid::dead(*initial.torus());
        Self {
            buffers: [initial, next],
            active: 0,
            generation: Generation(0),
            tick_in_progress: false,
        }
    }

    /// Build from two caller-supplied buffers; `a` is current on the
    /// first tick.
    ///
    /// Returns `Err` if their dimensions differ.
    pub fn from_buffers(a: Grid, b: Grid) -> Result<Self, ArenaError> {
        if a.dimension() != b.dimension() {
            return Err(GridError::DimensionMismatch {
                expected: a.dimension(),
                found: b.dimension(),
            }
            .into());
        }
        Ok(Self {
            buffers: [a, b],
            active: 0,
            generation: Generation(0),
            tick_in_progress: false,
        })
    }

    /// Side length shared by both buffers.
    pub fn dimension(&self) -> usize {
        self.buffers[0].dimension()
    }

    /// Index (0 or 1) of the current buffer.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Generation held by the current buffer.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The current buffer.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// Mutable access to the current buffer, for seeding before the
    /// first tick.
    pub fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.active]
    }

    /// Buffer by index, regardless of role.
    ///
    /// # Panics
    ///
    /// Panics if `index > 1`.
    pub fn buffer(&self, index: usize) -> &Grid {
        &self.buffers[index]
    }

    /// Begin a tick, returning read access to the current buffer and
    /// write access to the next one.
    pub fn begin_tick(&mut self) -> TickGuard<'_> {
        self.tick_in_progress = true;
        let (first, second) = self.buffers.split_at_mut(1);
        let (current, next) = if self.active == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };
        TickGuard { current, next }
    }

    /// Make the next buffer current and advance the generation.
    ///
    /// Returns `Err` if `begin_tick()` was not called first or if
    /// `publish()` is called twice without an intervening `begin_tick()`.
    pub fn publish(&mut self) -> Result<Generation, ArenaError> {
        if !self.tick_in_progress {
            return Err(ArenaError::NoTickInProgress);
        }
        self.tick_in_progress = false;
        self.active ^= 1;
        self.generation = self.generation.next();
        Ok(self.generation)
    }
}

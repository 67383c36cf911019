//! The simulation loop.
//!
//! [`Simulation`] owns the double buffer, the renderer and the
//! termination signal. Each call to [`tick()`](Simulation::tick) runs
//! one complete generation:
//!
//! 1. borrow the current buffer for reading and the other for writing
//! 2. fill the write buffer with the next generation
//! 3. render the current (pre-step) buffer
//! 4. poll for termination without blocking
//! 5. if still running, publish the write buffer as current
//!
//! [`run()`](Simulation::run) repeats `tick()` and sleeps for the frame
//! delay after every tick that did not terminate.
//!
//! # Ownership model
//!
//! `Simulation` is single-threaded and takes `&mut self` everywhere.
//! The only cross-thread traffic is inside the termination signal,
//! which carries no grid data.

use std::error::Error;
use std::fmt;
use std::io;
use std::thread;
use std::time::Duration;

use toro_arena::{ArenaError, Grid, PingPong};
use toro_core::{Generation, Renderer, TerminationSignal};

use crate::config::DEFAULT_FRAME_DELAY;
use crate::metrics::StepMetrics;
use crate::step::step;

// ── SimError ────────────────────────────────────────────────────

/// Errors that end a simulation run.
#[derive(Debug)]
pub enum SimError {
    /// The renderer failed to draw a frame.
    Render(io::Error),
    /// The double buffer was driven out of order.
    Arena(ArenaError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "render failed: {e}"),
            Self::Arena(e) => write!(f, "buffer: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Arena(e) => Some(e),
        }
    }
}

impl From<ArenaError> for SimError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── TickReport ──────────────────────────────────────────────────

/// Whether the loop should keep going after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No termination request; the next generation is now current.
    Continue,
    /// A termination request was observed; buffers were left as they were.
    Terminated,
}

/// Result of a successful [`Simulation::tick()`] call.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// Generation that was rendered this tick.
    pub rendered: Generation,
    /// Whether the loop should continue.
    pub outcome: TickOutcome,
    /// Metrics for the step computed this tick.
    pub metrics: StepMetrics,
}

/// Result of a completed [`Simulation::run()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of frames drawn.
    pub frames: u64,
    /// Generation on screen when the run ended.
    pub last_rendered: Generation,
}

// ── Simulation ──────────────────────────────────────────────────

/// A Game of Life run on a toroidal grid.
///
/// # Example
///
/// ```ignore
/// let grid = config.load_grid()?;
/// let listener = KeyListener::spawn(events)?;
/// let summary = Simulation::new(grid, renderer, listener)
///     .with_frame_delay(config.frame_delay)
///     .run()?;
/// ```
pub struct Simulation<R, T> {
    buffers: PingPong,
    renderer: R,
    termination: T,
    frame_delay: Duration,
}

impl<R: Renderer, T: TerminationSignal> Simulation<R, T> {
    /// Start a run from `initial`, which becomes generation 0.
    ///
    /// The second buffer is allocated here with the same dimension.
    pub fn new(initial: Grid, renderer: R, termination: T) -> Self {
        Self {
            buffers: PingPong::new(initial),
            renderer,
            termination,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }

    /// Set the sleep between frames.
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    /// Generation held by the current buffer.
    pub fn generation(&self) -> Generation {
        self.buffers.generation()
    }

    /// The current buffer.
    pub fn current(&self) -> &Grid {
        self.buffers.current()
    }

    /// Both buffers, for inspecting alternation.
    pub fn buffers(&self) -> &PingPong {
        &self.buffers
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The termination signal.
    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Consume the simulation, returning the renderer and termination
    /// signal.
    pub fn into_parts(self) -> (R, T) {
        (self.renderer, self.termination)
    }

    /// Run one generation without sleeping.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Render`] if the renderer fails. The buffers
    /// are not published in that case.
    pub fn tick(&mut self) -> Result<TickReport, SimError> {
        let rendered = self.buffers.generation();
        let guard = self.buffers.begin_tick();
        let metrics = step(guard.current, guard.next);
        self.renderer
            .render(guard.current)
            .map_err(SimError::Render)?;

        if self.termination.poll_termination() {
            return Ok(TickReport {
                rendered,
                outcome: TickOutcome::Terminated,
                metrics,
            });
        }

        self.buffers.publish()?;
        Ok(TickReport {
            rendered,
            outcome: TickOutcome::Continue,
            metrics,
        })
    }

    /// Tick until termination is requested, sleeping for the frame
    /// delay between frames.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        tracing::info!(
            dimension = self.buffers.dimension(),
            frame_delay_ms = self.frame_delay.as_millis() as u64,
            "simulation started"
        );
        let mut frames = 0;
        loop {
            let report = self.tick()?;
            frames += 1;
            tracing::trace!(
                generation = %report.rendered,
                population = report.metrics.population,
                step_us = report.metrics.step_us,
                "tick"
            );
            if report.outcome == TickOutcome::Terminated {
                tracing::info!(frames, generation = %report.rendered, "simulation stopped");
                return Ok(RunSummary {
                    frames,
                    last_rendered: report.rendered,
                });
            }
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }
    }
}

//! Traits at the boundaries between the simulation core and its
//! collaborators: grid reading, display, and terminal input.

use std::io;

use crate::id::Cell;

/// Read-only access to a square grid of cells.
///
/// This trait decouples renderers from the grid storage type. Renderers
/// read through `&dyn GridView` rather than depending on the arena crate.
pub trait GridView {
    /// Side length N of the NxN grid.
    fn dimension(&self) -> usize;

    /// State of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`dimension`](Self::dimension).
    fn cell(&self, row: usize, col: usize) -> Cell;

    /// All cells in row-major order, `dimension * dimension` long.
    fn cells(&self) -> &[Cell];
}

/// Draws a full grid snapshot.
///
/// Implementations are responsible for any clearing and flushing the
/// display needs. The simulation loop calls `render` once per tick with
/// the current (pre-step) generation.
pub trait Renderer {
    /// Draw every cell of `grid`.
    fn render(&mut self, grid: &dyn GridView) -> io::Result<()>;
}

/// Non-blocking check for a termination request.
pub trait TerminationSignal {
    /// Returns `true` once for each termination request observed since
    /// the previous call. Never blocks.
    fn poll_termination(&mut self) -> bool;
}

/// A blocking source of terminal input events.
///
/// Polled from a dedicated thread; every successful return counts as
/// one termination request.
pub trait EventSource {
    /// Block until the next input event arrives.
    fn wait_event(&mut self) -> io::Result<()>;
}

//! Terminal display: setup, teardown and the crossterm renderer.

use std::error::Error;
use std::fmt;
use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use toro_core::{GridView, Renderer};
use toro_engine::SeedSource;

/// Drawn once per cell; the background colour carries the state.
const CELL: char = ' ';
const ALIVE_COLOUR: Color = Color::White;
const DEAD_COLOUR: Color = Color::Black;

/// The terminal cannot host the simulation.
#[derive(Debug)]
pub enum DisplayError {
    /// The grid does not fit in the terminal window.
    TooSmall {
        /// Side length of the grid.
        dimension: usize,
        /// Terminal width in columns.
        cols: u16,
        /// Terminal height in rows.
        rows: u16,
    },
    /// Querying or configuring the terminal failed.
    Terminal(io::Error),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall {
                dimension,
                cols,
                rows,
            } => write!(
                f,
                "grid of size {dimension} is larger than the terminal ({cols} x {rows})"
            ),
            Self::Terminal(e) => write!(f, "terminal: {e}"),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Terminal(e) => Some(e),
            Self::TooSmall { .. } => None,
        }
    }
}

impl From<io::Error> for DisplayError {
    fn from(e: io::Error) -> Self {
        Self::Terminal(e)
    }
}

/// Check that an NxN grid fits a `cols` × `rows` terminal.
pub fn check_fits(dimension: usize, (cols, rows): (u16, u16)) -> Result<(), DisplayError> {
    if dimension > usize::from(cols) || dimension > usize::from(rows) {
        return Err(DisplayError::TooSmall {
            dimension,
            cols,
            rows,
        });
    }
    Ok(())
}

/// Check a seed source against a `cols` × `rows` terminal before any
/// grid is built.
///
/// A random grid's dimension is known up front. A file's dimension is
/// only known once it is read, so file grids pass here and are checked
/// by [`TermGuard::enter`].
pub fn check_source_fits(source: &SeedSource, terminal: (u16, u16)) -> Result<(), DisplayError> {
    match source {
        SeedSource::Random { dimension } => check_fits(*dimension, terminal),
        SeedSource::File(_) => Ok(()),
    }
}

/// [`check_source_fits`] against the current terminal. The terminal is
/// only queried for random sources.
pub fn preflight(source: &SeedSource) -> Result<(), DisplayError> {
    match source {
        SeedSource::Random { .. } => check_source_fits(source, terminal::size()?),
        SeedSource::File(_) => Ok(()),
    }
}

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
///
/// Dropping the guard restores the terminal, including on early return
/// or unwinding.
pub struct TermGuard {
    out: Stdout,
}

impl TermGuard {
    /// Verify the grid fits, then take over the terminal.
    pub fn enter(dimension: usize) -> Result<Self, DisplayError> {
        check_fits(dimension, terminal::size()?)?;
        terminal::enable_raw_mode()?;
        let mut guard = Self { out: io::stdout() };
        execute!(
            guard.out,
            EnterAlternateScreen,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(guard)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            cursor::Show,
            LeaveAlternateScreen
        ) {
            tracing::error!(?err, "failed to restore terminal screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
    }
}

/// Draws each cell as a coloured space: white alive, black dead.
///
/// Column `c` of the grid is screen column `c`; row `r` is screen row `r`.
pub struct TermRenderer<W: Write> {
    out: W,
}

impl<W: Write> TermRenderer<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn render(&mut self, grid: &dyn GridView) -> io::Result<()> {
        let n = grid.dimension();
        queue!(self.out, BeginSynchronizedUpdate, Clear(ClearType::All))?;
        let mut colour = None;
        for row in 0..n {
            let y = u16::try_from(row).map_err(io::Error::other)?;
            queue!(self.out, cursor::MoveTo(0, y))?;
            for col in 0..n {
                let wanted = if grid.cell(row, col) {
                    ALIVE_COLOUR
                } else {
                    DEAD_COLOUR
                };
                if colour != Some(wanted) {
                    queue!(self.out, SetBackgroundColor(wanted))?;
                    colour = Some(wanted);
                }
                queue!(self.out, Print(CELL))?;
            }
        }
        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

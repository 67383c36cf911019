//! The [`Cell`] state type and the [`Generation`] counter.

use std::fmt;

/// State of a single grid cell: `true` is alive, `false` is dead.
///
/// A cell has no identity beyond its position in the grid.
pub type Cell = bool;

/// A live cell.
pub const ALIVE: Cell = true;

/// A dead cell.
pub const DEAD: Cell = false;

/// Monotonically increasing generation counter.
///
/// Incremented each time the simulation advances one step. Generation 0
/// is the seeded grid; its parity selects which buffer is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Index (0 or 1) of the buffer holding this generation.
    pub fn parity(self) -> usize {
        (self.0 & 1) as usize
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_alternates() {
        let g0 = Generation::default();
        assert_eq!(g0.parity(), 0);
        assert_eq!(g0.next().parity(), 1);
        assert_eq!(g0.next().next().parity(), 0);
    }
}

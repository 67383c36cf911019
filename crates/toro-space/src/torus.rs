//! Square toroidal grid with 8-connected neighbourhood (cardinal + diagonal).

use smallvec::SmallVec;
use toro_core::GridError;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Resolve a single axis value on a periodic axis of length `len`.
///
/// A value one below zero maps to `len - 1`; a value equal to `len`
/// maps to `0`. Values further out wrap modulo `len`.
#[inline]
pub fn wrap_axis(val: isize, len: usize) -> usize {
    let n = len as isize;
    if val >= 0 && val < n {
        return val as usize;
    }
    (((val % n) + n) % n) as usize
}

/// A square NxN grid with periodic boundaries on both axes.
///
/// Each cell has coordinate `(row, col)` with both components in
/// `[0, N)`. Every cell has exactly 8 neighbours. On grids smaller than
/// 3×3 some of those neighbours coincide (on a 1×1 torus all 8 are the
/// cell itself), and each coincidence is counted separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    dimension: usize,
}

impl Torus {
    /// Largest supported dimension. `MAX_DIM²` fits in a 32-bit `usize`.
    pub const MAX_DIM: usize = u16::MAX as usize;

    /// Create a torus with `dimension * dimension` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `dimension` is 0.
    pub fn new(dimension: usize) -> Result<Self, GridError> {
        if dimension == 0 {
            return Err(GridError::EmptyGrid);
        }
        if dimension > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                value: dimension,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { dimension })
    }

    /// Side length N.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells, N².
    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Row-major flat index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.dimension + col
    }

    /// Apply a signed offset to `(row, col)`, wrapping on both axes.
    #[inline]
    pub fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> (usize, usize) {
        (
            wrap_axis(row as isize + dr, self.dimension),
            wrap_axis(col as isize + dc, self.dimension),
        )
    }

    /// The 8 wrapped neighbours of `(row, col)`, in [`OFFSETS_8`] order.
    pub fn neighbours(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        OFFSETS_8
            .iter()
            .map(|&(dr, dc)| self.offset(row, col, dr, dc))
            .collect()
    }

    /// Row-major canonical ordering: `(0,0), (0,1), ..., (N-1, N-1)`.
    pub fn canonical_ordering(&self) -> Vec<(usize, usize)> {
        let n = self.dimension;
        let mut out = Vec::with_capacity(self.cell_count());
        for r in 0..n {
            for c in 0..n {
                out.push((r, c));
            }
        }
        out
    }
}

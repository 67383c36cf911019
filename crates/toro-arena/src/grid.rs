//! Square grid of cells backed by a single row-major buffer.

use toro_core::{Cell, GridError, GridView, DEAD};
use toro_space::Torus;

use crate::error::ArenaError;

/// A square NxN grid of boolean cells on a torus.
///
/// Cells are stored row-major in one `Vec<bool>`; `(row, col)` lives at
/// `row * N + col`. The dimension is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    torus: Torus,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid of side `dimension`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `dimension` is 0.
    pub fn new(dimension: usize) -> Result<Self, GridError> {
        let torus = Torus::new(dimension)?;
        Ok(Self::dead(torus))
    }

    /// Create an all-dead grid on an existing topology.
    pub fn dead(torus: Torus) -> Self {
        Self {
            cells: vec![DEAD; torus.cell_count()],
            torus,
        }
    }

    /// Wrap a row-major cell buffer of length `dimension²`.
    pub fn from_cells(dimension: usize, cells: Vec<Cell>) -> Result<Self, ArenaError> {
        let torus = Torus::new(dimension)?;
        if cells.len() != torus.cell_count() {
            return Err(ArenaError::CellCount {
                expected: torus.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { torus, cells })
    }

    /// The grid's topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Side length N.
    pub fn dimension(&self) -> usize {
        self.torus.dimension()
    }

    /// State of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        let n = self.dimension();
        assert!(row < n && col < n, "({row}, {col}) outside {n}x{n} grid");
        self.cells[self.torus.index(row, col)]
    }

    /// Set the state of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let n = self.dimension();
        assert!(row < n && col < n, "({row}, {col}) outside {n}x{n} grid");
        let i = self.torus.index(row, col);
        self.cells[i] = cell;
    }

    /// Row-major cell slice.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major cell slice.
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate rows as slices of length N.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.dimension())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }
}

impl GridView for Grid {
    fn dimension(&self) -> usize {
        Grid::dimension(self)
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        self.get(row, col)
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toro_core::ALIVE;

    #[test]
    fn new_grid_is_all_dead() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.dimension(), 4);
        assert_eq!(g.as_slice().len(), 16);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn new_zero_dimension_fails() {
        assert_eq!(Grid::new(0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn set_then_get() {
        let mut g = Grid::new(3).unwrap();
        g.set(1, 2, ALIVE);
        assert!(g.get(1, 2));
        assert!(!g.get(2, 1));
        assert_eq!(g.as_slice()[5], ALIVE);
        assert_eq!(g.population(), 1);
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Grid::from_cells(3, vec![false; 8]).unwrap_err();
        assert_eq!(
            err,
            ArenaError::CellCount {
                expected: 9,
                found: 8
            }
        );
    }

    #[test]
    fn rows_are_row_major() {
        let g = Grid::from_cells(2, vec![true, false, false, true]).unwrap();
        let rows: Vec<&[bool]> = g.rows().collect();
        assert_eq!(rows, vec![&[true, false][..], &[false, true][..]]);
    }

    #[test]
    fn clear_kills_everything() {
        let mut g = Grid::from_cells(2, vec![true; 4]).unwrap();
        g.clear();
        assert_eq!(g.population(), 0);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let g = Grid::new(3).unwrap();
        let _ = g.get(3, 0);
    }

    #[test]
    fn grid_view_matches_inherent_accessors() {
        let mut g = Grid::new(3).unwrap();
        g.set(0, 1, ALIVE);
        let view: &dyn GridView = &g;
        assert_eq!(view.dimension(), 3);
        assert!(view.cell(0, 1));
        assert_eq!(view.cells(), g.as_slice());
    }
}

//! The B3/S23 step: neighbour counting and next-generation derivation.
//!
//! Both functions read the grid through its [`Torus`](toro_space::Torus),
//! so every edge and corner wraps. [`step`] never reads the buffer it
//! writes and never allocates.

use std::time::Instant;

use toro_arena::Grid;
use toro_core::Cell;
use toro_space::OFFSETS_8;

use crate::metrics::StepMetrics;

/// Number of live cells among the 8 wrapped neighbours of `(row, col)`.
///
/// The cell itself is never counted. Returns a value in `0..=8`.
///
/// # Panics
///
/// Panics if either coordinate is out of range.
pub fn count_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let n = grid.dimension();
    assert!(row < n && col < n, "({row}, {col}) outside {n}x{n} grid");
    let torus = grid.torus();
    let cells = grid.as_slice();
    let mut count = 0;
    for &(dr, dc) in &OFFSETS_8 {
        let (r, c) = torus.offset(row, col, dr, dc);
        count += u8::from(cells[torus.index(r, c)]);
    }
    count
}

/// B3/S23: a live cell survives with 2 or 3 neighbours, a dead cell is
/// born with exactly 3.
#[inline]
pub fn next_state(alive: Cell, neighbours: u8) -> Cell {
    matches!((alive, neighbours), (true, 2) | (_, 3))
}

/// Compute the generation after `current` into `next`.
///
/// Every cell of `next` is overwritten; its previous contents are
/// irrelevant.
///
/// # Panics
///
/// Panics if the two grids differ in dimension.
/// [`PingPong`](toro_arena::PingPong) rules this out by construction.
pub fn step(current: &Grid, next: &mut Grid) -> StepMetrics {
    assert_eq!(
        current.dimension(),
        next.dimension(),
        "step buffers must share a dimension"
    );
    let start = Instant::now();
    let n = current.dimension();
    let cells = current.as_slice();
    let out = next.as_mut_slice();

    let mut population = 0;
    for row in 0..n {
        for col in 0..n {
            let i = row * n + col;
            let alive = next_state(cells[i], count_neighbours(current, row, col));
            out[i] = alive;
            population += usize::from(alive);
        }
    }

    StepMetrics {
        step_us: start.elapsed().as_micros() as u64,
        population,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use toro_core::ALIVE;
    use toro_test_utils::{block, blinker, grid_from_rows};

    fn stepped(g: &Grid) -> Grid {
        let mut next = Grid::dead(*g.torus());
        step(g, &mut next);
        next
    }

    // ── Neighbour counting ──────────────────────────────────────

    #[test]
    fn single_live_cell_is_neighbour_of_all_eight_around_it() {
        let mut g = Grid::new(5).unwrap();
        g.set(2, 2, ALIVE);
        for row in 0..5usize {
            for col in 0..5usize {
                let expected = u8::from(
                    (row, col) != (2, 2) && row.abs_diff(2) <= 1 && col.abs_diff(2) <= 1,
                );
                assert_eq!(count_neighbours(&g, row, col), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn three_by_three_counts_single_cell_once_everywhere() {
        for (r, c) in [(1, 1), (0, 0)] {
            let mut g = Grid::new(3).unwrap();
            g.set(r, c, ALIVE);
            for row in 0..3 {
                for col in 0..3 {
                    let expected = u8::from((row, col) != (r, c));
                    assert_eq!(
                        count_neighbours(&g, row, col),
                        expected,
                        "live ({r}, {c}) at ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn corner_cell_wraps_to_opposite_corner() {
        let mut g = Grid::new(4).unwrap();
        g.set(3, 3, ALIVE);
        assert_eq!(count_neighbours(&g, 0, 0), 1);
        assert_eq!(count_neighbours(&g, 0, 3), 1);
        assert_eq!(count_neighbours(&g, 3, 0), 1);
        assert_eq!(count_neighbours(&g, 1, 1), 0);
    }

    #[test]
    fn edge_cells_wrap_on_each_axis() {
        let g = grid_from_rows(&["x...", "....", "....", "...."]);
        assert_eq!(count_neighbours(&g, 3, 0), 1);
        assert_eq!(count_neighbours(&g, 0, 3), 1);
        assert_eq!(count_neighbours(&g, 2, 0), 0);
    }

    #[test]
    fn full_grid_counts_eight() {
        let g = grid_from_rows(&["xxxx", "xxxx", "xxxx", "xxxx"]);
        assert_eq!(count_neighbours(&g, 0, 0), 8);
        assert_eq!(count_neighbours(&g, 2, 1), 8);
    }

    // ── Rules ───────────────────────────────────────────────────

    #[test]
    fn rule_table() {
        for k in 0..=8 {
            assert_eq!(next_state(false, k), k == 3, "birth with {k}");
            assert_eq!(next_state(true, k), k == 2 || k == 3, "survival with {k}");
        }
    }

    #[test]
    fn dead_cell_with_three_neighbours_is_born() {
        let g = grid_from_rows(&["x....", "x....", "x....", ".....", "....."]);
        assert!(stepped(&g).get(1, 1));
    }

    #[test]
    fn dead_cell_with_two_or_four_neighbours_stays_dead() {
        let two = grid_from_rows(&["x....", "x....", ".....", ".....", "....."]);
        assert!(!stepped(&two).get(1, 1));
        let four = grid_from_rows(&["xx...", "x....", "x....", ".....", "....."]);
        assert!(!stepped(&four).get(1, 1));
    }

    #[test]
    fn isolated_and_crowded_cells_die() {
        let lonely = grid_from_rows(&[".....", ".....", "..x..", ".....", "....."]);
        assert_eq!(stepped(&lonely).population(), 0);

        let crowded = grid_from_rows(&[".....", ".xxx.", ".xx..", ".....", "....."]);
        // (2, 2) has neighbours (1,1) (1,2) (1,3) (2,1): four.
        assert!(!stepped(&crowded).get(2, 2));
    }

    // ── Patterns ────────────────────────────────────────────────

    #[test]
    fn block_is_still_life() {
        let g = block();
        assert_eq!(stepped(&g), g);
    }

    #[test]
    fn blinker_has_period_two() {
        let g = blinker();
        let once = stepped(&g);
        assert_ne!(once, g);
        assert_eq!(
            once,
            grid_from_rows(&[".....", "..x..", "..x..", "..x..", "....."])
        );
        assert_eq!(stepped(&once), g);
    }

    #[test]
    fn blinker_across_the_seam_oscillates() {
        // Horizontal blinker centred on (3, 0), spanning columns 3, 0, 1.
        let g = grid_from_rows(&["....", "....", "....", "xx.x"]);
        let once = stepped(&g);
        assert_eq!(once, grid_from_rows(&["x...", "....", "x...", "x..."]));
        assert_eq!(stepped(&once), g);
    }

    #[test]
    fn blinker_on_left_edge_turns_vertical_and_back() {
        let horizontal = grid_from_rows(&[".....", "xxx..", ".....", ".....", "....."]);
        let vertical = grid_from_rows(&[".x...", ".x...", ".x...", ".....", "....."]);
        let once = stepped(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(stepped(&once), horizontal);
    }

    #[test]
    fn full_row_fills_three_by_three_torus() {
        // Every cell neighbours all eight others, so three live cells
        // keep themselves alive and give birth everywhere else.
        let g = grid_from_rows(&["...", "xxx", "..."]);
        assert_eq!(stepped(&g).population(), 9);
    }

    #[test]
    fn step_overwrites_stale_next_buffer() {
        let g = block();
        let mut next = grid_from_rows(&["xxxx", "xxxx", "xxxx", "xxxx"]);
        let metrics = step(&g, &mut next);
        assert_eq!(next, g);
        assert_eq!(metrics.population, 4);
    }

    #[test]
    #[should_panic(expected = "share a dimension")]
    fn mismatched_buffers_panic() {
        let g = Grid::new(3).unwrap();
        let mut next = Grid::new(4).unwrap();
        step(&g, &mut next);
    }

    proptest! {
        #[test]
        fn neighbour_count_at_most_eight(n in 1usize..10, bits in proptest::collection::vec(any::<bool>(), 100)) {
            let g = Grid::from_cells(n, bits[..n * n].to_vec()).unwrap();
            for r in 0..n {
                for c in 0..n {
                    prop_assert!(count_neighbours(&g, r, c) <= 8);
                }
            }
        }

        #[test]
        fn reported_population_matches_grid(n in 1usize..10, bits in proptest::collection::vec(any::<bool>(), 100)) {
            let g = Grid::from_cells(n, bits[..n * n].to_vec()).unwrap();
            let mut next = Grid::dead(*g.torus());
            let m = step(&g, &mut next);
            prop_assert_eq!(m.population, next.population());
        }

        #[test]
        fn step_commutes_with_torus_rotation(n in 3usize..9, shift in 0usize..9, bits in proptest::collection::vec(any::<bool>(), 81)) {
            let g = Grid::from_cells(n, bits[..n * n].to_vec()).unwrap();
            let rotate = |src: &Grid| {
                let mut out = Grid::dead(*src.torus());
                for r in 0..n {
                    for c in 0..n {
                        out.set((r + shift) % n, (c + shift) % n, src.get(r, c));
                    }
                }
                out
            };
            prop_assert_eq!(stepped(&rotate(&g)), rotate(&stepped(&g)));
        }
    }
}

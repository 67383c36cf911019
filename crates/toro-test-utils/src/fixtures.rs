//! Reusable grid fixtures.
//!
//! Small well-known patterns for engine and codec tests:
//!
//! - [`blinker`]: period-2 oscillator, horizontal phase
//! - [`block`]: still life
//! - [`glider`]: translates one cell diagonally every four generations

use toro_arena::Grid;
use toro_core::ALIVE;

/// Build a grid from rows of `x` (alive) and `.` (dead).
///
/// # Panics
///
/// Panics if the rows do not form a non-empty square.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let n = rows.len();
    let mut grid = Grid::new(n).expect("fixture must have at least one row");
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), n, "fixture row {r} is not {n} wide");
        for (c, b) in line.bytes().enumerate() {
            if b == b'x' {
                grid.set(r, c, ALIVE);
            }
        }
    }
    grid
}

/// Horizontal blinker centred in a 5×5 grid.
pub fn blinker() -> Grid {
    grid_from_rows(&[".....", ".....", ".xxx.", ".....", "....."])
}

/// 2×2 block in a 4×4 grid.
pub fn block() -> Grid {
    grid_from_rows(&["....", ".xx.", ".xx.", "...."])
}

/// Glider heading down and right in an 8×8 grid.
pub fn glider() -> Grid {
    grid_from_rows(&[
        ".x......",
        "..x.....",
        "xxx.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ])
}

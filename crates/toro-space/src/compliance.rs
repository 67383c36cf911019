//! Torus compliance test helpers.
//!
//! These functions verify that a [`Torus`] satisfies the invariants the
//! step engine relies on. Reused across the torus test module.

use std::collections::HashSet;

use crate::torus::Torus;

/// Assert that every cell has exactly 8 neighbours.
pub fn assert_neighbour_count(torus: &Torus) {
    for (r, c) in torus.canonical_ordering() {
        let n = torus.neighbours(r, c);
        assert_eq!(n.len(), 8, "({r}, {c}) has {} neighbours, expected 8", n.len());
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(torus: &Torus) {
    for (r, c) in torus.canonical_ordering() {
        for nb in torus.neighbours(r, c) {
            let back = torus.neighbours(nb.0, nb.1);
            assert!(
                back.contains(&(r, c)),
                "{nb:?} in neighbours(({r}, {c})) but ({r}, {c}) not in neighbours({nb:?})"
            );
        }
    }
}

/// Assert that a cell is never its own neighbour once N >= 3, and that
/// its 8 neighbours are distinct.
pub fn assert_neighbours_distinct(torus: &Torus) {
    if torus.dimension() < 3 {
        return;
    }
    for (r, c) in torus.canonical_ordering() {
        let n = torus.neighbours(r, c);
        assert!(!n.contains(&(r, c)), "({r}, {c}) is its own neighbour");
        let unique: HashSet<_> = n.iter().copied().collect();
        assert_eq!(unique.len(), 8, "({r}, {c}) has duplicate neighbours");
    }
}

/// Assert that canonical ordering covers every cell exactly once and
/// agrees with [`Torus::index`].
pub fn assert_canonical_ordering(torus: &Torus) {
    let ordering = torus.canonical_ordering();
    assert_eq!(ordering.len(), torus.cell_count());
    for (i, &(r, c)) in ordering.iter().enumerate() {
        assert_eq!(torus.index(r, c), i, "index mismatch at ({r}, {c})");
    }
}

/// Run every compliance check.
pub fn run_full_compliance(torus: &Torus) {
    assert_neighbour_count(torus);
    assert_neighbours_symmetric(torus);
    assert_neighbours_distinct(torus);
    assert_canonical_ordering(torus);
}

use toro_space::{wrap_axis, Torus};

#[test]
fn origin_is_neighbour_of_every_wrapped_corner() {
    let t = Torus::new(6).unwrap();
    for corner in [(5, 5), (5, 0), (0, 5)] {
        assert!(
            t.neighbours(corner.0, corner.1).contains(&(0, 0)),
            "(0, 0) missing from neighbours of {corner:?}"
        );
    }
}

#[test]
fn every_edge_wraps_to_the_opposite_edge() {
    let t = Torus::new(6).unwrap();
    // Top edge sees the bottom row.
    assert!(t.neighbours(0, 3).contains(&(5, 3)));
    // Bottom edge sees the top row.
    assert!(t.neighbours(5, 3).contains(&(0, 3)));
    // Left edge sees the right column.
    assert!(t.neighbours(3, 0).contains(&(3, 5)));
    // Right edge sees the left column.
    assert!(t.neighbours(3, 5).contains(&(3, 0)));
}

#[test]
fn offset_wraps_both_axes() {
    let t = Torus::new(4).unwrap();
    assert_eq!(t.offset(0, 0, -1, -1), (3, 3));
    assert_eq!(t.offset(3, 3, 1, 1), (0, 0));
    assert_eq!(t.offset(2, 1, 0, 0), (2, 1));
}

#[test]
fn wrap_axis_handles_large_offsets() {
    assert_eq!(wrap_axis(-5, 4), 3);
    assert_eq!(wrap_axis(9, 4), 1);
}

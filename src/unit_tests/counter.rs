use super::*;
use crate::grid::Grid;

#[test]
fn opposite_corners_of_a_2x2_grid_have_no_hamiltonian_path() {
    // (0,0) and (1,1) are the same color under (row+col)%2 checkerboard
    // coloring; a path covering all 4 (an even count) cells must end on
    // opposite colors, so no path between them can exist.
    let grid = Grid::from_codes(2, 2, &[2, 0, 0, 3]).unwrap();
    assert_eq!(count_paths(&grid), BigUint::zero());
}

#[test]
fn adjacent_2x2_has_one_hamiltonian_path() {
    let grid = Grid::from_codes(2, 2, &[2, 3, 0, 0]).unwrap();
    assert_eq!(count_paths(&grid), BigUint::from(1u32));
}

#[test]
fn single_blocked_cell_leaves_no_path() {
    // A 1x3 row with the middle cell blocked can never be fully covered.
    let grid = Grid::from_codes(3, 1, &[2, 1, 3]).unwrap();
    assert_eq!(count_paths(&grid), BigUint::zero());
}

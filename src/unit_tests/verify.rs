use super::*;
use crate::grid::Grid;

fn adjacent_2x2() -> Grid {
    // start (0,0), end (0,1); the only valid path is the "long way around".
    Grid::from_codes(2, 2, &[2, 3, 0, 0]).unwrap()
}

#[test]
fn accepts_the_unique_path_on_an_adjacent_2x2_grid() {
    let grid = adjacent_2x2();
    let path = [(0, 0), (1, 0), (1, 1), (0, 1)];
    assert_eq!(check_path(&grid, &path), Ok(()));
}

#[test]
fn rejects_path_with_wrong_start() {
    let grid = adjacent_2x2();
    let path = [(1, 0), (0, 0), (1, 1), (0, 1)];
    assert!(check_path(&grid, &path).is_err());
}

#[test]
fn rejects_path_with_wrong_end() {
    let grid = adjacent_2x2();
    let path = [(0, 0), (1, 0), (0, 1), (1, 1)];
    assert!(check_path(&grid, &path).is_err());
}

#[test]
fn rejects_path_missing_a_cell() {
    let grid = adjacent_2x2();
    let path = [(0, 0), (1, 0), (1, 1)];
    assert!(check_path(&grid, &path).is_err());
}

#[test]
fn rejects_path_using_a_nonexistent_edge() {
    let grid = adjacent_2x2();
    // (0,0)-(1,1) is a diagonal, not a grid edge.
    let path = [(0, 0), (1, 1), (1, 0), (0, 1)];
    assert!(check_path(&grid, &path).is_err());
}

#[test]
fn path_to_configs_matches_hand_derivation_on_adjacent_2x2() {
    let grid = adjacent_2x2();
    let path = [(0, 0), (1, 0), (1, 1), (0, 1)];
    let configs = path_to_configs(&grid, &path);
    assert_eq!(configs, vec![vec![0, 0], vec![1, 2], vec![0, 0]]);
}

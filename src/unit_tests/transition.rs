use super::*;
use crate::grid::Neighbor::{Down, Right};

fn collect_successors(
    incoming: &Configuration,
    target_degrees: &[usize],
    next_neighbors: &[Vec<Neighbor>],
) -> Vec<Vec<i16>> {
    let mut scratch = RowScratch::new(incoming.len());
    let mut out = Vec::new();
    for_each_successor(incoming, target_degrees, next_neighbors, &mut scratch, &mut |tuple| {
        out.push(tuple)
    });
    out
}

#[test]
fn first_row_of_a_2x2_grid_has_one_successor() {
    // (0,0) is the start (degree 1), (0,1) is open (degree 2), first row so
    // no incoming connectivity. (0,1) can only reach degree 2 if (0,0) sends
    // it a rightward edge, so "go down from (0,0)" is a dead end.
    let incoming = Configuration::empty(2);
    let target_degrees = vec![1, 2];
    let next_neighbors = vec![vec![Right, Down], vec![Down]];

    let successors = collect_successors(&incoming, &target_degrees, &next_neighbors);
    assert_eq!(successors, vec![vec![0, 1]]);
}

#[test]
fn would_close_veto_suppresses_the_only_combination() {
    // Columns 0 and 2 already share a subpath crossing from above; the only
    // legal row assignment would link them directly to each other, closing
    // a cycle, so no successor should be emitted at all.
    let incoming = Configuration::from_display(&[1, 0, 1]).unwrap();
    let target_degrees = vec![2, 2, 2];
    let next_neighbors = vec![vec![Right], vec![Right], vec![Down]];

    let successors = collect_successors(&incoming, &target_degrees, &next_neighbors);
    assert!(successors.is_empty());
}

#[test]
fn vertical_only_column_spawns_a_fresh_endpoint() {
    let incoming = Configuration::empty(1);
    let target_degrees = vec![1];
    let next_neighbors = vec![vec![Down]];

    let successors = collect_successors(&incoming, &target_degrees, &next_neighbors);
    assert_eq!(successors, vec![vec![1]]);
}

#[test]
fn path_terminating_at_an_end_cell_leaves_no_crossing() {
    // Column 0 carries an unpaired endpoint in from above; its only
    // neighbor is rightward into column 1, an end cell with no further
    // neighbors. The path completes inside this row.
    let incoming = Configuration::from_display(&[1, 0]).unwrap();
    let target_degrees = vec![2, 1];
    let next_neighbors = vec![vec![Right], vec![]];

    let successors = collect_successors(&incoming, &target_degrees, &next_neighbors);
    assert_eq!(successors, vec![vec![0, 0]]);
}

#[test]
fn scratch_is_clean_between_independent_calls() {
    let incoming = Configuration::empty(2);
    let target_degrees = vec![1, 2];
    let next_neighbors = vec![vec![Right, Down], vec![Down]];
    let mut scratch = RowScratch::new(2);

    let mut first = Vec::new();
    for_each_successor(&incoming, &target_degrees, &next_neighbors, &mut scratch, &mut |t| {
        first.push(t)
    });
    let mut second = Vec::new();
    for_each_successor(&incoming, &target_degrees, &next_neighbors, &mut scratch, &mut |t| {
        second.push(t)
    });
    assert_eq!(first, second);
}

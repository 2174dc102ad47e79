//! Brute-force verification of a concrete path against a grid.
//!
//! This is deliberately independent of [`crate::counter`]'s DP: it exists so
//! property tests can cross-check the DP's count against an actual
//! enumeration of paths on small grids (spec.md §8 property 5), and so a
//! caller can sanity-check one candidate path without re-deriving the whole
//! machinery. Ported from `original_source/check.py`.

use std::collections::{HashMap, HashSet};

use crate::grid::{CellKind, Grid};

/// Validate that `path` is a genuine Hamiltonian path on `grid`: starts at
/// the start cell, ends at the end cell, visits every open cell exactly
/// once, and only ever steps along real grid edges.
pub fn check_path(grid: &Grid, path: &[(usize, usize)]) -> Result<(), String> {
    if path.first().copied() != Some(grid.start()) {
        return Err(format!(
            "does not start at starting node {:?}",
            grid.start()
        ));
    }
    if path.last().copied() != Some(grid.end()) {
        return Err(format!("does not end at ending node {:?}", grid.end()));
    }

    let open_cells = open_cell_count(grid);
    if path.len() != open_cells {
        return Err(format!(
            "not long enough to cover all nodes: expected {open_cells}, got {}",
            path.len()
        ));
    }

    let mut visited = HashSet::with_capacity(path.len());
    for &cell in path {
        if !visited.insert(cell) {
            return Err(format!("{cell:?} is visited more than once"));
        }
    }
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.cell(row, col).expect("in bounds") != CellKind::Blocked
                && !visited.contains(&(row, col))
            {
                return Err("does not cover all nodes".to_string());
            }
        }
    }

    for step in path.windows(2) {
        if !grid.has_edge(step[0], step[1]) {
            return Err(format!("edge {:?}->{:?} does not exist", step[0], step[1]));
        }
    }

    Ok(())
}

fn open_cell_count(grid: &Grid) -> usize {
    (0..grid.height())
        .flat_map(|row| (0..grid.width()).map(move |col| (row, col)))
        .filter(|&(row, col)| grid.cell(row, col).expect("in bounds") != CellKind::Blocked)
        .count()
}

/// Turn a concrete path into the sequence of row-boundary configuration
/// tuples it induces: `result[0]` is the (always all-empty) tuple above row
/// 0, and `result[r + 1]` is the tuple below row `r`. Used to cross-check
/// [`crate::counter::count_paths`] against brute-force path enumeration.
pub fn path_to_configs(grid: &Grid, path: &[(usize, usize)]) -> Vec<Vec<i16>> {
    let cols = grid.width();
    let rows = grid.height();

    let mut adjacency: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
    for step in path.windows(2) {
        adjacency.entry(step[0]).or_default().push(step[1]);
        adjacency.entry(step[1]).or_default().push(step[0]);
    }

    let mut configs = vec![vec![0i16; cols]];
    for row in 0..rows {
        let mut line = vec![0i16; cols];
        let mut next_id: i16 = 1;
        for col in 0..cols {
            let crosses_down = adjacency
                .get(&(row, col))
                .is_some_and(|neighbors| neighbors.contains(&(row + 1, col)));
            if !crosses_down {
                continue;
            }
            match other_crossing_column(&adjacency, row, col) {
                Some(other_col) if other_col < col => line[col] = line[other_col],
                _ => {
                    line[col] = next_id;
                    next_id += 1;
                }
            }
        }
        configs.push(line);
    }
    configs
}

/// Starting at `(row, col)` (a column known to cross down into `row + 1`),
/// walk the path in the direction away from that crossing until another
/// column crossing the same boundary is found.
fn other_crossing_column(
    adjacency: &HashMap<(usize, usize), Vec<(usize, usize)>>,
    row: usize,
    col: usize,
) -> Option<usize> {
    let mut last = (row + 1, col);
    let mut cur = (row, col);
    loop {
        let mut next_candidates = adjacency
            .get(&cur)
            .into_iter()
            .flatten()
            .copied()
            .filter(|&n| n != last);
        let next = next_candidates.next()?;
        debug_assert!(
            next_candidates.next().is_none(),
            "a simple path never branches"
        );

        if next.0 == row + 1 {
            return Some(next.1);
        }
        last = cur;
        cur = next;
    }
}

#[cfg(test)]
#[path = "unit_tests/verify.rs"]
mod tests;

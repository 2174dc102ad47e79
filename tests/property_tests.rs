//! Property-based tests using proptest.
//!
//! These verify the invariants spec.md ties to `Configuration` (properties
//! 1-4) and the counting driver's agreement with brute-force enumeration
//! (property 5), mirroring the structure of a random-graph-strategy-plus-
//! `proptest!` suite.

use std::collections::HashSet;

use hamgrid::prelude::*;
use proptest::prelude::*;

/// Strategy for generating a `Configuration` of a given max width by
/// replaying a random sequence of `link` calls from the empty state: each
/// column independently becomes empty, a fresh unpaired endpoint, or half
/// of a freshly spawned pair. Every `link` call here hits the split/spawn
/// case (both columns start unpartnered), so it never needs a
/// `would_close` veto.
fn configuration_strategy(max_width: usize) -> impl Strategy<Value = (usize, Configuration)> {
    (2..=max_width).prop_flat_map(|width| {
        prop::collection::vec(0..3u8, width).prop_map(move |roles| {
            let mut config = Configuration::empty(width);
            let mut pending: Option<usize> = None;
            for (col, role) in roles.into_iter().enumerate() {
                match role {
                    1 => config.link(col, col),
                    2 => match pending.take() {
                        Some(a) => config.link(a, col),
                        None => pending = Some(col),
                    },
                    _ => {}
                }
            }
            if let Some(a) = pending {
                config.link(a, a);
            }
            (width, config)
        })
    })
}

/// Strategy for a small grid: width/height up to 3, a random subset of
/// non-endpoint cells blocked, one start and one end cell.
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1..=3usize, 1..=3usize)
        .prop_filter("grid needs at least 2 cells for distinct start/end", |&(w, h)| w * h >= 2)
        .prop_flat_map(|(width, height)| {
            let area = width * height;
            (0..area, 0..area, prop::collection::vec(any::<bool>(), area)).prop_filter_map(
                "start and end must be distinct cells",
                move |(start, end, blocked)| {
                    if start == end {
                        return None;
                    }
                    let codes: Vec<u64> = (0..area)
                        .map(|i| {
                            if i == start {
                                2
                            } else if i == end {
                                3
                            } else if blocked[i] {
                                1
                            } else {
                                0
                            }
                        })
                        .collect();
                    Grid::from_codes(width, height, &codes).ok()
                },
            )
        })
}

/// Count Hamiltonian paths by brute-force DFS, independent of `count_paths`.
fn brute_force_count(grid: &Grid) -> u64 {
    let width = grid.width();
    let height = grid.height();
    let open_cells: usize = (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .filter(|&(row, col)| grid.cell(row, col).unwrap() != CellKind::Blocked)
        .count();

    let mut visited = HashSet::new();
    let mut count = 0u64;
    dfs(grid, grid.start(), open_cells, &mut visited, &mut count);
    count
}

fn dfs(
    grid: &Grid,
    cell: (usize, usize),
    open_cells: usize,
    visited: &mut HashSet<(usize, usize)>,
    count: &mut u64,
) {
    visited.insert(cell);
    if cell == grid.end() {
        if visited.len() == open_cells {
            *count += 1;
        }
        visited.remove(&cell);
        return;
    }

    let (row, col) = cell;
    let height = grid.height();
    let width = grid.width();
    let candidates = [
        (row.checked_sub(1), Some(col)),
        (Some(row + 1).filter(|&r| r < height), Some(col)),
        (Some(row), col.checked_sub(1)),
        (Some(row), Some(col + 1).filter(|&c| c < width)),
    ];
    for (r, c) in candidates {
        if let (Some(r), Some(c)) = (r, c) {
            if !visited.contains(&(r, c)) && grid.has_edge(cell, (r, c)) {
                dfs(grid, (r, c), open_cells, visited, count);
            }
        }
    }

    visited.remove(&cell);
}

proptest! {
    /// Property 1: `as_tuple` is canonical, and `from_display` of it
    /// reconstructs an equal configuration.
    #[test]
    fn as_tuple_round_trips((_width, config) in configuration_strategy(8)) {
        let tuple = config.as_tuple();
        let rebuilt = Configuration::from_display(&tuple).unwrap();
        prop_assert_eq!(rebuilt.as_tuple(), tuple);
    }

    /// Property 2: `would_close(a, b)` agrees with the oracle derived
    /// directly from the display tuple (`a` and `b` are the same nonzero
    /// subpath id, i.e. direct partners).
    #[test]
    fn would_close_matches_display_oracle((width, config) in configuration_strategy(8)) {
        let tuple = config.as_tuple();
        for a in 0..width {
            for b in (a + 1)..width {
                let oracle = tuple[a] == tuple[b] && tuple[a] != 0;
                prop_assert_eq!(config.would_close(a, b), oracle, "mismatch at ({a}, {b})");
            }
        }
    }

    /// Property 3: mutating a copy never affects the original's canonical
    /// tuple.
    #[test]
    fn copy_is_independent((width, config) in configuration_strategy(8)) {
        let before = config.as_tuple();
        let mut copy = config.copy();
        let vmask = vec![false; width];
        copy.mask(&vmask);
        prop_assert_eq!(config.as_tuple(), before);
    }

    /// Property 4: applying the same mask twice is the same as applying it
    /// once.
    #[test]
    fn mask_is_idempotent((width, config) in configuration_strategy(8), seed in any::<u64>()) {
        let mut once = config.copy();
        let vmask: Vec<bool> = (0..width).map(|i| (seed >> i) & 1 == 1).collect();
        once.mask(&vmask);
        let mut twice = once.copy();
        twice.mask(&vmask);
        prop_assert_eq!(once.as_tuple(), twice.as_tuple());
    }

}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property 5: the DP's total count agrees with brute-force path
    /// enumeration on small grids. Capped at 64 cases (rather than the
    /// default 256): brute force on a 3x3 grid explores up to 9! orderings.
    #[test]
    fn dp_count_matches_brute_force(grid in grid_strategy()) {
        let dp_count = count_paths(&grid);
        let brute = brute_force_count(&grid);
        prop_assert_eq!(dp_count, num_bigint::BigUint::from(brute));
    }
}

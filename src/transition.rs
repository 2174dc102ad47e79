//! Row transition enumerator: given one row's incoming [`Configuration`],
//! enumerate every legal outgoing configuration.
//!
//! The combinatorial search (§4.2) is the hot path of the whole system, so
//! its scratch state — `hmask`, `vmask`, the residual degree counters — is
//! allocated once per grid (not once per branch) in a [`RowScratch`] and
//! mutated/restored by the backtracking recursion, per spec.md's Design
//! Notes "Global mutable scratch". Successors are delivered through a
//! callback rather than materialized into a `Vec`, per "Lazy successor
//! stream".

use bitvec::vec::BitVec;

use crate::configuration::Configuration;
use crate::grid::Neighbor;

/// Reusable scratch buffers for one grid's row transition enumeration.
///
/// Allocated once (sized to the grid's width) and reused across every row
/// and every incoming configuration of that row.
pub struct RowScratch {
    hmask: BitVec,
    vmask: BitVec,
    residual: Vec<i32>,
}

impl RowScratch {
    /// Allocate scratch buffers sized for a grid of the given width.
    pub fn new(width: usize) -> Self {
        RowScratch {
            hmask: BitVec::repeat(false, width),
            vmask: BitVec::repeat(false, width),
            residual: vec![0; width],
        }
    }

    fn width(&self) -> usize {
        self.residual.len()
    }
}

/// Enumerate every legal outgoing configuration reachable from `incoming`
/// given this row's target degrees and forward-or-down neighbor lists,
/// invoking `on_successor` once per outgoing configuration (with
/// repeats — distinct branches may commit to the same canonical tuple, and
/// the counting driver is responsible for summing them).
pub fn for_each_successor(
    incoming: &Configuration,
    target_degrees: &[usize],
    next_neighbors: &[Vec<Neighbor>],
    scratch: &mut RowScratch,
    on_successor: &mut dyn FnMut(Vec<i16>),
) {
    let width = incoming.len();
    debug_assert_eq!(scratch.width(), width);
    debug_assert_eq!(target_degrees.len(), width);
    debug_assert_eq!(next_neighbors.len(), width);

    scratch.hmask.fill(false);
    scratch.vmask.fill(false);
    for col in 0..width {
        scratch.residual[col] = target_degrees[col] as i32 - incoming.is_occupied(col) as i32;
    }

    choose_column(0, width, incoming, next_neighbors, scratch, on_successor);
}

/// Recursively decide, for column `col`, which subset of its forward-or-down
/// neighbors to use, then recurse into `col + 1`. At `col == width`, every
/// cell's choice has been made; commit the row and emit the resulting
/// configuration.
fn choose_column(
    col: usize,
    width: usize,
    incoming: &Configuration,
    next_neighbors: &[Vec<Neighbor>],
    scratch: &mut RowScratch,
    on_successor: &mut dyn FnMut(Vec<i16>),
) {
    if col == width {
        commit_row(incoming, scratch, on_successor);
        return;
    }

    let residual = scratch.residual[col];
    if residual < 0 {
        // This cell was over-committed by an earlier column's rightward
        // choice; no legal assignment completes this branch.
        return;
    }
    let needed = residual as usize;
    let neighbors = &next_neighbors[col];
    if needed > neighbors.len() {
        // Not enough forward/down edges available to reach target degree.
        return;
    }

    match (neighbors.len(), needed) {
        (_, 0) => choose_column(col + 1, width, incoming, next_neighbors, scratch, on_successor),
        (1, 1) => {
            try_pick(col, &[neighbors[0]], width, incoming, next_neighbors, scratch, on_successor)
        }
        (2, 1) => {
            try_pick(col, &[neighbors[0]], width, incoming, next_neighbors, scratch, on_successor);
            try_pick(col, &[neighbors[1]], width, incoming, next_neighbors, scratch, on_successor);
        }
        (2, 2) => try_pick(
            col,
            &[neighbors[0], neighbors[1]],
            width,
            incoming,
            next_neighbors,
            scratch,
            on_successor,
        ),
        _ => unreachable!("a cell has at most one right and one down neighbor"),
    }
}

/// Apply one candidate subset of edges at `col`, recurse, then undo —
/// the backtracking step that lets `scratch` be reused without allocation.
#[allow(clippy::too_many_arguments)]
fn try_pick(
    col: usize,
    chosen: &[Neighbor],
    width: usize,
    incoming: &Configuration,
    next_neighbors: &[Vec<Neighbor>],
    scratch: &mut RowScratch,
    on_successor: &mut dyn FnMut(Vec<i16>),
) {
    let mut borrowed_from_next = false;
    for &neighbor in chosen {
        match neighbor {
            Neighbor::Right => {
                scratch.hmask.set(col, true);
                scratch.residual[col + 1] -= 1;
                borrowed_from_next = true;
            }
            Neighbor::Down => scratch.vmask.set(col, true),
        }
    }

    choose_column(col + 1, width, incoming, next_neighbors, scratch, on_successor);

    if borrowed_from_next {
        scratch.residual[col + 1] += 1;
    }
    for &neighbor in chosen {
        match neighbor {
            Neighbor::Right => scratch.hmask.set(col, false),
            Neighbor::Down => scratch.vmask.set(col, false),
        }
    }
}

/// Turn one fully-decided row (`hmask`/`vmask` over all columns) into an
/// outgoing configuration, following spec.md §4.2's left-to-right scan:
/// maximal runs of `hmask` become horizontal links between their endpoints
/// (vetoed by `would_close`); any other column with a surviving `vmask` bit
/// gets a self-link (spawning a fresh unpaired endpoint, or a no-op if it
/// already has connectivity); finally `mask(vmask)` drops everything else.
fn commit_row(incoming: &Configuration, scratch: &RowScratch, on_successor: &mut dyn FnMut(Vec<i16>)) {
    let width = incoming.len();
    let mut config = incoming.copy();
    let mut run_start: Option<usize> = None;

    for idx in 0..width {
        let here = scratch.hmask[idx];
        let prev = idx > 0 && scratch.hmask[idx - 1];

        if here && !prev {
            run_start = Some(idx);
        } else if !here && prev {
            let start = run_start
                .take()
                .expect("horizontal run end reached without a recorded start");
            if config.would_close(start, idx) {
                // This link would close an internal cycle; discard the
                // whole branch without emitting a successor.
                return;
            }
            config.link(start, idx);
        } else if scratch.vmask[idx] {
            config.link(idx, idx);
        }
    }
    debug_assert!(run_start.is_none(), "row ended mid-horizontal-run");

    let vmask: Vec<bool> = scratch.vmask.iter().by_vals().collect();
    config.mask(&vmask);

    on_successor(config.as_tuple());
}

#[cfg(test)]
#[path = "unit_tests/transition.rs"]
mod tests;

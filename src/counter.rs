//! The counting driver: row-by-row DP over the connectivity configurations
//! produced by [`crate::transition`], keyed by their canonical display tuple.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::configuration::Configuration;
use crate::grid::Grid;
use crate::transition::{for_each_successor, RowScratch};

/// Count the Hamiltonian paths between `grid`'s start and end cell.
///
/// Maintains a map from canonical configuration tuple to multiplicity, fed
/// row by row through [`for_each_successor`]; starts from the all-empty
/// tuple above row 0 and, because the last row's cells have no downward
/// neighbor, ends with every surviving multiplicity collapsed onto the
/// all-empty tuple below the last row. Ported from
/// `original_source/configs.py`'s `count_paths`.
pub fn count_paths(grid: &Grid) -> BigUint {
    let width = grid.width();
    let mut scratch = RowScratch::new(width);
    let mut multiplicities: HashMap<Vec<i16>, BigUint> = HashMap::new();
    multiplicities.insert(vec![0; width], BigUint::one());

    for row in 0..grid.height() {
        let view = grid.row_view(row);
        let mut next: HashMap<Vec<i16>, BigUint> = HashMap::new();

        for (tuple, mult) in &multiplicities {
            let incoming = Configuration::from_display(tuple).expect(
                "the driver only ever holds tuples produced by Configuration::as_tuple, which are always canonical",
            );
            for_each_successor(
                &incoming,
                &view.target_degrees,
                &view.next_neighbors,
                &mut scratch,
                &mut |successor| {
                    let entry = next.entry(successor).or_insert_with(BigUint::zero);
                    *entry += mult;
                },
            );
        }

        multiplicities = next;
    }

    multiplicities.into_values().fold(BigUint::zero(), |acc, m| acc + m)
}

#[cfg(test)]
#[path = "unit_tests/counter.rs"]
mod tests;

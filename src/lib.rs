//! # hamgrid
//!
//! Count Hamiltonian paths between two marked cells of a rectangular grid
//! graph, where some cells may be blocked.
//!
//! The grid is read row by row, and a [`Configuration`](configuration::Configuration)
//! tracks which columns the boundary between the current row and the next
//! is crossed by a partial path, and which of those crossings belong to the
//! same subpath. [`transition::for_each_successor`] enumerates, for one row,
//! every way its cells can extend the crossings handed down from the row
//! above into the crossings handed down to the row below; [`counter::count_paths`]
//! drives that enumeration across the whole grid, folding together every
//! configuration history that reaches the same canonical boundary into a
//! single multiplicity. No intermediate configuration, partial path, or
//! path count is ever materialized in full — the DP state at any row
//! boundary is `O(3^width)` at worst, far smaller than the board's node
//! count.
//!
//! ## Example
//!
//! ```rust
//! use hamgrid::prelude::*;
//!
//! // A 2x2 grid: start at top-left, end at the adjacent top-right cell.
//! // `2` and `3` mark start and end; the only Hamiltonian path between
//! // adjacent corners of a 2x2 grid goes the long way around.
//! let grid = Grid::from_codes(2, 2, &[2, 3, 0, 0]).unwrap();
//! assert_eq!(count_paths(&grid), num_bigint::BigUint::from(1u32));
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: parses the grid file format and exposes the board as a
//!   [`petgraph`] graph plus per-row views.
//! - [`configuration`]: the partner-array connectivity state crossing a row
//!   boundary.
//! - [`transition`]: enumerates one row's legal configuration successors.
//! - [`counter`]: the row-by-row counting driver.
//! - [`verify`]: brute-force checks a concrete path against a grid, and
//!   derives the configuration sequence a path induces (used by property
//!   tests to cross-check [`counter::count_paths`]).
//! - [`render`]: ASCII visualization of a configuration sequence.
//!
//! ## Non-goals
//!
//! This crate answers one question — how many Hamiltonian paths connect
//! two cells of a grid, with some cells blocked — and does not generalize
//! to arbitrary graphs, weighted edges, or cycles (as opposed to paths).

pub mod configuration;
pub mod counter;
pub mod error;
pub mod grid;
pub mod render;
pub mod transition;
pub mod verify;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::configuration::Configuration;
    pub use crate::counter::count_paths;
    pub use crate::error::{HamGridError, Result};
    pub use crate::grid::{CellKind, Grid, Neighbor, RowView};
    pub use crate::render::render_configs;
    pub use crate::verify::{check_path, path_to_configs};
}

// Re-export commonly used items at crate root.
pub use counter::count_paths;
pub use error::{HamGridError, Result};
pub use grid::Grid;

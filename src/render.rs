//! ASCII visualization of a sequence of row-boundary configurations.
//!
//! Presentation-only: nothing here feeds back into counting. Ported from
//! `original_source/configs.py`'s `mk_option_graph`/`print_configs`.

use crate::grid::{CellKind, Grid};

/// Render `configs` (one tuple per row, the configuration crossing below
/// that row — e.g. the tail of [`crate::verify::path_to_configs`]'s output,
/// skipping its leading all-empty tuple) as an ASCII grid: `+`/`A`/`B` for
/// open/start/end cells, `-` and `|` for the horizontal and vertical edges
/// reconstructed from the configurations.
///
/// Horizontal edges are inferred the same way the original tool infers
/// them: scanning each row left to right, a cell that hasn't yet reached
/// its target degree from vertical edges (its own and the row above's)
/// must be using its forward edge.
pub fn render_configs(grid: &Grid, configs: &[Vec<i16>]) -> String {
    let width = grid.width();
    let height = grid.height();
    debug_assert_eq!(configs.len(), height, "one configuration tuple per row expected");

    let mut degree = vec![vec![0usize; width]; height];
    let mut horizontal = vec![vec![false; width]; height];
    let mut vertical = vec![vec![false; width]; height];

    for row in 0..height {
        let view = grid.row_view(row);
        for col in 0..width {
            if configs[row][col] != 0 {
                vertical[row][col] = true;
                degree[row][col] += 1;
                if row + 1 < height {
                    degree[row + 1][col] += 1;
                }
            }
        }
        for col in 0..width {
            if col + 1 < width && degree[row][col] < view.target_degrees[col] {
                horizontal[row][col] = true;
                degree[row][col] += 1;
                degree[row][col + 1] += 1;
            }
        }
    }

    let mut out = String::new();
    for row in 0..height {
        for col in 0..width {
            out.push(node_symbol(grid, row, col));
            out.push(if horizontal[row][col] { '-' } else { ' ' });
        }
        out.push('\n');
        for col in 0..width {
            out.push(if vertical[row][col] { '|' } else { ' ' });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn node_symbol(grid: &Grid, row: usize, col: usize) -> char {
    match grid.cell(row, col).expect("in bounds") {
        CellKind::Blocked => ' ',
        _ if (row, col) == grid.start() => 'A',
        _ if (row, col) == grid.end() => 'B',
        _ => '+',
    }
}

#[cfg(test)]
#[path = "unit_tests/render.rs"]
mod tests;

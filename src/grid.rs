//! Grid parsing and per-row views.
//!
//! This is an external collaborator to the counting core: it turns a
//! whitespace-tokenized grid description into a [`Grid`] (a thin wrapper
//! around a [`petgraph`] graph), and reduces each row to the `target_degree`
//! / `next_neighbors` arrays the row transition enumerator actually consumes.

use std::io::Read;

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::error::{HamGridError, Result};

/// The role of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// An ordinary cell; target degree 2.
    Open,
    /// Removed from the graph entirely; target degree 0.
    Blocked,
    /// The path's first cell; target degree 1.
    Start,
    /// The path's last cell; target degree 1.
    End,
}

impl CellKind {
    fn from_code(code: u64, index: usize) -> Result<Self> {
        match code {
            0 => Ok(CellKind::Open),
            1 => Ok(CellKind::Blocked),
            2 => Ok(CellKind::Start),
            3 => Ok(CellKind::End),
            value => Err(HamGridError::InvalidCode { index, value }),
        }
    }

    /// Required incident-edge count for a cell of this kind.
    pub fn target_degree(self) -> usize {
        match self {
            CellKind::Open => 2,
            CellKind::Blocked => 0,
            CellKind::Start | CellKind::End => 1,
        }
    }
}

/// Which forward-or-downward direction a neighbor lies in, relative to a cell.
///
/// `Right` is the same-row neighbor `(row, col + 1)`; `Down` is the
/// next-row neighbor `(row + 1, col)`. These are the only two directions the
/// row transition enumerator ever needs to consider, since a DP sweeping rows
/// top-to-bottom and columns left-to-right never revisits a cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighbor {
    Right,
    Down,
}

/// A rectangular grid graph with blocked cells and a designated start/end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    graph: UnGraph<CellKind, ()>,
    start: (usize, usize),
    end: (usize, usize),
}

/// Precomputed per-row inputs to the row transition enumerator.
#[derive(Debug, Clone)]
pub struct RowView {
    /// `target_degrees[col]` is the required incident-edge count at `(row, col)`.
    pub target_degrees: Vec<usize>,
    /// `next_neighbors[col]` is the forward-or-down neighbors of `(row, col)`.
    pub next_neighbors: Vec<Vec<Neighbor>>,
}

impl Grid {
    fn node_index(width: usize, row: usize, col: usize) -> NodeIndex {
        NodeIndex::new(row * width + col)
    }

    /// Build a grid from per-cell codes in row-major order (`(row, col) = divmod(k, width)`).
    pub fn from_codes(width: usize, height: usize, codes: &[u64]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HamGridError::EmptyGrid { width, height });
        }
        if codes.len() != width * height {
            return Err(HamGridError::UnexpectedEof {
                expected: width * height,
                got: codes.len(),
            });
        }

        let mut graph = UnGraph::new_undirected();
        let kinds: Vec<CellKind> = codes
            .iter()
            .enumerate()
            .map(|(index, &code)| CellKind::from_code(code, index))
            .collect::<Result<_>>()?;
        for &kind in &kinds {
            graph.add_node(kind);
        }

        for row in 0..height {
            for col in 0..width {
                let here = kinds[row * width + col];
                if here == CellKind::Blocked {
                    continue;
                }
                if col + 1 < width {
                    let right = kinds[row * width + col + 1];
                    if right != CellKind::Blocked {
                        graph.add_edge(
                            Self::node_index(width, row, col),
                            Self::node_index(width, row, col + 1),
                            (),
                        );
                    }
                }
                if row + 1 < height {
                    let down = kinds[(row + 1) * width + col];
                    if down != CellKind::Blocked {
                        graph.add_edge(
                            Self::node_index(width, row, col),
                            Self::node_index(width, row + 1, col),
                            (),
                        );
                    }
                }
            }
        }

        let starts: Vec<(usize, usize)> = kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == CellKind::Start)
            .map(|(i, _)| (i / width, i % width))
            .collect();
        let ends: Vec<(usize, usize)> = kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == CellKind::End)
            .map(|(i, _)| (i / width, i % width))
            .collect();

        if starts.len() != 1 {
            return Err(HamGridError::WrongEndpointCount {
                kind: "start",
                count: starts.len(),
            });
        }
        if ends.len() != 1 {
            return Err(HamGridError::WrongEndpointCount {
                kind: "end",
                count: ends.len(),
            });
        }

        Ok(Grid {
            width,
            height,
            graph,
            start: starts[0],
            end: ends[0],
        })
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// The designated start cell.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// The designated end cell.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// The kind of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellKind> {
        if row >= self.height || col >= self.width {
            return Err(HamGridError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.graph[Self::node_index(self.width, row, col)])
    }

    /// Whether `(row, col)` and an adjacent cell are connected (both non-blocked and grid-adjacent).
    pub fn has_edge(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        self.graph
            .find_edge(
                Self::node_index(self.width, a.0, a.1),
                Self::node_index(self.width, b.0, b.1),
            )
            .is_some()
    }

    /// Reduce row `row` to the target-degree and forward-or-down-neighbor arrays
    /// the row transition enumerator consumes.
    pub fn row_view(&self, row: usize) -> RowView {
        let mut target_degrees = Vec::with_capacity(self.width);
        let mut next_neighbors = Vec::with_capacity(self.width);

        for col in 0..self.width {
            let kind = self.graph[Self::node_index(self.width, row, col)];
            target_degrees.push(kind.target_degree());

            let mut neighbors = Vec::with_capacity(2);
            if kind != CellKind::Blocked {
                if col + 1 < self.width && self.has_edge((row, col), (row, col + 1)) {
                    neighbors.push(Neighbor::Right);
                }
                if row + 1 < self.height && self.has_edge((row, col), (row + 1, col)) {
                    neighbors.push(Neighbor::Down);
                }
            }
            next_neighbors.push(neighbors);
        }

        RowView {
            target_degrees,
            next_neighbors,
        }
    }
}

/// Parse a grid from the whitespace-tokenized format of the grid file: `width
/// height` followed by `width * height` cell codes in row-major order
/// (`(row, col) = divmod(index, width)`).
pub fn parse_grid(mut input: impl Read) -> Result<Grid> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|_| HamGridError::UnexpectedEof {
            expected: 2,
            got: 0,
        })?;

    let mut tokens = text.split_whitespace();

    let width = parse_header_token(tokens.next(), "width")?;
    let height = parse_header_token(tokens.next(), "height")?;

    let expected = width * height;
    let mut codes = Vec::with_capacity(expected);
    for index in 0..expected {
        let token = tokens.next().ok_or(HamGridError::UnexpectedEof {
            expected,
            got: codes.len(),
        })?;
        let value = token
            .parse::<u64>()
            .map_err(|_| HamGridError::InvalidCodeToken {
                index,
                token: token.to_string(),
            })?;
        codes.push(value);
    }

    Grid::from_codes(width, height, &codes)
}

fn parse_header_token(token: Option<&str>, _name: &str) -> Result<usize> {
    let token = token.ok_or(HamGridError::UnexpectedEof {
        expected: 2,
        got: 0,
    })?;
    token
        .parse::<usize>()
        .map_err(|_| HamGridError::InvalidHeader {
            token: token.to_string(),
        })
}

#[cfg(test)]
#[path = "unit_tests/grid.rs"]
mod tests;

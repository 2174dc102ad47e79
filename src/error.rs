//! Error types for the hamgrid library.

use thiserror::Error;

/// Errors that can occur while parsing or validating a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HamGridError {
    /// The input stream ended before all `width * height` cell codes were read.
    #[error("unexpected end of input: expected {expected} cell codes, got {got}")]
    UnexpectedEof { expected: usize, got: usize },

    /// A token that should have been `width` or `height` was not a valid integer.
    #[error("invalid header token {token:?}: expected a non-negative integer")]
    InvalidHeader { token: String },

    /// A cell code token was not a valid integer.
    #[error("invalid cell code {token:?} at index {index}: expected a non-negative integer")]
    InvalidCodeToken { index: usize, token: String },

    /// A cell code was a valid integer but not one of `{0, 1, 2, 3}`.
    #[error("invalid cell code {value} at index {index}: expected one of 0, 1, 2, 3")]
    InvalidCode { index: usize, value: u64 },

    /// The grid did not contain exactly one start (`2`) or exactly one end (`3`) cell.
    #[error("expected exactly one {kind} cell, found {count}")]
    WrongEndpointCount { kind: &'static str, count: usize },

    /// The grid has zero area.
    #[error("grid must have positive width and height, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// A row or column index was out of bounds for the grid.
    #[error("index out of bounds: ({row}, {col}) not in a {width}x{height} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// A configuration display tuple used the same subpath id more than twice.
    #[error("subpath id {id} appears more than twice in display tuple")]
    RepeatedSubpathId { id: i16 },
}

/// Result type alias for hamgrid operations.
pub type Result<T> = std::result::Result<T, HamGridError>;

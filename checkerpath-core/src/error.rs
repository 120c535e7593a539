use thiserror::Error;

use crate::grid::{Coords, Value};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid grid size {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[error("grid needs {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },

    #[error("cell {index} sits at ({}, {}), expected ({}, {})", found.x, found.y, expected.x, expected.y)]
    MisplacedCell { index: usize, expected: Coords, found: Coords },

    #[error("invalid value range [{min}, {max}]: {reason}")]
    InvalidRange { min: Value, max: Value, reason: &'static str },

    // Traversal never leaves the grid; seeing this means the search is broken.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

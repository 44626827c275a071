use thiserror::Error;

use crate::geometry::{Point, Size};
use crate::logging::LoggingError;

/// Unified result type for the grid inventory crate.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Reasons an item cannot be placed in an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("item is already in the inventory")]
    AlreadyContained,
    #[error("shape of size {size} at {origin} leaves the grid")]
    OutOfBounds { origin: Point, size: Size },
    #[error("cell {cell} is already occupied")]
    Collision { cell: Point },
    #[error("no free space fits the item")]
    NoSpace,
}

/// Errors surfaced while building shapes or talking to collaborators.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("shape mask has {actual} cells, expected {expected}")]
    MaskSizeMismatch { expected: usize, actual: usize },
    #[error("shape row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("shape is too large: {0} cells along one axis")]
    ShapeTooLarge(usize),
    #[error("unknown shape glyph `{0}`")]
    InvalidGlyph(char),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
}

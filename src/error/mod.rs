//! Error types shared across the crate.
//!
//! Placement rejections are kept separate from construction and logging
//! failures so the boolean inventory API can be layered on top of them.

mod types;

pub use types::{InventoryError, PlacementError, Result};

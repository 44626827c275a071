//! Item shapes: fixed boolean masks plus the origin they were last placed at.
//!
//! Callers import shape types from here while the implementation lives in the
//! private `core` module.

mod core;

pub use core::InventoryShape;

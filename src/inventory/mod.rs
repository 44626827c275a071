//! The placement engine.
//!
//! [`GridInventory`] owns the placed items and answers fit queries; occupancy
//! is never stored, only derived on demand through [`OccupancyGrid`].

mod config;
mod core;
mod occupancy;

pub use config::{DEFAULT_LOG_TARGET, DEFAULT_METRICS_TARGET, InventoryConfig};
pub use core::GridInventory;
pub use occupancy::OccupancyGrid;

//! Grid inventory: placement and collision engine for shaped items.
//!
//! Items expose a boolean mask ([`InventoryShape`]) and are placed on a fixed
//! width x height grid without overlapping each other or leaving the grid.
//! Every mutation notifies subscribers synchronously so a UI layer can follow
//! along; rendering and input handling live outside this crate.

pub mod error;
pub mod events;
pub mod geometry;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod metrics;
pub mod shape;

pub use error::{InventoryError, PlacementError, Result};
pub use events::{Channel, InventoryEvents, Subscription};
pub use geometry::{Point, Size};
pub use inventory::{GridInventory, InventoryConfig, OccupancyGrid};
pub use item::{BasicItem, InventoryItem, ItemRef, same_item};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{InventoryMetrics, MetricSnapshot};
pub use shape::InventoryShape;

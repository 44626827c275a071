//! Synchronous change notifications.
//!
//! Each notification kind gets its own [`Channel`]; listeners run in the order
//! they subscribed, inside the mutating call that triggered them.

mod core;

pub use core::{Channel, InventoryEvents, Subscription};

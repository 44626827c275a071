use std::path::Path;

use crate::logging::{FileSink, Logger};

pub const DEFAULT_LOG_TARGET: &str = "grid_inventory::inventory";
pub const DEFAULT_METRICS_TARGET: &str = "grid_inventory::metrics";

/// Configuration knobs for an inventory.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Optional structured logger. Mutations are silent without one.
    pub logger: Option<Logger>,
    /// Target field used for mutation events.
    pub log_target: String,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            logger: None,
            log_target: DEFAULT_LOG_TARGET.to_string(),
            metrics_target: DEFAULT_METRICS_TARGET.to_string(),
        }
    }
}

impl InventoryConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }

    pub fn with_metrics_target(mut self, target: impl Into<String>) -> Self {
        self.metrics_target = target.into();
        self
    }

    /// Log to a JSON-lines file, truncated once it passes `max_bytes`
    /// (zero keeps it growing).
    pub fn with_log_file(self, path: impl AsRef<Path>, max_bytes: u64) -> crate::Result<Self> {
        let sink = FileSink::new(path, max_bytes)?;
        Ok(self.with_logger(Logger::new(sink)))
    }
}

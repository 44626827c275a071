use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters for inventory mutations.
#[derive(Debug, Default, Clone)]
pub struct InventoryMetrics {
    added: u64,
    rejected: u64,
    removed: u64,
    dropped: u64,
    evicted: u64,
    clears: u64,
    resizes: u64,
}

impl InventoryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_added(&mut self) {
        self.added = self.added.saturating_add(1);
    }

    pub fn record_rejected(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    pub fn record_removed(&mut self) {
        self.removed = self.removed.saturating_add(1);
    }

    pub fn record_dropped(&mut self, count: usize) {
        self.dropped = self.dropped.saturating_add(count as u64);
    }

    pub fn record_cleared(&mut self) {
        self.clears = self.clears.saturating_add(1);
    }

    /// Evicted items are also counted as dropped.
    pub fn record_resized(&mut self, evicted: usize) {
        self.resizes = self.resizes.saturating_add(1);
        if evicted > 0 {
            self.evicted = self.evicted.saturating_add(evicted as u64);
            self.record_dropped(evicted);
        }
    }

    pub fn snapshot(&self, items: usize) -> MetricSnapshot {
        MetricSnapshot {
            items: items as u64,
            added: self.added,
            rejected: self.rejected,
            removed: self.removed,
            dropped: self.dropped,
            evicted: self.evicted,
            clears: self.clears,
            resizes: self.resizes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub items: u64,
    pub added: u64,
    pub rejected: u64,
    pub removed: u64,
    pub dropped: u64,
    pub evicted: u64,
    pub clears: u64,
    pub resizes: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "inventory_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("items".to_string(), json!(self.items));
        map.insert("added".to_string(), json!(self.added));
        map.insert("rejected".to_string(), json!(self.rejected));
        map.insert("removed".to_string(), json!(self.removed));
        map.insert("dropped".to_string(), json!(self.dropped));
        map.insert("evicted".to_string(), json!(self.evicted));
        map.insert("clears".to_string(), json!(self.clears));
        map.insert("resizes".to_string(), json!(self.resizes));
        map
    }
}

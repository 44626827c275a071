use std::mem;
use std::rc::Rc;

use serde_json::Value;

use crate::error::PlacementError;
use crate::events::{InventoryEvents, Subscription};
use crate::geometry::{Point, Size};
use crate::item::{InventoryItem, ItemRef, same_item};
use crate::logging::{LogLevel, event_with_fields, json_kv, json_str};
use crate::metrics::InventoryMetrics;
use crate::shape::InventoryShape;

use super::config::InventoryConfig;
use super::occupancy::OccupancyGrid;

/// Fixed-size grid holding irregularly shaped items without overlap.
///
/// Items are shared handles compared by identity. Every mutation either
/// succeeds completely or leaves the inventory untouched, and notifies
/// subscribers synchronously before returning.
///
/// ```
/// use grid_inventory::{BasicItem, GridInventory, Point};
///
/// let mut inventory = GridInventory::new(8, 4);
/// let gem = BasicItem::filled("gem", 1, 1);
/// assert!(inventory.add_at(&gem, Point::ZERO));
/// assert!(!inventory.can_add_at(&BasicItem::filled("coin", 1, 1), Point::ZERO));
/// assert!(inventory.can_add_at(&BasicItem::filled("coin", 1, 1), Point::RIGHT));
/// ```
#[derive(Debug)]
pub struct GridInventory<I> {
    size: Size,
    items: Vec<ItemRef<I>>,
    events: InventoryEvents<I>,
    config: InventoryConfig,
    metrics: InventoryMetrics,
}

impl<I: InventoryItem> GridInventory<I> {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(width, height, InventoryConfig::default())
    }

    pub fn with_config(width: u16, height: u16, config: InventoryConfig) -> Self {
        Self {
            size: Size::new(width, height),
            items: Vec::new(),
            events: InventoryEvents::new(),
            config,
            metrics: InventoryMetrics::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.size.width
    }

    pub fn height(&self) -> u16 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Placed items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRef<I>> + '_ {
        self.items.iter()
    }

    /// Fresh snapshot of the placed items; changing it never touches the inventory.
    pub fn all_items(&self) -> Vec<ItemRef<I>> {
        self.items.clone()
    }

    pub fn contains(&self, item: &ItemRef<I>) -> bool {
        self.index_of(item).is_some()
    }

    /// Whether every cell is covered. Placed items never overlap, so the
    /// covered cell count alone answers this without building an overlay.
    pub fn is_full(&self) -> bool {
        let covered: usize = self
            .items
            .iter()
            .map(|item| item.shape().cell_count())
            .sum();
        covered >= self.size.area()
    }

    /// Overlay of every placed footprint, computed now.
    pub fn occupancy(&self) -> OccupancyGrid {
        OccupancyGrid::build(self.size, &self.items)
    }

    pub fn get_at_point(&self, point: Point) -> Option<ItemRef<I>> {
        if !self.size.contains(point) {
            return None;
        }
        self.items
            .iter()
            .find(|item| item.shape().covers_at(item.position(), point))
            .cloned()
    }

    /// First origin in row-major order where the item's shape fits, whether
    /// or not the item is already placed.
    pub fn find_space(&self, item: &ItemRef<I>) -> Option<Point> {
        let shape = item.shape();
        self.size
            .cells()
            .find(|origin| self.check_fit(shape, *origin).is_ok())
    }

    pub fn can_add(&self, item: &ItemRef<I>) -> bool {
        !self.contains(item) && self.find_space(item).is_some()
    }

    pub fn check_add_at(&self, item: &ItemRef<I>, origin: Point) -> Result<(), PlacementError> {
        if self.contains(item) {
            return Err(PlacementError::AlreadyContained);
        }
        self.check_fit(item.shape(), origin)
    }

    pub fn can_add_at(&self, item: &ItemRef<I>, origin: Point) -> bool {
        self.check_add_at(item, origin).is_ok()
    }

    /// Place the item at the first free origin and return it.
    pub fn try_add(&mut self, item: &ItemRef<I>) -> Result<Point, PlacementError> {
        let outcome = if self.contains(item) {
            Err(PlacementError::AlreadyContained)
        } else {
            self.find_space(item).ok_or(PlacementError::NoSpace)
        };

        match outcome {
            Ok(origin) => {
                self.place(item, origin);
                Ok(origin)
            }
            Err(reason) => {
                self.reject(reason);
                Err(reason)
            }
        }
    }

    pub fn add(&mut self, item: &ItemRef<I>) -> bool {
        self.try_add(item).is_ok()
    }

    pub fn try_add_at(&mut self, item: &ItemRef<I>, origin: Point) -> Result<(), PlacementError> {
        match self.check_add_at(item, origin) {
            Ok(()) => {
                self.place(item, origin);
                Ok(())
            }
            Err(reason) => {
                self.reject(reason);
                Err(reason)
            }
        }
    }

    pub fn add_at(&mut self, item: &ItemRef<I>, origin: Point) -> bool {
        self.try_add_at(item, origin).is_ok()
    }

    pub fn can_remove(&self, item: &ItemRef<I>) -> bool {
        self.contains(item)
    }

    pub fn remove(&mut self, item: &ItemRef<I>) -> bool {
        let Some(idx) = self.index_of(item) else {
            return false;
        };
        let removed = self.items.remove(idx);
        self.metrics.record_removed();
        self.log_item_event(LogLevel::Debug, "item_removed", &removed, []);
        self.events.item_removed.emit(&removed);
        true
    }

    /// Release an item. The drop notification fires even if the item was never
    /// placed; a placed item leaves without a removal notification.
    pub fn drop_item(&mut self, item: &ItemRef<I>) {
        let was_placed = match self.index_of(item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        };
        self.metrics.record_dropped(1);
        self.log_item_event(
            LogLevel::Debug,
            "item_dropped",
            item,
            [json_kv("was_placed", was_placed)],
        );
        self.events.item_dropped.emit(item);
    }

    /// Drop every placed item in insertion order.
    pub fn drop_all(&mut self) {
        let dropped = mem::take(&mut self.items);
        self.metrics.record_dropped(dropped.len());
        self.log_inventory_event(
            LogLevel::Debug,
            "items_dropped",
            [json_kv("count", dropped.len())],
        );
        for item in &dropped {
            self.events.item_dropped.emit(item);
        }
    }

    /// Empty the inventory with a single cleared notification.
    pub fn clear(&mut self) {
        let count = self.items.len();
        self.items.clear();
        self.metrics.record_cleared();
        self.log_inventory_event(LogLevel::Info, "cleared", [json_kv("count", count)]);
        self.events.cleared.notify();
    }

    /// Change the grid dimensions, then drop every item that no longer fits.
    ///
    /// Items that still fit keep their origin; evicted items receive a drop
    /// notification in insertion order, after the resize notification.
    pub fn resize(&mut self, width: u16, height: u16) {
        let bounds = Size::new(width, height);
        self.size = bounds;
        self.events.resized.notify();

        let (kept, evicted): (Vec<_>, Vec<_>) = mem::take(&mut self.items)
            .into_iter()
            .partition(|item| within_bounds(bounds, item.position(), item.shape().size()));
        self.items = kept;

        self.metrics.record_resized(evicted.len());
        self.log_inventory_event(
            LogLevel::Info,
            "resized",
            [
                json_kv("width", width),
                json_kv("height", height),
                json_kv("evicted", evicted.len()),
            ],
        );
        for item in &evicted {
            self.events.item_dropped.emit(item);
        }
    }

    pub fn events(&self) -> &InventoryEvents<I> {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut InventoryEvents<I> {
        &mut self.events
    }

    pub fn on_item_added<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&ItemRef<I>) + 'static,
    {
        self.events.item_added.subscribe(listener)
    }

    pub fn on_item_removed<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&ItemRef<I>) + 'static,
    {
        self.events.item_removed.subscribe(listener)
    }

    pub fn on_item_dropped<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&ItemRef<I>) + 'static,
    {
        self.events.item_dropped.subscribe(listener)
    }

    pub fn on_cleared<F>(&mut self, mut listener: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        self.events.cleared.subscribe(move |_| listener())
    }

    pub fn on_resized<F>(&mut self, mut listener: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        self.events.resized.subscribe(move |_| listener())
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.events.unsubscribe(subscription)
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InventoryConfig {
        &mut self.config
    }

    pub fn metrics(&self) -> &InventoryMetrics {
        &self.metrics
    }

    /// Log a metrics snapshot through the configured logger, if any.
    pub fn emit_metrics(&self) {
        let _ = self.try_emit_metrics();
    }

    /// Like [`emit_metrics`](Self::emit_metrics), but reports sink failures.
    pub fn try_emit_metrics(&self) -> crate::Result<()> {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = self
                .metrics
                .snapshot(self.items.len())
                .to_log_event(&self.config.metrics_target);
            logger.log_event(event)?;
        }
        Ok(())
    }

    fn index_of(&self, item: &ItemRef<I>) -> Option<usize> {
        self.items.iter().position(|placed| same_item(placed, item))
    }

    fn check_fit(&self, shape: &InventoryShape, origin: Point) -> Result<(), PlacementError> {
        if !within_bounds(self.size, origin, shape.size()) {
            return Err(PlacementError::OutOfBounds {
                origin,
                size: shape.size(),
            });
        }
        for placed in &self.items {
            if let Some(cell) = shape.collision_with(origin, placed.shape(), placed.position()) {
                return Err(PlacementError::Collision { cell });
            }
        }
        Ok(())
    }

    fn place(&mut self, item: &ItemRef<I>, origin: Point) {
        item.shape().set_position(origin);
        self.items.push(Rc::clone(item));
        self.metrics.record_added();
        self.log_item_event(
            LogLevel::Debug,
            "item_added",
            item,
            [json_kv("cells", item.shape().cell_count())],
        );
        self.events.item_added.emit(item);
    }

    fn reject(&mut self, reason: PlacementError) {
        self.metrics.record_rejected();
        self.log_inventory_event(
            LogLevel::Debug,
            "item_rejected",
            [json_str("reason", reason.to_string())],
        );
    }

    fn log_item_event<const N: usize>(
        &self,
        level: LogLevel,
        message: &str,
        item: &ItemRef<I>,
        extra: [(String, Value); N],
    ) {
        let origin = item.position();
        let fields = [
            json_kv("x", origin.x),
            json_kv("y", origin.y),
            json_kv("items", self.items.len()),
        ];
        self.log_inventory_event(level, message, fields.into_iter().chain(extra));
    }

    fn log_inventory_event<F>(&self, level: LogLevel, message: &str, fields: F)
    where
        F: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

/// Origin inside the grid and the shape's bounding box not past the far edges.
fn within_bounds(bounds: Size, origin: Point, extent: Size) -> bool {
    bounds.contains(origin) && bounds.encloses(origin, extent)
}

use std::rc::Rc;

use crate::geometry::Point;
use crate::shape::InventoryShape;

/// Shared handle to an item. Inventories compare handles by identity, so two
/// items with equal shapes are still distinct entries.
pub type ItemRef<I> = Rc<I>;

/// Anything that can be placed on an inventory grid.
pub trait InventoryItem {
    fn shape(&self) -> &InventoryShape;

    /// Origin the item was last placed at.
    fn position(&self) -> Point {
        self.shape().position()
    }
}

/// Identity comparison between two item handles.
pub fn same_item<I>(a: &ItemRef<I>, b: &ItemRef<I>) -> bool {
    Rc::ptr_eq(a, b)
}

/// Minimal named item, useful for tools and tests that do not carry their own
/// item type.
#[derive(Debug, Clone)]
pub struct BasicItem {
    name: String,
    shape: InventoryShape,
}

impl BasicItem {
    pub fn new(name: impl Into<String>, shape: InventoryShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// A solid `width` x `height` item wrapped in a fresh handle.
    pub fn filled(name: impl Into<String>, width: u16, height: u16) -> ItemRef<Self> {
        Rc::new(Self::new(name, InventoryShape::filled(width, height)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl InventoryItem for BasicItem {
    fn shape(&self) -> &InventoryShape {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_items_are_distinct_handles() {
        let a = BasicItem::filled("gem", 1, 1);
        let b = BasicItem::filled("gem", 1, 1);
        assert!(same_item(&a, &a.clone()));
        assert!(!same_item(&a, &b));
    }

    #[test]
    fn position_reads_through_shape() {
        let item = BasicItem::filled("sword", 1, 3);
        assert_eq!(item.name(), "sword");
        assert_eq!(item.position(), Point::ZERO);
        item.shape().set_position(Point::new(2, 0));
        assert_eq!(item.position(), Point::new(2, 0));
    }
}

use std::fmt;

use blake3::Hash;

use crate::geometry::{Point, Size};
use crate::item::{InventoryItem, ItemRef};

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Read-only overlay of every placed item's footprint.
///
/// Each cell holds the index of the covering item in insertion order.
/// Cells outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: Size,
    cells: Vec<Option<usize>>,
}

impl OccupancyGrid {
    pub(crate) fn build<'a, I, It>(size: Size, items: It) -> Self
    where
        I: InventoryItem + 'a,
        It: IntoIterator<Item = &'a ItemRef<I>>,
    {
        let mut cells = vec![None; size.area()];
        for (index, item) in items.into_iter().enumerate() {
            let shape = item.shape();
            for cell in shape.footprint_at(shape.position()) {
                if let Some(idx) = Self::index_of(size, cell) {
                    // first writer wins if footprints ever overlap
                    cells[idx].get_or_insert(index);
                }
            }
        }
        Self { size, cells }
    }

    fn index_of(size: Size, point: Point) -> Option<usize> {
        size.contains(point)
            .then(|| point.x as usize + point.y as usize * usize::from(size.width))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Insertion index of the item covering `point`.
    pub fn item_index_at(&self, point: Point) -> Option<usize> {
        Self::index_of(self.size, point).and_then(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, point: Point) -> bool {
        self.item_index_at(point).is_some()
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn free_cells(&self) -> usize {
        self.cells.len() - self.occupied_cells()
    }

    /// True when no cell is free. A zero-area grid is trivially saturated.
    pub fn is_saturated(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Hash of dimensions and per-cell ownership. Two grids with the same
    /// digest render identically.
    pub fn digest(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.size.width.to_le_bytes());
        hasher.update(&self.size.height.to_le_bytes());
        for cell in &self.cells {
            let tag = cell.map(|index| index as u64 + 1).unwrap_or(0);
            hasher.update(&tag.to_le_bytes());
        }
        hasher.finalize()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.size.width).max(1);
        for (row_idx, row) in self.cells.chunks(width).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let glyph = match cell {
                    Some(index) => GLYPHS[index % GLYPHS.len()] as char,
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

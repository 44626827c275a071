use std::cell::Cell;

use crate::error::{InventoryError, Result};
use crate::geometry::{Point, Size};

/// Boolean occupancy mask over a local grid, plus the absolute origin the
/// owning item currently sits at.
///
/// The mask is stored row by row in a flat buffer indexed `x + y * width` and
/// never changes after construction. The origin is interior-mutable so an
/// inventory can stamp it onto a shared item handle when placing it.
///
/// Equality compares the size and mask only; the origin is ignored.
#[derive(Debug, Clone)]
pub struct InventoryShape {
    size: Size,
    mask: Vec<bool>,
    position: Cell<Point>,
}

impl InventoryShape {
    /// Build a shape from a row-major mask.
    pub fn new(width: u16, height: u16, mask: Vec<bool>) -> Result<Self> {
        let size = Size::new(width, height);
        if mask.len() != size.area() {
            return Err(InventoryError::MaskSizeMismatch {
                expected: size.area(),
                actual: mask.len(),
            });
        }
        Ok(Self {
            size,
            mask,
            position: Cell::new(Point::ZERO),
        })
    }

    /// A solid rectangle.
    pub fn filled(width: u16, height: u16) -> Self {
        let size = Size::new(width, height);
        Self {
            size,
            mask: vec![true; size.area()],
            position: Cell::new(Point::ZERO),
        }
    }

    /// Parse a shape drawn as text, one string per row.
    ///
    /// `#`, `X` and `x` mark filled cells; `.` and spaces mark holes.
    ///
    /// ```
    /// use grid_inventory::InventoryShape;
    ///
    /// let shape = InventoryShape::from_rows(&["##.", ".##"])?;
    /// assert_eq!(shape.cell_count(), 4);
    /// # Ok::<(), grid_inventory::InventoryError>(())
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let grid = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(parse_glyph)
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_grid(&grid)
    }

    /// Build a shape from nested rows, `rows[y][x]`.
    pub fn from_grid(rows: &[Vec<bool>]) -> Result<Self> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(InventoryError::RaggedRows {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
        }

        let width = u16::try_from(expected).map_err(|_| InventoryError::ShapeTooLarge(expected))?;
        let height =
            u16::try_from(rows.len()).map_err(|_| InventoryError::ShapeTooLarge(rows.len()))?;
        Self::new(width, height, rows.concat())
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

    /// Origin of the local (0, 0) cell on the inventory grid.
    pub fn position(&self) -> Point {
        self.position.get()
    }

    pub(crate) fn set_position(&self, position: Point) {
        self.position.set(position);
    }

    /// Whether the local cell is part of the shape. Cells outside the mask are not.
    pub fn is_filled(&self, local: Point) -> bool {
        if !self.size.contains(local) {
            return false;
        }
        let idx = local.x as usize + local.y as usize * usize::from(self.size.width);
        self.mask[idx]
    }

    /// Filled local cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.size.cells().filter(|cell| self.is_filled(*cell))
    }

    pub fn cell_count(&self) -> usize {
        self.mask.iter().filter(|filled| **filled).count()
    }

    /// Absolute cells covered when the shape is anchored at `origin`.
    pub fn footprint_at(&self, origin: Point) -> impl Iterator<Item = Point> + '_ {
        self.filled_cells().map(move |cell| cell.offset(origin))
    }

    /// Whether the shape anchored at `origin` covers the absolute `cell`.
    pub fn covers_at(&self, origin: Point, cell: Point) -> bool {
        let local = Point::new(
            i64_to_i32(i64::from(cell.x) - i64::from(origin.x)),
            i64_to_i32(i64::from(cell.y) - i64::from(origin.y)),
        );
        self.is_filled(local)
    }

    /// First absolute cell shared by this shape at `origin` and `other` at
    /// `other_origin`, if any.
    pub fn collision_with(
        &self,
        origin: Point,
        other: &InventoryShape,
        other_origin: Point,
    ) -> Option<Point> {
        self.footprint_at(origin)
            .find(|cell| other.covers_at(other_origin, *cell))
    }
}

impl PartialEq for InventoryShape {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.mask == other.mask
    }
}

impl Eq for InventoryShape {}

fn parse_glyph(glyph: char) -> Result<bool> {
    match glyph {
        '#' | 'X' | 'x' => Ok(true),
        '.' | ' ' => Ok(false),
        other => Err(InventoryError::InvalidGlyph(other)),
    }
}

fn i64_to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

use std::fmt;

/// Signed cell coordinate on an inventory grid.
///
/// Coordinates are signed so that callers can ask about cells left of or
/// above the grid; those requests simply fail bounds checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);
    pub const ONE: Point = Point::new(1, 1);
    pub const RIGHT: Point = Point::new(1, 0);
    pub const UP: Point = Point::new(0, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by another, saturating at the `i32` limits.
    pub fn offset(self, other: Point) -> Point {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer size measured in grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Whether `point` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < i32::from(self.width)
            && point.y < i32::from(self.height)
    }

    /// Whether a box of `extent` anchored at `origin` stays inside these bounds.
    pub fn encloses(&self, origin: Point, extent: Size) -> bool {
        let right = i64::from(origin.x) + i64::from(extent.width);
        let bottom = i64::from(origin.y) + i64::from(extent.height);
        origin.x >= 0
            && origin.y >= 0
            && right <= i64::from(self.width)
            && bottom <= i64::from(self.height)
    }

    /// Row-major iterator over every cell, `y` outer and `x` inner.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (i32::from(self.width), i32::from(self.height));
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

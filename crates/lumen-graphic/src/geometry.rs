//! Integer geometry used by the painter.
//!
//! All coordinates are in surface pixels with the origin at the top-left
//! corner and y growing downwards.

use std::ops::{Add, AddAssign, Sub};

/// A pixel position, or a displacement between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle.
///
/// Covers the pixels `x..x + width` by `y..y + height`. A rectangle with a
/// non-positive width or height covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: i32,
    /// Vertical position of the top-left corner.
    pub y: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size anchored at the origin.
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// A rectangle from a position and a size expressed as a point.
    #[must_use]
    pub const fn from_parts(position: Point, size: Point) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height as a point.
    #[must_use]
    pub const fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// First column past the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `point` is one of the covered pixels.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// The intersection of two rectangles.
    ///
    /// Disjoint rectangles produce an empty rectangle whose size is clamped
    /// to zero.
    #[must_use]
    pub fn clip(&self, other: Self) -> Self {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        Self::new(left, top, (right - left).max(0), (bottom - top).max(0))
    }

    /// The same rectangle moved by `offset`.
    #[must_use]
    pub fn offset(&self, offset: Point) -> Self {
        Self::from_parts(self.position() + offset, self.size())
    }

    /// Every covered pixel, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Self {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height.max(0)).flat_map(move |py| (x..x + width.max(0)).map(move |px| Point::new(px, py)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3, 4);
        let b = Point::new(1, -2);
        assert_eq!(a + b, Point::new(4, 2));
        assert_eq!(a - b, Point::new(2, 6));

        let mut c = a;
        c += b;
        assert_eq!(c, Point::new(4, 2));
    }

    #[test]
    fn test_rect_emptiness() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, -1).is_empty());
        assert!(!Rect::new(-3, -3, 1, 1).is_empty());
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(r.contains(Point::new(2, 2)));
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 4)));
        assert!(!r.contains(Point::new(4, 5)));
        assert!(!r.contains(Point::new(1, 2)));
    }

    #[test]
    fn test_rect_clip_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 10, 10);
        assert_eq!(a.clip(b), Rect::new(5, 0, 5, 5));
        assert_eq!(b.clip(a), a.clip(b));
    }

    #[test]
    fn test_rect_clip_disjoint_is_empty() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(10, 10, 4, 4);
        let clipped = a.clip(b);
        assert!(clipped.is_empty());
        assert_eq!(clipped.width, 0);
        assert_eq!(clipped.height, 0);
    }

    #[test]
    fn test_rect_points_row_major() {
        let points: Vec<Point> = Rect::new(1, 1, 2, 2).points().collect();
        assert_eq!(
            points,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
        assert_eq!(Rect::new(0, 0, -2, 3).points().count(), 0);
    }
}

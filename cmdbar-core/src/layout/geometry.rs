// SPDX-License-Identifier: LGPL-3.0-only

//! Integer screen-space geometry.
//!
//! Screen coordinates are whole device pixels, so these types use `i32`
//! and share nalgebra's `Point2`/`Vector2` with the rest of the toolkit.

use nalgebra::{Point2, Vector2};

/// An axis-aligned rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenRect {
    /// Top-left corner.
    pub origin: Point2<i32>,
    /// Width and height.
    pub size: Vector2<i32>,
}

impl ScreenRect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Create a rectangle from an origin point and a size vector.
    pub fn from_parts(origin: Point2<i32>, size: Vector2<i32>) -> Self {
        Self { origin, size }
    }

    /// Left edge.
    pub fn x(&self) -> i32 {
        self.origin.x
    }

    /// Top edge.
    pub fn y(&self) -> i32 {
        self.origin.y
    }

    /// Width.
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Height.
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.x
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.y
    }

    /// Check whether a point lies inside this rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges exclusive,
    /// so adjacent monitors never both claim a point on their shared edge.
    pub fn contains(&self, point: Point2<i32>) -> bool {
        self.size.x > 0
            && self.size.y > 0
            && point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x < self.right()
            && point.y < self.bottom()
    }

    /// Shift the rectangle by an offset.
    pub fn translate(&self, offset: Vector2<i32>) -> Self {
        Self {
            origin: self.origin + offset,
            size: self.size,
        }
    }
}

/// Space reserved on each edge of a display by system UI such as taskbars or panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    /// Reserved pixels at the top edge.
    pub top: i32,
    /// Reserved pixels at the left edge.
    pub left: i32,
    /// Reserved pixels at the bottom edge.
    pub bottom: i32,
    /// Reserved pixels at the right edge.
    pub right: i32,
}

impl Insets {
    /// Create insets from the four edge values.
    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Total horizontal reservation.
    pub fn horizontal(&self) -> i32 {
        (self.left + self.right).abs()
    }

    /// Total vertical reservation.
    pub fn vertical(&self) -> i32 {
        (self.top + self.bottom).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = ScreenRect::new(0, 0, 1920, 1080);
        assert!(rect.contains(Point2::new(0, 0)));
        assert!(rect.contains(Point2::new(1919, 1079)));
        assert!(!rect.contains(Point2::new(1920, 10)));
        assert!(!rect.contains(Point2::new(10, 1080)));
        assert!(!rect.contains(Point2::new(-1, 10)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = ScreenRect::new(5, 5, 0, 10);
        assert!(!rect.contains(Point2::new(5, 5)));
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = ScreenRect::new(10, 10, 100, 30).translate(Vector2::new(-20, 30));
        assert_eq!(rect, ScreenRect::new(-10, 40, 100, 30));
    }

    #[test]
    fn test_insets_totals_use_absolute_sums() {
        let insets = Insets::new(0, 0, 40, 0);
        assert_eq!(insets.vertical(), 40);
        assert_eq!(insets.horizontal(), 0);
        assert_eq!(Insets::new(-10, 0, 0, 0).vertical(), 10);
    }
}

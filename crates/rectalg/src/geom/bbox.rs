//! Normalized corner pair shared by segments and rectangles.

use nalgebra::Vector2;

use super::coords::Coords;
use super::point::{bottom_right_of, top_left_of, Point};

/// Axis-aligned box given by two opposite corners.
///
/// Invariants:
/// - `top_left.x <= bottom_right.x` and `top_left.y <= bottom_right.y`
///   (vacuously broken only by NaN input, which is kept as is).
/// - Zero width and/or height is valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    top_left: Point,
    bottom_right: Point,
}

impl BoundingBox {
    /// Build from two opposite corners `(x0, y0)`, `(x1, y1)` given in any order.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            top_left: top_left_of(x0, y0, x1, y1),
            bottom_right: bottom_right_of(x0, y0, x1, y1),
        }
    }

    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom_right.y)
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        Point::new(self.bottom_right.x, self.top_left.y)
    }

    /// `bottom_right - top_left`; both components are `>= 0` for finite input.
    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.bottom_right - self.top_left
    }

    /// Plain-data export `{x0, y0, x1, y1}` of the normalized corners.
    #[inline]
    pub fn to_object(&self) -> Coords {
        Coords {
            x0: self.top_left.x,
            y0: self.top_left.y,
            x1: self.bottom_right.x,
            y1: self.bottom_right.y,
        }
    }
}

impl From<Coords> for BoundingBox {
    fn from(c: Coords) -> Self {
        Self::new(c.x0, c.y0, c.x1, c.y1)
    }
}

//! Axis-aligned line segments.
//!
//! A `Segment` is a `BoundingBox` with zero width (vertical) or zero height
//! (horizontal). Slanted segments can be constructed but are ignored by
//! `overlaps` and `contains_vertex`.

use super::bbox::BoundingBox;
use super::coords::Coords;
use super::point::{nan_max, nan_min, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    bounds: BoundingBox,
}

impl Segment {
    /// Build from two endpoints `(x0, y0)`, `(x1, y1)` given in any order.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            bounds: BoundingBox::new(x0, y0, x1, y1),
        }
    }

    #[inline]
    pub fn from_vertices(v0: Point, v1: Point) -> Self {
        Self {
            bounds: BoundingBox::from_corners(v0, v1),
        }
    }

    /// Endpoint with the smaller coordinates.
    #[inline]
    pub fn start(&self) -> Point {
        self.bounds.top_left()
    }

    /// Endpoint with the larger coordinates.
    #[inline]
    pub fn end(&self) -> Point {
        self.bounds.bottom_right()
    }

    #[inline]
    pub fn horizontal(&self) -> bool {
        self.start().y == self.end().y
    }

    #[inline]
    pub fn vertical(&self) -> bool {
        self.start().x == self.end().x
    }

    /// Collinear overlap of two axis-aligned segments.
    ///
    /// Only segments on the same line (same y for horizontals, same x for
    /// verticals) can overlap, and the overlap must have strictly positive
    /// length: segments touching in a single endpoint return `None`.
    /// A point-like segment is tried as horizontal first, then as vertical.
    pub fn overlaps(&self, other: &Segment) -> Option<Segment> {
        let (a0, a1) = (self.start(), self.end());
        let (b0, b1) = (other.start(), other.end());

        if self.horizontal() && other.horizontal() && a0.y == b0.y {
            let left = nan_max(a0.x, b0.x);
            let right = nan_min(a1.x, b1.x);
            if right > left && left >= a0.x && right <= a1.x {
                return Some(Segment::new(left, a0.y, right, a1.y));
            }
        }

        if self.vertical() && other.vertical() && a0.x == b0.x {
            let top = nan_max(a0.y, b0.y);
            let bottom = nan_min(a1.y, b1.y);
            if bottom > top && top >= a0.y && bottom <= a1.y {
                return Some(Segment::new(a0.x, top, a1.x, bottom));
            }
        }

        None
    }

    /// Whether `p` lies on this segment, endpoints included.
    pub fn contains_vertex(&self, p: &Point) -> bool {
        let (a0, a1) = (self.start(), self.end());
        if self.vertical() {
            return p.x == a0.x && p.y >= a0.y && p.y <= a1.y;
        }
        self.horizontal() && p.y == a0.y && p.x >= a0.x && p.x <= a1.x
    }

    #[inline]
    pub fn to_object(&self) -> Coords {
        self.bounds.to_object()
    }
}

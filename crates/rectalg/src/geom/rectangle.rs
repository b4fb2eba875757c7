//! Rectangles and the pairwise relation algebra.
//!
//! All relations are computed from the two normalized corner pairs; partial
//! answers are `Option`/`Vec`, never sentinels.

use nalgebra::Vector2;

use super::bbox::BoundingBox;
use super::coords::Coords;
use super::point::{nan_max, nan_min, Point};
use super::segment::Segment;
use super::types::RelationCfg;

/// Axis-aligned rectangle; may be degenerate (zero width and/or height).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    bounds: BoundingBox,
}

impl Rectangle {
    /// Build from two opposite corners `(x0, y0)`, `(x1, y1)` given in any order.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            bounds: BoundingBox::new(x0, y0, x1, y1),
        }
    }

    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            bounds: BoundingBox::from_corners(a, b),
        }
    }

    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.bounds.top_left()
    }
    #[inline]
    pub fn top_right(&self) -> Point {
        self.bounds.top_right()
    }
    #[inline]
    pub fn bottom_left(&self) -> Point {
        self.bounds.bottom_left()
    }
    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bounds.bottom_right()
    }

    #[inline]
    pub fn extent(&self) -> Vector2<f64> {
        self.bounds.extent()
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.extent().x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.extent().y
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn top(&self) -> Segment {
        Segment::from_vertices(self.top_left(), self.top_right())
    }
    #[inline]
    pub fn left(&self) -> Segment {
        Segment::from_vertices(self.top_left(), self.bottom_left())
    }
    #[inline]
    pub fn bottom(&self) -> Segment {
        Segment::from_vertices(self.bottom_left(), self.bottom_right())
    }
    #[inline]
    pub fn right(&self) -> Segment {
        Segment::from_vertices(self.top_right(), self.bottom_right())
    }

    /// Corners of the max/min box, unordered: `(max left, max top, min right, min bottom)`.
    #[inline]
    fn overlap_box(&self, other: &Rectangle) -> (f64, f64, f64, f64) {
        let (a0, a1) = (self.top_left(), self.bottom_right());
        let (b0, b1) = (other.top_left(), other.bottom_right());
        (
            nan_max(a0.x, b0.x),
            nan_max(a0.y, b0.y),
            nan_min(a1.x, b1.x),
            nan_min(a1.y, b1.y),
        )
    }

    /// Shared region of two rectangles.
    ///
    /// Rectangles that only touch along an edge or in a corner intersect in a
    /// degenerate (zero width and/or height) rectangle; `None` means there is
    /// a strict gap on at least one axis.
    pub fn intersects(&self, other: &Rectangle) -> Option<Rectangle> {
        let (x0, y0, x1, y1) = self.overlap_box(other);
        if x1 < x0 || y1 < y0 {
            None
        } else {
            Some(Rectangle::new(x0, y0, x1, y1))
        }
    }

    /// Boundary pieces shared by both rectangles.
    ///
    /// Left/right edges are matched against left/right edges, then top/bottom
    /// against top/bottom, each as a 2x2 grid (`self` edge outer, `other` edge
    /// inner). Every positive-length overlap is returned in that order;
    /// duplicates are kept. Corner-only contact yields nothing.
    pub fn adjacent(&self, other: &Rectangle) -> Vec<Segment> {
        let pairings = [
            ([self.left(), self.right()], [other.left(), other.right()]),
            ([self.top(), self.bottom()], [other.top(), other.bottom()]),
        ];
        let mut out = Vec::new();
        for (mine, theirs) in &pairings {
            for m in mine {
                for t in theirs {
                    if let Some(shared) = m.overlaps(t) {
                        out.push(shared);
                    }
                }
            }
        }
        tracing::trace!(count = out.len(), "adjacent segments");
        out
    }

    /// Corners of the intersection that lie on the boundary of both rectangles.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right. Empty when the
    /// rectangles do not intersect.
    pub fn intersecting_vertices(&self, other: &Rectangle) -> Vec<Point> {
        self.intersects(other).map_or_else(Vec::new, |shared| {
            [
                shared.top_left(),
                shared.top_right(),
                shared.bottom_left(),
                shared.bottom_right(),
            ]
            .into_iter()
            .filter(|v| self.on_boundary(v) && other.on_boundary(v))
            .collect()
        })
    }

    /// Max/min box of the two rectangles, returned unconditionally.
    ///
    /// For overlapping input this equals `intersects`. For disjoint input the
    /// raw corners are out of order and get re-normalized, so the result spans
    /// the gap between the two rectangles.
    pub fn unions(&self, other: &Rectangle) -> Rectangle {
        let (x0, y0, x1, y1) = self.overlap_box(other);
        Rectangle::new(x0, y0, x1, y1)
    }

    /// Fraction of `self`'s area covered by the intersection with `other`.
    ///
    /// `0.0` without intersection. A zero-area `self` that touches `other`
    /// yields NaN (0/0).
    pub fn ratio_containing(&self, other: &Rectangle) -> f64 {
        self.intersects(other)
            .map_or(0.0, |shared| shared.area() / self.area())
    }

    /// `contains_at` with the default threshold (`self` fully shared).
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.contains_at(other, RelationCfg::default().contain_threshold)
    }

    /// Whether `self.ratio_containing(other) >= threshold` and that ratio is
    /// strictly greater than `other.ratio_containing(self)`.
    ///
    /// The ratio is the fraction of `self`'s own area shared with `other`, so
    /// with the default threshold this holds when `self` lies inside a larger
    /// `other`. Identical rectangles never satisfy the strict comparison.
    pub fn contains_at(&self, other: &Rectangle, threshold: f64) -> bool {
        let containing = self.ratio_containing(other);
        containing >= threshold && containing > other.ratio_containing(self)
    }

    /// Whether `v` lies on one of the four edges (inclusive).
    fn on_boundary(&self, v: &Point) -> bool {
        self.top().contains_vertex(v)
            || self.left().contains_vertex(v)
            || self.bottom().contains_vertex(v)
            || self.right().contains_vertex(v)
    }

    #[inline]
    pub fn to_object(&self) -> Coords {
        self.bounds.to_object()
    }
}

impl From<BoundingBox> for Rectangle {
    fn from(bounds: BoundingBox) -> Self {
        Self { bounds }
    }
}

impl From<Coords> for Rectangle {
    fn from(c: Coords) -> Self {
        Self::new(c.x0, c.y0, c.x1, c.y1)
    }
}

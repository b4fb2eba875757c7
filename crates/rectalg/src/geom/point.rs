//! Points and corner selection.
//!
//! The four `*_of` constructors take two arbitrary opposite corners
//! `(x0, y0)`, `(x1, y1)` and return one canonical corner of the box they
//! span. They are the only place where corner ordering is decided.

use nalgebra::Point2;

/// An immutable 2D coordinate. Equality is structural.
pub type Point = Point2<f64>;

/// `min` that propagates NaN instead of discarding it.
#[inline]
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// `max` that propagates NaN instead of discarding it.
#[inline]
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[inline]
pub fn top_left_of(x0: f64, y0: f64, x1: f64, y1: f64) -> Point {
    Point::new(nan_min(x0, x1), nan_min(y0, y1))
}

#[inline]
pub fn top_right_of(x0: f64, y0: f64, x1: f64, y1: f64) -> Point {
    Point::new(nan_max(x0, x1), nan_min(y0, y1))
}

#[inline]
pub fn bottom_left_of(x0: f64, y0: f64, x1: f64, y1: f64) -> Point {
    Point::new(nan_min(x0, x1), nan_max(y0, y1))
}

#[inline]
pub fn bottom_right_of(x0: f64, y0: f64, x1: f64, y1: f64) -> Point {
    Point::new(nan_max(x0, x1), nan_max(y0, y1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_swapped_inputs() {
        // (3, 0) and (1, 2) span the same box as (1, 0) and (3, 2)
        assert_eq!(top_left_of(3.0, 0.0, 1.0, 2.0), Point::new(1.0, 0.0));
        assert_eq!(top_right_of(3.0, 0.0, 1.0, 2.0), Point::new(3.0, 0.0));
        assert_eq!(bottom_left_of(3.0, 0.0, 1.0, 2.0), Point::new(1.0, 2.0));
        assert_eq!(bottom_right_of(3.0, 0.0, 1.0, 2.0), Point::new(3.0, 2.0));
    }

    #[test]
    fn nan_is_not_swallowed() {
        let p = top_left_of(f64::NAN, 0.0, 1.0, 1.0);
        assert!(p.x.is_nan());
        assert_eq!(p.y, 0.0);
        assert!(nan_max(1.0, f64::NAN).is_nan());
    }
}

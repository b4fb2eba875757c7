//! Proptest strategies for rectangles and rectangle pairs.
//!
//! Pairs are built constructively (no rejection filtering) so every case
//! satisfies its predicate exactly, not only with high probability.

use proptest::prelude::*;

use super::Rectangle;

/// Coordinate range used everywhere below.
pub(crate) fn coord() -> impl Strategy<Value = f64> {
    -100.0..1.0f64
}

fn size() -> impl Strategy<Value = f64> {
    0.01..10.0f64
}

/// Four arbitrary coordinates in any order; may be degenerate.
pub(crate) fn rectangle() -> impl Strategy<Value = Rectangle> {
    (coord(), coord(), coord(), coord()).prop_map(|(x0, y0, x1, y1)| Rectangle::new(x0, y0, x1, y1))
}

/// Rectangle with strictly positive width and height.
pub(crate) fn proper_rectangle() -> impl Strategy<Value = Rectangle> {
    (coord(), coord(), size(), size()).prop_map(|(x, y, w, h)| Rectangle::new(x, y, x + w, y + h))
}

/// Two rectangles with a strict gap along x or y, in either order.
pub(crate) fn separated() -> impl Strategy<Value = (Rectangle, Rectangle)> {
    (
        proper_rectangle(),
        size(),
        (size(), size()),
        -10.0..10.0f64,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(a, gap, (w, h), offset, along_x, swap)| {
            let b = if along_x {
                let left = a.bottom_right().x + gap;
                let top = a.top_left().y + offset;
                Rectangle::new(left, top, left + w, top + h)
            } else {
                let left = a.top_left().x + offset;
                let top = a.bottom_right().y + gap;
                Rectangle::new(left, top, left + w, top + h)
            };
            if swap {
                (b, a)
            } else {
                (a, b)
            }
        })
}

/// Two rectangles sharing a region of positive area.
///
/// The second rectangle has one corner strictly inside the first and
/// extends in an arbitrary diagonal direction from there.
pub(crate) fn overlapping() -> impl Strategy<Value = (Rectangle, Rectangle)> {
    (
        proper_rectangle(),
        (0.05..0.95f64, 0.05..0.95f64),
        (size(), size()),
        (any::<bool>(), any::<bool>()),
    )
        .prop_map(|(a, (fx, fy), (dx, dy), (flip_x, flip_y))| {
            let p = a.top_left() + a.extent().component_mul(&nalgebra::Vector2::new(fx, fy));
            let dx = if flip_x { -dx } else { dx };
            let dy = if flip_y { -dy } else { dy };
            (a, Rectangle::new(p.x, p.y, p.x + dx, p.y + dy))
        })
}

/// `(outer, inner)` with `inner` strictly inside `outer`.
pub(crate) fn nested() -> impl Strategy<Value = (Rectangle, Rectangle)> {
    (
        proper_rectangle(),
        (0.05..0.45f64, 0.05..0.45f64),
        (0.55..0.95f64, 0.55..0.95f64),
    )
        .prop_map(|(outer, (fx0, fy0), (fx1, fy1))| {
            let tl = outer.top_left();
            let e = outer.extent();
            let inner = Rectangle::new(
                tl.x + fx0 * e.x,
                tl.y + fy0 * e.y,
                tl.x + fx1 * e.x,
                tl.y + fy1 * e.y,
            );
            (outer, inner)
        })
}

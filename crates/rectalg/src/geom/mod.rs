//! Axis-aligned 2D geometry (exact comparisons only).
//!
//! Purpose
//! - Answer pairwise questions about two rectangles: intersection, shared
//!   edges, shared corners, coverage ratio, containment.
//! - Keep every type a small `Copy` value; operations never mutate operands.
//!
//! Conventions
//! - y grows downwards: `top_left` holds the minimum x and y, `bottom_right`
//!   the maximum x and y.
//! - Comparisons are exact (`==`, `<`), no epsilon. Callers that need
//!   tolerance should snap coordinates before constructing shapes.
//! - NaN and infinities are accepted and flow through arithmetic; predicates
//!   involving NaN are simply false.

mod bbox;
mod coords;
pub mod point;
pub mod rand;
mod rectangle;
mod segment;
mod types;

pub use bbox::BoundingBox;
pub use coords::{Coords, ParseCoordsError};
pub use point::{bottom_left_of, bottom_right_of, top_left_of, top_right_of, Point};
pub use rectangle::Rectangle;
pub use segment::Segment;
pub use types::RelationCfg;

#[cfg(test)]
pub(crate) mod strategies;
#[cfg(test)]
mod tests;

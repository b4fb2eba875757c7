//! Pairwise relations between axis-aligned rectangles.
//!
//! Everything here is a pure value computation over `f64` coordinates:
//! no validation, no shared state, no I/O. "No relation" is always an
//! explicit `None` or an empty `Vec`.
//!
//! Layout
//! - `geom`: points, bounding boxes, segments, rectangles and the relation
//!   algebra built on top of them.
//! - `geom::rand`: deterministic rectangle sampler (replay tokens).

pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{BoundingBox, Coords, Point, Rectangle, RelationCfg, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_pair, draw_rectangle, PairKind, RectCfg, ReplayToken};
    pub use crate::geom::{
        bottom_left_of, bottom_right_of, top_left_of, top_right_of, BoundingBox, Coords,
        ParseCoordsError, Point, Rectangle, RelationCfg, Segment,
    };
    pub use nalgebra::Vector2 as Vec2;
}

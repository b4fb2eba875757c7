//! Random rectangles and rectangle pairs (replay tokens).
//!
//! Purpose
//! - Deterministic, indexable draws for benchmarks, smoke tests and the CLI.
//!   A `(seed, index)` token always produces the same rectangle(s).
//!
//! Model
//! - Top-left corners are uniform in `[min, max]²`, side lengths uniform in
//!   `[min_size, max_size]`.
//! - Pairs are built constructively per `PairKind` so the requested relation
//!   holds exactly (no rejection sampling).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::rectangle::Rectangle;

/// Sampling window and side-length bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectCfg {
    /// Lower bound for top-left coordinates.
    pub min: f64,
    /// Upper bound for top-left coordinates. Rectangles may extend past it.
    pub max: f64,
    /// Smallest side length. Clamped to `>= 1e-9`.
    pub min_size: f64,
    /// Largest side length. Raised to `min_size` if smaller.
    pub max_size: f64,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
            min_size: 0.01,
            max_size: 1.0,
        }
    }
}

impl RectCfg {
    fn sanitized(&self) -> RectCfg {
        let min_size = self.min_size.max(1e-9);
        RectCfg {
            min: self.min.min(self.max),
            max: self.max.max(self.min),
            min_size,
            max_size: self.max_size.max(min_size),
        }
    }
}

/// Relation the two rectangles of a pair are guaranteed to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairKind {
    /// Independent draws; any relation.
    Any,
    /// Strict gap along x or y.
    Separated,
    /// Shared region of positive area.
    Overlapping,
    /// Second rectangle strictly inside the first.
    Nested,
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one rectangle with positive width and height.
pub fn draw_rectangle(cfg: RectCfg, tok: ReplayToken) -> Rectangle {
    let mut rng = tok.to_std_rng();
    sample_rectangle(&cfg.sanitized(), &mut rng)
}

/// Draw a pair of rectangles related as requested by `kind`.
pub fn draw_pair(cfg: RectCfg, kind: PairKind, tok: ReplayToken) -> (Rectangle, Rectangle) {
    let cfg = cfg.sanitized();
    let mut rng = tok.to_std_rng();
    let a = sample_rectangle(&cfg, &mut rng);
    let b = match kind {
        PairKind::Any => sample_rectangle(&cfg, &mut rng),
        PairKind::Separated => separated_from(&a, &cfg, &mut rng),
        PairKind::Overlapping => overlapping_with(&a, &cfg, &mut rng),
        PairKind::Nested => nested_in(&a, &mut rng),
    };
    tracing::trace!(seed = tok.seed, index = tok.index, ?kind, "draw_pair");
    (a, b)
}

fn side<R: Rng>(cfg: &RectCfg, rng: &mut R) -> f64 {
    rng.gen_range(cfg.min_size..=cfg.max_size)
}

fn sample_rectangle<R: Rng>(cfg: &RectCfg, rng: &mut R) -> Rectangle {
    let x = rng.gen_range(cfg.min..=cfg.max);
    let y = rng.gen_range(cfg.min..=cfg.max);
    let (w, h) = (side(cfg, rng), side(cfg, rng));
    Rectangle::new(x, y, x + w, y + h)
}

fn separated_from<R: Rng>(a: &Rectangle, cfg: &RectCfg, rng: &mut R) -> Rectangle {
    let gap = side(cfg, rng);
    let (w, h) = (side(cfg, rng), side(cfg, rng));
    let offset = rng.gen_range(-cfg.max_size..=cfg.max_size);
    let (left, top) = if rng.gen_bool(0.5) {
        (a.bottom_right().x + gap, a.top_left().y + offset)
    } else {
        (a.top_left().x + offset, a.bottom_right().y + gap)
    };
    let b = Rectangle::new(left, top, left + w, top + h);
    // mirror onto the other side half of the time
    if rng.gen_bool(0.5) {
        let c = a.top_left() + a.bottom_right().coords;
        Rectangle::new(
            c.x - b.bottom_right().x,
            c.y - b.bottom_right().y,
            c.x - b.top_left().x,
            c.y - b.top_left().y,
        )
    } else {
        b
    }
}

fn overlapping_with<R: Rng>(a: &Rectangle, cfg: &RectCfg, rng: &mut R) -> Rectangle {
    let f = Vector2::new(rng.gen_range(0.05..0.95), rng.gen_range(0.05..0.95));
    let p = a.top_left() + a.extent().component_mul(&f);
    let sign = |flip: bool| if flip { -1.0 } else { 1.0 };
    let dx = side(cfg, rng) * sign(rng.gen_bool(0.5));
    let dy = side(cfg, rng) * sign(rng.gen_bool(0.5));
    Rectangle::new(p.x, p.y, p.x + dx, p.y + dy)
}

fn nested_in<R: Rng>(outer: &Rectangle, rng: &mut R) -> Rectangle {
    let tl = outer.top_left();
    let e = outer.extent();
    let f0 = Vector2::new(rng.gen_range(0.05..0.45), rng.gen_range(0.05..0.45));
    let f1 = Vector2::new(rng.gen_range(0.55..0.95), rng.gen_range(0.55..0.95));
    Rectangle::from_corners(tl + e.component_mul(&f0), tl + e.component_mul(&f1))
}

use anyhow::{Context, Result};
use rectalg::{Coords, Rectangle, RelationCfg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One input pair; also the output format of `sample`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairInput {
    pub a: Coords,
    pub b: Coords,
}

/// Every relation between `a` and `b`, as plain data.
///
/// Rectangles are reported normalized (`to_object`), so `a`/`b` may differ
/// from the input records. NaN ratios serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelationReport {
    pub a: Coords,
    pub b: Coords,
    pub intersection: Option<Coords>,
    pub adjacent: Vec<Coords>,
    pub intersecting_vertices: Vec<[f64; 2]>,
    pub union: Coords,
    /// Fraction of `a` covered by `b`.
    pub ratio_containing_ab: f64,
    /// Fraction of `b` covered by `a`.
    pub ratio_containing_ba: f64,
    /// `a.contains(b)`: all of `a` is shared with `b`, and `b` is larger.
    pub a_contains_b: bool,
    /// `b.contains(a)`.
    pub b_contains_a: bool,
}

pub fn relate(pair: PairInput, cfg: RelationCfg) -> RelationReport {
    let a = Rectangle::from(pair.a);
    let b = Rectangle::from(pair.b);
    RelationReport {
        a: a.to_object(),
        b: b.to_object(),
        intersection: a.intersects(&b).map(|r| r.to_object()),
        adjacent: a.adjacent(&b).iter().map(|s| s.to_object()).collect(),
        intersecting_vertices: a
            .intersecting_vertices(&b)
            .iter()
            .map(|p| [p.x, p.y])
            .collect(),
        union: a.unions(&b).to_object(),
        ratio_containing_ab: a.ratio_containing(&b),
        ratio_containing_ba: b.ratio_containing(&a),
        a_contains_b: a.contains_at(&b, cfg.contain_threshold),
        b_contains_a: b.contains_at(&a, cfg.contain_threshold),
    }
}

/// Relate every pair in the JSON array at `input` and write the reports to `out`.
/// Returns the number of pairs processed.
pub fn relate_file(input: &Path, out: &Path, cfg: RelationCfg) -> Result<usize> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let pairs: Vec<PairInput> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing pairs from {}", input.display()))?;
    let reports: Vec<RelationReport> = pairs.iter().map(|p| relate(*p, cfg)).collect();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(reports.len())
}

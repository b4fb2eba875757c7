use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rectalg::geom::rand::{draw_pair, PairKind, RectCfg, ReplayToken};
use rectalg::{Coords, RelationCfg};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

use report::{relate, relate_file, PairInput};

#[derive(Parser)]
#[command(name = "rectalg-cli")]
#[command(about = "Relate axis-aligned rectangles and report the result as JSON")]
struct Cmd {
    /// Minimum coverage ratio for containment (1 = fully covered)
    #[arg(long, global = true, default_value_t = 1.0)]
    threshold: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Relate two rectangles given as x0,y0,x1,y1
    Relate {
        #[arg(long, allow_hyphen_values = true)]
        a: Coords,
        #[arg(long, allow_hyphen_values = true)]
        b: Coords,
    },
    /// Print random rectangle pairs (same seed, same pairs)
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long, value_enum, default_value_t = Kind::Any)]
        kind: Kind,
    },
    /// Relate every pair of a JSON file `[{"a": {..}, "b": {..}}, ...]`
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Any,
    Separated,
    Overlapping,
    Nested,
}

impl From<Kind> for PairKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Any => PairKind::Any,
            Kind::Separated => PairKind::Separated,
            Kind::Overlapping => PairKind::Overlapping,
            Kind::Nested => PairKind::Nested,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = check_threshold(cmd.threshold)?;
    match cmd.action {
        Action::Relate { a, b } => relate_one(a, b, cfg),
        Action::Sample { seed, count, kind } => sample(seed, count, kind),
        Action::Batch { input, out } => batch(input, out, cfg),
    }
}

fn check_threshold(threshold: f64) -> Result<RelationCfg> {
    if !(0.0..=1.0).contains(&threshold) {
        bail!("--threshold must be within [0, 1], got {threshold}");
    }
    Ok(RelationCfg {
        contain_threshold: threshold,
    })
}

fn relate_one(a: Coords, b: Coords, cfg: RelationCfg) -> Result<()> {
    tracing::info!(%a, %b, threshold = cfg.contain_threshold, "relate");
    let report = relate(PairInput { a, b }, cfg);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn sample(seed: u64, count: u64, kind: Kind) -> Result<()> {
    tracing::info!(seed, count, ?kind, "sample");
    let pairs = sample_pairs(seed, count, kind);
    println!("{}", serde_json::to_string_pretty(&pairs)?);
    Ok(())
}

fn sample_pairs(seed: u64, count: u64, kind: Kind) -> Vec<PairInput> {
    (0..count)
        .map(|index| {
            let (a, b) = draw_pair(RectCfg::default(), kind.into(), ReplayToken { seed, index });
            PairInput {
                a: a.to_object(),
                b: b.to_object(),
            }
        })
        .collect()
}

fn batch(input: PathBuf, out: PathBuf, cfg: RelationCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let n = relate_file(&input, &out, cfg)?;
    tracing::info!(pairs = n, "batch done");
    Ok(())
}

//! Print every relation for a few sampled rectangle pairs.
//!
//! Usage:
//!   cargo run -p rectalg --example relations -- [any|separated|overlapping|nested]

use rectalg::prelude::*;

fn main() {
    let kind = match std::env::args().nth(1).as_deref().unwrap_or("overlapping") {
        "any" => PairKind::Any,
        "separated" => PairKind::Separated,
        "overlapping" => PairKind::Overlapping,
        "nested" => PairKind::Nested,
        other => {
            eprintln!("unknown kind {other:?}; usage: relations [any|separated|overlapping|nested]");
            return;
        }
    };
    for index in 0..5 {
        let (a, b) = draw_pair(RectCfg::default(), kind, ReplayToken { seed: 2025, index });
        println!("pair {index}: a={} b={}", a.to_object(), b.to_object());
        match a.intersects(&b) {
            Some(shared) => println!("  intersects: {}", shared.to_object()),
            None => println!("  intersects: none"),
        }
        println!("  adjacent: {} segment(s)", a.adjacent(&b).len());
        println!("  vertices: {:?}", a.intersecting_vertices(&b));
        println!(
            "  ratio a<-b: {:.4}  b<-a: {:.4}  a contains b: {}  b contains a: {}",
            a.ratio_containing(&b),
            b.ratio_containing(&a),
            a.contains(&b),
            b.contains(&a)
        );
    }
}

//! Solve a text maze with A* and report a Dijkstra distance map.
//!
//! Run: cargo run --bin maze [FILE] [--diagonal]
//!
//! Without FILE a built-in sample maze is used.

use lodestar_demos::{SAMPLE, solve};
use lodestar_search::Moves;

fn main() {
    let mut path = None;
    let mut moves = Moves::Cardinal;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--diagonal" => moves = Moves::All,
            _ => path = Some(arg),
        }
    }

    let text = match &path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error: cannot read {p}: {e}");
                std::process::exit(1);
            }
        },
        None => SAMPLE.to_string(),
    };

    match solve(&text, moves) {
        Ok(report) => {
            println!("{}", report.overlay);
            println!();
            println!("cost:     {}", report.cost);
            println!("expanded: {}", report.expanded);
            let (far, dist) = report.farthest;
            println!("farthest: {far} at distance {dist}");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

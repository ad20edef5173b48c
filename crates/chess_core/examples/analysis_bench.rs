//! Position analysis benchmark for profiling with cargo-flamegraph.
//!
//! Runs the full evaluation pipeline (flags, material, advantage label,
//! evaluation bar) repeatedly over positions from different game phases.
//!
//! Usage:
//!   cargo flamegraph --example analysis_bench -p chess_core

use chess_core::{AdvantageClassifier, Board, PositionAnalysis};
use std::time::Instant;

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Sicilian",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
    (
        "Checkmate",
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
    ),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Position Analysis Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let classifier = AdvantageClassifier::default();
    let mut total_time = std::time::Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let board = match Board::from_fen(fen, false) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{name}: bad FEN ({e:?})");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut percent_sum = 0.0;
        for _ in 0..ITERATIONS {
            let analysis = PositionAnalysis::of(&board, 1, &classifier);
            percent_sum += analysis.bar().percentage;
        }
        let elapsed = start.elapsed();
        total_time += elapsed;

        let per_sec = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let avg_bar = percent_sum / ITERATIONS as f64;

        println!(" bar {avg_bar:>5.1}%, {per_sec:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_time:.3?}");
}

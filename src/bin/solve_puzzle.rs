//! Solve a puzzle given in notation, or a random puzzle from a seed.
//!
//! Usage:
//! `cargo run --release --bin solve_puzzle -- --puzzle "1,0,3,0,4,0,0,1,0,0,0,2,0,0;3;8,9,10"`
//! `cargo run --release --bin solve_puzzle -- --seed 42 --max-expansions 100000`

use rand::{rngs::StdRng, SeedableRng};

use mancala_puzzle::board_state::mancala_types::PuzzleState;
use mancala_puzzle::search::breadth_first::{solve_with_config, SolverConfig};
use mancala_puzzle::utils::puzzle_notation::parse_puzzle_notation;
use mancala_puzzle::utils::random_puzzle::{random_puzzle, RandomPuzzleConfig};
use mancala_puzzle::utils::solution_report::render_outcome_report;

fn parse_arg(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_arg_u64(flag: &str) -> Result<Option<u64>, String> {
    parse_arg(flag)
        .map(|v| {
            v.parse::<u64>()
                .map_err(|_| format!("{flag} expects an unsigned integer, got '{v}'"))
        })
        .transpose()
}

fn main() -> Result<(), String> {
    let puzzle = if let Some(notation) = parse_arg("--puzzle") {
        parse_puzzle_notation(&notation).map_err(|e| e.to_string())?
    } else if let Some(seed) = parse_arg_u64("--seed")? {
        let mut rng = StdRng::seed_from_u64(seed);
        random_puzzle(&mut rng, &RandomPuzzleConfig::default()).map_err(|e| e.to_string())?
    } else {
        PuzzleState::default_puzzle()
    };

    let config = SolverConfig {
        max_expansions: parse_arg_u64("--max-expansions")?,
    };

    let outcome = solve_with_config(&puzzle, config);
    for line in &outcome.info_lines {
        println!("{line}");
    }
    println!("{}", outcome.stats.report());

    let report = render_outcome_report(&puzzle, &outcome).map_err(|e| e.to_string())?;
    println!("{report}");
    Ok(())
}

//! Solve the canonical puzzle and print the move-by-move trace.

use mancala_puzzle::board_state::mancala_types::PuzzleState;
use mancala_puzzle::search::breadth_first::solve;
use mancala_puzzle::utils::solution_report::render_solution_report;

fn main() -> Result<(), String> {
    let puzzle = PuzzleState::default_puzzle();
    let solution = solve(&puzzle);
    let report = render_solution_report(&puzzle, solution.as_ref()).map_err(|e| e.to_string())?;
    println!("{report}");
    Ok(())
}

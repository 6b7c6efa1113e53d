//! Solution replay and the printable move-by-move report.

use chrono::{Local, NaiveDate};

use crate::board_state::mancala_types::*;
use crate::errors::MancalaResult;
use crate::search::breadth_first::{SearchOutcome, SolveStatus};
use crate::utils::puzzle_notation::generate_puzzle_notation;
use crate::utils::render_puzzle_state::render_puzzle_state;

/// Re-apply `moves` from `initial`, returning the board after each one.
pub fn replay_moves(
    initial: &PuzzleState,
    moves: &[Pit],
) -> MancalaResult<Vec<(Pit, PuzzleState)>> {
    let mut steps = Vec::with_capacity(moves.len());
    let mut current = initial.clone();
    for &pit in moves {
        current = current.apply_move(pit)?;
        steps.push((pit, current.clone()));
    }
    Ok(steps)
}

pub fn render_solution_report(
    initial: &PuzzleState,
    solution: Option<&PuzzleState>,
) -> MancalaResult<String> {
    render_solution_report_dated(initial, solution, Local::now().date_naive())
}

pub fn render_solution_report_dated(
    initial: &PuzzleState,
    solution: Option<&PuzzleState>,
    date: NaiveDate,
) -> MancalaResult<String> {
    match solution {
        Some(state) => render_solved(initial, state, date),
        None => Ok(render_unsolved(initial, "unsolved", "No solution found.", date)),
    }
}

/// Report for a finished search. A search cut short by its expansion budget
/// is not reported as unsolved.
pub fn render_outcome_report(
    initial: &PuzzleState,
    outcome: &SearchOutcome,
) -> MancalaResult<String> {
    render_outcome_report_dated(initial, outcome, Local::now().date_naive())
}

pub fn render_outcome_report_dated(
    initial: &PuzzleState,
    outcome: &SearchOutcome,
    date: NaiveDate,
) -> MancalaResult<String> {
    match &outcome.status {
        SolveStatus::Solved(state) => render_solved(initial, state, date),
        SolveStatus::Unsolvable => Ok(render_unsolved(
            initial,
            "unsolved",
            "No solution found.",
            date,
        )),
        SolveStatus::BudgetExhausted => Ok(render_unsolved(
            initial,
            "search budget exhausted",
            "Search stopped before finding a solution.",
            date,
        )),
    }
}

fn render_header(initial: &PuzzleState, result: &str, date: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!("[Date \"{}\"]\n", date.format("%Y.%m.%d")));
    out.push_str(&format!("[Puzzle \"{}\"]\n", generate_puzzle_notation(initial)));
    out.push_str(&format!("[Result \"{result}\"]\n\n"));
    out.push_str(&render_puzzle_state(initial));
    out
}

fn render_solved(
    initial: &PuzzleState,
    solution: &PuzzleState,
    date: NaiveDate,
) -> MancalaResult<String> {
    let moves = solution.move_history().len();
    let result = match solution.current_tier() {
        Some(stars) => format!("{moves} moves, {stars}"),
        None => format!("{moves} moves"),
    };

    let mut out = render_header(initial, &result, date);
    for (pit, board) in replay_moves(initial, solution.move_history())? {
        out.push_str(&format!("\n\nAfter moving {pit}:\n"));
        out.push_str(&render_puzzle_state(&board));
    }
    Ok(out)
}

fn render_unsolved(initial: &PuzzleState, result: &str, note: &str, date: NaiveDate) -> String {
    let mut out = render_header(initial, result, date);
    out.push('\n');
    out.push_str(note);
    out
}

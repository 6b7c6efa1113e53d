//! Plain-text board renderer.
//!
//! Upper row reads right to left (pit 12 first) so both rows follow the
//! sowing direction around the board, with store 13 on the left and store 6
//! on the right.

use crate::board_state::mancala_types::*;

pub fn render_puzzle_state(state: &PuzzleState) -> String {
    let upper: Vec<String> = (7..=12).rev().map(|pit| pit_cell(state, pit)).collect();
    let lower: Vec<String> = (0..=5).map(|pit| pit_cell(state, pit)).collect();

    format!(
        "   {}\n{}{}{}\n   {}\n{} turns left",
        upper.join(" "),
        pit_cell(state, UPPER_STORE),
        " ".repeat(19),
        pit_cell(state, LOWER_STORE),
        lower.join(" "),
        state.turns_remaining()
    )
}

fn pit_cell(state: &PuzzleState, pit: Pit) -> String {
    format!("{:>2}", state.stones(pit))
}

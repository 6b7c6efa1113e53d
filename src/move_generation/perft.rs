use crate::board_state::mancala_types::PuzzleState;
use crate::errors::MancalaResult;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Move-tree counts at a fixed depth, without transposition merging.
///
/// Terminal boards are leaves: nothing below them is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub extra_turns: usize,
    pub terminals: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    state: &PuzzleState,
    depth: u8,
) -> MancalaResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    if state.is_terminal() {
        return Ok(total);
    }

    for mv in generator.generate_legal_moves(state)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MancalaResult<()> {
    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.annotations.is_capture() {
            counts.captures += 1;
        }
        if mv.annotations.extra_turn {
            counts.extra_turns += 1;
        }
        if mv.state_after_move.is_terminal() {
            counts.terminals += 1;
        }
        return Ok(());
    }

    if mv.state_after_move.is_terminal() {
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.state_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}

//! Legal move generation.
//!
//! Enumerates non-empty play pits in ascending index order and sows each one.
//! The ascending order is what makes solver output reproducible.

use crate::board_state::mancala_types::PuzzleState;
use crate::errors::MancalaResult;
use crate::move_generation::legal_move_apply::apply_move_annotated;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, state: &PuzzleState) -> MancalaResult<Vec<GeneratedMove>> {
        let pits = state.legal_moves();
        let mut legal = Vec::with_capacity(pits.len());

        for pit in pits {
            let (state_after_move, annotations) = apply_move_annotated(state, pit)?;
            legal.push(GeneratedMove {
                pit,
                state_after_move,
                annotations,
            });
        }

        Ok(legal)
    }
}

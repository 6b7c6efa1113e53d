//! Move generation interface shared by the solver and perft.

use crate::board_state::mancala_types::{Pit, PuzzleState, Stones};
use crate::errors::MancalaResult;

/// What happened while sowing a single move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    /// Slot the last stone landed in.
    pub landing_pit: Pit,
    /// Last stone landed in a store, so no turn was spent.
    pub extra_turn: bool,
    /// Stones moved into a store by a capture, the landing stone included.
    pub captured_stones: Stones,
}

impl MoveAnnotations {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_stones > 0
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub pit: Pit,
    pub state_after_move: PuzzleState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator {
    /// Successors of `state`, one per legal move.
    fn generate_legal_moves(&self, state: &PuzzleState) -> MancalaResult<Vec<GeneratedMove>>;
}

//! Sowing transition.
//!
//! Lifts every stone out of the chosen pit and drops them one per slot around
//! the 14-slot ring, stores included. A last stone that lands alone in an
//! empty play pit captures the opposite pit into the owner's store. A last
//! stone landing in a store keeps the turn.

use crate::board_state::mancala_rules::{is_store, next_pit, opposing_pit, owning_store};
use crate::board_state::mancala_types::*;
use crate::errors::{MancalaError, MancalaResult};
use crate::move_generation::move_generator::MoveAnnotations;

pub fn apply_move(state: &PuzzleState, pit: Pit) -> MancalaResult<PuzzleState> {
    apply_move_annotated(state, pit).map(|(next, _)| next)
}

pub fn apply_move_annotated(
    state: &PuzzleState,
    pit: Pit,
) -> MancalaResult<(PuzzleState, MoveAnnotations)> {
    if pit as usize >= PIT_COUNT {
        return Err(MancalaError::PitOutOfRange(pit));
    }
    if is_store(pit) {
        return Err(MancalaError::StoreSelected(pit));
    }

    let mut pits = *state.pits();
    let stones = pits[pit as usize];
    if stones == 0 {
        return Err(MancalaError::EmptyPit(pit));
    }

    // Sow.
    pits[pit as usize] = 0;
    let mut landing = pit;
    for _ in 0..stones {
        landing = next_pit(landing);
        pits[landing as usize] = pits[landing as usize]
            .checked_add(1)
            .ok_or(MancalaError::StoneOverflow(landing))?;
    }

    // Capture. Only the final count matters, even after a full lap.
    let mut captured_stones = 0;
    if !is_store(landing) {
        let opposite = opposing_pit(landing)?;
        let store = owning_store(landing)?;
        if pits[landing as usize] == 1 && pits[opposite as usize] > 0 {
            captured_stones = pits[opposite as usize]
                .checked_add(1)
                .ok_or(MancalaError::StoneOverflow(store))?;
            pits[store as usize] = pits[store as usize]
                .checked_add(captured_stones)
                .ok_or(MancalaError::StoneOverflow(store))?;
            pits[landing as usize] = 0;
            pits[opposite as usize] = 0;
        }
    }

    let extra_turn = is_store(landing);
    let turns_remaining = if extra_turn {
        state.turns_remaining()
    } else {
        state
            .turns_remaining()
            .checked_sub(1)
            .ok_or(MancalaError::TurnCountOutOfRange(state.turns_remaining()))?
    };

    let annotations = MoveAnnotations {
        landing_pit: landing,
        extra_turn,
        captured_stones,
    };

    Ok((state.successor(pits, turns_remaining, pit), annotations))
}

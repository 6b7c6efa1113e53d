//! Board geometry and the canonical puzzle.
//!
//! Pits are laid out as a 14-slot ring sown counter-clockwise:
//!
//! ```text
//!      12 11 10  9  8  7
//!   13                    6
//!       0  1  2  3  4  5
//! ```

use crate::board_state::mancala_types::*;
use crate::errors::{MancalaError, MancalaResult};

/// The puzzle solved by the default entry point, in puzzle notation.
pub const DEFAULT_PUZZLE_NOTATION: &str = "1,0,3,0,4,0,0,1,0,0,0,2,0,0;3;8,9,10";

#[inline]
pub const fn is_store(pit: Pit) -> bool {
    pit == LOWER_STORE || pit == UPPER_STORE
}

#[inline]
pub const fn is_lower_pit(pit: Pit) -> bool {
    matches!(pit, 0..=5)
}

#[inline]
pub const fn is_upper_pit(pit: Pit) -> bool {
    matches!(pit, 7..=12)
}

/// Pit directly across the board.
pub fn opposing_pit(pit: Pit) -> MancalaResult<Pit> {
    if is_lower_pit(pit) || is_upper_pit(pit) {
        Ok(12 - pit)
    } else {
        Err(MancalaError::NoOpposingPit(pit))
    }
}

/// Store credited with captures made by landing in `pit`.
pub fn owning_store(pit: Pit) -> MancalaResult<Pit> {
    if is_lower_pit(pit) {
        Ok(LOWER_STORE)
    } else if is_upper_pit(pit) {
        Ok(UPPER_STORE)
    } else {
        Err(MancalaError::NoOpposingPit(pit))
    }
}

/// Next slot on the ring.
#[inline]
pub const fn next_pit(pit: Pit) -> Pit {
    ((pit as usize + 1) % PIT_COUNT) as Pit
}

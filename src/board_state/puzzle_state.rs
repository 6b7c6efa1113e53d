//! Immutable puzzle board.
//!
//! `PuzzleState` holds pit contents, the remaining turn budget, the shared
//! score targets, and the moves that produced it from the root board. States
//! are values: applying a move returns a new state and leaves the original
//! untouched. Equality and hashing ignore the move history, so two boards
//! reached by different move orders compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board_state::mancala_rules::{is_store, DEFAULT_PUZZLE_NOTATION};
use crate::board_state::mancala_types::*;
use crate::errors::{MancalaError, MancalaResult};
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::puzzle_notation::parse_puzzle_notation;
use crate::utils::render_puzzle_state::render_puzzle_state;

#[derive(Debug, Clone)]
pub struct PuzzleState {
    pits: [Stones; PIT_COUNT],
    turns_remaining: i32,
    targets: TargetTable,
    move_history: Vec<Pit>,
}

impl PuzzleState {
    /// Root board with an empty move history. Unchecked; callers outside the
    /// crate go through `from_slice`.
    pub(crate) fn new(pits: [Stones; PIT_COUNT], turns_remaining: i32, targets: TargetTable) -> Self {
        Self {
            pits,
            turns_remaining,
            targets,
            move_history: Vec::new(),
        }
    }

    /// Checked constructor: 14 pits, a stone total that fits one pit, and a
    /// turn count that can still be decremented.
    pub fn from_slice(
        pits: &[Stones],
        turns_remaining: i32,
        targets: TargetTable,
    ) -> MancalaResult<Self> {
        let pits: [Stones; PIT_COUNT] = pits
            .try_into()
            .map_err(|_| MancalaError::InvalidPitCount(pits.len()))?;

        let total: u32 = pits.iter().map(|&s| u32::from(s)).sum();
        if total > u32::from(Stones::MAX) {
            let heaviest = (0..PIT_COUNT as Pit)
                .max_by_key(|&p| pits[p as usize])
                .unwrap_or(0);
            return Err(MancalaError::StoneOverflow(heaviest));
        }
        if turns_remaining == i32::MIN {
            return Err(MancalaError::TurnCountOutOfRange(turns_remaining));
        }

        Ok(Self::new(pits, turns_remaining, targets))
    }

    /// The puzzle solved by the default entry point.
    pub fn default_puzzle() -> Self {
        parse_puzzle_notation(DEFAULT_PUZZLE_NOTATION)
            .expect("default puzzle notation should always parse")
    }

    /// Successor produced by sowing from `moved_pit`.
    pub(crate) fn successor(
        &self,
        pits: [Stones; PIT_COUNT],
        turns_remaining: i32,
        moved_pit: Pit,
    ) -> Self {
        let mut move_history = Vec::with_capacity(self.move_history.len() + 1);
        move_history.extend_from_slice(&self.move_history);
        move_history.push(moved_pit);

        Self {
            pits,
            turns_remaining,
            targets: self.targets.clone(),
            move_history,
        }
    }

    #[inline]
    pub fn pits(&self) -> &[Stones; PIT_COUNT] {
        &self.pits
    }

    #[inline]
    pub fn stones(&self, pit: Pit) -> Stones {
        self.pits[pit as usize]
    }

    #[inline]
    pub fn turns_remaining(&self) -> i32 {
        self.turns_remaining
    }

    #[inline]
    pub fn targets(&self) -> &TargetTable {
        &self.targets
    }

    #[inline]
    pub fn move_history(&self) -> &[Pit] {
        &self.move_history
    }

    #[inline]
    pub fn position_key(&self) -> PositionKey {
        PositionKey {
            pits: self.pits,
            turns_remaining: self.turns_remaining,
        }
    }

    pub fn total_stones(&self) -> u32 {
        self.pits.iter().map(|&s| u32::from(s)).sum()
    }

    /// Stones banked in both stores.
    #[inline]
    pub fn score(&self) -> u32 {
        u32::from(self.pits[LOWER_STORE as usize]) + u32::from(self.pits[UPPER_STORE as usize])
    }

    #[inline]
    pub fn current_tier(&self) -> Option<Stars> {
        self.targets.tier_for_score(self.score())
    }

    #[inline]
    pub fn reached_top_tier(&self) -> bool {
        self.current_tier() == Some(self.targets.top_tier())
    }

    /// Out of turns, or nothing better left to reach.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.turns_remaining <= 0 || self.reached_top_tier()
    }

    /// Non-store pits holding stones, ascending.
    pub fn legal_moves(&self) -> Vec<Pit> {
        (0..PIT_COUNT as Pit)
            .filter(|&pit| !is_store(pit) && self.pits[pit as usize] > 0)
            .collect()
    }

    #[inline]
    pub fn apply_move(&self, pit: Pit) -> MancalaResult<PuzzleState> {
        apply_move(self, pit)
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.pits == other.pits && self.turns_remaining == other.turns_remaining
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position_key().hash(state);
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_puzzle_state(self))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn targets() -> TargetTable {
        TargetTable::from_thresholds(&[8, 9, 10]).expect("targets should build")
    }

    fn board(pits: [Stones; PIT_COUNT], turns: i32) -> PuzzleState {
        PuzzleState::new(pits, turns, targets())
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = PuzzleState::from_slice(&[1, 2, 3], 3, targets()).expect_err("too short");
        assert_eq!(err, MancalaError::InvalidPitCount(3));
    }

    #[test]
    fn from_slice_rejects_boards_that_could_overflow() {
        let mut pits = [0; PIT_COUNT];
        pits[0] = 1;
        pits[1] = Stones::MAX;
        let err = PuzzleState::from_slice(&pits, 3, targets()).expect_err("too many stones");
        assert_eq!(err, MancalaError::StoneOverflow(1));

        let err = PuzzleState::from_slice(&[1; PIT_COUNT], i32::MIN, targets())
            .expect_err("turns cannot be decremented");
        assert_eq!(err, MancalaError::TurnCountOutOfRange(i32::MIN));

        pits[1] = Stones::MAX - 1;
        assert!(PuzzleState::from_slice(&pits, i32::MIN + 1, targets()).is_ok());
    }

    #[test]
    fn default_puzzle_matches_canonical_layout() {
        let puzzle = PuzzleState::default_puzzle();
        assert_eq!(puzzle.pits(), &[1, 0, 3, 0, 4, 0, 0, 1, 0, 0, 0, 2, 0, 0]);
        assert_eq!(puzzle.turns_remaining(), 3);
        assert_eq!(puzzle.total_stones(), 11);
        assert!(puzzle.move_history().is_empty());
    }

    #[test]
    fn score_sums_both_stores() {
        let state = board([0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 5], 1);
        assert_eq!(state.score(), 9);
        assert_eq!(state.current_tier(), Some(Stars::Two));
    }

    #[test]
    fn legal_moves_skip_stores_and_empty_pits() {
        let state = board([1, 0, 3, 0, 4, 0, 7, 1, 0, 0, 0, 2, 0, 9], 3);
        assert_eq!(state.legal_moves(), vec![0, 2, 4, 7, 11]);
    }

    #[test]
    fn out_of_turns_is_terminal_regardless_of_score() {
        assert!(board([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 0).is_terminal());
        assert!(board([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], -1).is_terminal());
        assert!(!board([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 1).is_terminal());
    }

    #[test]
    fn top_tier_is_terminal_regardless_of_turns() {
        let state = board([1, 0, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 4], 5);
        assert!(state.reached_top_tier());
        assert!(state.is_terminal());

        let short = board([1, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 4], 5);
        assert!(!short.is_terminal());
    }

    #[test]
    fn equality_ignores_move_history() {
        let root = board([1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 2);
        let via_left = root
            .apply_move(0)
            .and_then(|s| s.apply_move(2))
            .expect("moves should apply");
        let via_right = root
            .apply_move(2)
            .and_then(|s| s.apply_move(0))
            .expect("moves should apply");

        assert_ne!(via_left.move_history(), via_right.move_history());
        assert_eq!(via_left, via_right);

        let mut seen = HashSet::new();
        assert!(seen.insert(via_left));
        assert!(!seen.insert(via_right));
    }

    #[test]
    fn turns_are_part_of_identity() {
        let a = board([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 2);
        let b = board([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 1);
        assert_ne!(a, b);
        assert_ne!(a.position_key(), b.position_key());
    }
}

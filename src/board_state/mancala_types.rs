//! Shared board-level types: pit indices, stone counts, star tiers and the
//! score-target table that stays constant across a search.

use std::fmt;
use std::sync::Arc;

pub use crate::board_state::puzzle_state::PuzzleState;
use crate::errors::{MancalaError, MancalaResult};

/// Pit index (`0..14`). Indices 6 and 13 are the stores.
pub type Pit = u8;

/// Stone count held by a single pit or store.
pub type Stones = u16;

/// Number of slots on the ring, stores included.
pub const PIT_COUNT: usize = 14;

/// Store owned by the lower row (pits 0..=5).
pub const LOWER_STORE: Pit = 6;

/// Store owned by the upper row (pits 7..=12).
pub const UPPER_STORE: Pit = 13;

/// Star rating reached by a board's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stars {
    One,
    Two,
    Three,
}

impl Stars {
    /// Tiers in ascending order.
    pub const ALL: [Stars; 3] = [Stars::One, Stars::Two, Stars::Three];
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stars::One => "one star",
            Stars::Two => "two stars",
            Stars::Three => "three stars",
        };
        f.write_str(name)
    }
}

/// Minimum score needed for a star tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTarget {
    pub stars: Stars,
    pub min_score: u32,
}

/// Validated, ascending list of score targets.
///
/// Cloning is cheap: every state derived during a search shares the same
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTable {
    targets: Arc<[ScoreTarget]>,
}

impl TargetTable {
    /// Build a table from `(tier, threshold)` pairs.
    ///
    /// Tiers and thresholds must both be strictly increasing and the table
    /// must not be empty.
    pub fn new(targets: &[ScoreTarget]) -> MancalaResult<Self> {
        if targets.is_empty() {
            return Err(MancalaError::InvalidTargets("no targets given".to_owned()));
        }

        for pair in targets.windows(2) {
            if pair[1].stars <= pair[0].stars {
                return Err(MancalaError::InvalidTargets(format!(
                    "tier {:?} listed after {:?}",
                    pair[1].stars, pair[0].stars
                )));
            }
            if pair[1].min_score <= pair[0].min_score {
                return Err(MancalaError::InvalidTargets(format!(
                    "threshold {} does not exceed {}",
                    pair[1].min_score, pair[0].min_score
                )));
            }
        }

        Ok(Self {
            targets: Arc::from(targets),
        })
    }

    /// Assign thresholds to `One`, `Two`, `Three` in order.
    pub fn from_thresholds(thresholds: &[u32]) -> MancalaResult<Self> {
        if thresholds.len() > Stars::ALL.len() {
            return Err(MancalaError::InvalidTargets(format!(
                "at most {} thresholds allowed, got {}",
                Stars::ALL.len(),
                thresholds.len()
            )));
        }

        let targets: Vec<ScoreTarget> = Stars::ALL
            .iter()
            .zip(thresholds)
            .map(|(&stars, &min_score)| ScoreTarget { stars, min_score })
            .collect();
        Self::new(&targets)
    }

    #[inline]
    pub fn as_slice(&self) -> &[ScoreTarget] {
        &self.targets
    }

    /// Highest tier listed in the table.
    #[inline]
    pub fn top_tier(&self) -> Stars {
        // Non-empty by construction.
        self.targets
            .last()
            .map(|t| t.stars)
            .unwrap_or(Stars::Three)
    }

    /// Highest tier whose threshold is met by `score`.
    pub fn tier_for_score(&self, score: u32) -> Option<Stars> {
        self.targets
            .iter()
            .rev()
            .find(|t| score >= t.min_score)
            .map(|t| t.stars)
    }
}

/// Search identity of a board: pits plus remaining turns, no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    pub pits: [Stones; PIT_COUNT],
    pub turns_remaining: i32,
}

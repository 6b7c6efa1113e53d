//! Seeded random puzzles and random playouts.
//!
//! Used by tests as a source of varied boards and by the benches and the
//! `solve_puzzle` binary to produce reproducible workloads from a seed.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board_state::mancala_rules::is_store;
use crate::board_state::mancala_types::*;
use crate::errors::{MancalaError, MancalaResult};

#[derive(Debug, Clone)]
pub struct RandomPuzzleConfig {
    pub min_stones: u32,
    pub max_stones: u32,
    pub min_turns: i32,
    pub max_turns: i32,
    /// Three-star threshold as a percentage of the stones on the board.
    pub top_target_percent: u32,
}

impl Default for RandomPuzzleConfig {
    fn default() -> Self {
        Self {
            min_stones: 4,
            max_stones: 16,
            min_turns: 1,
            max_turns: 4,
            top_target_percent: 80,
        }
    }
}

/// Scatter stones over the twelve play pits, stores empty.
pub fn random_puzzle<R: Rng>(
    rng: &mut R,
    config: &RandomPuzzleConfig,
) -> MancalaResult<PuzzleState> {
    if config.min_stones > config.max_stones || config.min_turns > config.max_turns {
        return Err(MancalaError::InvalidConfig(
            "random puzzle ranges are inverted".to_owned(),
        ));
    }
    if config.max_stones > u32::from(Stones::MAX) {
        return Err(MancalaError::InvalidConfig(format!(
            "max_stones {} exceeds {}",
            config.max_stones,
            Stones::MAX
        )));
    }

    let play_pits: Vec<Pit> = (0..PIT_COUNT as Pit).filter(|&p| !is_store(p)).collect();
    let total = rng.random_range(config.min_stones..=config.max_stones);

    let mut pits = [0 as Stones; PIT_COUNT];
    for _ in 0..total {
        if let Some(&pit) = play_pits.choose(rng) {
            pits[pit as usize] += 1;
        }
    }

    let top = (total * config.top_target_percent / 100).max(2);
    let targets = TargetTable::from_thresholds(&[top - 2, top - 1, top])?;
    let turns = rng.random_range(config.min_turns..=config.max_turns);

    PuzzleState::from_slice(&pits, turns, targets)
}

/// Play uniformly random legal moves until the board is terminal or stuck.
pub fn random_playout<R: Rng>(
    state: &PuzzleState,
    rng: &mut R,
) -> MancalaResult<PuzzleState> {
    let mut current = state.clone();
    while !current.is_terminal() {
        let moves = current.legal_moves();
        let Some(&pit) = moves.choose(rng) else {
            break;
        };
        current = current.apply_move(pit)?;
    }
    Ok(current)
}

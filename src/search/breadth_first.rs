//! Breadth-first puzzle solver.
//!
//! Explores boards in order of move count from the root, so the first
//! terminal board that reaches the top star tier is a shortest solution.
//! Boards already seen with the same pits and remaining turns are never
//! queued twice, whatever moves produced them.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use crate::board_state::mancala_types::{PositionKey, PuzzleState};
use crate::errors::MancalaResult;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Stop after expanding this many boards. `None` searches to exhaustion.
    pub max_expansions: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: u64,
    pub states_visited: usize,
    pub duplicates_skipped: u64,
    pub peak_frontier: usize,
    pub elapsed_ms: u128,
}

impl SearchStats {
    pub fn report(&self) -> String {
        format!(
            "expanded={} visited={} duplicates={} peak_frontier={} elapsed_ms={}",
            self.nodes_expanded,
            self.states_visited,
            self.duplicates_skipped,
            self.peak_frontier,
            self.elapsed_ms
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    Solved(PuzzleState),
    /// Frontier ran dry without reaching the top tier.
    Unsolvable,
    BudgetExhausted,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SolveStatus,
    pub stats: SearchStats,
    pub info_lines: Vec<String>,
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&PuzzleState> {
        match &self.status {
            SolveStatus::Solved(state) => Some(state),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<PuzzleState> {
        match self.status {
            SolveStatus::Solved(state) => Some(state),
            _ => None,
        }
    }
}

/// Shortest move sequence reaching the top tier, as the board it ends on.
pub fn solve(initial: &PuzzleState) -> Option<PuzzleState> {
    solve_with_config(initial, SolverConfig::default()).into_solution()
}

pub fn solve_with_config(initial: &PuzzleState, config: SolverConfig) -> SearchOutcome {
    match solve_with_generator(initial, &LegalMoveGenerator, config) {
        Ok(outcome) => outcome,
        // Legal-move generation only sows non-empty play pits, and checked
        // construction bounds the stone total and turn count.
        Err(err) => unreachable!("legal move generation failed: {err}"),
    }
}

pub fn solve_with_generator<G: MoveGenerator>(
    initial: &PuzzleState,
    generator: &G,
    config: SolverConfig,
) -> MancalaResult<SearchOutcome> {
    let started = Instant::now();
    let mut stats = SearchStats::default();
    let mut info_lines = Vec::new();

    let mut frontier = VecDeque::from([initial.clone()]);
    let mut visited: HashSet<PositionKey> = HashSet::from([initial.position_key()]);

    let status = loop {
        let Some(state) = frontier.pop_front() else {
            break SolveStatus::Unsolvable;
        };

        if state.is_terminal() {
            if state.reached_top_tier() {
                info_lines.push(format!(
                    "info string solved moves={} score={} turns_left={}",
                    state.move_history().len(),
                    state.score(),
                    state.turns_remaining()
                ));
                break SolveStatus::Solved(state);
            }
            continue;
        }

        if config
            .max_expansions
            .is_some_and(|limit| stats.nodes_expanded >= limit)
        {
            info_lines.push(format!(
                "info string expansion budget {} exhausted",
                stats.nodes_expanded
            ));
            break SolveStatus::BudgetExhausted;
        }

        stats.nodes_expanded += 1;
        for mv in generator.generate_legal_moves(&state)? {
            if visited.insert(mv.state_after_move.position_key()) {
                frontier.push_back(mv.state_after_move);
            } else {
                stats.duplicates_skipped += 1;
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    };

    stats.states_visited = visited.len();
    stats.elapsed_ms = started.elapsed().as_millis();

    Ok(SearchOutcome {
        status,
        stats,
        info_lines,
    })
}

//! Errors used throughout the puzzle engine.
//!
//! `MancalaError` is the single error type returned by board construction,
//! move application, notation parsing and move generation. Move-related
//! variants (`EmptyPit`, `StoreSelected`, `PitOutOfRange`, `NoOpposingPit`)
//! guard invariants that legal-move generation never violates; reaching one
//! of them from the solver indicates a bug rather than a recoverable input
//! problem. Construction and parsing variants are ordinary input errors.

use std::error::Error;
use std::fmt;

use crate::board_state::mancala_types::{Pit, Stones};

pub type MancalaResult<T> = Result<T, MancalaError>;

/// Unified error type for the puzzle engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MancalaError {
    /// Tried to sow from a pit holding no stones.
    EmptyPit(Pit),

    /// Tried to sow from a store (index 6 or 13).
    StoreSelected(Pit),

    /// Pit index outside `0..14`.
    PitOutOfRange(Pit),

    /// Stores have no opposing pit.
    NoOpposingPit(Pit),

    /// Sowing or capturing would push a pit past `Stones::MAX`.
    ///
    /// Payload: the pit that would overflow.
    StoneOverflow(Pit),

    /// Turn count cannot be decremented without overflow.
    TurnCountOutOfRange(i32),

    /// Board slice did not hold exactly 14 entries.
    ///
    /// Payload: the number of entries supplied.
    InvalidPitCount(usize),

    /// Score targets were empty, too many, or not strictly increasing.
    InvalidTargets(String),

    /// Puzzle notation could not be parsed.
    InvalidNotation(String),

    /// Generator configuration is inconsistent.
    InvalidConfig(String),
}

impl fmt::Display for MancalaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MancalaError::EmptyPit(pit) => write!(f, "cannot move empty pit {pit}"),
            MancalaError::StoreSelected(pit) => write!(f, "cannot move mancala {pit}"),
            MancalaError::PitOutOfRange(pit) => write!(f, "pit {pit} is off the board"),
            MancalaError::NoOpposingPit(pit) => write!(f, "pit {pit} has no opposite"),
            MancalaError::StoneOverflow(pit) => {
                write!(f, "pit {pit} would hold more than {} stones", Stones::MAX)
            }
            MancalaError::TurnCountOutOfRange(turns) => {
                write!(f, "turn count {turns} is out of range")
            }
            MancalaError::InvalidPitCount(count) => {
                write!(f, "board must have 14 pits, got {count}")
            }
            MancalaError::InvalidTargets(msg) => write!(f, "invalid score targets: {msg}"),
            MancalaError::InvalidNotation(msg) => write!(f, "invalid puzzle notation: {msg}"),
            MancalaError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for MancalaError {}

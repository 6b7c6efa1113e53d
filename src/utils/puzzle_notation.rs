//! Compact puzzle notation.
//!
//! A puzzle is written as three `;`-separated fields:
//!
//! ```text
//! 1,0,3,0,4,0,0,1,0,0,0,2,0,0;3;8,9,10
//! ^ 14 pit counts, index 0 first  ^ turns  ^ star thresholds (one..three)
//! ```
//!
//! Move history is not part of the notation.

use crate::board_state::mancala_types::*;
use crate::errors::{MancalaError, MancalaResult};

pub fn parse_puzzle_notation(notation: &str) -> MancalaResult<PuzzleState> {
    let mut parts = notation.trim().split(';');

    let pits_part = parts
        .next()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| invalid("missing pit counts"))?;
    let turns_part = parts.next().ok_or_else(|| invalid("missing turn count"))?;
    let targets_part = parts.next().ok_or_else(|| invalid("missing star thresholds"))?;

    if parts.next().is_some() {
        return Err(invalid("notation has extra trailing fields"));
    }

    let pits = parse_list::<Stones>(pits_part, "pit count")?;
    let turns = turns_part
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid(&format!("invalid turn count '{}'", turns_part.trim())))?;
    let thresholds = parse_list::<u32>(targets_part, "threshold")?;

    let targets = TargetTable::from_thresholds(&thresholds)?;
    PuzzleState::from_slice(&pits, turns, targets)
}

pub fn generate_puzzle_notation(state: &PuzzleState) -> String {
    let pits: Vec<String> = state.pits().iter().map(|s| s.to_string()).collect();
    let thresholds: Vec<String> = state
        .targets()
        .as_slice()
        .iter()
        .map(|t| t.min_score.to_string())
        .collect();

    format!(
        "{};{};{}",
        pits.join(","),
        state.turns_remaining(),
        thresholds.join(",")
    )
}

fn parse_list<T: std::str::FromStr>(field: &str, what: &str) -> MancalaResult<Vec<T>> {
    field
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<T>()
                .map_err(|_| invalid(&format!("invalid {what} '{token}'")))
        })
        .collect()
}

fn invalid(msg: &str) -> MancalaError {
    MancalaError::InvalidNotation(msg.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_state::mancala_rules::DEFAULT_PUZZLE_NOTATION;

    #[test]
    fn parses_default_puzzle() {
        let state = parse_puzzle_notation(DEFAULT_PUZZLE_NOTATION).expect("should parse");
        assert_eq!(state.pits(), &[1, 0, 3, 0, 4, 0, 0, 1, 0, 0, 0, 2, 0, 0]);
        assert_eq!(state.turns_remaining(), 3);
        assert_eq!(state.targets().top_tier(), Stars::Three);
        assert_eq!(state.targets().as_slice()[0].min_score, 8);
    }

    #[test]
    fn tolerates_whitespace() {
        let state = parse_puzzle_notation(" 1, 0,3,0,4,0,0,1,0,0,0,2,0,0 ; 3 ; 8, 9,10 ")
            .expect("should parse");
        assert_eq!(state, PuzzleState::default_puzzle());
    }

    #[test]
    fn generated_notation_parses_back_to_same_board() {
        let puzzle = PuzzleState::default_puzzle();
        let moved = puzzle.apply_move(11).expect("legal move");
        let notation = generate_puzzle_notation(&moved);
        assert_eq!(notation, "1,0,3,0,4,0,0,1,0,0,0,0,1,1;3;8,9,10");

        let parsed = parse_puzzle_notation(&notation).expect("should parse");
        assert_eq!(parsed, moved);
        assert_eq!(parsed.targets(), moved.targets());
        assert!(parsed.move_history().is_empty());
    }

    #[test]
    fn rejects_malformed_notation() {
        let cases = [
            "",
            "1,0,3;3;8,9,10",
            "1,0,3,0,4,0,0,1,0,0,0,2,0,0",
            "1,0,3,0,4,0,0,1,0,0,0,2,0,0;three;8,9,10",
            "1,0,3,0,4,0,0,1,0,0,0,2,0,x;3;8,9,10",
            "1,0,3,0,4,0,0,1,0,0,0,2,0,-1;3;8,9,10",
            "1,0,3,0,4,0,0,1,0,0,0,2,0,0;3;10,9",
            "1,0,3,0,4,0,0,1,0,0,0,2,0,0;3;8,9,10;extra",
        ];
        for case in cases {
            assert!(parse_puzzle_notation(case).is_err(), "accepted '{case}'");
        }
    }

    #[test]
    fn rejects_boards_whose_moves_would_overflow() {
        let err = parse_puzzle_notation("1,65535,0,0,0,0,0,0,0,0,0,0,0,0;3;8,9,10")
            .expect_err("stone total exceeds one pit");
        assert_eq!(err, MancalaError::StoneOverflow(1));

        let err = parse_puzzle_notation("1,0,0,0,0,0,0,0,0,0,0,0,0,0;-2147483648;8,9,10")
            .expect_err("turn count cannot be decremented");
        assert_eq!(err, MancalaError::TurnCountOutOfRange(i32::MIN));
    }

    #[test]
    fn wrong_pit_count_reports_length() {
        let err = parse_puzzle_notation("1,2,3;3;8").expect_err("too few pits");
        assert_eq!(err, MancalaError::InvalidPitCount(3));
    }
}

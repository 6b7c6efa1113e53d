//! Crate root module declarations for the mancala puzzle solver.
//!
//! Exposes the board model, the sowing transition and move generation, the
//! breadth-first solver, and text utilities (rendering, puzzle notation,
//! solution reports, random puzzles) so binaries, benches and tests can
//! import stable module paths.

pub mod errors;

pub mod board_state {
    pub mod mancala_rules;
    pub mod mancala_types;
    pub mod puzzle_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod breadth_first;
}

pub mod utils {
    pub mod puzzle_notation;
    pub mod random_puzzle;
    pub mod render_puzzle_state;
    pub mod solution_report;
}

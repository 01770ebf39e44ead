//! Crate root module declarations for the Janggi rules engine.
//!
//! This file exposes the board model, per-piece movement rules, check and
//! checkmate detection, the turn engine, the text front end and utility
//! helpers so binaries, tests and benchmarks can import stable module paths.

pub mod janggi_errors;

pub mod game_state {
    pub mod board;
    pub mod game_config;
    pub mod game_state;
    pub mod janggi_game;
    pub mod janggi_rules;
    pub mod janggi_types;
    pub mod undo_state;
}

pub mod moves {
    pub mod cannon_moves;
    pub mod chariot_moves;
    pub mod elephant_moves;
    pub mod horse_moves;
    pub mod move_descriptions;
    pub mod palace_moves;
    pub mod soldier_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod pseudo_legal_moves;
}

pub mod protocol {
    pub mod text_protocol;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod render_board;
}

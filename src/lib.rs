//! Crate root module declarations for the Plum Board viewer/editor.
//!
//! Exposes the board model, FEN placement handling, candidate-move
//! generation, the headless click-and-drag editor session, and the artwork
//! cache bookkeeping so the binary, tests and benches can import stable
//! module paths.

pub mod board {
    pub mod board;
    pub mod board_types;
    pub mod tile_geometry;
}

pub mod moves {
    pub mod attack_tables;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod candidate_moves_king;
    pub mod candidate_moves_pawn;
    pub mod candidate_moves_pieces;
    pub mod candidate_shared;
    pub mod move_generator;
}

pub mod editor {
    pub mod command_loop;
    pub mod random_mover;
    pub mod selection;
}

pub mod assets {
    pub mod artwork_cache;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub mod config;
pub mod errors;

//! Knight and slider moves.
//!
//! These are pseudo-legal: a pinned piece may still move and a move that
//! leaves the own king attacked is still offered, since the editor does not
//! enforce check.

use crate::board::board::Board;
use crate::board::board_types::*;
use crate::move_generation::candidate_shared::push_targets;
use crate::moves::attack_tables::{bishop_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<CandidateMove>) {
    let targets = knight_attacks(from) & !board.occupancy(color);
    push_targets(board, from, Piece::new(color, PieceKind::Knight), targets, out);
}

/// Bishop, rook or queen moves. Other kinds produce nothing.
pub fn generate_slider_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<CandidateMove>) {
    let occupancy = board.occupancy_all();
    let attacks = match piece.kind {
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        _ => return,
    };
    push_targets(board, from, piece, attacks & !board.occupancy(piece.color), out);
}

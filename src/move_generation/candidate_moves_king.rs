use crate::board::board::Board;
use crate::board::board_types::*;
use crate::move_generation::attack_checks::tile_under_attack;
use crate::move_generation::candidate_shared::push_targets;
use crate::moves::attack_tables::king_attacks;
use crate::moves::move_descriptions::CandidateMove;

/// One-step king moves onto empty or opposing squares that the other side
/// does not attack. No castling.
pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<CandidateMove>) {
    let mut safe = 0u64;
    let mut targets = king_attacks(from) & !board.occupancy(color);

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        if !tile_under_attack(board, color, to) {
            safe |= 1u64 << to;
        }
        targets &= targets - 1;
    }

    push_targets(board, from, Piece::new(color, PieceKind::King), safe, out);
}

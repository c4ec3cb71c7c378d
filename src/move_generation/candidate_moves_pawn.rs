use crate::board::board::Board;
use crate::board::board_types::*;
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::move_descriptions::CandidateMove;

/// Pawn moves from `from`: diagonal captures, one step forward onto an empty
/// square, and two steps from the home rank when both squares are empty.
///
/// A pawn on its last rank has no moves; there is no promotion.
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<CandidateMove>) {
    let file = (from % 8) as i8;
    let rank = (from / 8) as i8;
    let next_rank = rank + color.forward();
    if !Board::in_board(file, next_rank) {
        return;
    }

    let mut captures = pawn_attacks(color, from) & board.occupancy(color.opposite());
    while captures != 0 {
        let to = captures.trailing_zeros() as Square;
        if let Some(target) = board.piece_at(to) {
            out.push(CandidateMove::capture(from, to, PieceKind::Pawn, target.kind));
        }
        captures &= captures - 1;
    }

    let one_step = (next_rank * 8 + file) as Square;
    if board.is_occupied(one_step) {
        return;
    }
    out.push(CandidateMove::quiet(from, one_step, PieceKind::Pawn));

    if rank == color.pawn_home_rank() as i8 {
        let two_rank = next_rank + color.forward();
        let two_step = (two_rank * 8 + file) as Square;
        if Board::in_board(file, two_rank) && !board.is_occupied(two_step) {
            out.push(CandidateMove::quiet(from, two_step, PieceKind::Pawn));
        }
    }
}

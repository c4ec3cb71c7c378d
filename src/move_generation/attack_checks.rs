use crate::board::board::Board;
use crate::board::board_types::*;
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};

/// Whether any `attacker_color` piece attacks `square` given `occupancy`.
pub fn is_square_attacked_with_occupancy(
    board: &Board,
    square: Square,
    attacker_color: Color,
    occupancy: u64,
) -> bool {
    // Pawn attacks are symmetric: a Light pawn attacks `square` exactly when
    // a Dark pawn on `square` would attack the pawn's square.
    let pawns = board.bitboard(attacker_color, PieceKind::Pawn);
    if pawn_attacks(attacker_color.opposite(), square) & pawns != 0 {
        return true;
    }

    if knight_attacks(square) & board.bitboard(attacker_color, PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & board.bitboard(attacker_color, PieceKind::King) != 0 {
        return true;
    }

    let queens = board.bitboard(attacker_color, PieceKind::Queen);

    let bishops_queens = board.bitboard(attacker_color, PieceKind::Bishop) | queens;
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = board.bitboard(attacker_color, PieceKind::Rook) | queens;
    rook_attacks(square, occupancy) & rooks_queens != 0
}

#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    is_square_attacked_with_occupancy(board, square, attacker_color, board.occupancy_all())
}

/// Whether a king of `color` standing on `square` would be attacked.
///
/// The king of `color` is lifted off the board first, so a slider already
/// checking the king still covers the squares behind it on the same line.
pub fn tile_under_attack(board: &Board, color: Color, square: Square) -> bool {
    let occupancy = board.occupancy_all() & !board.bitboard(color, PieceKind::King);
    is_square_attacked_with_occupancy(board, square, color.opposite(), occupancy)
}

/// King of `color` is attacked. A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

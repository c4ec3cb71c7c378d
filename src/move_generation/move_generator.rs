//! Possible-move generation for the piece the user selects.
//!
//! Dispatches on the piece standing on the square and collects candidate
//! moves for it. There is no side-to-move: any piece can be asked for its
//! moves at any time.

use log::trace;

use crate::board::board::Board;
use crate::board::board_types::*;
use crate::errors::{BoardError, BoardResult};
use crate::move_generation::candidate_moves_king::generate_king_moves;
use crate::move_generation::candidate_moves_pawn::generate_pawn_moves;
use crate::move_generation::candidate_moves_pieces::{generate_knight_moves, generate_slider_moves};
use crate::moves::move_descriptions::CandidateMove;

/// Candidate moves of the piece on `from`.
pub fn possible_moves(board: &Board, from: Square) -> BoardResult<Vec<CandidateMove>> {
    let piece = board.piece_at(from).ok_or(BoardError::EmptySquare(from))?;
    let mut out = Vec::with_capacity(32);

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_moves(board, from, piece, &mut out)
        }
        PieceKind::King => generate_king_moves(board, from, piece.color, &mut out),
    }

    trace!("{} on {from}: {} candidate moves", piece.fen_char(), out.len());
    Ok(out)
}

/// Candidate moves of every `color` piece, in square order of the movers.
pub fn all_possible_moves(board: &Board, color: Color) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(64);
    for placed in board.pieces().into_iter().filter(|p| p.piece.color == color) {
        if let Ok(moves) = possible_moves(board, placed.square) {
            out.extend(moves);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{all_possible_moves, possible_moves};
    use crate::board::board::Board;
    use crate::board::board_types::Color;
    use crate::errors::BoardError;
    use crate::utils::algebraic::algebraic_to_square as sq;

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = Board::starting_position();
        assert_eq!(all_possible_moves(&board, Color::Light).len(), 20);
        assert_eq!(all_possible_moves(&board, Color::Dark).len(), 20);
    }

    #[test]
    fn empty_square_has_no_piece_to_move() {
        let board = Board::starting_position();
        assert!(matches!(
            possible_moves(&board, sq("e4").unwrap()),
            Err(BoardError::EmptySquare(28))
        ));
    }

    #[test]
    fn every_starting_pawn_has_two_moves() {
        let board = Board::starting_position();
        for from in 8..16u8 {
            assert_eq!(possible_moves(&board, from).unwrap().len(), 2);
        }
        for from in 48..56u8 {
            assert_eq!(possible_moves(&board, from).unwrap().len(), 2);
        }
    }
}

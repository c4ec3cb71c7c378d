//! Board state for the viewer/editor.
//!
//! `Board` stores one bitboard per colour and piece kind plus occupancy
//! caches. The 8x8 grid view (`piece_at`) and the flat piece list
//! (`pieces`) are both derived from the same bitboards, so they cannot
//! disagree.

use log::debug;

use crate::board::board_types::*;
use crate::errors::{BoardError, BoardResult};
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::{parse_placement, STARTING_PLACEMENT};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],

    occupancy_by_color: [u64; 2],
    occupancy_all: u64,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_position() -> Self {
        parse_placement(STARTING_PLACEMENT).expect("starting placement should always parse")
    }

    pub fn from_placement(placement: &str) -> BoardResult<Self> {
        parse_placement(placement)
    }

    pub fn to_placement(&self) -> String {
        generate_placement(self)
    }

    /// Signed-coordinate bounds check used by move generation.
    #[inline]
    pub fn in_board(file: i8, rank: i8) -> bool {
        (0..8).contains(&file) && (0..8).contains(&rank)
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        square < 64 && (self.occupancy_all & (1u64 << square)) != 0
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !self.is_occupied(square) {
            return None;
        }
        let mask = 1u64 << square;
        for color in [Color::Light, Color::Dark] {
            if self.occupancy_by_color[color.index()] & mask == 0 {
                continue;
            }
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    /// Flat piece list in square order (a1, b1, ... h8).
    pub fn pieces(&self) -> Vec<PlacedPiece> {
        let mut out = Vec::with_capacity(self.occupancy_all.count_ones() as usize);
        let mut occupied = self.occupancy_all;
        while occupied != 0 {
            let square = occupied.trailing_zeros() as Square;
            if let Some(piece) = self.piece_at(square) {
                out.push(PlacedPiece { square, piece });
            }
            occupied &= occupied - 1;
        }
        out
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bitboard(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    pub fn place(&mut self, square: Square, piece: Piece) -> BoardResult<()> {
        check_square(square)?;
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied(square));
        }
        self.pieces[piece.color.index()][piece.kind.index()] |= 1u64 << square;
        self.recalc_occupancy();
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> BoardResult<Piece> {
        check_square(square)?;
        let piece = self.piece_at(square).ok_or(BoardError::EmptySquare(square))?;
        self.pieces[piece.color.index()][piece.kind.index()] &= !(1u64 << square);
        self.recalc_occupancy();
        Ok(piece)
    }

    /// Relocate the piece on `from` to the empty square `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> BoardResult<()> {
        check_square(to)?;
        if self.is_occupied(to) {
            return Err(BoardError::SquareOccupied(to));
        }
        let piece = self.remove(from)?;
        self.place(to, piece)?;
        debug!("moved {} from {from} to {to}", piece.fen_char());
        Ok(())
    }

    /// Remove the opposing piece on `to`, then relocate the mover onto it.
    /// Returns the captured piece.
    pub fn capture(&mut self, from: Square, to: Square) -> BoardResult<Piece> {
        let mover = self.piece_at(from).ok_or(BoardError::EmptySquare(from))?;
        let target = self.piece_at(to).ok_or(BoardError::EmptySquare(to))?;
        if !mover.captures(target) {
            return Err(BoardError::NotACapture(from, to));
        }
        self.remove(to)?;
        self.move_piece(from, to)?;
        debug!("{} on {to} captured {}", mover.fen_char(), target.fen_char());
        Ok(target)
    }

    /// Whether the pieces on `attacker` and `target` are of opposite colours.
    /// `false` if either square is empty.
    pub fn captures(&self, attacker: Square, target: Square) -> bool {
        match (self.piece_at(attacker), self.piece_at(target)) {
            (Some(a), Some(t)) => a.captures(t),
            _ => false,
        }
    }

    fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] =
                self.pieces[color.index()].iter().copied().fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }
}

#[inline]
fn check_square(square: Square) -> BoardResult<()> {
    if square < 64 {
        Ok(())
    } else {
        Err(BoardError::SquareOutOfRange(square))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::board::board_types::*;
    use crate::errors::BoardError;
    use crate::utils::algebraic::algebraic_to_square as sq;

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::starting_position();
        let pieces = board.pieces();
        assert_eq!(pieces.len(), 32);
        assert_eq!(pieces[0].square, 0);
        assert_eq!(pieces[0].piece, Piece::new(Color::Light, PieceKind::Rook));
        assert_eq!(
            board.piece_at(sq("e8").unwrap()),
            Some(Piece::new(Color::Dark, PieceKind::King))
        );
        assert_eq!(board.piece_at(sq("e4").unwrap()), None);
    }

    #[test]
    fn move_piece_requires_empty_destination() {
        let mut board = Board::starting_position();
        let e2 = sq("e2").unwrap();
        let e4 = sq("e4").unwrap();
        board.move_piece(e2, e4).expect("e2-e4 onto an empty square");
        assert!(!board.is_occupied(e2));
        assert_eq!(board.piece_at(e4).map(|p| p.kind), Some(PieceKind::Pawn));

        let err = board.move_piece(sq("d1").unwrap(), sq("d2").unwrap()).unwrap_err();
        assert!(matches!(err, BoardError::SquareOccupied(_)));
    }

    #[test]
    fn capture_removes_target_from_piece_list() {
        let mut board = Board::from_placement("8/8/8/3p4/4P3/8/8/8").unwrap();
        let captured = board.capture(sq("e4").unwrap(), sq("d5").unwrap()).unwrap();
        assert_eq!(captured, Piece::new(Color::Dark, PieceKind::Pawn));
        assert_eq!(board.pieces().len(), 1);
        assert_eq!(board.to_placement(), "8/8/8/3P4/8/8/8/8");
    }

    #[test]
    fn capture_of_own_colour_is_rejected() {
        let mut board = Board::starting_position();
        let err = board.capture(sq("d1").unwrap(), sq("d2").unwrap()).unwrap_err();
        assert!(matches!(err, BoardError::NotACapture(_, _)));
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn captures_follows_colour_parity() {
        let board = Board::from_placement("8/8/8/3p4/4P3/8/3P4/8").unwrap();
        let e4 = sq("e4").unwrap();
        assert!(board.captures(e4, sq("d5").unwrap()));
        assert!(board.captures(sq("d5").unwrap(), e4));
        assert!(!board.captures(e4, sq("d2").unwrap()));
        assert!(!board.captures(e4, sq("a1").unwrap()));
        assert!(!board.captures(sq("a1").unwrap(), e4));
        assert!(!board.captures(sq("a1").unwrap(), sq("h8").unwrap()));
    }

    #[test]
    fn remove_from_empty_square_fails() {
        let mut board = Board::empty();
        assert!(matches!(board.remove(10), Err(BoardError::EmptySquare(10))));
        assert!(matches!(board.remove(64), Err(BoardError::SquareOutOfRange(64))));
    }

    #[test]
    fn in_board_bounds() {
        assert!(Board::in_board(0, 0));
        assert!(Board::in_board(7, 7));
        assert!(!Board::in_board(-1, 3));
        assert!(!Board::in_board(3, 8));
    }
}

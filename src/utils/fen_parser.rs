//! FEN piece-placement parser.
//!
//! Builds a `Board` from the piece-placement field of Forsyth-Edwards
//! Notation. Ranks are separated by `/` and listed from rank 8 down to
//! rank 1; letters place pieces (uppercase Light, lowercase Dark) and digits
//! skip that many empty squares.

use log::debug;

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::errors::{BoardError, BoardResult};

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parse either a bare placement field or a full FEN record. Only the
/// placement is used; side to move, castling and clocks are ignored.
pub fn parse_fen(fen: &str) -> BoardResult<Board> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(BoardError::EmptyFen)?;

    let ignored: Vec<&str> = parts.collect();
    if !ignored.is_empty() {
        debug!("ignoring FEN fields after placement: {}", ignored.join(" "));
    }

    parse_placement(placement)
}

pub fn parse_placement(placement: &str) -> BoardResult<Board> {
    if placement.is_empty() {
        return Err(BoardError::EmptyFen);
    }

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(BoardError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(BoardError::InvalidFenToken(ch));
                }
                file += empty_count as usize;
                if file > 8 {
                    return Err(BoardError::RankOverflow(fen_rank_idx + 1));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(BoardError::InvalidFenToken(ch))?;

            if file >= 8 {
                return Err(BoardError::RankOverflow(fen_rank_idx + 1));
            }

            board.place((board_rank * 8 + file) as Square, piece)?;
            file += 1;
        }

        if file != 8 {
            return Err(BoardError::RankUnderfilled(fen_rank_idx + 1, file));
        }
    }

    debug!("parsed placement {placement} ({} pieces)", board.pieces().len());
    Ok(board)
}

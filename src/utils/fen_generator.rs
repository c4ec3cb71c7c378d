use crate::board::board::Board;

/// Piece-placement field for `board`, rank 8 first.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_placement;
    use crate::board::board::Board;
    use crate::utils::fen_parser::STARTING_PLACEMENT;

    #[test]
    fn starting_position_generates_starting_placement() {
        assert_eq!(generate_placement(&Board::starting_position()), STARTING_PLACEMENT);
    }

    #[test]
    fn empty_board_is_all_eights() {
        assert_eq!(generate_placement(&Board::empty()), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn mixed_runs_are_compressed() {
        let placement = "r3k2r/pp3ppp/8/3Pp3/8/8/PPP2PPP/R3K2R";
        let board = Board::from_placement(placement).expect("placement should parse");
        assert_eq!(generate_placement(&board), placement);
    }
}

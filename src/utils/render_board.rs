//! Terminal board printout.
//!
//! The editor's "print board" action: one line per rank from rank 8 down,
//! FEN letters for pieces and `.` for empty squares, framed with file and
//! rank labels.

use crate::board::board::Board;

/// Render the board to a multi-line string.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match board.piece_at(rank * 8 + file) {
                Some(piece) => out.push(piece.fen_char()),
                None => out.push('.'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board::board::Board;

    #[test]
    fn starting_position_rows() {
        let text = render_board(&Board::starting_position());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[5], "4 . . . . . . . . 4");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }
}

//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! internal `0..64` square index used by the board and the terminal editor.

use crate::board::board_types::Square;
use crate::errors::{BoardError, BoardResult};

/// Convert algebraic notation (for example: "e4") to a square index.
/// Accepts upper- or lowercase files.
#[inline]
pub fn algebraic_to_square(square: &str) -> BoardResult<Square> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(BoardError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardError::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> BoardResult<String> {
    if square > 63 {
        return Err(BoardError::SquareOutOfRange(square));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Algebraic name for display; off-board indices print as plain numbers.
pub fn square_label(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_label, square_to_algebraic};
    use crate::errors::BoardError;

    #[test]
    fn corner_squares_convert() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("H8").expect("H8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(28).expect("28 should convert"), "e4");
    }

    #[test]
    fn rejects_malformed_squares() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(BoardError::InvalidAlgebraic(_))),
                "{bad} should not parse"
            );
        }
        assert!(matches!(square_to_algebraic(64), Err(BoardError::SquareOutOfRange(64))));
    }

    #[test]
    fn label_falls_back_to_index() {
        assert_eq!(square_label(28), "e4");
        assert_eq!(square_label(64), "64");
    }
}

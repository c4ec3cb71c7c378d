use std::fmt;

use crate::board::board_types::{PieceKind, Square};
use crate::utils::algebraic::square_label;

/// A destination the selected piece may move to.
///
/// This is what the editor draws as a hint: a plain dot for quiet moves,
/// a ring when `captured` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
}

impl CandidateMove {
    #[inline]
    pub fn quiet(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
        }
    }

    #[inline]
    pub fn capture(from: Square, to: Square, piece: PieceKind, captured: PieceKind) -> Self {
        Self {
            from,
            to,
            piece,
            captured: Some(captured),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", square_label(self.from), square_label(self.to))
    }
}

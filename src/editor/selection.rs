//! Click-and-drag interaction with the board.
//!
//! `EditorSession` models what happens between mouse events: a left press
//! selects the piece under the pointer and computes its hints, a left
//! release over one of those hints moves (or captures with) the piece. The
//! piece follows the pointer while the button is held.
//!
//! Nothing here draws; a front-end reads `selected`, `is_holding` and
//! `hints` each frame.

use log::{debug, info};

use crate::board::board::Board;
use crate::board::board_types::{Piece, Square};
use crate::board::tile_geometry::{square_from_tile, tile_from_position, tile_from_square, Tile};
use crate::errors::{BoardError, BoardResult};
use crate::move_generation::move_generator::possible_moves;
use crate::moves::move_descriptions::CandidateMove;

/// The currently selected piece and the moves computed when it was picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub piece: Piece,
    pub hints: Vec<CandidateMove>,
}

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing was selected.
    Idle,
    /// The release tile was not a hint; the selection stays.
    Kept,
    /// The selected piece moved.
    Moved(CandidateMove),
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    board: Board,
    side: u32,
    selection: Option<Selection>,
    holding: bool,
}

impl EditorSession {
    /// `side` is the tile side length in pixels.
    pub fn new(board: Board, side: u32) -> Self {
        Self {
            board,
            side,
            selection: None,
            holding: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Replace the position. Any selection is dropped.
    pub fn load(&mut self, board: Board) {
        self.board = board;
        self.selection = None;
        self.holding = false;
        info!("loaded position {}", self.board.to_placement());
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Hints of the selected piece, empty when nothing is selected.
    pub fn hints(&self) -> &[CandidateMove] {
        match &self.selection {
            Some(selection) => &selection.hints,
            None => &[],
        }
    }

    /// The selected piece being dragged, if the button is held.
    pub fn held_piece(&self) -> Option<&Selection> {
        if self.holding {
            self.selection.as_ref()
        } else {
            None
        }
    }

    /// The hint matching `tile`, if the selected piece can move there.
    pub fn can_move_to(&self, tile: Tile) -> Option<CandidateMove> {
        let target = square_from_tile(tile);
        self.hints().iter().copied().find(|m| m.to == target)
    }

    /// Left button pressed at a pixel position.
    ///
    /// Drops the current selection, selects whatever piece is under the
    /// pointer and starts holding. Returns the new selection's square.
    pub fn press(&mut self, px: u32, py: u32) -> Option<Square> {
        self.press_tile(tile_from_position(px, py, self.side))
    }

    /// Left button released at a pixel position.
    pub fn release(&mut self, px: u32, py: u32) -> BoardResult<ReleaseOutcome> {
        self.release_tile(tile_from_position(px, py, self.side))
    }

    fn press_tile(&mut self, tile: Option<Tile>) -> Option<Square> {
        self.unselect();
        self.holding = true;
        self.select(square_from_tile(tile?))
    }

    fn release_tile(&mut self, tile: Option<Tile>) -> BoardResult<ReleaseOutcome> {
        self.holding = false;
        if self.selection.is_none() {
            return Ok(ReleaseOutcome::Idle);
        }

        let Some(candidate) = tile.and_then(|t| self.can_move_to(t)) else {
            return Ok(ReleaseOutcome::Kept);
        };

        self.apply(candidate)?;
        Ok(ReleaseOutcome::Moved(candidate))
    }

    /// Select the piece on `square` without touching the hold state.
    /// An empty square clears the selection.
    pub fn select(&mut self, square: Square) -> Option<Square> {
        self.selection = None;
        let piece = self.board.piece_at(square)?;
        let hints = possible_moves(&self.board, square).ok()?;
        debug!("selected {} on {square} with {} hints", piece.fen_char(), hints.len());
        self.selection = Some(Selection {
            square,
            piece,
            hints,
        });
        Some(square)
    }

    pub fn unselect(&mut self) {
        self.selection = None;
    }

    /// Press then release on the same square, which selects without moving.
    /// Works on tiles directly, so any tile side is accepted.
    pub fn click_square(&mut self, square: Square) -> Option<Square> {
        let selected = self.press_tile(Some(tile_from_square(square)));
        self.holding = false;
        selected
    }

    /// Press on `from`, release on `to`.
    pub fn drag(&mut self, from: Square, to: Square) -> BoardResult<ReleaseOutcome> {
        self.press_tile(Some(tile_from_square(from)));
        self.release_tile(Some(tile_from_square(to)))
    }

    /// Move the piece on `from` to `to` if that is one of its possible moves.
    pub fn move_piece(&mut self, from: Square, to: Square) -> BoardResult<CandidateMove> {
        self.select(from).ok_or(BoardError::EmptySquare(from))?;
        let candidate = self
            .hints()
            .iter()
            .copied()
            .find(|m| m.to == to)
            .ok_or(BoardError::NotAPossibleMove(from, to))?;
        self.apply(candidate)?;
        Ok(candidate)
    }

    fn apply(&mut self, candidate: CandidateMove) -> BoardResult<()> {
        if candidate.is_capture() {
            self.board.capture(candidate.from, candidate.to)?;
        } else {
            self.board.move_piece(candidate.from, candidate.to)?;
        }
        info!("{candidate}");
        self.unselect();
        Ok(())
    }
}

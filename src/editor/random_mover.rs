//! Random move picker.
//!
//! Chooses uniformly among every candidate move of one colour. The editor
//! uses it to shuffle a position around without clicking.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board::board::Board;
use crate::board::board_types::Color;
use crate::move_generation::move_generator::all_possible_moves;
use crate::moves::move_descriptions::CandidateMove;

/// `None` when `color` has no pieces or none of them can move.
pub fn random_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<CandidateMove> {
    let candidates = all_possible_moves(board, color);
    debug!("random mover: {} candidates for {color:?}", candidates.len());
    candidates.as_slice().choose(rng).copied()
}

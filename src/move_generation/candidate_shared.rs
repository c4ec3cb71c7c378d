use crate::board::board::Board;
use crate::board::board_types::*;
use crate::moves::move_descriptions::CandidateMove;

/// Push one candidate per set bit of `targets`, marking squares held by the
/// opposing colour as captures. `targets` must already exclude own pieces.
pub fn push_targets(
    board: &Board,
    from: Square,
    piece: Piece,
    mut targets: u64,
    out: &mut Vec<CandidateMove>,
) {
    let enemy_occ = board.occupancy(piece.color.opposite());

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let captured = if (1u64 << to) & enemy_occ != 0 {
            board.piece_at(to).map(|p| p.kind)
        } else {
            None
        };
        out.push(CandidateMove {
            from,
            to,
            piece: piece.kind,
            captured,
        });
        targets &= targets - 1;
    }
}

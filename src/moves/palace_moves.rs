//! General and Guard move generation.
//!
//! Both kinds share one algorithm: a single step confined to the owner's
//! palace. The allowed step directions come from the static per-role table in
//! `janggi_rules`, so diagonal steps only exist along the palace diagonals.

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::Palace;
use crate::game_state::janggi_types::{Piece, Square, SquareSet};
use crate::move_generation::legal_move_shared::insert_if_landable;

pub fn palace_piece_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    let palace = Palace::of(piece.color());
    let mut out = SquareSet::EMPTY;

    let Some(role) = palace.role_of(from) else {
        return out;
    };

    for &direction in role.steps() {
        if let Some(to) = from.step(direction) {
            if palace.contains(to) {
                insert_if_landable(board, piece, to, &mut out);
            }
        }
    }

    out
}

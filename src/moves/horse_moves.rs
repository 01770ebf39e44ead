//! Horse move generation.
//!
//! One orthogonal step onto an empty leg cell, then one diagonal step outward.
//! An occupied leg blocks both destinations on that side.

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::janggi_types::{Piece, Square, SquareSet};
use crate::move_generation::legal_move_shared::{add_steps, insert_if_landable, perpendiculars};

pub fn horse_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    let mut out = SquareSet::EMPTY;

    for direction in ORTHOGONAL_DIRECTIONS {
        let Some(leg) = from.step(direction) else {
            continue;
        };
        if !board.is_empty_at(leg) {
            continue;
        }

        for side in perpendiculars(direction) {
            if let Some(to) = leg.step(add_steps(direction, side)) {
                insert_if_landable(board, piece, to, &mut out);
            }
        }
    }

    out
}

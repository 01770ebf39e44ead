//! Elephant move generation.
//!
//! One orthogonal step, then two diagonal steps outward. Both the leg cell and
//! the first diagonal cell must be empty.

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::janggi_types::{Piece, Square, SquareSet};
use crate::move_generation::legal_move_shared::{add_steps, insert_if_landable, perpendiculars};

pub fn elephant_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    let mut out = SquareSet::EMPTY;

    for direction in ORTHOGONAL_DIRECTIONS {
        let Some(leg) = from.step(direction) else {
            continue;
        };
        if !board.is_empty_at(leg) {
            continue;
        }

        for side in perpendiculars(direction) {
            let diagonal = add_steps(direction, side);
            let Some(middle) = leg.step(diagonal) else {
                continue;
            };
            if !board.is_empty_at(middle) {
                continue;
            }
            if let Some(to) = middle.step(diagonal) {
                insert_if_landable(board, piece, to, &mut out);
            }
        }
    }

    out
}

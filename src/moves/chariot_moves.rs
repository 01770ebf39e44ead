//! Chariot move generation.
//!
//! Unlimited orthogonal slides, stopped by the first occupant (captured when
//! it is an opponent). On a palace corner or center the chariot also slides
//! along the palace diagonals without leaving the palace.

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::{
    palace_cell, Palace, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use crate::game_state::janggi_types::{Piece, Square, SquareSet};

pub fn chariot_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    let mut out = SquareSet::EMPTY;

    for direction in ORTHOGONAL_DIRECTIONS {
        trace_slide(piece, from, direction, None, board, &mut out);
    }

    if let Some((palace, role)) = palace_cell(from) {
        if role.on_diagonal() {
            for direction in DIAGONAL_DIRECTIONS {
                trace_slide(piece, from, direction, Some(palace), board, &mut out);
            }
        }
    }

    out
}

fn trace_slide(
    piece: &Piece,
    from: Square,
    direction: (i8, i8),
    within: Option<Palace>,
    board: &Board,
    out: &mut SquareSet,
) {
    let mut cursor = from;

    while let Some(next) = cursor.step(direction) {
        if within.is_some_and(|palace| !palace.contains(next)) {
            break;
        }

        match board.occupant(next) {
            None => out.insert(next),
            Some(occupant) => {
                if occupant.is_opponent_of(piece) {
                    out.insert(next);
                }
                break;
            }
        }

        cursor = next;
    }
}

//! Cannon move generation.
//!
//! A cannon must jump exactly one screen piece before it can land or capture.
//! Cannons can neither screen nor be captured by another cannon. From a palace
//! corner the same rule applies along the palace diagonal through the center.

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::{
    palace_cell, Palace, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use crate::game_state::janggi_types::{Piece, PieceKind, Square, SquareSet};

pub fn cannon_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    let mut out = SquareSet::EMPTY;

    for direction in ORTHOGONAL_DIRECTIONS {
        trace_jump(piece, from, direction, None, board, &mut out);
    }

    if let Some((palace, role)) = palace_cell(from) {
        if role.on_diagonal() {
            for direction in DIAGONAL_DIRECTIONS {
                trace_jump(piece, from, direction, Some(palace), board, &mut out);
            }
        }
    }

    out
}

fn trace_jump(
    piece: &Piece,
    from: Square,
    direction: (i8, i8),
    within: Option<Palace>,
    board: &Board,
    out: &mut SquareSet,
) {
    let mut cursor = from;
    let mut screened = false;

    while let Some(next) = cursor.step(direction) {
        if within.is_some_and(|palace| !palace.contains(next)) {
            break;
        }
        cursor = next;

        let Some(occupant) = board.occupant(next) else {
            if screened {
                out.insert(next);
            }
            continue;
        };

        if occupant.kind() == PieceKind::Cannon {
            break;
        }
        if !screened {
            screened = true;
            continue;
        }
        if occupant.is_opponent_of(piece) {
            out.insert(next);
        }
        break;
    }
}

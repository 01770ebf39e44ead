//! Check and checkmate detection.
//!
//! Both detectors work from pseudo-legal destination sets. Checkmate uses the
//! restricted definition: only the General's own mobility is considered, not
//! whether another piece could block or capture the attacker.

use crate::game_state::board::Board;
use crate::game_state::janggi_types::{Color, Piece, Square};
use crate::move_generation::pseudo_legal_moves::{attacked_squares, pseudo_legal_moves};

#[inline]
pub fn general_square(board: &Board, color: Color) -> Option<Square> {
    board.general_square(color)
}

/// True iff some opposing piece can reach `color`'s General.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(general) = general_square(board, color) else {
        return false;
    };
    is_square_attacked(board, general, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| pseudo_legal_moves(&piece, from, board).contains(square))
}

/// True iff every destination of `color`'s General is covered by an opposing
/// piece. A General with no destinations at all counts as checkmated.
pub fn is_checkmated(board: &Board, color: Color) -> bool {
    let Some(general_at) = general_square(board, color) else {
        return false;
    };
    let Some(general) = board.occupant(general_at) else {
        return false;
    };

    let escapes = pseudo_legal_moves(&general, general_at, board);
    let covered = attacked_squares(board, color.opposite());
    escapes.is_subset(covered)
}

/// Every `attacker_color` piece whose destinations include `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, Piece)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, piece)| pseudo_legal_moves(piece, *from, board).contains(square))
        .collect()
}

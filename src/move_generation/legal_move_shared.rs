use crate::game_state::board::Board;
use crate::game_state::janggi_types::{Piece, Square, SquareSet};

/// True when `mover` may end on `square`: the cell is empty or holds an
/// opposing piece.
#[inline]
pub fn can_land(board: &Board, mover: &Piece, square: Square) -> bool {
    match board.occupant(square) {
        None => true,
        Some(occupant) => occupant.is_opponent_of(mover),
    }
}

#[inline]
pub fn insert_if_landable(board: &Board, mover: &Piece, square: Square, out: &mut SquareSet) {
    if can_land(board, mover, square) {
        out.insert(square);
    }
}

/// Sum of two direction vectors.
#[inline]
pub const fn add_steps(a: (i8, i8), b: (i8, i8)) -> (i8, i8) {
    (a.0 + b.0, a.1 + b.1)
}

/// The two directions perpendicular to an orthogonal `direction`.
#[inline]
pub const fn perpendiculars(direction: (i8, i8)) -> [(i8, i8); 2] {
    [(direction.1, direction.0), (-direction.1, -direction.0)]
}

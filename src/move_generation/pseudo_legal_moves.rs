//! Per-kind dispatch of pseudo-legal destination generation.
//!
//! Pseudo-legal destinations obey each piece's movement and blocking rules but
//! ignore whether the move would expose the mover's own General.

use crate::game_state::board::Board;
use crate::game_state::janggi_types::{Color, Piece, PieceKind, Square, SquareSet};
use crate::moves::cannon_moves::cannon_moves;
use crate::moves::chariot_moves::chariot_moves;
use crate::moves::elephant_moves::elephant_moves;
use crate::moves::horse_moves::horse_moves;
use crate::moves::palace_moves::palace_piece_moves;
use crate::moves::soldier_moves::soldier_moves;

#[inline]
pub fn pseudo_legal_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    match piece.kind() {
        PieceKind::General | PieceKind::Guard => palace_piece_moves(piece, from, board),
        PieceKind::Chariot => chariot_moves(piece, from, board),
        PieceKind::Horse => horse_moves(piece, from, board),
        PieceKind::Elephant => elephant_moves(piece, from, board),
        PieceKind::Cannon => cannon_moves(piece, from, board),
        PieceKind::Soldier => soldier_moves(piece, from, board),
    }
}

/// Union of the pseudo-legal destinations of every `color` piece.
pub fn attacked_squares(board: &Board, color: Color) -> SquareSet {
    board
        .pieces_of(color)
        .fold(SquareSet::EMPTY, |acc, (square, piece)| {
            acc | pseudo_legal_moves(&piece, square, board)
        })
}

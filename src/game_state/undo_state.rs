use crate::game_state::janggi_types::{Piece, Square};

/// Single undo record for a simulated move.
///
/// Holds everything needed to put both touched cells back exactly as they
/// were: the piece that moved and whatever occupied the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub displaced_piece: Option<Piece>,
}

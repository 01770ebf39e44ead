//! Reversible move application.
//!
//! `simulate_move` performs the two cell writes of a move and hands back an
//! `UndoState`; `revert_move` restores both cells from it. Keeping the record
//! scoped to one call is what lets the turn engine test a move in place and
//! still leave the board untouched when the move is refused.

use log::trace;

use crate::game_state::board::Board;
use crate::game_state::janggi_types::Square;
use crate::game_state::undo_state::UndoState;

/// Relocate the piece on `from` to `to`, clearing `from`.
///
/// Returns `None` (and writes nothing) when `from` is empty.
pub fn simulate_move(board: &mut Board, from: Square, to: Square) -> Option<UndoState> {
    let moved_piece = board.occupant(from)?;
    let displaced_piece = board.set(to, Some(moved_piece));
    board.set(from, None);

    trace!("simulated {moved_piece} {from}->{to}, displaced {displaced_piece:?}");

    Some(UndoState {
        from,
        to,
        moved_piece,
        displaced_piece,
    })
}

/// Undo a `simulate_move`, restoring both cells exactly.
pub fn revert_move(board: &mut Board, undo: UndoState) {
    board.set(undo.to, undo.displaced_piece);
    board.set(undo.from, Some(undo.moved_piece));

    trace!(
        "reverted {} {}->{}",
        undo.moved_piece,
        undo.from,
        undo.to
    );
}

#[cfg(test)]
mod tests {
    use super::{revert_move, simulate_move};
    use crate::game_state::board::Board;
    use crate::game_state::janggi_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::layout_parser::starting_board;

    #[test]
    fn capture_then_revert_restores_both_cells() {
        let mut board = Board::empty();
        let from = algebraic_to_square("a1").expect("a1");
        let to = algebraic_to_square("a7").expect("a7");
        let chariot = Piece::new(PieceKind::Chariot, Color::Red, 1);
        let soldier = Piece::new(PieceKind::Soldier, Color::Blue, 1);
        board.set(from, Some(chariot));
        board.set(to, Some(soldier));
        let before = board.clone();

        let undo = simulate_move(&mut board, from, to).expect("source is occupied");
        assert_eq!(undo.displaced_piece, Some(soldier));
        assert_eq!(board.occupant(to), Some(chariot));
        assert!(board.is_empty_at(from));

        revert_move(&mut board, undo);
        assert_eq!(board, before);
    }

    #[test]
    fn empty_source_writes_nothing() {
        let mut board = starting_board();
        let before = board.clone();
        let from = algebraic_to_square("e5").expect("e5");
        let to = algebraic_to_square("e6").expect("e6");

        assert!(simulate_move(&mut board, from, to).is_none());
        assert_eq!(board, before);
    }
}

//! Soldier move generation.
//!
//! A soldier steps forward or sideways, never back. Inside the opposing
//! palace it may also step diagonally forward along the palace diagonals.

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::Palace;
use crate::game_state::janggi_types::{Piece, Square, SquareSet};
use crate::move_generation::legal_move_shared::insert_if_landable;

pub fn soldier_moves(piece: &Piece, from: Square, board: &Board) -> SquareSet {
    let forward = piece.color().forward();
    let mut out = SquareSet::EMPTY;

    for (d_column, d_row) in [(0, forward), (-1, 0), (1, 0)] {
        if let Some(to) = from.offset(d_column, d_row) {
            insert_if_landable(board, piece, to, &mut out);
        }
    }

    let enemy_palace = Palace::of(piece.color().opposite());
    if let Some(role) = enemy_palace.role_of(from) {
        if role.on_diagonal() {
            for d_column in [-1, 1] {
                if let Some(to) = from.offset(d_column, forward) {
                    if enemy_palace.role_of(to).is_some_and(|r| r.on_diagonal()) {
                        insert_if_landable(board, piece, to, &mut out);
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::soldier_moves;
    use crate::game_state::board::Board;
    use crate::game_state::janggi_types::{Color, Piece, PieceKind, Square, SquareSet};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn squares(list: &[&str]) -> SquareSet {
        list.iter().map(|text| sq(text)).collect()
    }

    #[test]
    fn red_soldier_moves_up_and_sideways() {
        let mut board = Board::empty();
        let soldier = Piece::new(PieceKind::Soldier, Color::Red, 3);
        board.set(sq("e4"), Some(soldier));

        assert_eq!(
            soldier_moves(&soldier, sq("e4"), &board),
            squares(&["e5", "d4", "f4"])
        );
    }

    #[test]
    fn blue_soldier_moves_down_and_stops_at_edges() {
        let mut board = Board::empty();
        let soldier = Piece::new(PieceKind::Soldier, Color::Blue, 1);
        board.set(sq("a7"), Some(soldier));

        assert_eq!(soldier_moves(&soldier, sq("a7"), &board), squares(&["a6", "b7"]));
        assert_eq!(soldier_moves(&soldier, sq("i1"), &board), squares(&["h1"]));
    }

    #[test]
    fn soldier_cannot_step_onto_own_piece() {
        let mut board = Board::empty();
        let soldier = Piece::new(PieceKind::Soldier, Color::Red, 1);
        board.set(sq("c4"), Some(soldier));
        board.set(sq("c5"), Some(Piece::new(PieceKind::Horse, Color::Red, 1)));
        board.set(sq("d4"), Some(Piece::new(PieceKind::Horse, Color::Blue, 1)));

        assert_eq!(soldier_moves(&soldier, sq("c4"), &board), squares(&["b4", "d4"]));
    }

    #[test]
    fn red_soldier_follows_blue_palace_diagonals_forward() {
        let board = Board::empty();
        let soldier = Piece::new(PieceKind::Soldier, Color::Red, 2);

        assert_eq!(
            soldier_moves(&soldier, sq("d8"), &board),
            squares(&["d9", "c8", "e8", "e9"])
        );
        assert_eq!(
            soldier_moves(&soldier, sq("e9"), &board),
            squares(&["e10", "d9", "f9", "d10", "f10"])
        );
        // Edge midpoints have no diagonal.
        assert_eq!(
            soldier_moves(&soldier, sq("e8"), &board),
            squares(&["e9", "d8", "f8"])
        );
    }

    #[test]
    fn blue_soldier_follows_red_palace_diagonals_forward() {
        let board = Board::empty();
        let soldier = Piece::new(PieceKind::Soldier, Color::Blue, 4);

        assert_eq!(
            soldier_moves(&soldier, sq("f3"), &board),
            squares(&["f2", "e3", "g3", "e2"])
        );
        assert_eq!(
            soldier_moves(&soldier, sq("e2"), &board),
            squares(&["e1", "d2", "f2", "d1", "f1"])
        );
    }

    #[test]
    fn soldier_in_own_palace_has_no_diagonals() {
        let board = Board::empty();
        let soldier = Piece::new(PieceKind::Soldier, Color::Red, 1);
        assert_eq!(
            soldier_moves(&soldier, sq("d1"), &board),
            squares(&["d2", "c1", "e1"])
        );
    }
}

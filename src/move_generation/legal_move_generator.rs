//! Enumeration of every move the turn engine would accept.
//!
//! Runs each pseudo-legal destination through the same simulate/check/revert
//! sequence the engine uses, on a scratch copy of the board. This is a rules
//! query, not a search: no move is scored or preferred.

use crate::game_state::board::Board;
use crate::game_state::janggi_types::Color;
use crate::move_generation::legal_move_apply::{revert_move, simulate_move};
use crate::move_generation::legal_move_checks::{is_checkmated, is_in_check};
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;
use crate::moves::move_descriptions::PlayerMove;

/// Legal moves for `side`, assuming it is `side`'s turn in a live game.
///
/// A checkmated side has no legal moves. The pass, when legal, is reported
/// once, anchored on the General (or on any piece if the General is absent).
pub fn generate_legal_moves(board: &Board, side: Color) -> Vec<PlayerMove> {
    let in_check = is_in_check(board, side);
    if in_check && is_checkmated(board, side) {
        return Vec::new();
    }

    let mut scratch = board.clone();
    let mut legal = Vec::<PlayerMove>::with_capacity(64);

    for (from, piece) in board.pieces_of(side) {
        for to in pseudo_legal_moves(&piece, from, board) {
            let Some(undo) = simulate_move(&mut scratch, from, to) else {
                continue;
            };
            let exposed = is_in_check(&scratch, side);
            revert_move(&mut scratch, undo);

            if !exposed {
                legal.push(PlayerMove::Step { from, to });
            }
        }
    }

    if !in_check {
        let anchor = board
            .general_square(side)
            .or_else(|| board.pieces_of(side).map(|(square, _)| square).next());
        if let Some(at) = anchor {
            legal.push(PlayerMove::Pass { at });
        }
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::generate_legal_moves;
    use crate::game_state::janggi_types::Color;
    use crate::moves::move_descriptions::PlayerMove;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::layout_parser::{parse_layout, starting_board};

    #[test]
    fn opening_moves_include_a_pass_and_soldier_pushes() {
        let board = starting_board();
        let moves = generate_legal_moves(&board, Color::Blue);
        let c7 = algebraic_to_square("c7").expect("c7");
        let c6 = algebraic_to_square("c6").expect("c6");

        assert!(moves.contains(&PlayerMove::Step { from: c7, to: c6 }));
        assert_eq!(moves.iter().filter(|mv| mv.is_pass()).count(), 1);
        assert!(moves
            .iter()
            .all(|mv| board.occupant(mv.source()).map(|p| p.color()) == Some(Color::Blue)));
    }

    #[test]
    fn side_in_check_has_no_pass_and_only_escapes() {
        let board = parse_layout("4ak3/9/9/9/9/5R3/9/9/9/3K5").expect("layout should parse");
        let moves = generate_legal_moves(&board, Color::Blue);
        let f10 = algebraic_to_square("f10").expect("f10");
        let e9 = algebraic_to_square("e9").expect("e9");

        assert!(moves.iter().all(|mv| !mv.is_pass()));
        assert!(moves.contains(&PlayerMove::Step { from: f10, to: e9 }));
        assert!(!moves.contains(&PlayerMove::Step {
            from: f10,
            to: algebraic_to_square("f9").expect("f9"),
        }));
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        let board = parse_layout("4ak3/4a4/9/9/9/5R3/9/9/9/3K5").expect("layout should parse");
        assert!(generate_legal_moves(&board, Color::Blue).is_empty());
    }
}

//! Plain-text board renderer.
//!
//! Draws the grid with the Blue side on top, one four-character piece label
//! per cell, for debugging, tests and the text front end.

use crate::game_state::board::Board;
use crate::game_state::janggi_types::Square;

const EMPTY_CELL: &str = " ·  ";

/// Render the board with column letters and 1-based row numbers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let header = column_header();

    out.push_str(&header);
    out.push('\n');

    for row in (0..Square::ROWS).rev() {
        out.push_str(&format!("{:>2} ", row + 1));

        for column in 0..Square::COLUMNS {
            let occupant = Square::new(column, row).and_then(|square| board.occupant(square));
            match occupant {
                Some(piece) => out.push_str(&format!("{:<4}", piece.label())),
                None => out.push_str(EMPTY_CELL),
            }

            if column + 1 < Square::COLUMNS {
                out.push(' ');
            }
        }

        out.push_str(&format!(" {}", row + 1));
        out.push('\n');
    }

    out.push_str(&header);

    out
}

fn column_header() -> String {
    let letters: Vec<String> = (b'a'..=b'i')
        .map(|letter| format!(" {}  ", char::from(letter)))
        .collect();
    format!("   {}", letters.join(" "))
}

//! Layout-notation-to-Board parser.
//!
//! Layout notation lists rows from the Blue side (row 10) down to the Red side
//! (row 1), separated by `/`. Digits count empty cells; letters are pieces:
//! `k` general, `a` guard, `r` chariot, `h` horse, `e` elephant, `c` cannon,
//! `p` soldier. Uppercase is Red, lowercase is Blue.
//!
//! Piece ordinals are assigned in board order starting from `a1`, so the
//! canonical layout yields the usual labels (`RCh1` on a1, `RCh2` on i1).

use crate::game_state::board::Board;
use crate::game_state::janggi_rules::STARTING_LAYOUT;
use crate::game_state::janggi_types::{Color, Piece, PieceKind, Square};
use crate::janggi_errors::JanggiErrors;

pub fn parse_layout(layout: &str) -> Result<Board, JanggiErrors> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != Square::ROWS as usize {
        return Err(JanggiErrors::InvalidLayout(format!(
            "expected {} rows, found {}",
            Square::ROWS,
            rows.len()
        )));
    }

    let mut placed = Vec::<(Square, Color, PieceKind)>::new();

    for (layout_row_idx, row_str) in rows.iter().enumerate() {
        let row = (Square::ROWS as usize - 1 - layout_row_idx) as u8;
        let mut column = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=Square::COLUMNS as u32).contains(&empty_count) {
                    return Err(JanggiErrors::InvalidLayout(format!(
                        "invalid empty-cell count '{ch}'"
                    )));
                }
                column += empty_count as usize;
                if column > Square::COLUMNS as usize {
                    return Err(too_many_columns(row));
                }
                continue;
            }

            let (color, kind) = piece_from_layout_char(ch).ok_or_else(|| {
                JanggiErrors::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;

            let square = u8::try_from(column)
                .ok()
                .and_then(|column| Square::new(column, row))
                .ok_or_else(|| too_many_columns(row))?;
            placed.push((square, color, kind));
            column += 1;
        }

        if column != Square::COLUMNS as usize {
            return Err(JanggiErrors::InvalidLayout(format!(
                "row {} covers {column} columns instead of {}",
                row + 1,
                Square::COLUMNS
            )));
        }
    }

    placed.sort_by_key(|(square, _, _)| square.index());

    let mut ordinals = [[0u8; 7]; 2];
    let mut board = Board::empty();
    for (square, color, kind) in placed {
        let ordinal = &mut ordinals[color.index()][kind.index()];
        *ordinal += 1;
        board.set(square, Some(Piece::new(kind, color, *ordinal)));
    }

    Ok(board)
}

fn too_many_columns(row: u8) -> JanggiErrors {
    JanggiErrors::InvalidLayout(format!("row {} has too many columns", row + 1))
}

/// Board of the canonical starting position.
pub fn starting_board() -> Board {
    parse_layout(STARTING_LAYOUT).expect("starting layout should always parse")
}

pub fn piece_from_layout_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Red
    } else if ch.is_ascii_lowercase() {
        Color::Blue
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'k' => PieceKind::General,
        'a' => PieceKind::Guard,
        'r' => PieceKind::Chariot,
        'h' => PieceKind::Horse,
        'e' => PieceKind::Elephant,
        'c' => PieceKind::Cannon,
        'p' => PieceKind::Soldier,
        _ => return None,
    };

    Some((color, kind))
}

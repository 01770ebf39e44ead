use crate::game_state::board::Board;
use crate::game_state::janggi_types::{Color, Piece, PieceKind, Square};

/// Board-to-layout-notation writer; the inverse of `parse_layout`.
pub fn generate_layout(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..Square::ROWS).rev() {
        let mut empty_count = 0u8;

        for column in 0..Square::COLUMNS {
            let occupant = Square::new(column, row).and_then(|square| board.occupant(square));
            if let Some(piece) = occupant {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_layout_char(&piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_layout_char(piece: &Piece) -> char {
    let base = match piece.kind() {
        PieceKind::General => 'k',
        PieceKind::Guard => 'a',
        PieceKind::Chariot => 'r',
        PieceKind::Horse => 'h',
        PieceKind::Elephant => 'e',
        PieceKind::Cannon => 'c',
        PieceKind::Soldier => 'p',
    };

    match piece.color() {
        Color::Red => base.to_ascii_uppercase(),
        Color::Blue => base,
    }
}

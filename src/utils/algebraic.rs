//! Square conversions for textual coordinates.
//!
//! Converts between human-readable coordinates (`e2`, `a10`) and `Square`
//! values. Columns are the letters `a`-`i`; rows are 1-based numbers
//! `1`-`10`. Anything else is an `InvalidCoordinate` error.

use std::str::FromStr;

use crate::game_state::janggi_types::Square;
use crate::janggi_errors::JanggiErrors;

/// Convert a textual coordinate (for example: "e2") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, JanggiErrors> {
    let invalid = || JanggiErrors::InvalidCoordinate(text.to_owned());

    let mut chars = text.chars();
    let column_char = chars.next().ok_or_else(invalid)?;
    let row_part = chars.as_str();

    if !('a'..='i').contains(&column_char) {
        return Err(invalid());
    }
    if row_part.is_empty()
        || row_part.len() > 2
        || row_part.starts_with('0')
        || !row_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let row_number: u8 = row_part.parse().map_err(|_| invalid())?;
    if !(1..=Square::ROWS).contains(&row_number) {
        return Err(invalid());
    }

    let column = column_char as u8 - b'a';
    Square::new(column, row_number - 1).ok_or_else(invalid)
}

/// Convert a square to its textual coordinate (for example: "e2").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Checked conversion from zero-based `(column, row)` indices.
pub fn square_from_indices(column: u8, row: u8) -> Result<Square, JanggiErrors> {
    Square::new(column, row).ok_or(JanggiErrors::InvalidSquareIndex { column, row })
}

impl FromStr for Square {
    type Err = JanggiErrors;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(text)
    }
}

//! Canonical Janggi rule constants and static palace geometry.
//!
//! The palace lookups here are shared by the General/Guard, Soldier, Chariot
//! and Cannon generators. They are derived purely from coordinates.

use crate::game_state::janggi_types::{Color, Square};

/// Canonical starting position in layout notation (top row first).
pub const STARTING_LAYOUT: &str =
    "reha1aehr/4k4/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/4K4/REHA1AEHR";

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Palace columns, shared by both palaces.
const PALACE_COLUMNS: (u8, u8) = (3, 5);

const RED_PALACE_CENTER: Square = match Square::new(4, 1) {
    Some(square) => square,
    None => panic!("red palace center is off the board"),
};
const BLUE_PALACE_CENTER: Square = match Square::new(4, 8) {
    Some(square) => square,
    None => panic!("blue palace center is off the board"),
};

/// One of the two 3x3 fortresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palace {
    Red,
    Blue,
}

/// Position of a cell inside its palace.
///
/// Corners and the center lie on the palace diagonals; edge midpoints do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalaceRole {
    Center,
    Corner,
    Edge,
}

/// Step directions available from each role, indexed by `PalaceRole::index`.
/// Steps are still filtered by palace membership of the landing cell.
pub const PALACE_STEPS: [&[(i8, i8)]; 3] = [
    &ALL_DIRECTIONS,
    &ALL_DIRECTIONS,
    &ORTHOGONAL_DIRECTIONS,
];

impl PalaceRole {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PalaceRole::Center => 0,
            PalaceRole::Corner => 1,
            PalaceRole::Edge => 2,
        }
    }

    #[inline]
    pub const fn on_diagonal(self) -> bool {
        !matches!(self, PalaceRole::Edge)
    }

    #[inline]
    pub fn steps(self) -> &'static [(i8, i8)] {
        PALACE_STEPS[self.index()]
    }
}

impl Palace {
    #[inline]
    pub const fn of(color: Color) -> Self {
        match color {
            Color::Red => Palace::Red,
            Color::Blue => Palace::Blue,
        }
    }

    #[inline]
    pub const fn owner(self) -> Color {
        match self {
            Palace::Red => Color::Red,
            Palace::Blue => Color::Blue,
        }
    }

    #[inline]
    const fn rows(self) -> (u8, u8) {
        match self {
            Palace::Red => (0, 2),
            Palace::Blue => (7, 9),
        }
    }

    pub const fn center(self) -> Square {
        match self {
            Palace::Red => RED_PALACE_CENTER,
            Palace::Blue => BLUE_PALACE_CENTER,
        }
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        let (low, high) = self.rows();
        square.row() >= low
            && square.row() <= high
            && square.column() >= PALACE_COLUMNS.0
            && square.column() <= PALACE_COLUMNS.1
    }

    /// Role of `square` in this palace, or `None` outside it.
    pub const fn role_of(self, square: Square) -> Option<PalaceRole> {
        if !self.contains(square) {
            return None;
        }
        let center = self.center();
        let off_column = square.column() != center.column();
        let off_row = square.row() != center.row();
        Some(match (off_column, off_row) {
            (false, false) => PalaceRole::Center,
            (true, true) => PalaceRole::Corner,
            _ => PalaceRole::Edge,
        })
    }
}

/// Palace and role of `square`, if it lies in either palace.
pub const fn palace_cell(square: Square) -> Option<(Palace, PalaceRole)> {
    if let Some(role) = Palace::Red.role_of(square) {
        return Some((Palace::Red, role));
    }
    if let Some(role) = Palace::Blue.role_of(square) {
        return Some((Palace::Blue, role));
    }
    None
}

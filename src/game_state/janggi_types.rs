//! Core value types shared by every subsystem.
//!
//! Colors, piece kinds, pieces, board squares and the compact `SquareSet`
//! destination set live here. None of these types know anything about move
//! legality; they are plain data consumed by the board, the generators and the
//! turn engine.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::janggi_errors::JanggiErrors;

/// Side owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Row delta of a soldier's forward step. Red starts on the low rows.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Blue => -1,
        }
    }

    #[inline]
    pub const fn label_prefix(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind. The set is closed; generators dispatch on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Guard,
    Chariot,
    Horse,
    Elephant,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Guard,
        PieceKind::Chariot,
        PieceKind::Horse,
        PieceKind::Elephant,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::General => 0,
            PieceKind::Guard => 1,
            PieceKind::Chariot => 2,
            PieceKind::Horse => 3,
            PieceKind::Elephant => 4,
            PieceKind::Cannon => 5,
            PieceKind::Soldier => 6,
        }
    }

    /// Two-letter abbreviation used in piece labels (`RCh1`).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            PieceKind::General => "Ge",
            PieceKind::Guard => "Gu",
            PieceKind::Chariot => "Ch",
            PieceKind::Horse => "Ho",
            PieceKind::Elephant => "El",
            PieceKind::Cannon => "Ca",
            PieceKind::Soldier => "So",
        }
    }
}

/// A piece on the board.
///
/// The ordinal distinguishes pieces of the same color and kind (the two red
/// chariots are `RCh1` and `RCh2`). A piece never records where it stands;
/// its square is whatever board cell holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    ordinal: u8,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, ordinal: u8) -> Self {
        Self {
            kind,
            color,
            ordinal,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn ordinal(&self) -> u8 {
        self.ordinal
    }

    #[inline]
    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Display label such as `RCh1`, or `BGen` for a General.
    pub fn label(&self) -> String {
        if self.kind == PieceKind::General {
            return format!("{}Gen", self.color.label_prefix());
        }
        format!(
            "{}{}{}",
            self.color.label_prefix(),
            self.kind.abbreviation(),
            self.ordinal
        )
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A board cell: `column` in `0..=8`, `row` in `0..=9`.
///
/// Values can only be built through the checked constructors, so every
/// `Square` in circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareFields")]
pub struct Square {
    column: u8,
    row: u8,
}

/// Unchecked wire form of a `Square`; deserialization goes through
/// `Square::new`.
#[derive(Deserialize)]
struct SquareFields {
    column: u8,
    row: u8,
}

impl TryFrom<SquareFields> for Square {
    type Error = JanggiErrors;

    fn try_from(fields: SquareFields) -> Result<Self, Self::Error> {
        Square::new(fields.column, fields.row).ok_or(JanggiErrors::InvalidSquareIndex {
            column: fields.column,
            row: fields.row,
        })
    }
}

impl Square {
    pub const COLUMNS: u8 = 9;
    pub const ROWS: u8 = 10;
    pub const COUNT: usize = (Self::COLUMNS as usize) * (Self::ROWS as usize);

    #[inline]
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column < Self::COLUMNS && row < Self::ROWS {
            Some(Self { column, row })
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        Some(Self {
            column: (index % Self::COLUMNS as usize) as u8,
            row: (index / Self::COLUMNS as usize) as u8,
        })
    }

    #[inline]
    pub const fn column(&self) -> u8 {
        self.column
    }

    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.row as usize * Self::COLUMNS as usize + self.column as usize
    }

    /// Square reached by shifting `(d_column, d_row)`, or `None` off the board.
    #[inline]
    pub const fn offset(&self, d_column: i8, d_row: i8) -> Option<Self> {
        let column = self.column as i8 + d_column;
        let row = self.row as i8 + d_row;
        if column < 0 || row < 0 {
            return None;
        }
        Self::new(column as u8, row as u8)
    }

    #[inline]
    pub const fn step(&self, direction: (i8, i8)) -> Option<Self> {
        self.offset(direction.0, direction.1)
    }

    /// Every square, row by row from `a1`.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.column), self.row + 1)
    }
}

/// Set of squares packed into one bit per cell. The 90 cells fit in a `u128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u128);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn bits(&self) -> u128 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u128 << square.index();
    }

    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        (self.0 & (1u128 << square.index())) != 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True when every square of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(&self, other: SquareSet) -> bool {
        (self.0 & !other.0) == 0
    }

    pub fn iter(&self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Iterates a `SquareSet` in ascending index order.
pub struct SquareSetIter(u128);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while self.0 != 0 {
            let index = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            if let Some(square) = Square::from_index(index) {
                return Some(square);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offsets_stay_on_board() {
        let corner = Square::new(0, 0).expect("a1 is on the board");
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(8, 9), Square::new(8, 9));
        assert_eq!(corner.offset(9, 0), None);
        assert_eq!(corner.offset(0, 10), None);
    }

    #[test]
    fn square_index_matches_row_major_layout() {
        let e2 = Square::new(4, 1).expect("e2 is on the board");
        assert_eq!(e2.index(), 13);
        assert_eq!(Square::from_index(13), Some(e2));
        assert_eq!(Square::from_index(Square::COUNT), None);
        assert_eq!(Square::all().count(), 90);
    }

    #[test]
    fn square_display_uses_one_based_rows() {
        assert_eq!(Square::new(4, 1).expect("e2").to_string(), "e2");
        assert_eq!(Square::new(0, 9).expect("a10").to_string(), "a10");
    }

    #[test]
    fn deserialized_squares_must_be_on_the_board() {
        let e2 = Square::new(4, 1).expect("e2");
        let json = serde_json::to_string(&e2).expect("square should serialize");
        assert_eq!(json, r#"{"column":4,"row":1}"#);
        assert_eq!(
            serde_json::from_str::<Square>(&json).expect("e2 should deserialize"),
            e2
        );

        assert!(serde_json::from_str::<Square>(r#"{"column":20,"row":3}"#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"column":4,"row":10}"#).is_err());
    }

    #[test]
    fn piece_labels_follow_color_kind_ordinal() {
        assert_eq!(Piece::new(PieceKind::Chariot, Color::Red, 2).label(), "RCh2");
        assert_eq!(Piece::new(PieceKind::Soldier, Color::Blue, 5).label(), "BSo5");
        assert_eq!(Piece::new(PieceKind::General, Color::Blue, 1).label(), "BGen");
    }

    #[test]
    fn square_set_tracks_membership_and_order() {
        let a = Square::new(8, 9).expect("i10");
        let b = Square::new(0, 0).expect("a1");
        let c = Square::new(3, 4).expect("d5");
        let set: SquareSet = [a, b].into_iter().collect();

        assert!(set.contains(a));
        assert!(set.contains(b));
        assert!(!set.contains(c));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b, a]);

        let mut wider = set;
        wider.insert(c);
        assert!(set.is_subset(wider));
        assert!(!wider.is_subset(set));
        assert!(SquareSet::EMPTY.is_subset(set));
    }
}

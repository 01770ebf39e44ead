//! The 9 x 10 grid of optional occupants.
//!
//! `Board` is pure data: lookups and writes, no legality knowledge. The turn
//! engine is the only caller that writes to the board of a live game.

use serde::{Deserialize, Serialize};

use crate::game_state::janggi_types::{Color, Piece, PieceKind, Square};

const COLUMNS: usize = Square::COLUMNS as usize;
const ROWS: usize = Square::ROWS as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    // [row][column]
    cells: [[Option<Piece>; COLUMNS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [[None; COLUMNS]; ROWS],
        }
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.column() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Write `piece` into `square`, returning the previous occupant.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.column() as usize],
            piece,
        )
    }

    /// Every occupied cell, row by row from `a1`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.occupant(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Square of `color`'s General. `None` only in constructed positions.
    pub fn general_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind() == PieceKind::General)
            .map(|(square, _)| square)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind() == kind)
            .count()
    }
}

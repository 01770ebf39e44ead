//! Errors used throughout the rules engine.
//!
//! Two families live here:
//! - `JanggiErrors` covers malformed input that never reaches the core: bad
//!   coordinates, out-of-range indices and unparsable layouts. These are
//!   returned by the codec and the layout parser.
//! - `MoveRejection` explains why the turn engine refused a move. Every
//!   variant except `Checkmated` guarantees the board and turn state are
//!   untouched. `Checkmated` reports the one failure that changes state: the
//!   mover's General had no escape and the game is now over.

use thiserror::Error;

use crate::game_state::janggi_types::{Color, Square};

/// Input errors raised before a request reaches the turn engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JanggiErrors {
    /// A textual square was not a column letter `a`-`i` followed by a row
    /// number `1`-`10`.
    ///
    /// Payload: the offending text.
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// Zero-based indices outside `0..=8` / `0..=9`.
    #[error("square index out of bounds: column {column}, row {row}")]
    InvalidSquareIndex { column: u8, row: u8 },

    /// A layout string had the wrong shape or an unknown piece letter.
    ///
    /// Payload: a description of what went wrong.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Why `JanggiGame::try_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("the game is already over")]
    GameOver,

    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("{0} moved last; it is not their turn")]
    NotYourTurn(Color),

    #[error("{0} cannot pass while in check")]
    PassWhileInCheck(Color),

    #[error("{to} is not reachable from {from}")]
    IllegalDestination { from: Square, to: Square },

    #[error("moving {from} to {to} leaves the general in check")]
    LeavesGeneralInCheck { from: Square, to: Square },

    /// The mover was checkmated; the game ended with `winner` winning.
    #[error("checkmated; {winner} wins")]
    Checkmated { winner: Color },
}

impl MoveRejection {
    /// True for the single rejection that changed the game state.
    #[inline]
    pub const fn ended_game(&self) -> bool {
        matches!(self, MoveRejection::Checkmated { .. })
    }
}

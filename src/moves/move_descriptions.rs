//! Move requests, outcomes and history records.

use serde::{Deserialize, Serialize};

use crate::game_state::janggi_types::{Color, Piece, Square};

/// A move request. A pass is its own variant; it names the square of one of
/// the passing side's pieces so the engine can tell who is passing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMove {
    Pass { at: Square },
    Step { from: Square, to: Square },
}

impl PlayerMove {
    /// Build a move from a coordinate pair. Identical squares mean a pass.
    #[inline]
    pub fn from_squares(from: Square, to: Square) -> Self {
        if from == to {
            PlayerMove::Pass { at: from }
        } else {
            PlayerMove::Step { from, to }
        }
    }

    /// Square whose occupant identifies the mover.
    #[inline]
    pub fn source(&self) -> Square {
        match *self {
            PlayerMove::Pass { at } => at,
            PlayerMove::Step { from, .. } => from,
        }
    }

    #[inline]
    pub fn destination(&self) -> Square {
        match *self {
            PlayerMove::Pass { at } => at,
            PlayerMove::Step { to, .. } => to,
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, PlayerMove::Pass { .. })
    }
}

impl std::fmt::Display for PlayerMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerMove::Pass { at } => write!(f, "{at}{at}"),
            PlayerMove::Step { from, to } => write!(f, "{from}{to}"),
        }
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Passed,
    Moved { captured: Option<Piece> },
    /// The move captured the opposing General and ended the game.
    CapturedGeneral { winner: Color },
}

/// One accepted move in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: PlayerMove,
    pub mover: Color,
    pub captured: Option<Piece>,
}

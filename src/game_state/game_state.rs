//! Terminal status of a game.
//!
//! `GameState` only ever moves from `InProgress` to one of the two won states,
//! and never back.

use serde::{Deserialize, Serialize};

use crate::game_state::janggi_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    RedWon,
    BlueWon,
}

impl GameState {
    #[inline]
    pub const fn won_by(winner: Color) -> Self {
        match winner {
            Color::Red => GameState::RedWon,
            Color::Blue => GameState::BlueWon,
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::RedWon => Some(Color::Red),
            GameState::BlueWon => Some(Color::Blue),
        }
    }

    /// Upper-case name used by the text front end (`RED_WON`).
    pub fn name(self) -> &'static str {
        match self {
            GameState::InProgress => "UNFINISHED",
            GameState::RedWon => "RED_WON",
            GameState::BlueWon => "BLUE_WON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::janggi_types::Color;

    #[test]
    fn won_states_map_back_to_their_winner() {
        for color in Color::ALL {
            let state = GameState::won_by(color);
            assert!(state.is_over());
            assert_eq!(state.winner(), Some(color));
        }
        assert!(!GameState::InProgress.is_over());
        assert_eq!(GameState::InProgress.winner(), None);
    }
}

//! Per-game configuration knobs.

use serde::{Deserialize, Serialize};

use crate::game_state::janggi_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Color allowed to make the first move. The other color is recorded as
    /// the last mover when the game starts.
    pub first_mover: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: Color::Blue,
        }
    }
}

impl GameConfig {
    pub fn with_first_mover(first_mover: Color) -> Self {
        Self { first_mover }
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;
    use crate::game_state::janggi_types::Color;

    #[test]
    fn blue_opens_by_default() {
        assert_eq!(GameConfig::default().first_mover, Color::Blue);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GameConfig::with_first_mover(Color::Red);
        let json = serde_json::to_string(&config).expect("config should serialize");
        assert_eq!(json, r#"{"first_mover":"Red"}"#);
        let back: GameConfig = serde_json::from_str(&json).expect("config should deserialize");
        assert_eq!(back, config);
    }
}

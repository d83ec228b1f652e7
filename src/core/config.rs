//! Rule constants for a match.
//!
//! Every number the rules depend on lives in `GameConfig` rather than being
//! scattered through the engine. The defaults are the standard ruleset; tests
//! and variants override individual values with the `with_*` builders.

use serde::{Deserialize, Serialize};

/// Complete rule configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum cards held in hand.
    pub max_hand_size: usize,

    /// Maximum minions on one side of the board.
    pub max_board_size: usize,

    /// Maximum mana crystals.
    pub max_mana: i32,

    /// Exact number of cards in a deck.
    pub deck_size: usize,

    /// Starting (and maximum) hero health.
    pub hero_health: i32,

    /// Opening hand of the player who goes first.
    pub first_hand_size: usize,

    /// Opening hand of the player who goes second (before the coin).
    pub second_hand_size: usize,

    /// Mana cost of every hero power.
    pub hero_power_cost: i32,

    /// Card given to the second player after the mulligan.
    pub coin_card: String,

    /// Turn cap after which the match ends in a draw. `None` plays to the end.
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_hand_size: 10,
            max_board_size: 7,
            max_mana: 10,
            deck_size: 30,
            hero_health: 30,
            first_hand_size: 3,
            second_hand_size: 4,
            hero_power_cost: 2,
            coin_card: "The Coin".to_string(),
            max_turns: None,
        }
    }
}

impl GameConfig {
    /// Standard ruleset.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_hero_health(mut self, health: i32) -> Self {
        self.hero_health = health;
        self
    }

    #[must_use]
    pub fn with_hand_sizes(mut self, first: usize, second: usize) -> Self {
        self.first_hand_size = first;
        self.second_hand_size = second;
        self
    }

    #[must_use]
    pub fn with_max_board_size(mut self, size: usize) -> Self {
        self.max_board_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.max_hand_size, 10);
        assert_eq!(config.max_board_size, 7);
        assert_eq!(config.max_mana, 10);
        assert_eq!(config.deck_size, 30);
        assert_eq!(config.hero_health, 30);
        assert_eq!((config.first_hand_size, config.second_hand_size), (3, 4));
        assert_eq!(config.coin_card, "The Coin");
        assert_eq!(config.max_turns, None);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::new()
            .with_max_turns(40)
            .with_deck_size(10)
            .with_hero_health(20)
            .with_hand_sizes(1, 2)
            .with_max_board_size(3);

        assert_eq!(config.max_turns, Some(40));
        assert_eq!(config.deck_size, 10);
        assert_eq!(config.hero_health, 20);
        assert_eq!(config.first_hand_size, 1);
        assert_eq!(config.second_hand_size, 2);
        assert_eq!(config.max_board_size, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"max_turns": 12}"#).unwrap();
        assert_eq!(config.max_turns, Some(12));
        assert_eq!(config.deck_size, 30);
    }
}

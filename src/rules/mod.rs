//! The rules: the `Game` arena and every operation on it.
//!
//! ## Key Types
//!
//! - [`Game`]: owns players, characters, card instances, the event bus and
//!   the delayed queue
//! - [`GameBuilder`]: decks, agents, config and random source
//! - [`RulesEngine`]: legal actions, applying them, terminal check
//! - [`Handler`]: the data bound on the bus for attached tags
//! - [`HeroPower`]: per-class hero powers

mod board;
mod builder;
mod combat;
mod dispatch;
mod engine;
mod game;
mod mana;
mod play;
mod power;
mod turn;

pub use builder::GameBuilder;
pub use dispatch::Handler;
pub use engine::{GameResult, RulesEngine};
pub use game::Game;
pub use power::HeroPower;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::{Game, GameBuilder};
    use crate::cards::{CardRegistry, CharacterClass};
    use crate::core::{EntityId, PlayerId};

    /// A built match that has not started. Both decks are 30 Wisps.
    pub fn small_game() -> Game {
        let deck = vec!["Wisp".to_string(); 30];
        GameBuilder::new(Arc::new(CardRegistry::basic()))
            .deck(PlayerId::FIRST, CharacterClass::Mage, deck.clone())
            .deck(PlayerId::SECOND, CharacterClass::Warrior, deck)
            .seed(3)
            .build()
            .unwrap()
    }

    /// A match on the first player's first turn.
    pub fn started_game() -> Game {
        let mut game = small_game();
        game.begin().unwrap();
        game
    }

    /// Summon `name` at the right end of `player`'s board.
    pub fn put_minion(game: &mut Game, player: PlayerId, name: &str) -> EntityId {
        let index = game.player(player).minions.len();
        game.summon(name, player, index).unwrap().unwrap()
    }
}

//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use ccg_tags::cards::{CardRegistry, CharacterClass};
use ccg_tags::core::{GameConfig, PlayerAction, PlayerId};
use ccg_tags::rules::{Game, GameBuilder};
use ccg_tags::EntityId;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route engine logs to the test output. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn registry() -> Arc<CardRegistry> {
    Arc::new(CardRegistry::basic())
}

/// A deck of `size` copies of one card.
pub fn deck_of(name: &str, size: usize) -> Vec<String> {
    vec![name.to_string(); size]
}

/// A built match between two single-card decks.
pub fn game_with(first: (CharacterClass, &str), second: (CharacterClass, &str), config: GameConfig) -> Game {
    init_tracing();
    let size = config.deck_size;
    GameBuilder::new(registry())
        .config(config)
        .deck(PlayerId::FIRST, first.0, deck_of(first.1, size))
        .deck(PlayerId::SECOND, second.0, deck_of(second.1, size))
        .seed(11)
        .build()
        .unwrap()
}

/// Two Wisp decks, first player's first turn.
pub fn wisp_game() -> Game {
    let mut game = game_with(
        (CharacterClass::Mage, "Wisp"),
        (CharacterClass::Warrior, "Wisp"),
        GameConfig::default(),
    );
    game.begin().unwrap();
    game
}

/// Summon at the right end of `player`'s board.
pub fn put(game: &mut Game, player: PlayerId, name: &str) -> EntityId {
    let index = game.player(player).minions.len();
    game.summon(name, player, index).unwrap().unwrap()
}

/// End turns until the match reaches turn `turn`.
pub fn pass_until(game: &mut Game, turn: u32) {
    while game.turn() < turn {
        let current = game.current_player();
        game.apply(current, &PlayerAction::EndTurn).unwrap();
    }
}

/// Hand index of the first card named `name`.
pub fn hand_index(game: &Game, player: PlayerId, name: &str) -> Option<usize> {
    game.player(player)
        .hand
        .iter()
        .position(|id| game.card(*id).is_some_and(|c| c.name == name))
}

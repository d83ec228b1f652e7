//! Assembling a match.

use std::sync::Arc;

use crate::agents::Agent;
use crate::cards::{CardRegistry, CharacterClass};
use crate::core::{EngineError, EntityId, GameConfig, GameRng, PlayerId, PlayerMap, RandomSource, Result};
use crate::entities::{Character, Deck, HeroState, Player};
use crate::replay::{DeckList, Recorder};

use super::game::Game;

/// Builder for a [`Game`].
///
/// ```
/// use std::sync::Arc;
/// use ccg_tags::cards::{CardRegistry, CharacterClass};
/// use ccg_tags::core::{GameConfig, PlayerId};
/// use ccg_tags::rules::GameBuilder;
///
/// let registry = Arc::new(CardRegistry::basic());
/// let deck = vec!["Wisp".to_string(); 5];
/// let game = GameBuilder::new(registry)
///     .config(GameConfig::new().with_deck_size(5))
///     .deck(PlayerId::FIRST, CharacterClass::Mage, deck.clone())
///     .deck(PlayerId::SECOND, CharacterClass::Warrior, deck)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(game.player(PlayerId::FIRST).deck.left(), 5);
/// ```
#[derive(Debug)]
pub struct GameBuilder {
    registry: Arc<CardRegistry>,
    config: GameConfig,
    decks: PlayerMap<Option<DeckList>>,
    agents: PlayerMap<Option<Box<dyn Agent>>>,
    keeps: PlayerMap<Option<Vec<usize>>>,
    random: Option<Box<dyn RandomSource>>,
    seed: u64,
    record: bool,
}

impl GameBuilder {
    #[must_use]
    pub fn new(registry: Arc<CardRegistry>) -> Self {
        Self {
            registry,
            config: GameConfig::default(),
            decks: PlayerMap::new(|_| None),
            agents: PlayerMap::new(|_| None),
            keeps: PlayerMap::new(|_| None),
            random: None,
            seed: 0,
            record: false,
        }
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn deck(mut self, player: PlayerId, class: CharacterClass, cards: Vec<String>) -> Self {
        self.decks[player] = Some(DeckList { class, cards });
        self
    }

    #[must_use]
    pub fn agent(mut self, player: PlayerId, agent: Box<dyn Agent>) -> Self {
        self.agents[player] = Some(agent);
        self
    }

    /// Fix `player`'s card check: keep exactly the opening cards at these
    /// positions.
    #[must_use]
    pub fn keep(mut self, player: PlayerId, kept: Vec<usize>) -> Self {
        self.keeps[player] = Some(kept);
        self
    }

    /// Seed the default ChaCha8 random source.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use `random` instead of a seeded generator.
    #[must_use]
    pub fn random_source(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Record a replay while the match runs.
    #[must_use]
    pub fn record(mut self) -> Self {
        self.record = true;
        self
    }

    pub fn build(self) -> Result<Game> {
        let mut players = Vec::new();
        let mut heroes = Vec::new();
        let mut lists = Vec::new();
        for (player, list) in self.decks.iter() {
            let list = list.clone().ok_or(EngineError::InvalidDeck {
                expected: self.config.deck_size,
                found: 0,
            })?;
            for name in &list.cards {
                self.registry.lookup(name)?;
            }
            let deck = Deck::new(list.class, list.cards.clone(), self.config.deck_size)?;
            let hero_id = EntityId(EntityId::first_non_player() + player.index() as u32);
            let mut hero = Character::new_hero(
                hero_id,
                player,
                list.class.hero_name(),
                self.config.hero_health,
                HeroState::new(list.class),
            );
            hero.attached = true;
            heroes.push(hero);
            players.push(Player::new(player, hero_id, deck));
            lists.push(list);
        }
        let players = PlayerMap::from_vec(players).ok_or(EngineError::InvalidDeck {
            expected: self.config.deck_size,
            found: 0,
        })?;
        let random = self
            .random
            .unwrap_or_else(|| Box::new(GameRng::new(self.seed)));
        let mut game = Game::new(self.config, self.registry, random, players, heroes);
        game.agents = self.agents;
        game.scripted_keeps = self.keeps;
        if self.record {
            game.journal = Some(Recorder::new(lists));
        }
        tracing::info!(
            first = %game.player(PlayerId::FIRST).deck.class.as_str(),
            second = %game.player(PlayerId::SECOND).deck.class.as_str(),
            "game created"
        );
        Ok(game)
    }
}

//! # ccg-tags
//!
//! A rules engine for a two-player collectible card game in which every
//! card is data: a tree of composable tags (selectors, conditions,
//! actions, events) interpreted by the engine.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Data**: A card definition holds no code. Battlecries,
//!    deathrattles, auras, triggered effects and secrets are tag trees
//!    that round-trip through JSON.
//!
//! 2. **One Arena**: The [`rules::Game`] owns every character and card
//!    instance, addressed by [`EntityId`]. Tags and listeners hold ids,
//!    never references.
//!
//! 3. **Deterministic**: All randomness flows through one
//!    [`core::RandomSource`], so a seed or a [`replay::Replay`] reproduces
//!    a match exactly.
//!
//! ## Modules
//!
//! - `core`: ids, players, actions, errors, configuration, randomness
//! - `triggers`: game events and the event bus
//! - `stack`: the delayed queue that orders deaths by birth
//! - `tags`: selectors, conditions, actions, events and the effect kinds
//! - `cards`: card definitions, instances and the registry
//! - `entities`: characters, heroes, minions, decks and player state
//! - `rules`: the `Game` and every rules operation on it
//! - `agents`: decision-makers seated at a match
//! - `replay`: recording, text and JSON replays, playback

pub mod agents;
pub mod cards;
pub mod core;
pub mod entities;
pub mod replay;
pub mod rules;
pub mod stack;
pub mod tags;
pub mod triggers;

pub use crate::core::{
    ActionRecord, EngineError, EntityId, GameConfig, GameRng, PlayerAction, PlayerId, PlayerMap, RandomSource,
    Result, RuleViolation, ScriptedRandom,
};

pub use crate::cards::{CardDefinition, CardInstance, CardRegistry, CharacterClass};

pub use crate::entities::{Character, Player};

pub use crate::rules::{Game, GameBuilder, GameResult, RulesEngine};

pub use crate::agents::{Agent, StrategyAgent};

pub use crate::replay::{Replay, ReplayMove};

pub use crate::triggers::{EventBus, EventKind, GameEvent};

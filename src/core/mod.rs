//! Core engine types: entities, players, actions, RNG, configuration, errors.
//!
//! These are the building blocks every other module depends on. They know
//! nothing about cards or tags.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
pub use config::GameConfig;
pub use action::{ActionRecord, PlayerAction};
pub use error::{EngineError, Result, RuleViolation};

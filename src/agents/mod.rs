//! Agents: the decision-makers seated at a match.
//!
//! The engine calls out to an [`Agent`] at fixed decision points (the
//! opening card check, each action of a turn, targets, board positions and
//! choose-one options). Agents see the game read-only and answer with
//! values; they never call back into the engine.
//!
//! [`StrategyAgent`] is the one implementation, composed from a mulligan,
//! a turn and a choice strategy.

mod strategy;

use std::fmt::Debug;

use crate::core::{EntityId, PlayerAction, PlayerId};
use crate::rules::Game;

pub use strategy::{
    ChoiceStrategy, FirstChoice, KeepAll, KeepCheap, MulliganStrategy, PassTurn, Predictable, RandomChoice, RandomTurn,
    StrategyAgent, TurnStrategy,
};

/// The decision interface the engine consumes.
pub trait Agent: Debug {
    /// Which opening cards to keep, one flag per card.
    fn do_card_check(&mut self, game: &Game, player: PlayerId, cards: &[String]) -> Vec<bool>;

    /// The next action of `player`'s turn. Returning `EndTurn` ends it.
    fn next_action(&mut self, game: &Game, player: PlayerId) -> PlayerAction;

    /// Pick one of `targets`, or none.
    fn choose_target(&mut self, game: &Game, player: PlayerId, targets: &[EntityId]) -> Option<EntityId>;

    /// Board position for the minion card `card`, `0..=minions.len()`.
    fn choose_index(&mut self, game: &Game, player: PlayerId, card: &str) -> usize;

    /// Index of the chosen option.
    fn choose_option(&mut self, game: &Game, player: PlayerId, options: &[String]) -> usize;
}

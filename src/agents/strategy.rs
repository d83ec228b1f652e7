//! Strategies and the agent that composes them.

use std::fmt::Debug;

use crate::core::{EntityId, GameRng, PlayerAction, PlayerId, RandomSource};
use crate::rules::{Game, RulesEngine};

use super::Agent;

// =============================================================================
// Mulligan
// =============================================================================

pub trait MulliganStrategy: Debug {
    fn keep(&mut self, game: &Game, player: PlayerId, cards: &[String]) -> Vec<bool>;
}

#[derive(Clone, Debug, Default)]
pub struct KeepAll;

impl MulliganStrategy for KeepAll {
    fn keep(&mut self, _game: &Game, _player: PlayerId, cards: &[String]) -> Vec<bool> {
        vec![true; cards.len()]
    }
}

/// Throw back every card costing more than `max_cost`.
#[derive(Clone, Debug)]
pub struct KeepCheap {
    pub max_cost: i32,
}

impl MulliganStrategy for KeepCheap {
    fn keep(&mut self, game: &Game, _player: PlayerId, cards: &[String]) -> Vec<bool> {
        cards
            .iter()
            .map(|name| game.registry().get(name).map_or(true, |def| def.mana <= self.max_cost))
            .collect()
    }
}

// =============================================================================
// Turn
// =============================================================================

pub trait TurnStrategy: Debug {
    fn next_action(&mut self, game: &Game, player: PlayerId) -> PlayerAction;
}

/// Ends every turn immediately.
#[derive(Clone, Debug, Default)]
pub struct PassTurn;

impl TurnStrategy for PassTurn {
    fn next_action(&mut self, _game: &Game, _player: PlayerId) -> PlayerAction {
        PlayerAction::EndTurn
    }
}

/// Hero power first, then the leftmost playable card, then the first
/// legal attack. Deterministic for a given game state.
#[derive(Clone, Debug, Default)]
pub struct Predictable;

impl TurnStrategy for Predictable {
    fn next_action(&mut self, game: &Game, player: PlayerId) -> PlayerAction {
        let actions = game.legal_actions(player);
        let first = |pred: fn(&PlayerAction) -> bool| actions.iter().find(|a| pred(a)).cloned();
        first(|a| matches!(a, PlayerAction::UsePower { .. }))
            .or_else(|| first(PlayerAction::is_play))
            .or_else(|| first(|a| matches!(a, PlayerAction::Attack { .. })))
            .unwrap_or(PlayerAction::EndTurn)
    }
}

/// A uniformly random legal action, ending the turn among them.
#[derive(Clone, Debug)]
pub struct RandomTurn {
    rng: GameRng,
}

impl RandomTurn {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl TurnStrategy for RandomTurn {
    fn next_action(&mut self, game: &Game, player: PlayerId) -> PlayerAction {
        let actions = game.legal_actions(player);
        self.rng.choose(&actions).cloned().unwrap_or(PlayerAction::EndTurn)
    }
}

// =============================================================================
// Choices
// =============================================================================

pub trait ChoiceStrategy: Debug {
    fn target(&mut self, game: &Game, player: PlayerId, targets: &[EntityId]) -> Option<EntityId>;

    fn index(&mut self, game: &Game, player: PlayerId, card: &str) -> usize;

    fn option(&mut self, game: &Game, player: PlayerId, options: &[String]) -> usize;
}

/// First target, leftmost slot, first option.
#[derive(Clone, Debug, Default)]
pub struct FirstChoice;

impl ChoiceStrategy for FirstChoice {
    fn target(&mut self, _game: &Game, _player: PlayerId, targets: &[EntityId]) -> Option<EntityId> {
        targets.first().copied()
    }

    fn index(&mut self, _game: &Game, _player: PlayerId, _card: &str) -> usize {
        0
    }

    fn option(&mut self, _game: &Game, _player: PlayerId, _options: &[String]) -> usize {
        0
    }
}

#[derive(Clone, Debug)]
pub struct RandomChoice {
    rng: GameRng,
}

impl RandomChoice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl ChoiceStrategy for RandomChoice {
    fn target(&mut self, _game: &Game, _player: PlayerId, targets: &[EntityId]) -> Option<EntityId> {
        self.rng.choose(targets).copied()
    }

    fn index(&mut self, game: &Game, player: PlayerId, _card: &str) -> usize {
        let len = game.player(player).minions.len() as i32;
        self.rng.random_between(0, len) as usize
    }

    fn option(&mut self, _game: &Game, _player: PlayerId, options: &[String]) -> usize {
        self.rng.random_between(0, options.len() as i32 - 1).max(0) as usize
    }
}

// =============================================================================
// Agent
// =============================================================================

/// An agent built from three independent strategies.
#[derive(Debug)]
pub struct StrategyAgent {
    mulligan: Box<dyn MulliganStrategy>,
    turn: Box<dyn TurnStrategy>,
    choice: Box<dyn ChoiceStrategy>,
}

impl StrategyAgent {
    #[must_use]
    pub fn new(
        mulligan: Box<dyn MulliganStrategy>,
        turn: Box<dyn TurnStrategy>,
        choice: Box<dyn ChoiceStrategy>,
    ) -> Self {
        Self { mulligan, turn, choice }
    }

    /// Keeps its hand and passes every turn.
    #[must_use]
    pub fn do_nothing() -> Self {
        Self::new(Box::new(KeepAll), Box::new(PassTurn), Box::new(FirstChoice))
    }

    /// Spends its turn in a fixed order and always picks the first option.
    #[must_use]
    pub fn predictable() -> Self {
        Self::new(Box::new(KeepAll), Box::new(Predictable), Box::new(FirstChoice))
    }

    /// Random legal actions and random choices, reproducible from `seed`.
    #[must_use]
    pub fn random(seed: u64) -> Self {
        Self::new(
            Box::new(KeepCheap { max_cost: 3 }),
            Box::new(RandomTurn::new(seed)),
            Box::new(RandomChoice::new(seed.wrapping_add(1))),
        )
    }
}

impl Agent for StrategyAgent {
    fn do_card_check(&mut self, game: &Game, player: PlayerId, cards: &[String]) -> Vec<bool> {
        self.mulligan.keep(game, player, cards)
    }

    fn next_action(&mut self, game: &Game, player: PlayerId) -> PlayerAction {
        self.turn.next_action(game, player)
    }

    fn choose_target(&mut self, game: &Game, player: PlayerId, targets: &[EntityId]) -> Option<EntityId> {
        self.choice.target(game, player, targets)
    }

    fn choose_index(&mut self, game: &Game, player: PlayerId, card: &str) -> usize {
        self.choice.index(game, player, card)
    }

    fn choose_option(&mut self, game: &Game, player: PlayerId, options: &[String]) -> usize {
        self.choice.option(game, player, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{put_minion, started_game};

    #[test]
    fn test_keep_cheap() {
        let game = started_game();
        let cards = vec!["Wisp".to_string(), "Chillwind Yeti".to_string(), "Unknown".to_string()];
        let keep = KeepCheap { max_cost: 3 }.keep(&game, PlayerId::FIRST, &cards);
        assert_eq!(keep, vec![true, false, true]);
    }

    #[test]
    fn test_do_nothing_passes() {
        let game = started_game();
        let mut agent = StrategyAgent::do_nothing();
        assert_eq!(agent.next_action(&game, PlayerId::FIRST), PlayerAction::EndTurn);
        assert_eq!(agent.choose_target(&game, PlayerId::FIRST, &[EntityId(9), EntityId(4)]), Some(EntityId(9)));
        assert_eq!(agent.choose_target(&game, PlayerId::FIRST, &[]), None);
    }

    #[test]
    fn test_predictable_plays_cards() {
        // one mana on turn one: the power is out, a Wisp in hand is playable
        let game = started_game();
        let mut agent = StrategyAgent::predictable();
        let action = agent.next_action(&game, PlayerId::FIRST);
        assert!(action.is_play(), "{action:?}");
    }

    #[test]
    fn test_predictable_attacks_last() {
        let mut game = started_game();
        let wisp = put_minion(&mut game, PlayerId::FIRST, "Wisp");
        game.character_mut(wisp).unwrap().minion_mut().unwrap().exhausted = false;
        game.player_mut(PlayerId::FIRST).hand.clear();
        game.player_mut(PlayerId::FIRST).mana = 0;
        let action = StrategyAgent::predictable().next_action(&game, PlayerId::FIRST);
        assert!(matches!(action, PlayerAction::Attack { attacker, .. } if attacker == wisp));
    }

    #[test]
    fn test_random_choice_in_range() {
        let game = started_game();
        let mut choice = RandomChoice::new(11);
        for _ in 0..20 {
            assert!(choice.index(&game, PlayerId::FIRST, "Wisp") <= game.player(PlayerId::FIRST).minions.len());
            assert!(choice.option(&game, PlayerId::FIRST, &["a".to_string(), "b".to_string()]) < 2);
        }
    }

    #[test]
    fn test_random_agent_reproducible() {
        let game = started_game();
        let mut a = StrategyAgent::random(5);
        let mut b = StrategyAgent::random(5);
        for _ in 0..5 {
            assert_eq!(a.next_action(&game, PlayerId::FIRST), b.next_action(&game, PlayerId::FIRST));
        }
    }
}

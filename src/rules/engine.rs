//! Rules engine trait and the action entry point.
//!
//! Agents and replays drive a match through `RulesEngine`:
//! - What actions are legal
//! - How an action modifies the game
//! - Whether the match is over

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, PlayerAction, PlayerId, Result, RuleViolation};

use super::game::Game;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both heroes died together, or the turn cap was reached.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty when it is not `player`'s turn or the game is over
/// - `apply_action`: validates before mutating; an illegal action is an
///   `Err` carrying a [`RuleViolation`]
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    fn legal_actions(&self, player: PlayerId) -> Vec<PlayerAction>;

    fn apply_action(&mut self, player: PlayerId, action: &PlayerAction) -> Result<()>;

    fn is_terminal(&self) -> Option<GameResult>;
}

impl Game {
    /// Apply one action for `player`.
    pub fn apply(&mut self, player: PlayerId, action: &PlayerAction) -> Result<()> {
        self.ensure_running()?;
        if player != self.current {
            tracing::warn!(player = %player, "action out of turn");
            return Err(RuleViolation::NotYourTurn.into());
        }
        match action {
            PlayerAction::PlayCard {
                index,
                target,
                position,
            } => self.play_card(*index, *target, *position)?,
            PlayerAction::Attack { attacker, target } => self.attack(*attacker, *target)?,
            PlayerAction::UsePower { target } => self.use_power(*target)?,
            PlayerAction::EndTurn => {
                self.end_turn()?;
                if !self.is_over() {
                    self.start_turn()?;
                }
            }
            PlayerAction::Concede => self.concede()?,
        }
        self.record_action(player, action);
        if let Some(result) = &self.result {
            tracing::info!(turn = self.turn, ?result, "game over");
        }
        Ok(())
    }
}

impl RulesEngine for Game {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Playable cards (one action per legal target), the hero power,
    /// attacks, then ending the turn.
    fn legal_actions(&self, player: PlayerId) -> Vec<PlayerAction> {
        if self.is_over() || player != self.current {
            return Vec::new();
        }
        let mut actions = Vec::new();
        for index in 0..self.player(player).hand.len() {
            let Ok(plan) = self.check_play(player, index, None, None) else {
                continue;
            };
            if plan.candidates.is_empty() {
                actions.push(PlayerAction::play(index));
            } else {
                actions.extend(plan.candidates.iter().map(|t| PlayerAction::play_at(index, *t)));
            }
        }
        if self.can_use_power(player) {
            let targets = self
                .hero_power(player)
                .and_then(|p| p.targeting)
                .map(|t| t.candidates(self, self.player(player).hero, true));
            match targets {
                Some(targets) => {
                    actions.extend(targets.into_iter().map(|t| PlayerAction::UsePower { target: Some(t) }));
                }
                None => actions.push(PlayerAction::UsePower { target: None }),
            }
        }
        let p = self.player(player);
        let targets = self.attack_targets(player);
        for attacker in p.minions.iter().copied().chain(std::iter::once(p.hero)) {
            if self.can_attack(attacker) {
                actions.extend(targets.iter().map(|t| PlayerAction::attack(attacker, *t)));
            }
        }
        actions.push(PlayerAction::EndTurn);
        actions
    }

    fn apply_action(&mut self, player: PlayerId, action: &PlayerAction) -> Result<()> {
        self.apply(player, action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(result.is_winner(PlayerId::SECOND));
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(!GameResult::Draw.is_winner(PlayerId::FIRST));
    }

    #[test]
    fn test_result_json() {
        let json = serde_json::to_string(&GameResult::Winner(PlayerId::FIRST)).unwrap();
        assert_eq!(json, r#"{"winner":0}"#);
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameResult::Winner(PlayerId::FIRST));
    }
}

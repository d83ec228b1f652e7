//! Engine error types.
//!
//! Two kinds of failure are fatal: rule violations (the calling agent asked
//! for an illegal move) and data-integrity errors (a malformed deck, card
//! definition or replay). A missing optional target is not an error; those
//! paths return an empty target list instead.

use super::entity::EntityId;

/// An illegal move requested by an agent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("the game is already over")]
    GameOver,

    #[error("it is not that player's turn")]
    NotYourTurn,

    #[error("no card at hand index {0}")]
    NoSuchCard(usize),

    #[error("insufficient mana: need {needed}, have {available}")]
    InsufficientMana { needed: i32, available: i32 },

    #[error("the board is full")]
    BoardFull,

    #[error("the hand is full")]
    HandFull,

    #[error("a target is required but none is available")]
    MissingTarget,

    #[error("illegal target {0}")]
    IllegalTarget(EntityId),

    #[error("illegal board index {0}")]
    IllegalIndex(usize),

    #[error("secret {0} is already active")]
    DuplicateSecret(String),

    #[error("{0} cannot attack")]
    CannotAttack(EntityId),

    #[error("hero power is unavailable")]
    PowerUnavailable,
}

/// Error types for engine operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("rule violation: {0}")]
    Rule(#[from] RuleViolation),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("card {0} was never drawn from this deck")]
    CardNotDrawn(String),

    #[error("invalid deck: expected {expected} cards, found {found}")]
    InvalidDeck { expected: usize, found: usize },

    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    #[error("unknown class: {0}")]
    UnknownClass(String),

    #[error("malformed replay: {0}")]
    Replay(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// True when the error was caused by an illegal move.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::Rule(_))
    }

    /// The rule that was broken, if any.
    #[must_use]
    pub fn rule(&self) -> Option<&RuleViolation> {
        match self {
            Self::Rule(rule) => Some(rule),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_violation_conversion() {
        let err: EngineError = RuleViolation::BoardFull.into();
        assert!(err.is_rule_violation());
        assert_eq!(err.rule(), Some(&RuleViolation::BoardFull));
        assert_eq!(err.to_string(), "rule violation: the board is full");
    }

    #[test]
    fn test_data_errors_are_not_rule_violations() {
        let err = EngineError::CardNotDrawn("Wisp".to_string());
        assert!(!err.is_rule_violation());
        assert!(err.rule().is_none());
        assert_eq!(err.to_string(), "card Wisp was never drawn from this deck");
    }

    #[test]
    fn test_mana_message() {
        let err = RuleViolation::InsufficientMana {
            needed: 4,
            available: 2,
        };
        assert_eq!(err.to_string(), "insufficient mana: need 4, have 2");
    }
}

//! Player actions: the moves an agent can ask the engine to perform.
//!
//! An action names the verb and, optionally, the decisions that go with it.
//! A `None` target means "ask the agent when the rules need one"; a `Some`
//! target is fed to the engine as a pre-made decision.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;

/// A single move during a player's turn.
///
/// ```
/// use ccg_tags::core::{EntityId, PlayerAction};
///
/// let play = PlayerAction::play(0);
/// let aimed = PlayerAction::play_at(1, EntityId(9));
/// assert!(play.is_play() && aimed.is_play());
/// assert!(PlayerAction::EndTurn.ends_turn());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Play the card at `index` in hand. `position` places a minion.
    PlayCard {
        index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<EntityId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<usize>,
    },
    /// Attack with a friendly character.
    Attack {
        attacker: EntityId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<EntityId>,
    },
    /// Use the hero power.
    UsePower {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<EntityId>,
    },
    /// Pass the turn.
    EndTurn,
    /// Give up the match.
    Concede,
}

impl PlayerAction {
    #[must_use]
    pub fn play(index: usize) -> Self {
        Self::PlayCard {
            index,
            target: None,
            position: None,
        }
    }

    #[must_use]
    pub fn play_at(index: usize, target: EntityId) -> Self {
        Self::PlayCard {
            index,
            target: Some(target),
            position: None,
        }
    }

    /// Play a minion card into board slot `position`.
    #[must_use]
    pub fn summon_at(index: usize, position: usize, target: Option<EntityId>) -> Self {
        Self::PlayCard {
            index,
            target,
            position: Some(position),
        }
    }

    #[must_use]
    pub fn attack(attacker: EntityId, target: EntityId) -> Self {
        Self::Attack {
            attacker,
            target: Some(target),
        }
    }

    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Self::PlayCard { .. })
    }

    /// True for actions after which the agent gets no further moves this turn.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Self::EndTurn | Self::Concede)
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: PlayerAction,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: PlayerAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

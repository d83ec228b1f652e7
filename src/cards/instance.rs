//! Card instances - runtime card state.
//!
//! A `CardInstance` is one physical card outside the board: in a hand,
//! being resolved, or sitting face-down as a secret. Minions and weapons
//! leave their card behind when they enter play; their state lives on the
//! character instead.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};
use crate::triggers::HandlerId;

/// Where a card instance currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardZone {
    Hand,
    /// Played and paid for, effect not yet finished.
    Resolving,
    Secret,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardInstance {
    pub id: EntityId,
    pub name: String,
    pub owner: PlayerId,
    pub zone: CardZone,
    /// Set by a counter; the card's effect is skipped but its cost is paid.
    pub cancelled: bool,
    /// Bus bindings of an active secret.
    pub handlers: Vec<HandlerId>,
}

impl CardInstance {
    /// Create a card in its owner's hand.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            zone: CardZone::Hand,
            cancelled: false,
            handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_active_secret(&self) -> bool {
        self.zone == CardZone::Secret && !self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_in_hand() {
        let card = CardInstance::new(EntityId(12), "Fireball", PlayerId::FIRST);
        assert_eq!(card.zone, CardZone::Hand);
        assert!(!card.cancelled);
        assert!(!card.is_active_secret());
    }
}

//! Game event types.
//!
//! The event vocabulary is closed: every notification the engine raises is a
//! variant of [`EventKind`]. Events that describe something happening to one
//! character (it attacked, it was damaged, it died) are raised on that
//! character's own bus; events that describe the state of a whole side
//! (a card was played, a turn started) are raised on the player's bus.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};

/// Every event the engine can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    // Player-scoped
    TurnStarted,
    TurnEnded,
    CardPlayed,
    SpellCast,
    CardUsed,
    MinionPlaced,
    MinionSummoned,
    MinionPlayed,
    AfterAdded,
    MinionDied,
    MinionRemoved,
    CharacterDamaged,
    CharacterHealed,
    SecretRevealed,
    CharacterAttack,
    ArmorIncreased,
    UsedPower,
    AfterDeath,
    CardDrawn,
    CardDestroyed,
    CardPutBack,
    CardDiscarded,
    // Entity-scoped
    Attack,
    AttackCompleted,
    DidDamage,
    Damaged,
    Healed,
    Died,
    Drawn,
    Enraged,
    Unenraged,
    Silenced,
    HealthChanged,
    WeaponDestroyed,
    AddedToBoard,
}

impl EventKind {
    /// Events raised on a player's bus rather than a character's.
    #[must_use]
    pub fn is_player_event(self) -> bool {
        matches!(
            self,
            Self::TurnStarted
                | Self::TurnEnded
                | Self::CardPlayed
                | Self::SpellCast
                | Self::CardUsed
                | Self::MinionPlaced
                | Self::MinionSummoned
                | Self::MinionPlayed
                | Self::AfterAdded
                | Self::MinionDied
                | Self::MinionRemoved
                | Self::CharacterDamaged
                | Self::CharacterHealed
                | Self::SecretRevealed
                | Self::CharacterAttack
                | Self::ArmorIncreased
                | Self::UsedPower
                | Self::AfterDeath
                | Self::CardDrawn
                | Self::CardDestroyed
                | Self::CardPutBack
                | Self::CardDiscarded
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Reuse the serde name so logs and JSON agree.
        match serde_json::to_value(self) {
            Ok(serde_json::Value::String(name)) => f.write_str(&name),
            _ => write!(f, "{self:?}"),
        }
    }
}

/// A game event with contextual data.
///
/// The meaning of each slot depends on the kind:
///
/// | kind | subject | other | amount |
/// |---|---|---|---|
/// | `card_played` | card | | hand index |
/// | `minion_died` | minion | killer | |
/// | `character_damaged`, `damaged` | damaged character | attacker | damage |
/// | `character_attack` | attacker | target | |
/// | `attack` (on the attacker) | target | | |
/// | `did_damage` (on the attacker) | damaged character | | damage |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// The type of event.
    pub kind: EventKind,

    /// The entity the event is about.
    pub subject: Option<EntityId>,

    /// A second entity involved (attacker, killer, target).
    pub other: Option<EntityId>,

    /// Numeric payload (damage, healing, hand index).
    pub amount: i32,

    /// The player whose bus raised the event.
    pub player: Option<PlayerId>,
}

impl GameEvent {
    /// Create a new event with just a kind.
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            subject: None,
            other: None,
            amount: 0,
            player: None,
        }
    }

    /// Set the subject entity (builder pattern).
    #[must_use]
    pub fn with_subject(mut self, subject: EntityId) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Set the secondary entity (builder pattern).
    #[must_use]
    pub fn with_other(mut self, other: EntityId) -> Self {
        self.other = Some(other);
        self
    }

    /// Set the secondary entity if present (builder pattern).
    #[must_use]
    pub fn with_other_opt(mut self, other: Option<EntityId>) -> Self {
        self.other = other;
        self
    }

    /// Set the numeric payload (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Set the associated player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.player = Some(player);
        self
    }

    /// A damage event: `target` took `amount` from `source`.
    pub fn damage(kind: EventKind, target: EntityId, source: Option<EntityId>, amount: i32) -> Self {
        Self::new(kind)
            .with_subject(target)
            .with_other_opt(source)
            .with_amount(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = GameEvent::new(EventKind::CardPlayed)
            .with_subject(EntityId(10))
            .with_amount(3)
            .with_player(PlayerId::new(1));

        assert_eq!(event.kind, EventKind::CardPlayed);
        assert_eq!(event.subject, Some(EntityId(10)));
        assert_eq!(event.other, None);
        assert_eq!(event.amount, 3);
        assert_eq!(event.player, Some(PlayerId::new(1)));
    }

    #[test]
    fn test_damage_event() {
        let event = GameEvent::damage(EventKind::Damaged, EntityId(5), Some(EntityId(6)), 4);
        assert_eq!(event.subject, Some(EntityId(5)));
        assert_eq!(event.other, Some(EntityId(6)));
        assert_eq!(event.amount, 4);
    }

    #[test]
    fn test_scopes() {
        assert!(EventKind::TurnStarted.is_player_event());
        assert!(EventKind::MinionDied.is_player_event());
        assert!(!EventKind::Died.is_player_event());
        assert!(!EventKind::Attack.is_player_event());
        assert!(EventKind::CharacterAttack.is_player_event());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EventKind::CharacterDamaged.to_string(), "character_damaged");
        let kind: EventKind = serde_json::from_str("\"added_to_board\"").unwrap();
        assert_eq!(kind, EventKind::AddedToBoard);
    }
}

//! Entity identification.
//!
//! Every addressable game object (player, hero, minion, weapon, card) has a
//! unique `EntityId`. Tags, events and the delayed-trigger queue refer to
//! objects only through these ids; the `Game` owns the objects themselves.
//!
//! ## ID Layout
//!
//! - `0..PLAYER_COUNT`: the two players (their event buses live here)
//! - `PLAYER_COUNT..`: heroes, minions, weapons and cards, allocated in order
//!
//! ```
//! use ccg_tags::core::{EntityId, PlayerId};
//!
//! let p2 = EntityId::player(PlayerId::new(1));
//! assert!(p2.is_player());
//! assert_eq!(p2.as_player(), Some(PlayerId::new(1)));
//!
//! let minion = EntityId(7);
//! assert!(!minion.is_player());
//! ```

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};

/// Unique identifier for any game entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Entity ID of a player.
    #[must_use]
    pub const fn player(id: PlayerId) -> Self {
        Self(id.0 as u32)
    }

    /// First ID available for non-player entities.
    #[must_use]
    pub const fn first_non_player() -> u32 {
        PLAYER_COUNT as u32
    }

    /// Check if this entity ID refers to a player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 < PLAYER_COUNT as u32
    }

    /// Convert to a `PlayerId` if this is a player entity.
    #[must_use]
    pub fn as_player(self) -> Option<PlayerId> {
        if self.is_player() {
            Some(PlayerId::new(self.0 as u8))
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ids() {
        assert_eq!(EntityId::player(PlayerId::new(0)), EntityId(0));
        assert_eq!(EntityId::player(PlayerId::new(1)), EntityId(1));
    }

    #[test]
    fn test_is_player() {
        assert!(EntityId(0).is_player());
        assert!(EntityId(1).is_player());
        assert!(!EntityId(2).is_player());
        assert!(!EntityId(100).is_player());
    }

    #[test]
    fn test_as_player() {
        assert_eq!(EntityId(1).as_player(), Some(PlayerId::new(1)));
        assert_eq!(EntityId(2).as_player(), None);
    }

    #[test]
    fn test_first_non_player() {
        assert_eq!(EntityId::first_non_player(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

//! Characters: minions and heroes.
//!
//! A `Character` is plain state. Everything that needs the rest of the game
//! (stat computation, damage, death) lives on `Game`, which owns every
//! character in one table keyed by `EntityId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EntityId, PlayerId};
use crate::tags::{Aura, Buff, Effect, Enrage, TagId};
use crate::triggers::HandlerId;

use super::hero::HeroState;
use super::minion::MinionState;

/// Stacking status counters.
///
/// Each source adds one when it applies and removes one when it goes away,
/// so a minion with two taunt sources keeps taunt when one is silenced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounters {
    pub taunt: i32,
    pub stealth: i32,
    pub divine_shield: i32,
    pub windfury: i32,
    pub immune: i32,
    pub charge: i32,
    pub frozen: i32,
    pub cant_attack: i32,
    pub no_spell_target: i32,
}

/// An effect bound on the bus for its holder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedEffect {
    pub tag: TagId,
    pub effect: Effect,
    pub handlers: SmallVec<[HandlerId; 2]>,
}

/// A buff on its holder. `handlers` are the bindings of its `until` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedBuff {
    pub tag: TagId,
    pub buff: Buff,
    pub handlers: SmallVec<[HandlerId; 2]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharacterKind {
    Minion(MinionState),
    Hero(HeroState),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: EntityId,
    pub owner: PlayerId,
    /// Name of the card this character came from.
    pub card: String,
    pub base_attack: i32,
    pub base_health: i32,
    pub health: i32,
    /// Sum of every health status currently applied.
    pub health_delta: i32,
    pub counters: StatusCounters,
    pub attacks_performed: u32,
    /// Board-entry sequence number. Heroes are 0.
    pub born: u32,
    pub dead: bool,
    pub removed: bool,
    pub enraged: bool,
    /// Effects, buffs and auras are live only while attached.
    pub attached: bool,
    pub effects: Vec<AttachedEffect>,
    pub buffs: Vec<AttachedBuff>,
    /// Aura records this character owns (kept on its player).
    pub auras: Vec<TagId>,
    /// Auras declared by the card, registered when the minion is attached.
    pub innate_auras: Vec<Aura>,
    pub enrage: Vec<Enrage>,
    pub enrage_auras: Vec<TagId>,
    pub kind: CharacterKind,
}

impl Character {
    fn with_kind(id: EntityId, owner: PlayerId, card: String, attack: i32, health: i32, kind: CharacterKind) -> Self {
        Self {
            id,
            owner,
            card,
            base_attack: attack,
            base_health: health,
            health,
            health_delta: 0,
            counters: StatusCounters::default(),
            attacks_performed: 0,
            born: 0,
            dead: false,
            removed: false,
            enraged: false,
            attached: false,
            effects: Vec::new(),
            buffs: Vec::new(),
            auras: Vec::new(),
            innate_auras: Vec::new(),
            enrage: Vec::new(),
            enrage_auras: Vec::new(),
            kind,
        }
    }

    #[must_use]
    pub fn new_minion(id: EntityId, owner: PlayerId, card: impl Into<String>, attack: i32, health: i32, state: MinionState) -> Self {
        Self::with_kind(id, owner, card.into(), attack, health, CharacterKind::Minion(state))
    }

    #[must_use]
    pub fn new_hero(id: EntityId, owner: PlayerId, name: impl Into<String>, health: i32, state: HeroState) -> Self {
        Self::with_kind(id, owner, name.into(), 0, health, CharacterKind::Hero(state))
    }

    #[must_use]
    pub fn minion(&self) -> Option<&MinionState> {
        match &self.kind {
            CharacterKind::Minion(m) => Some(m),
            CharacterKind::Hero(_) => None,
        }
    }

    pub fn minion_mut(&mut self) -> Option<&mut MinionState> {
        match &mut self.kind {
            CharacterKind::Minion(m) => Some(m),
            CharacterKind::Hero(_) => None,
        }
    }

    #[must_use]
    pub fn hero(&self) -> Option<&HeroState> {
        match &self.kind {
            CharacterKind::Hero(h) => Some(h),
            CharacterKind::Minion(_) => None,
        }
    }

    pub fn hero_mut(&mut self) -> Option<&mut HeroState> {
        match &mut self.kind {
            CharacterKind::Hero(h) => Some(h),
            CharacterKind::Minion(_) => None,
        }
    }

    #[must_use]
    pub fn is_minion(&self) -> bool {
        matches!(self.kind, CharacterKind::Minion(_))
    }

    #[must_use]
    pub fn is_hero(&self) -> bool {
        matches!(self.kind, CharacterKind::Hero(_))
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.base_health + self.health_delta
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.counters.frozen > 0
    }

    #[must_use]
    pub fn is_stealthed(&self) -> bool {
        self.counters.stealth > 0
    }

    #[must_use]
    pub fn has_taunt(&self) -> bool {
        self.counters.taunt > 0
    }

    /// Attacks allowed per turn.
    #[must_use]
    pub fn attacks_allowed(&self) -> u32 {
        if self.counters.windfury > 0 {
            2
        } else {
            1
        }
    }

    /// On the board and not waiting for its death to resolve.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.dead && !self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CharacterClass, MinionType};

    fn yeti() -> Character {
        Character::new_minion(
            EntityId(7),
            PlayerId::FIRST,
            "Chillwind Yeti",
            4,
            5,
            MinionState::new(MinionType::None),
        )
    }

    #[test]
    fn test_new_minion() {
        let c = yeti();
        assert!(c.is_minion());
        assert_eq!(c.health, 5);
        assert_eq!(c.max_health(), 5);
        assert_eq!(c.attacks_allowed(), 1);
        assert!(c.is_active());
        assert!(c.hero().is_none());
    }

    #[test]
    fn test_windfury_counter() {
        let mut c = yeti();
        c.counters.windfury += 1;
        c.counters.windfury += 1;
        assert_eq!(c.attacks_allowed(), 2);
        c.counters.windfury -= 1;
        assert_eq!(c.attacks_allowed(), 2);
        c.counters.windfury -= 1;
        assert_eq!(c.attacks_allowed(), 1);
    }

    #[test]
    fn test_new_hero() {
        let hero = Character::new_hero(
            EntityId(2),
            PlayerId::SECOND,
            "Jaina Proudmoore",
            30,
            HeroState::new(CharacterClass::Mage),
        );
        assert!(hero.is_hero());
        assert_eq!(hero.born, 0);
        assert_eq!(hero.hero().unwrap().armor, 0);
    }
}

//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its cost, its
//! class, and a [`CardKind`] carrying the tags it is built from. For example,
//! "Fireball" costs 4 and carries a single on-play battlecry dealing 6
//! damage to its chosen target.
//!
//! Instance-specific data (zone, owner, whether it was countered) is stored
//! separately in `CardInstance`, and a minion's in-play state lives on its
//! `Character`.

use serde::{Deserialize, Serialize};

use super::attributes::{CharacterClass, MinionType, Rarity};
use crate::tags::{Action, Aura, Battlecry, Choice, Deathrattle, Effect, Enrage, Event, Selector, Status, Targeting};

fn yes() -> bool {
    true
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// A creature card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinionCard {
    pub attack: i32,
    pub health: i32,
    #[serde(default)]
    pub minion_type: MinionType,
    /// Innate statuses (taunt, charge, ...), installed as permanent buffs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<Status>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub battlecry: Vec<Battlecry>,
    /// Replaces the battlecries when another card was played this turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo: Option<Battlecry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deathrattles: Vec<Deathrattle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auras: Vec<Aura>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enrage: Vec<Enrage>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<Targeting>,
    /// Run in order with the chosen target as focus.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_play: Vec<Battlecry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combo: Vec<Battlecry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

/// A hidden trap: when `trigger` fires on the opponent's turn, run `actions`
/// on `selector` (with the event's subject as focus) and reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretCard {
    pub trigger: Event,
    pub actions: Vec<Action>,
    pub selector: Selector,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponCard {
    pub attack: i32,
    pub durability: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battlecry: Option<Battlecry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo: Option<Battlecry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deathrattle: Option<Deathrattle>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardKind {
    Minion(MinionCard),
    Spell(SpellCard),
    Secret(SecretCard),
    Weapon(WeaponCard),
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_tags::cards::{CardDefinition, CharacterClass};
/// use ccg_tags::tags::Status;
///
/// let footman = CardDefinition::minion("Goldshire Footman", 1, 1, 2)
///     .status(Status::Taunt);
///
/// assert!(footman.is_minion());
/// assert_eq!(footman.class, CharacterClass::All);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    pub mana: i32,
    #[serde(default)]
    pub class: CharacterClass,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default = "yes")]
    pub collectible: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub overload: i32,
    pub kind: CardKind,
}

impl CardDefinition {
    fn with_kind(name: impl Into<String>, mana: i32, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            mana,
            class: CharacterClass::All,
            rarity: Rarity::Common,
            collectible: true,
            overload: 0,
            kind,
        }
    }

    #[must_use]
    pub fn minion(name: impl Into<String>, mana: i32, attack: i32, health: i32) -> Self {
        Self::with_kind(
            name,
            mana,
            CardKind::Minion(MinionCard {
                attack,
                health,
                ..MinionCard::default()
            }),
        )
    }

    #[must_use]
    pub fn spell(name: impl Into<String>, mana: i32) -> Self {
        Self::with_kind(name, mana, CardKind::Spell(SpellCard::default()))
    }

    #[must_use]
    pub fn secret(name: impl Into<String>, mana: i32, trigger: Event, actions: Vec<Action>, selector: Selector) -> Self {
        Self::with_kind(
            name,
            mana,
            CardKind::Secret(SecretCard {
                trigger,
                actions,
                selector,
            }),
        )
    }

    #[must_use]
    pub fn weapon(name: impl Into<String>, mana: i32, attack: i32, durability: i32) -> Self {
        Self::with_kind(
            name,
            mana,
            CardKind::Weapon(WeaponCard {
                attack,
                durability,
                ..WeaponCard::default()
            }),
        )
    }

    #[must_use]
    pub fn is_minion(&self) -> bool {
        matches!(self.kind, CardKind::Minion(_))
    }

    /// Spells and secrets.
    #[must_use]
    pub fn is_spell(&self) -> bool {
        matches!(self.kind, CardKind::Spell(_) | CardKind::Secret(_))
    }

    #[must_use]
    pub fn is_secret(&self) -> bool {
        matches!(self.kind, CardKind::Secret(_))
    }

    #[must_use]
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, CardKind::Weapon(_))
    }

    #[must_use]
    pub fn as_minion(&self) -> Option<&MinionCard> {
        match &self.kind {
            CardKind::Minion(m) => Some(m),
            _ => None,
        }
    }

    /// Play-time targeting, for spells that need one.
    #[must_use]
    pub fn targeting(&self) -> Option<&Targeting> {
        match &self.kind {
            CardKind::Spell(s) => s.targeting.as_ref(),
            _ => None,
        }
    }

    /// Choose-one options, if any.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            CardKind::Minion(m) => &m.choices,
            CardKind::Spell(s) => &s.choices,
            _ => &[],
        }
    }

    // Builder methods. Each is a no-op on kinds it does not apply to.

    #[must_use]
    pub fn class(mut self, class: CharacterClass) -> Self {
        self.class = class;
        self
    }

    #[must_use]
    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn uncollectible(mut self) -> Self {
        self.collectible = false;
        self
    }

    #[must_use]
    pub fn overload(mut self, overload: i32) -> Self {
        self.overload = overload;
        self
    }

    #[must_use]
    pub fn minion_type(mut self, minion_type: MinionType) -> Self {
        if let CardKind::Minion(m) = &mut self.kind {
            m.minion_type = minion_type;
        }
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        if let CardKind::Minion(m) = &mut self.kind {
            m.statuses.push(status);
        }
        self
    }

    #[must_use]
    pub fn targeting_with(mut self, targeting: Targeting) -> Self {
        if let CardKind::Spell(s) = &mut self.kind {
            s.targeting = Some(targeting);
        }
        self
    }

    /// Minion battlecry, spell on-play step or weapon battlecry.
    #[must_use]
    pub fn battlecry(mut self, battlecry: Battlecry) -> Self {
        match &mut self.kind {
            CardKind::Minion(m) => m.battlecry.push(battlecry),
            CardKind::Spell(s) => s.on_play.push(battlecry),
            CardKind::Weapon(w) => w.battlecry = Some(battlecry),
            CardKind::Secret(_) => {}
        }
        self
    }

    #[must_use]
    pub fn combo(mut self, combo: Battlecry) -> Self {
        match &mut self.kind {
            CardKind::Minion(m) => m.combo = Some(combo),
            CardKind::Spell(s) => s.combo.push(combo),
            CardKind::Weapon(w) => w.combo = Some(combo),
            CardKind::Secret(_) => {}
        }
        self
    }

    #[must_use]
    pub fn choice(mut self, choice: Choice) -> Self {
        match &mut self.kind {
            CardKind::Minion(m) => m.choices.push(choice),
            CardKind::Spell(s) => s.choices.push(choice),
            _ => {}
        }
        self
    }

    #[must_use]
    pub fn deathrattle(mut self, deathrattle: Deathrattle) -> Self {
        match &mut self.kind {
            CardKind::Minion(m) => m.deathrattles.push(deathrattle),
            CardKind::Weapon(w) => w.deathrattle = Some(deathrattle),
            _ => {}
        }
        self
    }

    #[must_use]
    pub fn effect(mut self, effect: Effect) -> Self {
        if let CardKind::Minion(m) = &mut self.kind {
            m.effects.push(effect);
        }
        self
    }

    #[must_use]
    pub fn aura(mut self, aura: Aura) -> Self {
        if let CardKind::Minion(m) = &mut self.kind {
            m.auras.push(aura);
        }
        self
    }

    #[must_use]
    pub fn enrage(mut self, enrage: Enrage) -> Self {
        if let CardKind::Minion(m) = &mut self.kind {
            m.enrage.push(enrage);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{PlayerScope, TargetKind};

    #[test]
    fn test_builders() {
        let raptor = CardDefinition::minion("Bloodfen Raptor", 2, 3, 2).minion_type(MinionType::Beast);
        let m = raptor.as_minion().unwrap();
        assert_eq!((m.attack, m.health), (3, 2));
        assert_eq!(m.minion_type, MinionType::Beast);
        assert!(raptor.collectible);

        let bolt = CardDefinition::spell("Lightning Bolt", 1)
            .class(CharacterClass::Shaman)
            .overload(1)
            .targeting_with(Targeting::any_character())
            .battlecry(Battlecry::new(Action::Damage { amount: 3 }, Selector::target()));
        assert!(bolt.is_spell());
        assert_eq!(bolt.targeting().unwrap().kind, TargetKind::Character);
        assert_eq!(bolt.overload, 1);
    }

    #[test]
    fn test_kind_specific_builders_ignore_other_kinds() {
        let axe = CardDefinition::weapon("Fiery War Axe", 2, 3, 2).status(Status::Taunt);
        assert_eq!(axe, CardDefinition::weapon("Fiery War Axe", 2, 3, 2));
    }

    #[test]
    fn test_json_round_trip() {
        let trap = CardDefinition::secret(
            "Explosive Trap",
            2,
            Event::on(crate::triggers::EventKind::CharacterAttack, PlayerScope::Enemy),
            vec![Action::Damage { amount: 2 }],
            Selector::characters(PlayerScope::Enemy),
        )
        .class(CharacterClass::Hunter);
        let json = serde_json::to_string(&trap).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trap);
        assert!(back.is_secret() && back.is_spell());
    }

    #[test]
    fn test_minimal_json() {
        let wisp: CardDefinition =
            serde_json::from_str(r#"{"name": "Wisp", "mana": 0, "kind": {"type": "minion", "attack": 1, "health": 1}}"#)
                .unwrap();
        assert_eq!(wisp.class, CharacterClass::All);
        assert!(wisp.collectible);
        assert_eq!(wisp.as_minion().unwrap().minion_type, MinionType::None);
    }
}

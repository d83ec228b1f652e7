//! Hero-only state: armor, weapon and the once-per-turn power.

use crate::cards::CharacterClass;
use crate::core::EntityId;
use crate::tags::Deathrattle;

/// An equipped weapon. Its attack counts only on its owner's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Weapon {
    pub id: EntityId,
    pub card: String,
    pub base_attack: i32,
    pub durability: i32,
    pub deathrattle: Option<Deathrattle>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroState {
    pub class: CharacterClass,
    pub armor: i32,
    pub weapon: Option<Weapon>,
    pub power_used: bool,
}

impl HeroState {
    #[must_use]
    pub fn new(class: CharacterClass) -> Self {
        Self {
            class,
            armor: 0,
            weapon: None,
            power_used: false,
        }
    }
}

//! Fixed card properties: class, tribe and rarity.
//!
//! These are closed sets, serialized as lowercase names so card files and
//! replays can spell them out (`"mage"`, `"beast"`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// The class a card or hero belongs to. `All` is a neutral card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    #[default]
    All,
    Mage,
    Hunter,
    Shaman,
    Warrior,
    Druid,
    Priest,
    Paladin,
    Rogue,
    Warlock,
}

impl CharacterClass {
    /// The nine playable classes, in hero-select order.
    pub const PLAYABLE: [CharacterClass; 9] = [
        Self::Mage,
        Self::Hunter,
        Self::Shaman,
        Self::Warrior,
        Self::Druid,
        Self::Priest,
        Self::Paladin,
        Self::Rogue,
        Self::Warlock,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mage => "mage",
            Self::Hunter => "hunter",
            Self::Shaman => "shaman",
            Self::Warrior => "warrior",
            Self::Druid => "druid",
            Self::Priest => "priest",
            Self::Paladin => "paladin",
            Self::Rogue => "rogue",
            Self::Warlock => "warlock",
        }
    }

    /// Name of the class's hero.
    #[must_use]
    pub fn hero_name(self) -> &'static str {
        match self {
            Self::All => "Nobody",
            Self::Mage => "Jaina Proudmoore",
            Self::Hunter => "Rexxar",
            Self::Shaman => "Thrall",
            Self::Warrior => "Garrosh Hellscream",
            Self::Druid => "Malfurion Stormrage",
            Self::Priest => "Anduin Wrynn",
            Self::Paladin => "Uther Lightbringer",
            Self::Rogue => "Valeera Sanguinar",
            Self::Warlock => "Gul'dan",
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        std::iter::once(Self::All)
            .chain(Self::PLAYABLE)
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| EngineError::UnknownClass(s.to_string()))
    }
}

/// Minion tribe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinionType {
    #[default]
    None,
    Beast,
    Murloc,
    Dragon,
    Totem,
    Demon,
    Pirate,
    Mech,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Free,
    Common,
    Rare,
    Epic,
    Legendary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_parse() {
        assert_eq!("mage".parse::<CharacterClass>().unwrap(), CharacterClass::Mage);
        assert_eq!("Warlock".parse::<CharacterClass>().unwrap(), CharacterClass::Warlock);
        assert!(matches!(
            "bard".parse::<CharacterClass>(),
            Err(EngineError::UnknownClass(_))
        ));
    }

    #[test]
    fn test_class_display_round_trip() {
        for class in CharacterClass::PLAYABLE {
            assert_eq!(class.to_string().parse::<CharacterClass>().unwrap(), class);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&MinionType::Murloc).unwrap(), "\"murloc\"");
        assert_eq!(serde_json::to_string(&Rarity::Legendary).unwrap(), "\"legendary\"");
        let class: CharacterClass = serde_json::from_str("\"priest\"").unwrap();
        assert_eq!(class, CharacterClass::Priest);
    }
}

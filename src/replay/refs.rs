//! References to cards and characters that survive serialization.
//!
//! A replay cannot name entity ids (they depend on allocation order), so
//! it names positions instead: a card by its hand index, a character by
//! its player and board slot, taken when the move began.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EntityId, PlayerId};
use crate::rules::Game;

/// `p1` / `p2` for a hero, `p1:3` for the minion in slot 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterRef {
    pub player: PlayerId,
    pub minion: Option<usize>,
}

impl CharacterRef {
    #[must_use]
    pub fn hero(player: PlayerId) -> Self {
        Self { player, minion: None }
    }

    #[must_use]
    pub fn minion(player: PlayerId, index: usize) -> Self {
        Self {
            player,
            minion: Some(index),
        }
    }

    /// The current position of a character.
    #[must_use]
    pub fn of(game: &Game, id: EntityId) -> Option<Self> {
        if let Some((player, index)) = game.minion_slot(id) {
            return Some(Self::minion(player, index));
        }
        PlayerId::all()
            .find(|p| game.player(*p).hero == id)
            .map(Self::hero)
    }

    /// The character at this position now.
    #[must_use]
    pub fn resolve(&self, game: &Game) -> Option<EntityId> {
        let player = game.player(self.player);
        match self.minion {
            Some(index) => player.minions.get(index).copied(),
            None => Some(player.hero),
        }
    }
}

/// Every character on the board by id, for resolving targets against the
/// board as it was when a move began.
pub(crate) fn board_refs(game: &Game) -> FxHashMap<EntityId, CharacterRef> {
    let mut refs = FxHashMap::default();
    for player in PlayerId::all() {
        let p = game.player(player);
        refs.insert(p.hero, CharacterRef::hero(player));
        for (i, minion) in p.minions.iter().enumerate() {
            refs.insert(*minion, CharacterRef::minion(player, i));
        }
    }
    refs
}

impl fmt::Display for CharacterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.player.index() + 1)?;
        if let Some(index) = self.minion {
            write!(f, ":{index}")?;
        }
        Ok(())
    }
}

impl FromStr for CharacterRef {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EngineError::Replay(format!("bad character reference {s:?}"));
        let (player, minion) = match s.trim().split_once(':') {
            Some((p, m)) => (p, Some(m.trim().parse::<usize>().map_err(|_| bad())?)),
            None => (s.trim(), None),
        };
        let player = match player.trim() {
            "p1" => PlayerId::FIRST,
            "p2" => PlayerId::SECOND,
            _ => return Err(bad()),
        };
        Ok(Self { player, minion })
    }
}

impl TryFrom<String> for CharacterRef {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CharacterRef> for String {
    fn from(value: CharacterRef) -> Self {
        value.to_string()
    }
}

/// A hand card by index, with the choose-one option picked for it.
///
/// Written `3` or `3:1`. In JSON a bare index is an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRefRepr", into = "CardRefRepr")]
pub struct CardRef {
    pub index: usize,
    pub option: Option<usize>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CardRefRepr {
    Index(usize),
    Text(String),
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.option {
            Some(option) => write!(f, "{}:{option}", self.index),
            None => write!(f, "{}", self.index),
        }
    }
}

impl FromStr for CardRef {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || EngineError::Replay(format!("bad card reference {s:?}"));
        let parse = |n: &str| n.trim().parse::<usize>().map_err(|_| bad());
        match s.trim().split_once(':') {
            Some((index, option)) => Ok(Self {
                index: parse(index)?,
                option: Some(parse(option)?),
            }),
            None => Ok(Self {
                index: parse(s)?,
                option: None,
            }),
        }
    }
}

impl TryFrom<CardRefRepr> for CardRef {
    type Error = EngineError;

    fn try_from(value: CardRefRepr) -> Result<Self, Self::Error> {
        match value {
            CardRefRepr::Index(index) => Ok(Self { index, option: None }),
            CardRefRepr::Text(text) => text.parse(),
        }
    }
}

impl From<CardRef> for CardRefRepr {
    fn from(value: CardRef) -> Self {
        match value.option {
            Some(_) => Self::Text(value.to_string()),
            None => Self::Index(value.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_ref_text() {
        let r: CharacterRef = "p2:3".parse().unwrap();
        assert_eq!(r, CharacterRef::minion(PlayerId::SECOND, 3));
        assert_eq!(r.to_string(), "p2:3");
        assert_eq!("p1".parse::<CharacterRef>().unwrap(), CharacterRef::hero(PlayerId::FIRST));
        assert!("p3".parse::<CharacterRef>().is_err());
        assert!("p1:x".parse::<CharacterRef>().is_err());
    }

    #[test]
    fn test_card_ref_json() {
        let plain = CardRef { index: 2, option: None };
        assert_eq!(serde_json::to_string(&plain).unwrap(), "2");
        let chosen = CardRef {
            index: 0,
            option: Some(1),
        };
        assert_eq!(serde_json::to_string(&chosen).unwrap(), r#""0:1""#);
        assert_eq!(serde_json::from_str::<CardRef>(r#""0:1""#).unwrap(), chosen);
        assert_eq!(serde_json::from_str::<CardRef>("2").unwrap(), plain);
    }

    #[test]
    fn test_character_ref_json() {
        let r = CharacterRef::minion(PlayerId::FIRST, 0);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""p1:0""#);
        assert_eq!(serde_json::from_str::<CharacterRef>(&json).unwrap(), r);
        assert!(serde_json::from_str::<CharacterRef>(r#""q1""#).is_err());
    }
}

//! The move vocabulary shared by the text and JSON formats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EntityId, Result};
use crate::rules::Game;

use super::refs::{CardRef, CharacterRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ReplayMove {
    /// A spell, secret or weapon from hand.
    Play {
        card: CardRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<CharacterRef>,
    },
    /// A minion from hand, placed at board slot `index`.
    Summon {
        card: CardRef,
        index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<CharacterRef>,
    },
    Attack {
        attacker: CharacterRef,
        target: CharacterRef,
    },
    Power {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<CharacterRef>,
    },
    End,
    Start,
    Concede,
}

impl ReplayMove {
    /// An attack between two characters at their current positions.
    #[must_use]
    pub fn attack(game: &Game, attacker: EntityId, target: EntityId) -> Option<Self> {
        Some(Self::Attack {
            attacker: CharacterRef::of(game, attacker)?,
            target: CharacterRef::of(game, target)?,
        })
    }

    /// Parse one text move from its name and arguments.
    pub(crate) fn from_parts(name: &str, args: &[&str]) -> Result<Self> {
        let arity = |min: usize, max: usize| {
            if (min..=max).contains(&args.len()) {
                Ok(())
            } else {
                Err(EngineError::Replay(format!(
                    "{name}() takes {min} to {max} arguments, got {}",
                    args.len()
                )))
            }
        };
        let target = |i: usize| args.get(i).map(|a| a.parse::<CharacterRef>()).transpose();
        let mv = match name {
            "play" => {
                arity(1, 2)?;
                Self::Play {
                    card: args[0].parse()?,
                    target: target(1)?,
                }
            }
            "summon" => {
                arity(2, 3)?;
                Self::Summon {
                    card: args[0].parse()?,
                    index: args[1]
                        .parse()
                        .map_err(|_| EngineError::Replay(format!("bad summon index {:?}", args[1])))?,
                    target: target(2)?,
                }
            }
            "attack" => {
                arity(2, 2)?;
                Self::Attack {
                    attacker: args[0].parse()?,
                    target: args[1].parse()?,
                }
            }
            "power" => {
                arity(0, 1)?;
                Self::Power { target: target(0)? }
            }
            "end" => {
                arity(0, 0)?;
                Self::End
            }
            "start" => {
                arity(0, 0)?;
                Self::Start
            }
            "concede" => {
                arity(0, 0)?;
                Self::Concede
            }
            other => return Err(EngineError::Replay(format!("unknown move {other}()"))),
        };
        Ok(mv)
    }
}

impl fmt::Display for ReplayMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let with_target = |t: &Option<CharacterRef>| t.map(|t| format!(",{t}")).unwrap_or_default();
        match self {
            Self::Play { card, target } => write!(f, "play({card}{})", with_target(target)),
            Self::Summon { card, index, target } => write!(f, "summon({card},{index}{})", with_target(target)),
            Self::Attack { attacker, target } => write!(f, "attack({attacker},{target})"),
            Self::Power { target: Some(t) } => write!(f, "power({t})"),
            Self::Power { target: None } => f.write_str("power()"),
            Self::End => f.write_str("end()"),
            Self::Start => f.write_str("start()"),
            Self::Concede => f.write_str("concede()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_text_forms() {
        let summon = ReplayMove::Summon {
            card: CardRef {
                index: 1,
                option: Some(0),
            },
            index: 2,
            target: Some(CharacterRef::minion(PlayerId::SECOND, 0)),
        };
        assert_eq!(summon.to_string(), "summon(1:0,2,p2:0)");
        assert_eq!(ReplayMove::Power { target: None }.to_string(), "power()");
        assert_eq!(ReplayMove::End.to_string(), "end()");
    }

    #[test]
    fn test_from_parts() {
        let mv = ReplayMove::from_parts("attack", &["p1:0", "p2"]).unwrap();
        assert_eq!(
            mv,
            ReplayMove::Attack {
                attacker: CharacterRef::minion(PlayerId::FIRST, 0),
                target: CharacterRef::hero(PlayerId::SECOND),
            }
        );
        assert!(ReplayMove::from_parts("attack", &["p1"]).is_err());
        assert!(ReplayMove::from_parts("dance", &[]).is_err());
        assert!(ReplayMove::from_parts("summon", &["0", "x"]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let mv = ReplayMove::Play {
            card: CardRef { index: 3, option: None },
            target: Some(CharacterRef::hero(PlayerId::SECOND)),
        };
        let json = serde_json::to_value(mv).unwrap();
        assert_eq!(json, serde_json::json!({"name": "play", "card": 3, "target": "p2"}));
        assert_eq!(serde_json::from_value::<ReplayMove>(json).unwrap(), mv);
    }
}

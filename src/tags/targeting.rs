//! Play-time targeting for spells and hero powers.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::rules::Game;

use super::condition::{Condition, ConditionContext};
use super::selector::PlayerScope;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    #[default]
    Character,
    Minion,
    Hero,
}

fn both() -> PlayerScope {
    PlayerScope::Both
}

/// Which characters a card may be aimed at when it is played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targeting {
    #[serde(default)]
    pub kind: TargetKind,
    #[serde(default = "both")]
    pub players: PlayerScope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Targeting {
    pub fn new(kind: TargetKind, players: PlayerScope) -> Self {
        Self {
            kind,
            players,
            condition: None,
        }
    }

    pub fn any_character() -> Self {
        Self::new(TargetKind::Character, PlayerScope::Both)
    }

    pub fn any_minion() -> Self {
        Self::new(TargetKind::Minion, PlayerScope::Both)
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Legal targets for `caster`, enemy minions first, heroes last.
    ///
    /// Enemy stealth always hides a target; `spell` also hides minions that
    /// cannot be targeted by spells.
    pub fn candidates(&self, game: &Game, caster: EntityId, spell: bool) -> Vec<EntityId> {
        let Some(owner) = game.owner_of(caster) else {
            return Vec::new();
        };
        let players = self.players.players(game, owner);
        let mut pool = Vec::new();
        if self.kind != TargetKind::Hero {
            pool.extend(players.iter().flat_map(|p| game.player(*p).minions.iter().copied()));
        }
        if self.kind != TargetKind::Minion {
            pool.extend(players.iter().map(|p| game.player(*p).hero));
        }
        pool.retain(|t| {
            let Some(c) = game.character(*t) else {
                return false;
            };
            if c.dead || c.removed {
                return false;
            }
            if c.owner != owner && c.counters.stealth > 0 {
                return false;
            }
            if spell && c.counters.no_spell_target > 0 {
                return false;
            }
            self.condition
                .as_ref()
                .map_or(true, |cond| cond.evaluate(&ConditionContext::subject(game, caster, *t)))
        });
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let targeting: Targeting = serde_json::from_str("{}").unwrap();
        assert_eq!(targeting, Targeting::any_character());
    }

    #[test]
    fn test_round_trip() {
        let targeting = Targeting::new(TargetKind::Minion, PlayerScope::Enemy).when(Condition::IsDamaged);
        let json = serde_json::to_string(&targeting).unwrap();
        assert_eq!(serde_json::from_str::<Targeting>(&json).unwrap(), targeting);
    }
}

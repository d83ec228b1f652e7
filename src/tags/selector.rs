//! Selectors: "who" a tag applies to.
//!
//! A selector has two faces. [`Selector::matches`] is the static test used by
//! auras and stat computation; [`Selector::for_each_target`] resolves the
//! live target list and runs a callback per target, applying the picker.
//! Random pickers interleave picking with the callback so that a second
//! missile never chases a minion the first one already killed.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{EntityId, PlayerId, Result};
use crate::rules::Game;

use super::condition::{Condition, ConditionContext};

/// Which players a selector looks at, relative to the tag's owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerScope {
    #[default]
    Friendly,
    Enemy,
    Both,
    PlayerOne,
    PlayerTwo,
    CurrentPlayer,
    OtherPlayer,
}

impl PlayerScope {
    /// The players in scope, seen from `relative_to`.
    ///
    /// `Both` lists the opponent first.
    pub fn players(self, game: &Game, relative_to: PlayerId) -> SmallVec<[PlayerId; 2]> {
        match self {
            Self::Friendly => smallvec![relative_to],
            Self::Enemy => smallvec![relative_to.opponent()],
            Self::Both => smallvec![relative_to.opponent(), relative_to],
            Self::PlayerOne => smallvec![PlayerId::FIRST],
            Self::PlayerTwo => smallvec![PlayerId::SECOND],
            Self::CurrentPlayer => smallvec![game.current_player()],
            Self::OtherPlayer => smallvec![game.current_player().opponent()],
        }
    }

    pub fn includes(self, game: &Game, relative_to: PlayerId, player: PlayerId) -> bool {
        self.players(game, relative_to).contains(&player)
    }
}

/// How many of the candidates are taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Picker {
    /// Every candidate.
    #[default]
    All,
    /// One candidate chosen by the owner's agent.
    User,
    /// `count` independent random picks.
    Random { count: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Selector {
    /// The tag's owner.
    #[serde(rename = "self")]
    SelfSelector,
    /// The focus entity handed in by the caller (a spell's chosen target,
    /// an event's subject).
    Target {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    Minion {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
        #[serde(default)]
        players: PlayerScope,
        #[serde(default)]
        picker: Picker,
    },
    /// Minions, then heroes.
    Character {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
        #[serde(default)]
        players: PlayerScope,
        #[serde(default)]
        picker: Picker,
    },
    Hero {
        #[serde(default)]
        players: PlayerScope,
        #[serde(default)]
        picker: Picker,
    },
    Player {
        #[serde(default)]
        players: PlayerScope,
    },
    /// Cards in hand.
    Card {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
        #[serde(default)]
        players: PlayerScope,
        #[serde(default)]
        picker: Picker,
    },
}

impl Selector {
    pub fn minions(players: PlayerScope) -> Self {
        Self::Minion {
            condition: None,
            players,
            picker: Picker::All,
        }
    }

    pub fn characters(players: PlayerScope) -> Self {
        Self::Character {
            condition: None,
            players,
            picker: Picker::All,
        }
    }

    pub fn hero(players: PlayerScope) -> Self {
        Self::Hero {
            players,
            picker: Picker::All,
        }
    }

    pub fn player(players: PlayerScope) -> Self {
        Self::Player { players }
    }

    pub fn target() -> Self {
        Self::Target { condition: None }
    }

    /// Replace the condition (no-op for selectors without one).
    #[must_use]
    pub fn with_condition(mut self, cond: Condition) -> Self {
        match &mut self {
            Self::Target { condition }
            | Self::Minion { condition, .. }
            | Self::Character { condition, .. }
            | Self::Card { condition, .. } => *condition = Some(cond),
            Self::SelfSelector | Self::Hero { .. } | Self::Player { .. } => {}
        }
        self
    }

    /// Replace the picker (no-op for selectors without one).
    #[must_use]
    pub fn with_picker(mut self, new: Picker) -> Self {
        match &mut self {
            Self::Minion { picker, .. }
            | Self::Character { picker, .. }
            | Self::Hero { picker, .. }
            | Self::Card { picker, .. } => *picker = new,
            Self::SelfSelector | Self::Target { .. } | Self::Player { .. } => {}
        }
        self
    }

    #[must_use]
    pub fn picker(&self) -> Picker {
        match self {
            Self::Minion { picker, .. }
            | Self::Character { picker, .. }
            | Self::Hero { picker, .. }
            | Self::Card { picker, .. } => *picker,
            Self::SelfSelector | Self::Target { .. } | Self::Player { .. } => Picker::All,
        }
    }

    /// Whether `obj` is covered by this selector, ignoring the picker.
    pub fn matches(&self, game: &Game, source: EntityId, obj: EntityId) -> bool {
        let Some(owner) = game.owner_of(source) else {
            return false;
        };
        let cond_ok =
            |c: &Option<Condition>| c.as_ref().map_or(true, |c| c.evaluate(&ConditionContext::subject(game, source, obj)));
        match self {
            Self::SelfSelector => obj == source,
            Self::Target { .. } => false,
            Self::Minion {
                condition, players, ..
            } => {
                game.is_minion(obj)
                    && game.owner_of(obj).is_some_and(|p| players.includes(game, owner, p))
                    && cond_ok(condition)
            }
            Self::Character {
                condition, players, ..
            } => {
                game.character(obj).is_some()
                    && game.owner_of(obj).is_some_and(|p| players.includes(game, owner, p))
                    && cond_ok(condition)
            }
            Self::Hero { players, .. } => {
                game.is_hero(obj) && game.owner_of(obj).is_some_and(|p| players.includes(game, owner, p))
            }
            Self::Player { players } => obj
                .as_player()
                .is_some_and(|p| players.includes(game, owner, p)),
            Self::Card {
                condition, players, ..
            } => {
                game.card(obj).is_some()
                    && game.owner_of(obj).is_some_and(|p| players.includes(game, owner, p))
                    && cond_ok(condition)
            }
        }
    }

    /// Every entity currently covered, before the picker runs.
    pub fn candidates(&self, game: &Game, source: EntityId, focus: Option<EntityId>) -> Vec<EntityId> {
        let Some(owner) = game.owner_of(source) else {
            return Vec::new();
        };
        match self {
            Self::SelfSelector => vec![source],
            Self::Target { condition } => focus
                .filter(|f| {
                    condition
                        .as_ref()
                        .map_or(true, |c| c.evaluate(&ConditionContext::subject(game, source, *f)))
                })
                .into_iter()
                .collect(),
            Self::Minion { players, .. } => players
                .players(game, owner)
                .into_iter()
                .flat_map(|p| game.player(p).minions.iter().copied())
                .filter(|m| self.matches(game, source, *m))
                .collect(),
            Self::Character { players, .. } => {
                let scope = players.players(game, owner);
                let mut out: Vec<EntityId> = scope
                    .iter()
                    .flat_map(|p| game.player(*p).minions.iter().copied())
                    .filter(|m| self.matches(game, source, *m))
                    .collect();
                out.extend(
                    scope
                        .iter()
                        .map(|p| game.player(*p).hero)
                        .filter(|h| self.matches(game, source, *h)),
                );
                out
            }
            Self::Hero { players, .. } => players
                .players(game, owner)
                .into_iter()
                .map(|p| game.player(p).hero)
                .collect(),
            Self::Player { players } => players
                .players(game, owner)
                .into_iter()
                .map(EntityId::player)
                .collect(),
            Self::Card { players, .. } => players
                .players(game, owner)
                .into_iter()
                .flat_map(|p| game.player(p).hand.iter().copied())
                .filter(|c| self.matches(game, source, *c))
                .collect(),
        }
    }

    /// Resolve the picked targets in one go.
    pub fn get_targets(&self, game: &mut Game, source: EntityId, focus: Option<EntityId>) -> Result<Vec<EntityId>> {
        let mut picked = Vec::new();
        self.for_each_target(game, source, focus, |_, t| {
            picked.push(t);
            Ok(())
        })?;
        Ok(picked)
    }

    /// Run `f` on each picked target against the live board.
    pub fn for_each_target<F>(&self, game: &mut Game, source: EntityId, focus: Option<EntityId>, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Game, EntityId) -> Result<()>,
    {
        let mut targets = self.candidates(game, source, focus);
        match self.picker() {
            Picker::All => {
                for target in targets {
                    f(game, target)?;
                }
            }
            Picker::User => {
                let Some(owner) = game.owner_of(source) else {
                    return Ok(());
                };
                targets.retain(|t| game.owner_of(*t) == Some(owner) || !game.is_stealthed(*t));
                if targets.is_empty() {
                    return Ok(());
                }
                if let Some(choice) = game.choose_target(owner, &targets)? {
                    f(game, choice)?;
                }
            }
            Picker::Random { count } => {
                for _ in 0..count {
                    if !targets.is_empty() {
                        let pick = game.random_choice(&targets);
                        f(game, pick)?;
                    }
                    targets.retain(|t| !(game.is_minion(*t) && game.is_dead(*t)));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_parse() {
        let sel: Selector = serde_json::from_str(r#"{"name": "minion"}"#).unwrap();
        assert_eq!(sel, Selector::minions(PlayerScope::Friendly));
    }

    #[test]
    fn test_self_name() {
        let json = serde_json::to_value(Selector::SelfSelector).unwrap();
        assert_eq!(json["name"], "self");
    }

    #[test]
    fn test_picker_shape() {
        let sel = Selector::characters(PlayerScope::Enemy).with_picker(Picker::Random { count: 3 });
        let json = serde_json::to_value(&sel).unwrap();
        assert_eq!(json["players"], "enemy");
        assert_eq!(json["picker"]["name"], "random");
        assert_eq!(json["picker"]["count"], 3);
        let back: Selector = serde_json::from_value(json).unwrap();
        assert_eq!(back, sel);
    }

    #[test]
    fn test_with_condition_ignored_on_self() {
        let sel = Selector::SelfSelector.with_condition(Condition::IsDamaged);
        assert_eq!(sel, Selector::SelfSelector);
    }
}

//! Higher-order tags built from actions, statuses, selectors and events.
//!
//! These are plain values. Attaching one to an entity is the game's job
//! (see `rules::board`); the methods here run an already-attached tag.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EntityId, Result};
use crate::rules::{Game, Handler};
use crate::triggers::{GameEvent, HandlerId};

use super::action::Action;
use super::condition::{Condition, ConditionContext};
use super::event::Event;
use super::selector::Selector;
use super::status::Status;

/// Identity of one attached tag instance (buff, effect or aura record).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagId(pub u32);

/// A status on its holder, optionally removed when `until` fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Event>,
}

impl Buff {
    pub fn new(status: Status) -> Self {
        Self { status, until: None }
    }

    pub fn until(status: Status, until: Event) -> Self {
        Self {
            status,
            until: Some(until),
        }
    }
}

/// A status continuously applied to everything `selector` matches.
///
/// With `until` set this is a time-scoped aura that removes itself when the
/// event fires (and in any case at the end of its player's turn).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aura {
    pub status: Status,
    pub selector: Selector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<Event>,
}

impl Aura {
    pub fn new(status: Status, selector: Selector) -> Self {
        Self {
            status,
            selector,
            until: None,
        }
    }

    #[must_use]
    pub fn until(mut self, event: Event) -> Self {
        self.until = Some(event);
        self
    }
}

/// Run `action` on `selector` whenever `event` fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub event: Event,
    pub action: Action,
    pub selector: Selector,
}

impl Effect {
    pub fn new(event: Event, action: Action, selector: Selector) -> Self {
        Self {
            event,
            action,
            selector,
        }
    }

    /// Bind on the holder's buses.
    pub fn apply(&self, game: &mut Game, holder: EntityId, tag: TagId) -> SmallVec<[HandlerId; 2]> {
        self.event.bind(game, holder, Handler::Effect { holder, tag })
    }

    pub fn unapply(game: &mut Game, handlers: &[HandlerId]) {
        Event::unbind(game, handlers);
    }

    /// Respond to a fired event. The event's subject is the selector focus.
    ///
    /// Returns `false` when the event's condition rejected the payload.
    pub fn fire(&self, game: &mut Game, holder: EntityId, event: &GameEvent) -> Result<bool> {
        if !self.event.accepts(game, holder, event) {
            return Ok(false);
        }
        tracing::trace!(holder = %holder, event = %event.kind, "effect fired");
        let action = &self.action;
        self.selector
            .for_each_target(game, holder, event.subject, |g, t| action.act(g, holder, t))?;
        Ok(true)
    }
}

fn actions_on(game: &mut Game, selector: &Selector, actions: &[Action], owner: EntityId, focus: Option<EntityId>) -> Result<()> {
    selector.for_each_target(game, owner, focus, |g, t| {
        for action in actions {
            action.act(g, owner, t)?;
        }
        Ok(())
    })
}

/// Runs once when the owning minion dies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deathrattle {
    pub actions: Vec<Action>,
    pub selector: Selector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Deathrattle {
    pub fn new(action: Action, selector: Selector) -> Self {
        Self {
            actions: vec![action],
            selector,
            condition: None,
        }
    }

    /// Re-check the condition, act, then settle any deaths it caused.
    pub fn run(&self, game: &mut Game, minion: EntityId) -> Result<()> {
        let passes = self
            .condition
            .as_ref()
            .map_or(true, |c| c.evaluate(&ConditionContext::subject(game, minion, minion)));
        if passes {
            actions_on(game, &self.selector, &self.actions, minion, Some(minion))?;
        }
        game.check_delayed()
    }
}

/// Runs once when its card enters play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlecry {
    pub actions: Vec<Action>,
    pub selector: Selector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl Battlecry {
    pub fn new(action: Action, selector: Selector) -> Self {
        Self {
            actions: vec![action],
            selector,
            condition: None,
        }
    }

    pub fn with_actions(actions: Vec<Action>, selector: Selector) -> Self {
        Self {
            actions,
            selector,
            condition: None,
        }
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Returns `false` when the condition held the battlecry back.
    pub fn run(&self, game: &mut Game, owner: EntityId, focus: Option<EntityId>) -> Result<bool> {
        if let Some(cond) = &self.condition {
            let ctx = ConditionContext {
                subject: focus,
                ..ConditionContext::new(game, owner)
            };
            if !cond.evaluate(&ctx) {
                return Ok(false);
            }
        }
        actions_on(game, &self.selector, &self.actions, owner, focus)?;
        Ok(true)
    }
}

/// One option of a choose-one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub option: String,
    pub battlecries: Vec<Battlecry>,
}

impl Choice {
    pub fn new(option: impl Into<String>, battlecries: Vec<Battlecry>) -> Self {
        Self {
            option: option.into(),
            battlecries,
        }
    }
}

/// Statuses applied as auras while the owner is damaged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrage {
    pub statuses: Vec<Status>,
    pub selector: Selector,
}

impl Enrage {
    pub fn new(statuses: Vec<Status>, selector: Selector) -> Self {
        Self { statuses, selector }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{Picker, PlayerScope};
    use crate::triggers::EventKind;

    #[test]
    fn test_effect_round_trip() {
        let effect = Effect::new(
            Event::on(EventKind::MinionSummoned, PlayerScope::Friendly).when(Condition::IsNotSelf),
            Action::Damage { amount: 1 },
            Selector::characters(PlayerScope::Enemy).with_picker(Picker::Random { count: 1 }),
        );
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }

    #[test]
    fn test_choice_json() {
        let choice = Choice::new(
            "Solar Wrath",
            vec![Battlecry::new(Action::Damage { amount: 3 }, Selector::target())],
        );
        let json = serde_json::to_value(&choice).unwrap();
        assert_eq!(json["option"], "Solar Wrath");
        assert_eq!(json["battlecries"][0]["actions"][0]["name"], "damage");
        assert_eq!(json["battlecries"][0]["selector"]["name"], "target");
        let back: Choice = serde_json::from_value(json).unwrap();
        assert_eq!(back, choice);
    }

    #[test]
    fn test_aura_until_json() {
        let aura = Aura::new(
            Status::ManaChange {
                amount: -3,
                minimum: 0,
                card: Some(Condition::IsSpell),
            },
            Selector::player(PlayerScope::Friendly),
        )
        .until(Event::on(EventKind::SpellCast, PlayerScope::Friendly));
        let json = serde_json::to_value(&aura).unwrap();
        assert_eq!(json["until"]["name"], "spell_cast");
        assert_eq!(serde_json::from_value::<Aura>(json).unwrap(), aura);
    }
}

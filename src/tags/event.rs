//! Event descriptors: "when" a tag fires.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::EntityId;
use crate::rules::{Game, Handler};
use crate::triggers::{EventKind, GameEvent, HandlerId};

use super::condition::{Condition, ConditionContext};
use super::selector::PlayerScope;

/// A named bus event, optionally gated by a condition on its payload.
///
/// Player-scoped kinds bind on every player in `players` (relative to the
/// holder's owner, resolved when bound). Entity-scoped kinds bind on the
/// holder itself; a player holder listens on its hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<PlayerScope>,
}

impl Event {
    pub fn new(name: EventKind) -> Self {
        Self {
            name,
            condition: None,
            players: None,
        }
    }

    /// A player-scoped event on the given players.
    pub fn on(name: EventKind, players: PlayerScope) -> Self {
        Self {
            players: Some(players),
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// The bus owners this event listens on.
    pub fn owners(&self, game: &Game, holder: EntityId) -> SmallVec<[EntityId; 2]> {
        if self.name.is_player_event() {
            let Some(owner) = game.owner_of(holder) else {
                return SmallVec::new();
            };
            self.players
                .unwrap_or_default()
                .players(game, owner)
                .into_iter()
                .map(EntityId::player)
                .collect()
        } else {
            game.as_character(holder).into_iter().collect()
        }
    }

    pub fn bind(&self, game: &mut Game, holder: EntityId, handler: Handler) -> SmallVec<[HandlerId; 2]> {
        let owners = self.owners(game, holder);
        owners
            .into_iter()
            .map(|o| game.bus_mut().bind(o, self.name, handler.clone()))
            .collect()
    }

    pub fn bind_once(&self, game: &mut Game, holder: EntityId, handler: Handler) -> SmallVec<[HandlerId; 2]> {
        let owners = self.owners(game, holder);
        owners
            .into_iter()
            .map(|o| game.bus_mut().bind_once(o, self.name, handler.clone()))
            .collect()
    }

    pub fn unbind(game: &mut Game, handlers: &[HandlerId]) {
        for id in handlers {
            game.bus_mut().unbind(*id);
        }
    }

    /// Whether a fired payload passes the gate.
    pub fn accepts(&self, game: &Game, holder: EntityId, event: &GameEvent) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |c| c.evaluate(&ConditionContext::from_event(game, holder, event)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json() {
        let event = Event::on(EventKind::CardPlayed, PlayerScope::Enemy).when(Condition::IsSpell);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["name"], "card_played");
        assert_eq!(json["players"], "enemy");
        assert_eq!(json["condition"]["name"], "is_spell");
        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_minimal_event_json() {
        let event: Event = serde_json::from_str(r#"{"name": "damaged"}"#).unwrap();
        assert_eq!(event, Event::new(EventKind::Damaged));
        assert_eq!(serde_json::to_string(&event).unwrap(), r#"{"name":"damaged"}"#);
    }
}

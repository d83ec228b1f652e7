//! Card queries: which card a summon, transform or add-card action produces.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EntityId, PlayerId, Result};
use crate::rules::Game;

use super::condition::{Condition, ConditionContext};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum CardQuery {
    /// A fixed card.
    Named { card: String },
    /// One of `cards` at random, skipping those already on the player's
    /// board when `not_on_board` is set.
    RandomOf {
        cards: Vec<String>,
        #[serde(default)]
        not_on_board: bool,
    },
    /// A random matching card taken out of the player's hand.
    FromHand {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<Condition>,
    },
    /// A random undrawn card taken out of the player's deck.
    FromDeck {
        #[serde(default)]
        minions_only: bool,
    },
}

impl CardQuery {
    pub fn named(card: impl Into<String>) -> Self {
        Self::Named { card: card.into() }
    }

    /// Resolve to a card name. `None` when nothing qualifies.
    ///
    /// Hand and deck queries remove the card they return.
    pub fn resolve(&self, game: &mut Game, actor: EntityId, player: PlayerId) -> Result<Option<String>> {
        match self {
            Self::Named { card } => {
                if !game.registry().contains(card) {
                    return Err(EngineError::UnknownCard(card.clone()));
                }
                Ok(Some(card.clone()))
            }
            Self::RandomOf {
                cards,
                not_on_board,
            } => {
                let pool: Vec<&String> = cards
                    .iter()
                    .filter(|name| {
                        !*not_on_board
                            || !game
                                .player(player)
                                .minions
                                .iter()
                                .any(|m| game.card_name_of(*m) == Some(name.as_str()))
                    })
                    .collect();
                if pool.is_empty() {
                    return Ok(None);
                }
                let pick = game.random_between(0, pool.len() as i32 - 1) as usize;
                let name = pool[pick].clone();
                if !game.registry().contains(&name) {
                    return Err(EngineError::UnknownCard(name));
                }
                Ok(Some(name))
            }
            Self::FromHand { condition } => {
                let hand: Vec<EntityId> = game
                    .player(player)
                    .hand
                    .iter()
                    .copied()
                    .filter(|c| {
                        condition
                            .as_ref()
                            .map_or(true, |cond| cond.evaluate(&ConditionContext::subject(game, actor, *c)))
                    })
                    .collect();
                if hand.is_empty() {
                    return Ok(None);
                }
                let card = game.random_choice(&hand);
                Ok(game.take_from_hand(card))
            }
            Self::FromDeck { minions_only } => {
                let registry = game.registry().clone();
                let candidates: Vec<usize> = game
                    .player(player)
                    .deck
                    .undrawn()
                    .filter(|(_, name)| !*minions_only || registry.get(name).is_some_and(|d| d.is_minion()))
                    .map(|(i, _)| i)
                    .collect();
                if candidates.is_empty() {
                    return Ok(None);
                }
                let pick = candidates[game.random_between(0, candidates.len() as i32 - 1) as usize];
                Ok(game.player_mut(player).deck.take(pick))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_json() {
        let query = CardQuery::RandomOf {
            cards: vec!["Searing Totem".into(), "Healing Totem".into()],
            not_on_board: true,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["name"], "random_of");
        assert_eq!(serde_json::from_value::<CardQuery>(json).unwrap(), query);

        let from_hand: CardQuery = serde_json::from_str(r#"{"name": "from_hand"}"#).unwrap();
        assert_eq!(from_hand, CardQuery::FromHand { condition: None });
    }
}

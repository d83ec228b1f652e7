//! Predicates over an event payload and the tag's owning entity.
//!
//! A condition is evaluated against a [`ConditionContext`]: the entity that
//! owns the tag, plus the slots of whatever is being tested. For selectors
//! the subject is the candidate; for events the subject, other and amount
//! come straight from the [`GameEvent`].

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, MinionType};
use crate::core::EntityId;
use crate::rules::Game;
use crate::triggers::GameEvent;

/// Everything a condition may look at.
#[derive(Clone, Copy)]
pub struct ConditionContext<'a> {
    pub game: &'a Game,
    /// The entity holding the tag.
    pub owner: EntityId,
    pub subject: Option<EntityId>,
    pub other: Option<EntityId>,
    pub amount: i32,
}

impl<'a> ConditionContext<'a> {
    pub fn new(game: &'a Game, owner: EntityId) -> Self {
        Self {
            game,
            owner,
            subject: None,
            other: None,
            amount: 0,
        }
    }

    /// Context for testing one candidate entity.
    pub fn subject(game: &'a Game, owner: EntityId, subject: EntityId) -> Self {
        Self {
            subject: Some(subject),
            ..Self::new(game, owner)
        }
    }

    /// Context built from an event payload.
    pub fn from_event(game: &'a Game, owner: EntityId, event: &GameEvent) -> Self {
        Self {
            game,
            owner,
            subject: event.subject,
            other: event.other,
            amount: event.amount,
        }
    }
}

/// A closed set of predicates, serialized as `{"name": "...", ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Condition {
    IsSelf,
    IsNotSelf,
    IsMinion,
    IsHero,
    IsSpell,
    IsSecret,
    IsWeapon,
    TargetIsHero,
    TargetIsMinion,
    IsType {
        minion_type: MinionType,
        #[serde(default)]
        include_self: bool,
    },
    Adjacent,
    AttackLessThanOrEqualTo {
        value: i32,
        #[serde(default)]
        include_self: bool,
    },
    AttackGreaterThan {
        value: i32,
        #[serde(default)]
        include_self: bool,
    },
    IsDamaged,
    HasSecret,
    HasDivineShield,
    HasDeathrattle,
    HasBattlecry,
    HasOverload,
    HasCardName {
        card_name: String,
    },
    MinionCountIs {
        count: usize,
    },
    OwnersTurn,
    OneIn {
        amount: i32,
    },
    Not {
        condition: Box<Condition>,
    },
    And {
        conditions: Vec<Condition>,
    },
    Or {
        conditions: Vec<Condition>,
    },
}

impl Condition {
    pub fn not(condition: Condition) -> Self {
        Self::Not {
            condition: Box::new(condition),
        }
    }

    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::And {
            conditions: conditions.into_iter().collect(),
        }
    }

    pub fn is_type(minion_type: MinionType) -> Self {
        Self::IsType {
            minion_type,
            include_self: false,
        }
    }

    /// Evaluate the predicate. Missing slots make subject tests false.
    pub fn evaluate(&self, ctx: &ConditionContext<'_>) -> bool {
        let game = ctx.game;
        match self {
            Self::IsSelf => ctx.subject == Some(ctx.owner),
            Self::IsNotSelf => ctx.subject != Some(ctx.owner),
            Self::IsMinion => ctx.subject.is_some_and(|s| is_minion_like(game, s)),
            Self::IsHero => ctx.subject.is_some_and(|s| game.is_hero(s)),
            Self::IsSpell => ctx.subject.is_some_and(|s| {
                card_kind(game, s).is_some_and(|k| matches!(k, CardKind::Spell(_) | CardKind::Secret(_)))
            }),
            Self::IsSecret => ctx
                .subject
                .is_some_and(|s| card_kind(game, s).is_some_and(|k| matches!(k, CardKind::Secret(_)))),
            Self::IsWeapon => ctx
                .subject
                .is_some_and(|s| card_kind(game, s).is_some_and(|k| matches!(k, CardKind::Weapon(_)))),
            Self::TargetIsHero => ctx.other.is_some_and(|o| game.is_hero(o)),
            Self::TargetIsMinion => ctx.other.is_some_and(|o| game.is_minion(o)),
            Self::IsType {
                minion_type,
                include_self,
            } => ctx.subject.is_some_and(|s| {
                (*include_self || s != ctx.owner) && subject_type(game, s) == Some(*minion_type)
            }),
            Self::Adjacent => ctx.subject.is_some_and(|s| {
                let (Some(mine), Some(theirs)) = (game.minion_slot(ctx.owner), game.minion_slot(s)) else {
                    return false;
                };
                mine.0 == theirs.0 && mine.1.abs_diff(theirs.1) == 1
            }),
            Self::AttackLessThanOrEqualTo {
                value,
                include_self,
            } => ctx.subject.is_some_and(|s| {
                (*include_self || s != ctx.owner)
                    && game.character(s).is_some()
                    && game.calculate_attack(s) <= *value
            }),
            Self::AttackGreaterThan {
                value,
                include_self,
            } => ctx.subject.is_some_and(|s| {
                (*include_self || s != ctx.owner)
                    && game.character(s).is_some()
                    && game.calculate_attack(s) > *value
            }),
            Self::IsDamaged => ctx.subject.is_some_and(|s| {
                game.character(s)
                    .is_some_and(|c| c.health < game.calculate_max_health(s))
            }),
            Self::HasSecret => game
                .owner_of(ctx.owner)
                .is_some_and(|p| !game.player(p).secrets.is_empty()),
            Self::HasDivineShield => ctx
                .subject
                .and_then(|s| game.character(s))
                .is_some_and(|c| c.counters.divine_shield > 0),
            Self::HasDeathrattle => ctx.subject.is_some_and(|s| match game.character(s) {
                Some(c) => c.minion().is_some_and(|m| !m.deathrattles.is_empty()),
                None => card_kind(game, s)
                    .is_some_and(|k| matches!(k, CardKind::Minion(m) if !m.deathrattles.is_empty())),
            }),
            Self::HasBattlecry => ctx.subject.is_some_and(|s| {
                card_kind(game, s).is_some_and(|k| matches!(k, CardKind::Minion(m) if !m.battlecry.is_empty()))
            }),
            Self::HasOverload => ctx
                .subject
                .and_then(|s| game.definition_of(s))
                .is_some_and(|d| d.overload > 0),
            Self::HasCardName { card_name } => ctx
                .subject
                .and_then(|s| game.card_name_of(s))
                .is_some_and(|n| n == card_name),
            Self::MinionCountIs { count } => game
                .owner_of(ctx.owner)
                .is_some_and(|p| game.player(p).minions.len() == *count),
            Self::OwnersTurn => game.owner_of(ctx.owner) == Some(game.current_player()),
            Self::OneIn { amount } => game.random_between(0, amount - 1) == 0,
            Self::Not { condition } => !condition.evaluate(ctx),
            Self::And { conditions } => conditions.iter().all(|c| c.evaluate(ctx)),
            Self::Or { conditions } => conditions.iter().any(|c| c.evaluate(ctx)),
        }
    }
}

fn card_kind(game: &Game, id: EntityId) -> Option<&CardKind> {
    game.definition_of(id).map(|d| &d.kind)
}

/// A minion on the board or a minion card in hand.
fn is_minion_like(game: &Game, id: EntityId) -> bool {
    game.is_minion(id) || (game.card(id).is_some() && matches!(card_kind(game, id), Some(CardKind::Minion(_))))
}

fn subject_type(game: &Game, id: EntityId) -> Option<MinionType> {
    if let Some(minion) = game.character(id).and_then(|c| c.minion()) {
        return Some(minion.minion_type);
    }
    match card_kind(game, id)? {
        CardKind::Minion(m) => Some(m.minion_type),
        _ => None,
    }
}

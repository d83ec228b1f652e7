//! Reversible stat changes.
//!
//! A status is the unit buffs and auras are made of. Every variant has an
//! exact inverse: `act` followed by `unact` on the same target restores the
//! target's counters, deltas and filters. Counter statuses add and remove one
//! so independent sources stack.
//!
//! Attack-changing statuses do not touch the character at all; they are
//! folded into [`Game::calculate_attack`] from the live buff and aura lists.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::entities::{ManaFilter, StatusCounters};
use crate::rules::Game;

use super::base::TagId;
use super::condition::Condition;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    ChangeAttack {
        amount: i32,
    },
    SetAttack {
        amount: i32,
    },
    DoubleAttack,
    ChangeHealth {
        amount: i32,
    },
    Taunt,
    Stealth,
    DivineShield,
    Windfury,
    Immune,
    Charge,
    Frozen,
    CantAttack,
    NoSpellTarget,
    SpellDamage {
        damage: i32,
    },
    /// A mana filter on the target's player. `amount` is added to the cost.
    ManaChange {
        amount: i32,
        #[serde(default)]
        minimum: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card: Option<Condition>,
    },
}

impl Status {
    /// Counter field for the flag-like statuses.
    pub(crate) fn counter<'a>(&self, counters: &'a mut StatusCounters) -> Option<&'a mut i32> {
        let slot = match self {
            Self::Taunt => &mut counters.taunt,
            Self::Stealth => &mut counters.stealth,
            Self::DivineShield => &mut counters.divine_shield,
            Self::Windfury => &mut counters.windfury,
            Self::Immune => &mut counters.immune,
            Self::Charge => &mut counters.charge,
            Self::Frozen => &mut counters.frozen,
            Self::CantAttack => &mut counters.cant_attack,
            Self::NoSpellTarget => &mut counters.no_spell_target,
            _ => return None,
        };
        Some(slot)
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(
            self,
            Self::ChangeAttack { .. } | Self::SetAttack { .. } | Self::DoubleAttack
        )
    }

    /// Fold this status into a running attack value.
    #[must_use]
    pub fn update_attack(&self, attack: i32) -> i32 {
        match self {
            Self::ChangeAttack { amount } => attack + amount,
            Self::SetAttack { amount } => *amount,
            Self::DoubleAttack => attack * 2,
            _ => attack,
        }
    }

    /// Apply on behalf of the buff or aura tagged `source`.
    pub fn act(&self, game: &mut Game, target: EntityId, source: TagId) {
        self.apply(game, target, 1, source);
    }

    /// Reverse exactly what `act` with the same `source` did.
    pub fn unact(&self, game: &mut Game, target: EntityId, source: TagId) {
        self.apply(game, target, -1, source);
    }

    fn apply(&self, game: &mut Game, target: EntityId, sign: i32, source: TagId) {
        match self {
            Self::ChangeAttack { .. } | Self::SetAttack { .. } | Self::DoubleAttack => {}
            Self::SpellDamage { damage } => {
                if let Some(p) = game.owner_of(target) {
                    game.player_mut(p).spell_damage += sign * damage;
                }
            }
            Self::ManaChange {
                amount,
                minimum,
                card,
            } => {
                let Some(p) = game.owner_of(target) else {
                    return;
                };
                let filter = ManaFilter {
                    amount: *amount,
                    minimum: *minimum,
                    condition: card.clone(),
                    source: Some(source),
                };
                let filters = &mut game.player_mut(p).mana_filters;
                if sign > 0 {
                    filters.push(filter);
                } else if let Some(pos) = filters.iter().position(|f| *f == filter) {
                    filters.remove(pos);
                }
            }
            Self::ChangeHealth { amount } => {
                let Some(id) = game.as_character(target) else {
                    return;
                };
                let Some(c) = game.character_mut(id) else {
                    return;
                };
                let a = *amount;
                if sign > 0 {
                    c.health_delta += a;
                    if a > 0 {
                        c.health += a;
                    } else {
                        c.health = c.health.min(c.base_health + c.health_delta);
                    }
                } else if a > 0 {
                    c.health_delta -= a;
                    c.health = c.health.min(c.base_health + c.health_delta);
                } else {
                    if c.health == c.base_health + c.health_delta {
                        c.health -= a;
                    }
                    c.health_delta -= a;
                }
            }
            _ => {
                let Some(id) = game.as_character(target) else {
                    return;
                };
                if let Some(c) = game.character_mut(id) {
                    if let Some(slot) = self.counter(&mut c.counters) {
                        *slot += sign;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_fold() {
        let statuses = [
            Status::ChangeAttack { amount: 2 },
            Status::DoubleAttack,
            Status::SetAttack { amount: 1 },
            Status::ChangeAttack { amount: 3 },
        ];
        let attack = statuses.iter().fold(1, |a, s| s.update_attack(a));
        assert_eq!(attack, 4);
        assert!(!Status::Taunt.is_attack());
        assert_eq!(Status::Taunt.update_attack(5), 5);
    }

    #[test]
    fn test_counter_slots() {
        let mut counters = StatusCounters::default();
        *Status::Taunt.counter(&mut counters).unwrap() += 1;
        *Status::Taunt.counter(&mut counters).unwrap() += 1;
        *Status::Taunt.counter(&mut counters).unwrap() -= 1;
        assert_eq!(counters.taunt, 1);
        assert!(Status::SpellDamage { damage: 1 }.counter(&mut counters).is_none());
    }

    #[test]
    fn test_mana_change_json() {
        let status: Status =
            serde_json::from_str(r#"{"name": "mana_change", "amount": -2, "card": {"name": "is_spell"}}"#).unwrap();
        assert_eq!(
            status,
            Status::ManaChange {
                amount: -2,
                minimum: 0,
                card: Some(Condition::IsSpell),
            }
        );
    }
}

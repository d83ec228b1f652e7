//! Actions: one effect on one target.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, Result};
use crate::rules::Game;
use crate::triggers::EventKind;

use super::base::{Aura, Buff, Deathrattle, Effect};
use super::event::Event;
use super::query::CardQuery;
use super::selector::PlayerScope;
use super::status::Status;

fn one() -> u32 {
    1
}

/// A closed set of actions, serialized as `{"name": "...", ...}`.
///
/// `actor` is the tag holder (a minion, a hero, or the card being played);
/// `target` is one entity produced by the surrounding selector. Player-level
/// actions (draw, mana, add card) apply to the target's owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Action {
    Damage {
        amount: i32,
    },
    Heal {
        amount: i32,
    },
    Draw {
        #[serde(default = "one")]
        amount: u32,
    },
    Kill,
    Silence,
    Freeze,
    Bounce,
    Give {
        status: Status,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        until: Option<Event>,
    },
    GiveAura {
        aura: Aura,
    },
    GiveEffect {
        effect: Box<Effect>,
    },
    GiveDeathrattle {
        deathrattle: Box<Deathrattle>,
    },
    Summon {
        card: CardQuery,
        #[serde(default = "one")]
        count: u32,
    },
    Transform {
        card: CardQuery,
    },
    AddCard {
        card: CardQuery,
    },
    Discard {
        #[serde(default = "one")]
        amount: u32,
    },
    Equip {
        weapon: String,
    },
    IncreaseArmor {
        amount: i32,
    },
    /// Attack bonus that lasts until the current turn ends.
    IncreaseTempAttack {
        amount: i32,
    },
    GainMana {
        amount: i32,
    },
    /// Run `action` with probability `1 / one_in`.
    Chance {
        action: Box<Action>,
        one_in: i32,
    },
    /// Cancel the targeted card before it resolves.
    Counter,
}

impl Action {
    pub fn give(status: Status) -> Self {
        Self::Give { status, until: None }
    }

    pub fn summon(card: impl Into<String>) -> Self {
        Self::Summon {
            card: CardQuery::named(card),
            count: 1,
        }
    }

    pub fn act(&self, game: &mut Game, actor: EntityId, target: EntityId) -> Result<()> {
        match self {
            Self::Damage { amount } => {
                let amount = amount + game.spell_damage_bonus(actor);
                game.damage(target, amount, Some(actor))
            }
            Self::Heal { amount } => game.heal(target, *amount, Some(actor)),
            Self::Draw { amount } => {
                let Some(player) = game.owner_of(target) else {
                    return Ok(());
                };
                for _ in 0..*amount {
                    game.draw(player)?;
                }
                Ok(())
            }
            Self::Kill => {
                game.die(target, None);
                Ok(())
            }
            Self::Silence => game.silence(target),
            Self::Freeze => {
                game.add_buff(target, Buff::new(Status::Frozen));
                Ok(())
            }
            Self::Bounce => game.bounce(target),
            Self::Give { status, until } => {
                game.add_buff(
                    target,
                    Buff {
                        status: status.clone(),
                        until: until.clone(),
                    },
                );
                Ok(())
            }
            Self::GiveAura { aura } => {
                game.add_aura(target, aura.clone());
                Ok(())
            }
            Self::GiveEffect { effect } => {
                game.add_effect(target, (**effect).clone());
                Ok(())
            }
            Self::GiveDeathrattle { deathrattle } => {
                game.add_deathrattle(target, (**deathrattle).clone());
                Ok(())
            }
            Self::Summon { card, count } => {
                let Some(player) = game.owner_of(target) else {
                    return Ok(());
                };
                for _ in 0..*count {
                    if let Some(name) = card.resolve(game, actor, player)? {
                        let index = game.player(player).minions.len();
                        game.summon(&name, player, index)?;
                    }
                }
                Ok(())
            }
            Self::Transform { card } => {
                let Some(player) = game.owner_of(target) else {
                    return Ok(());
                };
                match card.resolve(game, actor, player)? {
                    Some(name) => game.transform(target, &name),
                    None => Ok(()),
                }
            }
            Self::AddCard { card } => {
                let Some(player) = game.owner_of(target) else {
                    return Ok(());
                };
                if let Some(name) = card.resolve(game, actor, player)? {
                    game.add_card_to_hand(player, &name)?;
                }
                Ok(())
            }
            Self::Discard { amount } => {
                let Some(player) = game.owner_of(target) else {
                    return Ok(());
                };
                for _ in 0..*amount {
                    game.discard_random(player)?;
                }
                Ok(())
            }
            Self::Equip { weapon } => match game.owner_of(target) {
                Some(player) => game.equip(player, weapon),
                None => Ok(()),
            },
            Self::IncreaseArmor { amount } => game.increase_armor(target, *amount),
            Self::IncreaseTempAttack { amount } => {
                game.add_buff(
                    target,
                    Buff::until(
                        Status::ChangeAttack { amount: *amount },
                        Event::on(EventKind::TurnEnded, PlayerScope::CurrentPlayer),
                    ),
                );
                Ok(())
            }
            Self::GainMana { amount } => {
                if let Some(player) = game.owner_of(target) {
                    game.gain_mana(player, *amount);
                }
                Ok(())
            }
            Self::Chance { action, one_in } => {
                if game.random_between(1, *one_in) == 1 {
                    action.act(game, actor, target)?;
                }
                Ok(())
            }
            Self::Counter => {
                game.cancel_card(target);
                Ok(())
            }
        }
    }
}

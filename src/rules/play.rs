//! Playing cards from hand.

use crate::cards::{CardDefinition, CardKind, CardZone};
use crate::core::{EntityId, PlayerId, Result, RuleViolation};
use crate::replay::{CardRef, ReplayMove};
use crate::tags::Battlecry;
use crate::triggers::{EventKind, GameEvent};

use super::game::Game;

/// A validated play, computed before anything is mutated.
#[derive(Clone, Debug)]
pub(crate) struct PlayPlan {
    pub card: EntityId,
    pub def: CardDefinition,
    pub cost: i32,
    /// Legal targets when the card needs one, otherwise empty.
    pub candidates: Vec<EntityId>,
}

impl Game {
    /// Check that `player` may play the card at `index` right now.
    pub(crate) fn check_play(
        &self,
        player: PlayerId,
        index: usize,
        target: Option<EntityId>,
        position: Option<usize>,
    ) -> std::result::Result<PlayPlan, RuleViolation> {
        self.ensure_running()?;
        let p = self.player(player);
        let card = *p.hand.get(index).ok_or(RuleViolation::NoSuchCard(index))?;
        let def = self.definition_of(card).ok_or(RuleViolation::NoSuchCard(index))?;
        let cost = self.mana_cost(card);
        if cost > p.mana {
            return Err(RuleViolation::InsufficientMana {
                needed: cost,
                available: p.mana,
            });
        }
        if def.is_minion() && p.minions.len() >= self.config.max_board_size {
            return Err(RuleViolation::BoardFull);
        }
        if def.is_secret() && p.secrets.iter().any(|s| self.card_name_of(*s) == Some(def.name.as_str())) {
            return Err(RuleViolation::DuplicateSecret(def.name.clone()));
        }
        let candidates = match def.targeting() {
            Some(t) => {
                let candidates = t.candidates(self, card, true);
                if candidates.is_empty() {
                    return Err(RuleViolation::MissingTarget);
                }
                if let Some(t) = target.filter(|t| !candidates.contains(t)) {
                    return Err(RuleViolation::IllegalTarget(t));
                }
                candidates
            }
            None => Vec::new(),
        };
        if let Some(pos) = position.filter(|pos| *pos > p.minions.len()) {
            return Err(RuleViolation::IllegalIndex(pos));
        }
        Ok(PlayPlan {
            card,
            def: def.clone(),
            cost,
            candidates,
        })
    }

    /// Play the card at hand `index` for the current player.
    ///
    /// `target` presets the play-time target, `position` the board slot of
    /// a minion. Anything not preset is asked of the player's agent.
    pub fn play_card(&mut self, index: usize, target: Option<EntityId>, position: Option<usize>) -> Result<()> {
        let player = self.current;
        let plan = self.check_play(player, index, target, position).map_err(|v| {
            tracing::warn!(player = %player, index, error = %v, "illegal card play");
            v
        })?;
        let PlayPlan {
            card,
            def,
            cost,
            candidates,
        } = plan;
        let card_ref = CardRef { index, option: None };
        self.with_journal(|j, g| {
            let mv = if def.is_minion() {
                ReplayMove::Summon {
                    card: card_ref,
                    index: 0,
                    target: None,
                }
            } else {
                ReplayMove::Play {
                    card: card_ref,
                    target: None,
                }
            };
            j.begin(g, mv);
        });

        let p = self.player_mut(player);
        p.hand.remove(index);
        p.mana -= cost;
        if let Some(c) = self.cards.get_mut(&card) {
            c.zone = CardZone::Resolving;
        }
        self.pending.target = target;
        self.pending.index = position;
        let focus = if def.targeting().is_some() {
            self.choose_target(player, &candidates)?
        } else {
            None
        };
        let slot = def.is_minion().then(|| self.choose_index(player, &def.name));
        tracing::debug!(player = %player, card = %def.name, cost, target = ?focus, "card played");

        let owner = EntityId::player(player);
        self.trigger(
            owner,
            GameEvent::new(EventKind::CardPlayed)
                .with_subject(card)
                .with_amount(index as i32),
        )?;
        if def.is_spell() || def.is_secret() {
            self.trigger(owner, GameEvent::new(EventKind::SpellCast).with_subject(card))?;
        }

        let cancelled = self.cards.get(&card).map_or(true, |c| c.cancelled);
        if cancelled {
            tracing::debug!(card = %def.name, "card countered");
        } else {
            match &def.kind {
                CardKind::Minion(_) => self.use_minion(player, &def, slot.unwrap_or(0))?,
                CardKind::Spell(spell) => {
                    let choices = def.choices();
                    if !choices.is_empty() {
                        let battlecries = self.pick_choice(player, &def)?;
                        self.run_all(&battlecries, card, focus)?;
                    } else if self.player(player).cards_played > 0 && !spell.combo.is_empty() {
                        self.run_all(&spell.combo, card, focus)?;
                    } else {
                        self.run_all(&spell.on_play, card, focus)?;
                    }
                }
                CardKind::Weapon(weapon) => {
                    let combo = weapon.combo.as_ref().filter(|_| self.player(player).cards_played > 0);
                    if let Some(b) = combo.or(weapon.battlecry.as_ref()) {
                        b.run(self, card, focus)?;
                    }
                    self.equip(player, &def.name)?;
                }
                CardKind::Secret(_) => {
                    if let Some(c) = self.cards.get_mut(&card) {
                        c.zone = CardZone::Secret;
                    }
                    self.player_mut(player).secrets.push(card);
                }
            }
            self.trigger(owner, GameEvent::new(EventKind::CardUsed).with_subject(card))?;
            self.check_delayed()?;
        }

        let p = self.player_mut(player);
        if !cancelled {
            p.cards_played += 1;
        }
        p.overload += def.overload;
        let kept_as_secret = def.is_secret() && !cancelled;
        if !kept_as_secret {
            self.cards.remove(&card);
        }
        self.pending = Default::default();
        Ok(())
    }

    fn run_all(&mut self, battlecries: &[Battlecry], owner: EntityId, focus: Option<EntityId>) -> Result<()> {
        for battlecry in battlecries {
            battlecry.run(self, owner, focus)?;
        }
        Ok(())
    }

    /// Ask for a choose-one option and return its battlecries.
    fn pick_choice(&mut self, player: PlayerId, def: &CardDefinition) -> Result<Vec<Battlecry>> {
        let choices = def.choices();
        let options: Vec<String> = choices.iter().map(|c| c.option.clone()).collect();
        let picked = self.choose_option(player, &options);
        Ok(choices.get(picked).map(|c| c.battlecries.clone()).unwrap_or_default())
    }

    /// Put a played minion on the board and resolve its battlecry.
    fn use_minion(&mut self, player: PlayerId, def: &CardDefinition, slot: usize) -> Result<()> {
        let Some(card) = def.as_minion() else {
            return Ok(());
        };
        let minion = self.create_minion(&def.name, player)?;
        self.add_to_board(minion, slot)?;
        let owner = EntityId::player(player);
        self.trigger(owner, GameEvent::new(EventKind::MinionPlaced).with_subject(minion))?;

        if !card.choices.is_empty() {
            let battlecries = self.pick_choice(player, def)?;
            self.run_all(&battlecries, minion, None)?;
        } else if let Some(combo) = card.combo.as_ref().filter(|_| self.player(player).cards_played > 0) {
            combo.run(self, minion, None)?;
        } else {
            for battlecry in &card.battlecry {
                if !battlecry.run(self, minion, None)? {
                    break;
                }
            }
        }
        self.check_delayed()?;

        if self.minion_slot(minion).is_some() {
            for kind in [EventKind::MinionPlayed, EventKind::MinionSummoned, EventKind::AfterAdded] {
                self.trigger(owner, GameEvent::new(kind).with_subject(minion))?;
            }
        }
        Ok(())
    }
}

//! Stats, damage, healing, death and attacks.

use std::sync::Arc;

use crate::cards::CardKind;
use crate::core::{EngineError, EntityId, PlayerId, Result, RuleViolation};
use crate::entities::{Character, Weapon};
use crate::replay::ReplayMove;
use crate::tags::{Deathrattle, Status};
use crate::triggers::{EventKind, GameEvent};

use super::dispatch::Handler;
use super::engine::GameResult;
use super::game::Game;

impl Game {
    /// Current attack: base, weapon on its owner's turn, buffs in order,
    /// then every matching aura in seat order. Never below zero.
    #[must_use]
    pub fn calculate_attack(&self, id: EntityId) -> i32 {
        let Some(c) = self.character(id) else {
            return 0;
        };
        let mut attack = c.base_attack;
        if let Some(hero) = c.hero() {
            if c.owner == self.current {
                attack += hero.weapon.as_ref().map_or(0, |w| w.base_attack);
            }
        }
        for b in &c.buffs {
            attack = b.buff.status.update_attack(attack);
        }
        for (_, player) in self.players.iter() {
            for record in &player.auras {
                let status = &record.aura.status;
                if status.is_attack() && record.aura.selector.matches(self, record.owner, id) {
                    attack = status.update_attack(attack);
                }
            }
        }
        attack.max(0)
    }

    #[must_use]
    pub fn calculate_max_health(&self, id: EntityId) -> i32 {
        self.character(id).map_or(0, Character::max_health)
    }

    /// Deal `amount` damage to a character (a player target means its hero).
    pub fn damage(&mut self, target: EntityId, amount: i32, source: Option<EntityId>) -> Result<()> {
        let Some(id) = self.as_character(target) else {
            return Ok(());
        };
        let Some(c) = self.character_mut(id) else {
            return Ok(());
        };
        if c.dead || c.removed || c.counters.immune > 0 {
            return Ok(());
        }
        if c.counters.divine_shield > 0 {
            self.strip_status(id, &Status::DivineShield);
            tracing::debug!(character = %id, "divine shield absorbed the hit");
            return Ok(());
        }
        let mut amount = amount;
        if let Some(hero) = c.hero_mut() {
            let absorbed = hero.armor.min(amount).max(0);
            hero.armor -= absorbed;
            amount -= absorbed;
        }
        if amount <= 0 {
            return Ok(());
        }
        c.health -= amount;
        let health = c.health;
        let owner = c.owner;
        tracing::debug!(character = %id, amount, health, "damaged");

        self.trigger(id, GameEvent::damage(EventKind::Damaged, id, source, amount))?;
        self.trigger(
            EntityId::player(owner),
            GameEvent::damage(EventKind::CharacterDamaged, id, source, amount),
        )?;
        if let Some(src) = source.filter(|s| self.character(*s).is_some()) {
            self.trigger(src, GameEvent::new(EventKind::DidDamage).with_subject(id).with_amount(amount))?;
            self.strip_status(src, &Status::Stealth);
        }
        if health <= 0 {
            self.die(id, source);
        }
        self.trigger(id, GameEvent::new(EventKind::HealthChanged).with_subject(id))?;
        self.enrage(id)
    }

    /// Heal a character. Negative amounts deal damage instead.
    pub fn heal(&mut self, target: EntityId, amount: i32, source: Option<EntityId>) -> Result<()> {
        if amount < 0 {
            return self.damage(target, -amount, source);
        }
        let Some(id) = self.as_character(target) else {
            return Ok(());
        };
        let Some(c) = self.character(id) else {
            return Ok(());
        };
        if amount == 0 || c.removed {
            return Ok(());
        }
        let owner = c.owner;
        self.trigger(
            id,
            GameEvent::new(EventKind::Healed)
                .with_subject(id)
                .with_other_opt(source)
                .with_amount(amount),
        )?;
        self.trigger(
            EntityId::player(owner),
            GameEvent::new(EventKind::CharacterHealed)
                .with_subject(id)
                .with_other_opt(source)
                .with_amount(amount),
        )?;
        let mut at_full = false;
        if let Some(c) = self.character_mut(id) {
            c.health = (c.health + amount).min(c.max_health());
            at_full = c.health == c.max_health();
        }
        if at_full {
            self.unenrage(id)?;
        }
        self.trigger(id, GameEvent::new(EventKind::HealthChanged).with_subject(id))
    }

    /// Mark a character dead. Idempotent.
    ///
    /// A minion's removal and deathrattles wait for the next delayed flush;
    /// a hero's death decides the match.
    pub fn die(&mut self, target: EntityId, killer: Option<EntityId>) {
        let Some(id) = self.as_character(target) else {
            return;
        };
        let Some(c) = self.character_mut(id) else {
            return;
        };
        if c.dead || c.removed {
            return;
        }
        c.dead = true;
        let born = c.born;
        let owner = c.owner;
        let deathrattles = c.minion().map(|m| m.deathrattles.clone());
        let died = GameEvent::new(EventKind::Died).with_subject(id).with_other_opt(killer);
        match deathrattles {
            Some(deathrattles) => {
                tracing::debug!(minion = %id, born, "minion died");
                self.bus.bind_once(
                    id,
                    EventKind::Died,
                    Handler::MinionDeath {
                        minion: id,
                        deathrattles,
                    },
                );
            }
            None => {
                let winner = if self.is_dead(self.player(owner.opponent()).hero) {
                    GameResult::Draw
                } else {
                    GameResult::Winner(owner.opponent())
                };
                tracing::info!(hero = %id, result = ?winner, "hero died");
                self.result = Some(winner);
            }
        }
        self.delayed.schedule(id, born, died);
    }

    /// Settle a minion's death: leave the board, detach, run deathrattles.
    pub(crate) fn resolve_death(
        &mut self,
        minion: EntityId,
        deathrattles: &[Deathrattle],
        killer: Option<EntityId>,
    ) -> Result<()> {
        let Some(c) = self.character(minion) else {
            return Ok(());
        };
        if c.removed {
            return Ok(());
        }
        let owner = c.owner;
        let name = c.card.clone();
        self.remove_from_board(minion)?;
        self.unattach(minion);
        for deathrattle in deathrattles {
            deathrattle.run(self, minion)?;
        }
        let player = EntityId::player(owner);
        self.trigger(
            player,
            GameEvent::new(EventKind::MinionDied)
                .with_subject(minion)
                .with_other_opt(killer),
        )?;
        self.trigger(player, GameEvent::new(EventKind::AfterDeath).with_subject(minion))?;
        self.player_mut(owner).graveyard.push(name);
        Ok(())
    }

    pub fn increase_armor(&mut self, target: EntityId, amount: i32) -> Result<()> {
        let Some(id) = self.as_character(target) else {
            return Ok(());
        };
        let Some(c) = self.character_mut(id) else {
            return Ok(());
        };
        let owner = c.owner;
        let Some(hero) = c.hero_mut() else {
            return Ok(());
        };
        hero.armor += amount;
        self.trigger(
            EntityId::player(owner),
            GameEvent::new(EventKind::ArmorIncreased)
                .with_subject(id)
                .with_amount(amount),
        )
    }

    // === Weapons ===

    /// Equip a weapon card on `player`'s hero, destroying the old one.
    pub fn equip(&mut self, player: PlayerId, name: &str) -> Result<()> {
        let registry = Arc::clone(&self.registry);
        let def = registry.lookup(name)?;
        let CardKind::Weapon(card) = &def.kind else {
            return Err(EngineError::UnknownCard(format!("{name} is not a weapon")));
        };
        self.destroy_weapon(player)?;
        let weapon = Weapon {
            id: self.next_id(),
            card: name.to_string(),
            base_attack: card.attack,
            durability: card.durability,
            deathrattle: card.deathrattle.clone(),
        };
        let hero = self.player(player).hero;
        if let Some(h) = self.character_mut(hero).and_then(Character::hero_mut) {
            h.weapon = Some(weapon);
        }
        tracing::debug!(player = %player, weapon = name, "weapon equipped");
        Ok(())
    }

    pub(crate) fn destroy_weapon(&mut self, player: PlayerId) -> Result<()> {
        let hero = self.player(player).hero;
        let Some(weapon) = self
            .character_mut(hero)
            .and_then(Character::hero_mut)
            .and_then(|h| h.weapon.take())
        else {
            return Ok(());
        };
        tracing::debug!(player = %player, weapon = %weapon.card, "weapon destroyed");
        self.trigger(hero, GameEvent::new(EventKind::WeaponDestroyed).with_subject(weapon.id))?;
        if let Some(deathrattle) = &weapon.deathrattle {
            deathrattle.run(self, hero)?;
        }
        Ok(())
    }

    // === Attacks ===

    /// Whether `id` may attack right now.
    #[must_use]
    pub fn can_attack(&self, id: EntityId) -> bool {
        let Some(c) = self.character(id) else {
            return false;
        };
        let ready = match c.minion() {
            Some(m) => c.counters.charge > 0 || !m.exhausted,
            None => true,
        };
        c.owner == self.current
            && c.is_active()
            && ready
            && !c.is_frozen()
            && c.counters.cant_attack <= 0
            && c.attacks_performed < c.attacks_allowed()
            && self.calculate_attack(id) > 0
    }

    /// Characters `player` may attack: taunting enemy minions if there are
    /// any, otherwise every enemy minion plus the enemy hero. Stealthed and
    /// dead minions are never offered.
    #[must_use]
    pub fn attack_targets(&self, player: PlayerId) -> Vec<EntityId> {
        let enemy = self.player(player.opponent());
        let minions: Vec<EntityId> = enemy
            .minions
            .iter()
            .copied()
            .filter(|m| self.character(*m).is_some_and(|c| c.is_active() && !c.is_stealthed()))
            .collect();
        let taunts: Vec<EntityId> = minions
            .iter()
            .copied()
            .filter(|m| self.character(*m).is_some_and(Character::has_taunt))
            .collect();
        if !taunts.is_empty() {
            return taunts;
        }
        let mut targets = minions;
        targets.push(enemy.hero);
        targets
    }

    fn check_attack(&self, attacker: EntityId, target: Option<EntityId>) -> std::result::Result<Vec<EntityId>, RuleViolation> {
        self.ensure_running()?;
        if !self.can_attack(attacker) {
            return Err(RuleViolation::CannotAttack(attacker));
        }
        let targets = self.attack_targets(self.current);
        if targets.is_empty() {
            return Err(RuleViolation::CannotAttack(attacker));
        }
        if let Some(t) = target {
            if !targets.contains(&t) {
                return Err(RuleViolation::IllegalTarget(t));
            }
        }
        Ok(targets)
    }

    /// Attack with `attacker`. Without a preset target its owner chooses.
    ///
    /// Both hits use the attack values from before the exchange; deaths
    /// settle only once both have landed.
    pub fn attack(&mut self, attacker: EntityId, target: Option<EntityId>) -> Result<()> {
        let targets = self.check_attack(attacker, target).map_err(|v| {
            tracing::warn!(attacker = %attacker, error = %v, "illegal attack");
            v
        })?;
        let player = self.current;
        self.pending.target = target;
        let Some(defender) = self.decide_target(player, &targets) else {
            tracing::warn!(attacker = %attacker, "no attack target chosen");
            return Err(RuleViolation::MissingTarget.into());
        };
        self.with_journal(|j, g| {
            if let Some(mv) = ReplayMove::attack(g, attacker, defender) {
                j.begin(g, mv);
            }
        });
        tracing::debug!(attacker = %attacker, target = %defender, "attack");

        self.strip_status(attacker, &Status::Stealth);
        self.trigger(
            EntityId::player(player),
            GameEvent::new(EventKind::CharacterAttack)
                .with_subject(attacker)
                .with_other(defender),
        )?;
        self.trigger(attacker, GameEvent::new(EventKind::Attack).with_subject(defender))?;
        if !self.character(attacker).is_some_and(Character::is_active) {
            return self.check_delayed();
        }

        let dealt = self.calculate_attack(attacker);
        let returned = self.calculate_attack(defender);
        if returned > 0 {
            self.damage(attacker, returned, Some(defender))?;
        }
        self.damage(defender, dealt, Some(attacker))?;
        self.check_delayed()?;
        self.trigger(attacker, GameEvent::new(EventKind::AttackCompleted).with_subject(defender))?;

        let mut spent = false;
        if let Some(c) = self.character_mut(attacker) {
            c.attacks_performed += 1;
            if let Some(weapon) = c.hero_mut().and_then(|h| h.weapon.as_mut()) {
                weapon.durability -= 1;
                spent = weapon.durability <= 0;
            }
        }
        if spent {
            self.destroy_weapon(player)?;
        }
        Ok(())
    }
}

//! Board membership and the tags attached to characters.
//!
//! A minion's effects, buffs and innate auras are live only while it is
//! attached: from `add_to_board` until it dies, is bounced or is replaced.
//! Heroes are attached for the whole match.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::{EngineError, EntityId, PlayerId, Result};
use crate::entities::{AttachedBuff, AttachedEffect, AuraRecord, Character, MinionState};
use crate::tags::{Aura, Buff, Deathrattle, Effect, Event, Status, TagId};
use crate::triggers::{EventKind, GameEvent, HandlerId};

use super::dispatch::Handler;
use super::game::Game;

impl Game {
    /// Build an unattached minion from its card.
    pub(crate) fn create_minion(&mut self, name: &str, owner: PlayerId) -> Result<EntityId> {
        let registry = Arc::clone(&self.registry);
        let def = registry.lookup(name)?;
        let Some(card) = def.as_minion() else {
            return Err(EngineError::UnknownCard(format!("{name} is not a minion")));
        };
        let id = self.next_id();
        let mut state = MinionState::new(card.minion_type);
        state.deathrattles = card.deathrattles.clone();
        let mut minion = Character::new_minion(id, owner, name, card.attack, card.health, state);
        for status in &card.statuses {
            minion.buffs.push(AttachedBuff {
                tag: self.next_tag(),
                buff: Buff::new(status.clone()),
                handlers: SmallVec::new(),
            });
        }
        for effect in &card.effects {
            minion.effects.push(AttachedEffect {
                tag: self.next_tag(),
                effect: effect.clone(),
                handlers: SmallVec::new(),
            });
        }
        minion.innate_auras = card.auras.clone();
        minion.enrage = card.enrage.clone();
        self.characters.insert(id, minion);
        Ok(id)
    }

    fn reindex(&mut self, player: PlayerId) {
        let minions = self.player(player).minions.clone();
        for (i, id) in minions.into_iter().enumerate() {
            if let Some(m) = self.character_mut(id).and_then(Character::minion_mut) {
                m.index = i;
            }
        }
    }

    /// Put a created minion on its owner's board at `index` (clamped).
    pub fn add_to_board(&mut self, id: EntityId, index: usize) -> Result<()> {
        self.born_counter += 1;
        let born = self.born_counter;
        let Some(c) = self.character_mut(id) else {
            return Err(EngineError::UnknownEntity(id));
        };
        c.born = born;
        let owner = c.owner;
        let minions = &mut self.player_mut(owner).minions;
        let index = index.min(minions.len());
        minions.insert(index, id);
        self.reindex(owner);
        self.attach(id);
        self.refresh_auras();
        tracing::debug!(minion = %id, index, born, "added to board");
        self.trigger(id, GameEvent::new(EventKind::AddedToBoard).with_subject(id))
    }

    /// Take a minion off the board. Its tags stay attached.
    pub fn remove_from_board(&mut self, id: EntityId) -> Result<()> {
        let Some((owner, index)) = self.minion_slot(id) else {
            return Ok(());
        };
        self.player_mut(owner).minions.remove(index);
        self.reindex(owner);
        if let Some(c) = self.character_mut(id) {
            c.removed = true;
        }
        self.trigger(
            EntityId::player(owner),
            GameEvent::new(EventKind::MinionRemoved).with_subject(id),
        )?;
        self.refresh_auras();
        Ok(())
    }

    /// Bind effects, apply buffs and register innate auras.
    fn attach(&mut self, id: EntityId) {
        let Some(c) = self.character_mut(id) else {
            return;
        };
        if c.attached {
            return;
        }
        c.attached = true;
        let effects: Vec<(TagId, Effect)> = c.effects.iter().map(|e| (e.tag, e.effect.clone())).collect();
        let buffs: Vec<(TagId, Buff)> = c.buffs.iter().map(|b| (b.tag, b.buff.clone())).collect();
        let auras = c.innate_auras.clone();

        for (tag, effect) in effects {
            let handlers = effect.apply(self, id, tag);
            if let Some(e) = self
                .character_mut(id)
                .and_then(|c| c.effects.iter_mut().find(|e| e.tag == tag))
            {
                e.handlers = handlers;
            }
        }
        for (tag, buff) in buffs {
            buff.status.act(self, id, tag);
            if let Some(until) = &buff.until {
                let handlers = until.bind(self, id, Handler::BuffExpiry { holder: id, tag });
                if let Some(b) = self
                    .character_mut(id)
                    .and_then(|c| c.buffs.iter_mut().find(|b| b.tag == tag))
                {
                    b.handlers = handlers;
                }
            }
        }
        for aura in auras {
            if let Some(tag) = self.insert_aura(id, aura) {
                if let Some(c) = self.character_mut(id) {
                    c.auras.push(tag);
                }
            }
        }
    }

    /// Undo `attach`: unbind effects, reverse buffs, drop owned auras.
    pub(crate) fn unattach(&mut self, id: EntityId) {
        let Some(c) = self.character_mut(id) else {
            return;
        };
        if !c.attached {
            return;
        }
        c.attached = false;
        let effect_handlers: Vec<HandlerId> = c
            .effects
            .iter_mut()
            .flat_map(|e| std::mem::take(&mut e.handlers))
            .collect();
        let buffs: Vec<(TagId, Status, SmallVec<[HandlerId; 2]>)> = c
            .buffs
            .iter_mut()
            .map(|b| (b.tag, b.buff.status.clone(), std::mem::take(&mut b.handlers)))
            .collect();
        let mut auras = std::mem::take(&mut c.auras);
        auras.append(&mut c.enrage_auras);
        let owner = c.owner;

        Effect::unapply(self, &effect_handlers);
        for (tag, status, handlers) in buffs {
            Event::unbind(self, &handlers);
            status.unact(self, id, tag);
        }
        for tag in auras {
            self.remove_aura(owner, tag);
        }
    }

    // === Buffs ===

    /// Apply a status to a character (a player target means its hero).
    pub fn add_buff(&mut self, target: EntityId, buff: Buff) {
        let Some(id) = self.as_character(target) else {
            return;
        };
        let tag = self.next_tag();
        let attached = self.character(id).is_some_and(|c| c.attached);
        let mut handlers = SmallVec::new();
        if attached {
            buff.status.act(self, id, tag);
            if let Some(until) = &buff.until {
                handlers = until.bind(self, id, Handler::BuffExpiry { holder: id, tag });
            }
        }
        if let Some(c) = self.character_mut(id) {
            c.buffs.push(AttachedBuff { tag, buff, handlers });
        }
    }

    pub(crate) fn remove_buff(&mut self, holder: EntityId, tag: TagId) {
        let Some(c) = self.character_mut(holder) else {
            return;
        };
        let Some(pos) = c.buffs.iter().position(|b| b.tag == tag) else {
            return;
        };
        let removed = c.buffs.remove(pos);
        let attached = c.attached;
        Event::unbind(self, &removed.handlers);
        if attached {
            removed.buff.status.unact(self, holder, tag);
        }
    }

    /// Remove every buff granting `status` and zero its counter.
    pub(crate) fn strip_status(&mut self, id: EntityId, status: &Status) {
        let tags: Vec<TagId> = self
            .character(id)
            .map(|c| c.buffs.iter().filter(|b| b.buff.status == *status).map(|b| b.tag).collect())
            .unwrap_or_default();
        for tag in tags {
            self.remove_buff(id, tag);
        }
        if let Some(c) = self.character_mut(id) {
            if let Some(slot) = status.counter(&mut c.counters) {
                *slot = 0;
            }
        }
    }

    // === Effects and deathrattles ===

    /// Attach an effect to a character or a player.
    pub fn add_effect(&mut self, target: EntityId, effect: Effect) {
        let tag = self.next_tag();
        if let Some(p) = target.as_player() {
            let handlers = effect.apply(self, target, tag);
            self.player_mut(p)
                .effects
                .push(AttachedEffect { tag, effect, handlers });
            return;
        }
        let Some(id) = self.as_character(target) else {
            return;
        };
        let attached = self.character(id).is_some_and(|c| c.attached);
        let handlers = if attached {
            effect.apply(self, id, tag)
        } else {
            SmallVec::new()
        };
        if let Some(c) = self.character_mut(id) {
            c.effects.push(AttachedEffect { tag, effect, handlers });
        }
    }

    pub(crate) fn remove_player_effect(&mut self, player: PlayerId, tag: TagId) {
        let effects = &mut self.player_mut(player).effects;
        let Some(pos) = effects.iter().position(|e| e.tag == tag) else {
            return;
        };
        let removed = effects.remove(pos);
        Effect::unapply(self, &removed.handlers);
    }

    pub fn add_deathrattle(&mut self, target: EntityId, deathrattle: Deathrattle) {
        if let Some(m) = self.character_mut(target).and_then(Character::minion_mut) {
            m.deathrattles.push(deathrattle);
        }
    }

    // === Auras ===

    /// Give `target` (a character or a player) an aura it owns.
    pub fn add_aura(&mut self, target: EntityId, aura: Aura) {
        let owner = if target.is_player() {
            Some(target)
        } else {
            self.as_character(target)
        };
        let Some(owner) = owner else {
            return;
        };
        if let Some(tag) = self.insert_aura(owner, aura) {
            if let Some(c) = self.character_mut(owner) {
                c.auras.push(tag);
            }
        }
        self.refresh_auras();
    }

    /// Register an aura record on the owner's player without applying it.
    fn insert_aura(&mut self, owner: EntityId, aura: Aura) -> Option<TagId> {
        let player = self.owner_of(owner)?;
        let tag = self.next_tag();
        let handlers = match &aura.until {
            Some(until) => until.bind(self, owner, Handler::AuraExpiry { player, tag }),
            None => SmallVec::new(),
        };
        self.player_mut(player).auras.push(AuraRecord {
            tag,
            owner,
            aura,
            affected: Vec::new(),
            handlers,
        });
        Some(tag)
    }

    /// Remove an aura record and reverse it on everything it still affects.
    pub(crate) fn remove_aura(&mut self, player: PlayerId, tag: TagId) {
        let auras = &mut self.player_mut(player).auras;
        let Some(pos) = auras.iter().position(|r| r.tag == tag) else {
            return;
        };
        let record = auras.remove(pos);
        Event::unbind(self, &record.handlers);
        for target in record.affected {
            if self.is_live_target(target) {
                record.aura.status.unact(self, target, tag);
            }
        }
        if let Some(c) = self.character_mut(record.owner) {
            c.auras.retain(|t| *t != tag);
            c.enrage_auras.retain(|t| *t != tag);
        }
    }

    fn is_live_target(&self, id: EntityId) -> bool {
        if id.is_player() {
            return true;
        }
        match self.character(id) {
            Some(c) => !c.removed,
            None => self.cards.contains_key(&id),
        }
    }

    /// Bring every aura record in line with the current board.
    pub fn refresh_auras(&mut self) {
        for player in PlayerId::all() {
            let tags: Vec<TagId> = self.player(player).auras.iter().map(|r| r.tag).collect();
            for tag in tags {
                self.refresh_aura(player, tag);
            }
        }
    }

    fn refresh_aura(&mut self, player: PlayerId, tag: TagId) {
        let Some(record) = self.player(player).aura(tag).cloned() else {
            return;
        };
        let current: Vec<EntityId> = record
            .aura
            .selector
            .candidates(self, record.owner, None)
            .into_iter()
            .filter(|t| self.is_live_target(*t))
            .collect();
        let status = &record.aura.status;
        let mut affected = Vec::with_capacity(current.len());
        for target in &record.affected {
            if current.contains(target) {
                affected.push(*target);
            } else if self.is_live_target(*target) {
                status.unact(self, *target, tag);
            }
        }
        for target in current {
            if !record.affected.contains(&target) {
                status.act(self, target, tag);
                affected.push(target);
            }
        }
        if let Some(r) = self.player_mut(player).auras.iter_mut().find(|r| r.tag == tag) {
            r.affected = affected;
        }
    }

    // === Enrage ===

    /// Switch enrage on if the character is damaged and not yet enraged.
    pub(crate) fn enrage(&mut self, id: EntityId) -> Result<()> {
        let Some(c) = self.character(id) else {
            return Ok(());
        };
        if c.enraged || c.health >= c.max_health() {
            return Ok(());
        }
        let enrages = c.enrage.clone();
        if let Some(c) = self.character_mut(id) {
            c.enraged = true;
        }
        for enrage in enrages {
            for status in enrage.statuses {
                if let Some(tag) = self.insert_aura(id, Aura::new(status, enrage.selector.clone())) {
                    if let Some(c) = self.character_mut(id) {
                        c.enrage_auras.push(tag);
                    }
                }
            }
        }
        self.refresh_auras();
        self.trigger(id, GameEvent::new(EventKind::Enraged).with_subject(id))
    }

    pub(crate) fn unenrage(&mut self, id: EntityId) -> Result<()> {
        let Some(c) = self.character_mut(id) else {
            return Ok(());
        };
        if !c.enraged {
            return Ok(());
        }
        c.enraged = false;
        let owner = c.owner;
        let tags = std::mem::take(&mut c.enrage_auras);
        for tag in tags {
            self.remove_aura(owner, tag);
        }
        self.trigger(id, GameEvent::new(EventKind::Unenraged).with_subject(id))
    }

    // === Silence, bounce, transform, summon ===

    /// Strip every tag from a character.
    pub fn silence(&mut self, target: EntityId) -> Result<()> {
        let Some(id) = self.as_character(target) else {
            return Ok(());
        };
        let Some(c) = self.character_mut(id) else {
            return Ok(());
        };
        let was_full = c.health == c.max_health();
        let attached = c.attached;
        let owner = c.owner;
        let effect_handlers: Vec<HandlerId> = c.effects.drain(..).flat_map(|e| e.handlers).collect();
        let buffs: Vec<AttachedBuff> = c.buffs.drain(..).collect();
        let mut auras = std::mem::take(&mut c.auras);
        auras.append(&mut c.enrage_auras);
        c.innate_auras.clear();
        c.enrage.clear();
        c.enraged = false;
        if let Some(m) = c.minion_mut() {
            m.deathrattles.clear();
        }

        Effect::unapply(self, &effect_handlers);
        for tag in auras {
            self.remove_aura(owner, tag);
        }
        for b in buffs {
            Event::unbind(self, &b.handlers);
            if attached {
                b.buff.status.unact(self, id, b.tag);
            }
        }
        if let Some(c) = self.character_mut(id) {
            let max = c.max_health();
            c.health = if was_full { max } else { c.health.min(max) };
        }
        self.refresh_auras();
        tracing::debug!(character = %id, "silenced");
        self.trigger(id, GameEvent::new(EventKind::Silenced).with_subject(id))
    }

    /// Return a minion to its owner's hand, or kill it if the hand is full.
    pub fn bounce(&mut self, target: EntityId) -> Result<()> {
        let Some((owner, _)) = self.minion_slot(target) else {
            return Ok(());
        };
        let Some(name) = self.character(target).filter(|c| !c.dead).map(|c| c.card.clone()) else {
            return Ok(());
        };
        if self.player(owner).hand.len() >= self.config.max_hand_size {
            self.die(target, None);
            return Ok(());
        }
        self.silence(target)?;
        self.remove_from_board(target)?;
        self.unattach(target);
        self.add_card_to_hand(owner, &name)?;
        Ok(())
    }

    /// Replace a minion in place with a fresh copy of another card.
    pub fn transform(&mut self, target: EntityId, name: &str) -> Result<()> {
        let Some((owner, index)) = self.minion_slot(target) else {
            return Ok(());
        };
        let replacement = self.create_minion(name, owner)?;
        self.unattach(target);
        if let Some(c) = self.character_mut(target) {
            c.removed = true;
        }
        self.player_mut(owner).minions.remove(index);
        tracing::debug!(from = %target, to = %replacement, card = name, "transformed");
        self.add_to_board(replacement, index)
    }

    /// Put a minion into play without playing its card (no battlecry).
    ///
    /// Returns `None` when the board is full.
    pub fn summon(&mut self, name: &str, player: PlayerId, index: usize) -> Result<Option<EntityId>> {
        if self.player(player).minions.len() >= self.config.max_board_size {
            return Ok(None);
        }
        let id = self.create_minion(name, player)?;
        self.add_to_board(id, index)?;
        let owner = EntityId::player(player);
        for kind in [EventKind::MinionPlaced, EventKind::MinionSummoned, EventKind::AfterAdded] {
            self.trigger(owner, GameEvent::new(kind).with_subject(id))?;
        }
        Ok(Some(id))
    }
}

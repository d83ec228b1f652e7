//! Match flow: the opening hands, turn boundaries, draws and secrets.

use crate::cards::{CardInstance, CardKind};
use crate::core::{EntityId, PlayerAction, PlayerId, Result};
use crate::entities::Character;
use crate::replay::ReplayMove;
use crate::tags::{Event, Status};
use crate::triggers::{EventKind, GameEvent};

use super::dispatch::Handler;
use super::engine::GameResult;
use super::game::Game;

impl Game {
    /// Deal the opening hands and run both card checks. Runs once.
    ///
    /// Replacements are drawn before the rejected cards go back, so a card
    /// thrown back can never be drawn straight back.
    pub fn pre_game(&mut self) -> Result<()> {
        if self.pre_game_done {
            return Ok(());
        }
        self.pre_game_done = true;
        for player in PlayerId::all() {
            let size = if player == PlayerId::FIRST {
                self.config.first_hand_size
            } else {
                self.config.second_hand_size
            };
            let mut drawn: Vec<String> = (0..size).filter_map(|_| self.draw_from_deck(player)).collect();

            let keep = self.card_check(player, &drawn);
            let kept: Vec<usize> = (0..drawn.len()).filter(|i| keep.get(*i).copied().unwrap_or(true)).collect();
            self.with_journal(|j, _| j.keep(player, kept));

            let mut put_back = Vec::new();
            for (i, slot) in drawn.iter_mut().enumerate() {
                if keep.get(i).copied().unwrap_or(true) {
                    continue;
                }
                if let Some(replacement) = self.draw_from_deck(player) {
                    put_back.push(std::mem::replace(slot, replacement));
                }
            }
            for name in put_back {
                self.player_mut(player).deck.put_back(&name)?;
                self.trigger(EntityId::player(player), GameEvent::new(EventKind::CardPutBack))?;
            }
            for name in drawn {
                self.insert_hand_card(player, &name);
            }
            tracing::debug!(player = %player, hand = self.player(player).hand.len(), "opening hand");
        }
        let coin = self.config.coin_card.clone();
        if self.registry.contains(&coin) {
            self.insert_hand_card(PlayerId::SECOND, &coin);
        }
        Ok(())
    }

    fn card_check(&mut self, player: PlayerId, cards: &[String]) -> Vec<bool> {
        if let Some(kept) = self.scripted_keeps.get_mut(player).take() {
            return (0..cards.len()).map(|i| kept.contains(&i)).collect();
        }
        self.with_agent(player, |agent, game| agent.do_card_check(game, player, cards))
            .unwrap_or_else(|| vec![true; cards.len()])
    }

    fn draw_from_deck(&mut self, player: PlayerId) -> Option<String> {
        let left = self.player(player).deck.left();
        if left == 0 {
            return None;
        }
        let k = self.random_between(0, left as i32 - 1);
        self.player_mut(player).deck.draw_nth(k.max(0) as usize)
    }

    fn insert_hand_card(&mut self, player: PlayerId, name: &str) -> EntityId {
        let id = self.next_id();
        self.cards.insert(id, CardInstance::new(id, name, player));
        self.player_mut(player).hand.push(id);
        id
    }

    /// Deal opening hands if needed and start the first turn.
    pub fn begin(&mut self) -> Result<()> {
        self.pre_game()?;
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.with_journal(|j, g| j.begin(g, ReplayMove::Start));
        self.start_turn()
    }

    /// Play the match to the end with the seated agents.
    pub fn start(&mut self) -> Result<GameResult> {
        self.begin()?;
        while !self.is_over() {
            self.play_single_turn()?;
        }
        Ok(self.result.clone().unwrap_or(GameResult::Draw))
    }

    /// Let the current player's agent act until it ends its turn.
    ///
    /// An illegal action from the agent is returned as an error.
    pub fn play_single_turn(&mut self) -> Result<()> {
        let player = self.current;
        let turn = self.turn;
        while !self.is_over() && self.current == player && self.turn == turn {
            let action = self
                .with_agent(player, |agent, game| agent.next_action(game, player))
                .unwrap_or(PlayerAction::EndTurn);
            self.apply(player, &action)?;
        }
        Ok(())
    }

    pub(crate) fn start_turn(&mut self) -> Result<()> {
        self.current = self.current.opponent();
        self.turn += 1;
        if self.config.max_turns.is_some_and(|max| self.turn > max) {
            tracing::info!(turn = self.turn, "turn limit reached");
            self.result = Some(GameResult::Draw);
            return Ok(());
        }
        let player = self.current;
        tracing::info!(turn = self.turn, player = %player, "turn started");

        let max_mana = self.config.max_mana;
        let p = self.player_mut(player);
        p.max_mana = (p.max_mana + 1).min(max_mana);
        self.activate_secrets(player.opponent());

        let p = self.player_mut(player);
        p.mana = p.max_mana - p.overload;
        p.locked_mana = p.overload;
        p.overload = 0;
        p.cards_played = 0;
        let minions = p.minions.clone();
        let hero = p.hero;
        for id in minions.into_iter().chain(std::iter::once(hero)) {
            if let Some(c) = self.character_mut(id) {
                c.attacks_performed = 0;
            }
        }
        if let Some(h) = self.character_mut(hero).and_then(Character::hero_mut) {
            h.power_used = false;
        }
        self.draw(player)?;
        self.trigger(EntityId::player(player), GameEvent::new(EventKind::TurnStarted))
    }

    pub(crate) fn end_turn(&mut self) -> Result<()> {
        let player = self.current;
        self.with_journal(|j, g| j.begin(g, ReplayMove::End));
        self.trigger(EntityId::player(player), GameEvent::new(EventKind::TurnEnded))?;

        let p = self.player(player);
        let minions = p.minions.clone();
        let hero = p.hero;
        for id in std::iter::once(hero).chain(minions.iter().copied()) {
            let thaw = self
                .character(id)
                .is_some_and(|c| c.is_frozen() && c.attacks_performed < c.attacks_allowed());
            if thaw {
                self.strip_status(id, &Status::Frozen);
            }
        }
        for id in minions {
            if let Some(c) = self.character_mut(id) {
                c.attacks_performed = 0;
                if let Some(m) = c.minion_mut() {
                    m.exhausted = false;
                }
            }
        }
        let expiring: Vec<_> = self
            .player(player)
            .auras
            .iter()
            .filter(|r| r.aura.until.is_some())
            .map(|r| r.tag)
            .collect();
        for tag in expiring {
            self.remove_aura(player, tag);
        }
        self.deactivate_secrets(player.opponent());
        tracing::debug!(turn = self.turn, player = %player, "turn ended");
        self.check_delayed()
    }

    // === Hand and deck ===

    /// Draw one card, or take fatigue damage from an empty deck.
    pub fn draw(&mut self, player: PlayerId) -> Result<()> {
        let Some(name) = self.draw_from_deck(player) else {
            let p = self.player_mut(player);
            p.fatigue += 1;
            let (fatigue, hero) = (p.fatigue, p.hero);
            tracing::debug!(player = %player, fatigue, "fatigue");
            self.damage(hero, fatigue, None)?;
            return self.check_delayed();
        };
        let id = self.next_id();
        self.cards.insert(id, CardInstance::new(id, name.as_str(), player));
        let owner = EntityId::player(player);
        self.trigger(owner, GameEvent::new(EventKind::CardDrawn).with_subject(id))?;
        if self.player(player).hand.len() < self.config.max_hand_size {
            self.player_mut(player).hand.push(id);
            self.trigger(id, GameEvent::new(EventKind::Drawn).with_subject(id))
        } else {
            tracing::debug!(player = %player, card = %name, "hand full, card burned");
            self.trigger(owner, GameEvent::new(EventKind::CardDestroyed).with_subject(id))?;
            self.cards.remove(&id);
            Ok(())
        }
    }

    /// Create a card in `player`'s hand. `None` when the hand is full.
    pub fn add_card_to_hand(&mut self, player: PlayerId, name: &str) -> Result<Option<EntityId>> {
        self.registry.lookup(name)?;
        if self.player(player).hand.len() >= self.config.max_hand_size {
            return Ok(None);
        }
        Ok(Some(self.insert_hand_card(player, name)))
    }

    /// Remove a card from its owner's hand, returning its name.
    pub fn take_from_hand(&mut self, card: EntityId) -> Option<String> {
        let instance = self.cards.remove(&card)?;
        self.player_mut(instance.owner).hand.retain(|c| *c != card);
        Some(instance.name)
    }

    pub fn discard_random(&mut self, player: PlayerId) -> Result<()> {
        let hand = self.player(player).hand.clone();
        if hand.is_empty() {
            return Ok(());
        }
        let card = self.random_choice(&hand);
        self.trigger(
            EntityId::player(player),
            GameEvent::new(EventKind::CardDiscarded).with_subject(card),
        )?;
        if let Some(name) = self.take_from_hand(card) {
            tracing::debug!(player = %player, card = %name, "discarded");
        }
        Ok(())
    }

    /// Mana for this turn only, up to the cap.
    pub fn gain_mana(&mut self, player: PlayerId, amount: i32) {
        let cap = self.config.max_mana;
        let p = self.player_mut(player);
        p.mana = (p.mana + amount).min(cap.max(p.mana));
    }

    /// Counter a card being played: its cost stays paid, its effect is skipped.
    pub fn cancel_card(&mut self, card: EntityId) {
        if let Some(c) = self.cards.get_mut(&card) {
            c.cancelled = true;
        }
    }

    pub fn concede(&mut self) -> Result<()> {
        let player = self.current;
        self.with_journal(|j, g| j.begin(g, ReplayMove::Concede));
        tracing::info!(player = %player, "conceded");
        let hero = self.player(player).hero;
        self.die(hero, None);
        self.check_delayed()
    }

    // === Secrets ===

    fn secret_trigger(&self, card: EntityId) -> Option<Event> {
        match &self.definition_of(card)?.kind {
            CardKind::Secret(s) => Some(s.trigger.clone()),
            _ => None,
        }
    }

    /// Arm `player`'s secrets for the opponent's turn.
    fn activate_secrets(&mut self, player: PlayerId) {
        for card in self.player(player).secrets.clone() {
            let Some(trigger) = self.secret_trigger(card) else {
                continue;
            };
            let handlers = trigger.bind(self, card, Handler::Secret { player, card });
            if let Some(c) = self.cards.get_mut(&card) {
                c.handlers = handlers.into_vec();
            }
        }
    }

    fn deactivate_secrets(&mut self, player: PlayerId) {
        for card in self.player(player).secrets.clone() {
            let handlers = self
                .cards
                .get_mut(&card)
                .map(|c| std::mem::take(&mut c.handlers))
                .unwrap_or_default();
            Event::unbind(self, &handlers);
        }
    }

    /// Reveal a secret whose trigger fired, if the payload passes its gate.
    pub(crate) fn reveal_secret(&mut self, player: PlayerId, card: EntityId, event: &GameEvent) -> Result<()> {
        let Some(def) = self.definition_of(card).cloned() else {
            return Ok(());
        };
        let CardKind::Secret(secret) = def.kind else {
            return Ok(());
        };
        if !secret.trigger.accepts(self, card, event) {
            return Ok(());
        }
        tracing::debug!(player = %player, secret = %def.name, "secret revealed");
        self.trigger(
            EntityId::player(player),
            GameEvent::new(EventKind::SecretRevealed).with_subject(card),
        )?;
        self.player_mut(player).secrets.retain(|s| *s != card);
        let handlers = self
            .cards
            .get_mut(&card)
            .map(|c| std::mem::take(&mut c.handlers))
            .unwrap_or_default();
        Event::unbind(self, &handlers);
        let actions = secret.actions;
        secret.selector.for_each_target(self, card, event.subject, |g, t| {
            for action in &actions {
                action.act(g, card, t)?;
            }
            Ok(())
        })?;
        self.cards.remove(&card);
        Ok(())
    }
}

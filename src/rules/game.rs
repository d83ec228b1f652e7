//! The `Game`: owner of every entity, the event bus and the delayed queue.
//!
//! Everything that mutates more than one entity goes through `Game`. Tags
//! hold only ids and call back in here, so a single `&mut Game` is threaded
//! through every resolution step.
//!
//! The rule operations are split by concern:
//!
//! - `board`: entering and leaving play, attaching tags, auras, silence
//! - `combat`: stats, damage, healing, death, attacks, weapons
//! - `turn`: match flow, draws, secrets
//! - `play`: playing cards from hand
//! - `mana`: the cost pipeline
//! - `power`: hero powers

use std::cell::RefCell;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::agents::Agent;
use crate::cards::{CardDefinition, CardInstance, CardRegistry};
use crate::core::{ActionRecord, EntityId, GameConfig, PlayerAction, PlayerId, PlayerMap, RandomSource, Result, RuleViolation};
use crate::entities::{Character, Player};
use crate::replay::Recorder;
use crate::stack::DelayedQueue;
use crate::tags::TagId;
use crate::triggers::{EventBus, GameEvent};

use super::dispatch::Handler;
use super::engine::GameResult;

/// Choices fixed ahead of time by the move being applied.
///
/// A preset is consumed by the first matching decision point; anything not
/// consumed is dropped when the move finishes.
#[derive(Clone, Debug, Default)]
pub(crate) struct PendingChoices {
    pub target: Option<EntityId>,
    pub index: Option<usize>,
    pub option: Option<usize>,
}

pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) registry: Arc<CardRegistry>,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) characters: FxHashMap<EntityId, Character>,
    pub(crate) cards: FxHashMap<EntityId, CardInstance>,
    pub(crate) bus: EventBus<Handler>,
    pub(crate) delayed: DelayedQueue,
    random: RefCell<Box<dyn RandomSource>>,
    random_log: RefCell<Vec<i32>>,
    pub(crate) agents: PlayerMap<Option<Box<dyn Agent>>>,
    pub(crate) pending: PendingChoices,
    pub(crate) scripted_keeps: PlayerMap<Option<Vec<usize>>>,
    pub(crate) current: PlayerId,
    pub(crate) turn: u32,
    pub(crate) born_counter: u32,
    next_entity: u32,
    next_tag: u32,
    pub(crate) pre_game_done: bool,
    pub(crate) started: bool,
    pub(crate) result: Option<GameResult>,
    pub(crate) history: Vec<ActionRecord>,
    pub(crate) journal: Option<Recorder>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.turn)
            .field("current", &self.current)
            .field("result", &self.result)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub(crate) fn new(
        config: GameConfig,
        registry: Arc<CardRegistry>,
        random: Box<dyn RandomSource>,
        players: PlayerMap<Player>,
        heroes: Vec<Character>,
    ) -> Self {
        let next_entity = heroes
            .iter()
            .map(|h| h.id.0 + 1)
            .max()
            .unwrap_or(EntityId::first_non_player());
        Self {
            config,
            registry,
            players,
            characters: heroes.into_iter().map(|h| (h.id, h)).collect(),
            cards: FxHashMap::default(),
            bus: EventBus::new(),
            delayed: DelayedQueue::new(),
            random: RefCell::new(random),
            random_log: RefCell::new(Vec::new()),
            agents: PlayerMap::new(|_| None),
            pending: PendingChoices::default(),
            scripted_keeps: PlayerMap::new(|_| None),
            // The first turn swaps to the first player.
            current: PlayerId::SECOND,
            turn: 0,
            born_counter: 0,
            next_entity,
            next_tag: 1,
            pre_game_done: false,
            started: false,
            result: None,
            history: Vec::new(),
            journal: None,
        }
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<CardRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.players.get(id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        self.players.get_mut(id)
    }

    #[must_use]
    pub fn character(&self, id: EntityId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub(crate) fn character_mut(&mut self, id: EntityId) -> Option<&mut Character> {
        self.characters.get_mut(&id)
    }

    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// The hero of `player`.
    #[must_use]
    pub fn hero(&self, player: PlayerId) -> Option<&Character> {
        self.character(self.player(player).hero)
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn other_player(&self) -> PlayerId {
        self.current.opponent()
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Every action applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub(crate) fn bus_mut(&mut self) -> &mut EventBus<Handler> {
        &mut self.bus
    }

    /// Number of handlers listening for `kind` on `owner`.
    #[must_use]
    pub fn listeners(&self, owner: EntityId, kind: crate::triggers::EventKind) -> usize {
        self.bus.count(owner, kind)
    }

    /// The player an entity belongs to. Players belong to themselves.
    #[must_use]
    pub fn owner_of(&self, id: EntityId) -> Option<PlayerId> {
        if let Some(p) = id.as_player() {
            return Some(p);
        }
        if let Some(c) = self.characters.get(&id) {
            return Some(c.owner);
        }
        self.cards.get(&id).map(|c| c.owner)
    }

    /// A character id for `id`: characters map to themselves, players to
    /// their hero.
    #[must_use]
    pub fn as_character(&self, id: EntityId) -> Option<EntityId> {
        match id.as_player() {
            Some(p) => Some(self.player(p).hero),
            None => self.characters.contains_key(&id).then_some(id),
        }
    }

    #[must_use]
    pub fn is_minion(&self, id: EntityId) -> bool {
        self.character(id).is_some_and(Character::is_minion)
    }

    #[must_use]
    pub fn is_hero(&self, id: EntityId) -> bool {
        self.character(id).is_some_and(Character::is_hero)
    }

    #[must_use]
    pub fn is_dead(&self, id: EntityId) -> bool {
        self.character(id).is_some_and(|c| c.dead)
    }

    #[must_use]
    pub fn is_stealthed(&self, id: EntityId) -> bool {
        self.character(id).is_some_and(Character::is_stealthed)
    }

    /// Owner and board index of a minion still on the board.
    #[must_use]
    pub fn minion_slot(&self, id: EntityId) -> Option<(PlayerId, usize)> {
        let c = self.character(id)?;
        if c.removed {
            return None;
        }
        c.minion().map(|m| (c.owner, m.index))
    }

    /// Name of the card a character or card instance came from.
    #[must_use]
    pub fn card_name_of(&self, id: EntityId) -> Option<&str> {
        if let Some(c) = self.characters.get(&id) {
            return Some(c.card.as_str());
        }
        self.cards.get(&id).map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn definition_of(&self, id: EntityId) -> Option<&CardDefinition> {
        self.card_name_of(id).and_then(|name| self.registry.get(name))
    }

    /// Bonus damage for an action performed by `actor`: the owner's spell
    /// damage when the actor is a spell being cast, otherwise nothing.
    #[must_use]
    pub fn spell_damage_bonus(&self, actor: EntityId) -> i32 {
        let Some(card) = self.cards.get(&actor) else {
            return 0;
        };
        match self.registry.get(&card.name) {
            Some(def) if def.is_spell() => self.player(card.owner).spell_damage,
            _ => 0,
        }
    }

    // === Allocation ===

    pub(crate) fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity);
        self.next_entity += 1;
        id
    }

    pub(crate) fn next_tag(&mut self) -> TagId {
        let tag = TagId(self.next_tag);
        self.next_tag += 1;
        tag
    }

    // === Randomness ===

    /// A number in `low..=high` from the game's single random source.
    pub fn random_between(&self, low: i32, high: i32) -> i32 {
        let value = self.random.borrow_mut().random_between(low, high);
        if self.journal.is_some() {
            self.random_log.borrow_mut().push(value);
        }
        value
    }

    /// Pick one of `items`, which must not be empty.
    pub fn random_choice<T: Copy>(&self, items: &[T]) -> T {
        let pick = self.random_between(0, items.len() as i32 - 1);
        items[pick.max(0) as usize]
    }

    // === Events ===

    /// Run every handler bound for `event.kind` on `owner`'s bus.
    ///
    /// Handlers are snapshotted first; one unbound by an earlier handler of
    /// the same dispatch is skipped.
    pub fn trigger(&mut self, owner: EntityId, mut event: GameEvent) -> Result<()> {
        if let Some(p) = owner.as_player() {
            event.player = Some(p);
        }
        let handlers = self.bus.snapshot(owner, event.kind);
        if handlers.is_empty() {
            return Ok(());
        }
        tracing::trace!(owner = %owner, event = %event.kind, handlers = handlers.len(), "dispatch");
        for (id, handler) in handlers {
            if !self.bus.begin(id) {
                continue;
            }
            let outcome = self.dispatch(&handler, &event);
            self.bus.finish(id);
            outcome?;
        }
        Ok(())
    }

    /// Flush the delayed queue until it stays empty.
    pub fn check_delayed(&mut self) -> Result<()> {
        while !self.delayed.is_empty() {
            let batch = self.delayed.take_batch();
            tracing::trace!(entities = batch.len(), "delayed flush");
            for entity in batch {
                for event in self.delayed.take_events(entity) {
                    self.trigger(entity, event)?;
                }
            }
        }
        Ok(())
    }

    // === Decisions ===

    /// Ask who `player` targets among `targets`, recording the answer.
    pub fn choose_target(&mut self, player: PlayerId, targets: &[EntityId]) -> Result<Option<EntityId>> {
        let choice = self.decide_target(player, targets);
        self.with_journal(|j, g| j.target(g, choice));
        Ok(choice)
    }

    /// Resolve a target decision without recording it.
    pub(crate) fn decide_target(&mut self, player: PlayerId, targets: &[EntityId]) -> Option<EntityId> {
        if let Some(preset) = self.pending.target.take() {
            if targets.contains(&preset) {
                return Some(preset);
            }
            tracing::warn!(target = %preset, "preset target is not a candidate");
            return None;
        }
        let choice = self.with_agent(player, |agent, game| agent.choose_target(game, player, targets))?;
        match choice {
            Some(t) if !targets.contains(&t) => {
                tracing::warn!(player = %player, target = %t, "agent chose a target outside the candidates");
                None
            }
            other => other,
        }
    }

    /// Ask where `player` places the minion card `card`.
    pub fn choose_index(&mut self, player: PlayerId, card: &str) -> usize {
        let len = self.player(player).minions.len();
        let index = match self.pending.index.take() {
            Some(i) => i,
            None => self
                .with_agent(player, |agent, game| agent.choose_index(game, player, card))
                .unwrap_or(len),
        };
        let index = index.min(len);
        self.with_journal(|j, _| j.index(index));
        index
    }

    /// Ask which of `options` `player` picks. Returns an index into it.
    pub fn choose_option(&mut self, player: PlayerId, options: &[String]) -> usize {
        let option = match self.pending.option.take() {
            Some(o) => o,
            None => self
                .with_agent(player, |agent, game| agent.choose_option(game, player, options))
                .unwrap_or(0),
        };
        let option = option.min(options.len().saturating_sub(1));
        self.with_journal(|j, _| j.option(option));
        option
    }

    /// Lend `player`'s agent out for one call. The agent sees the game
    /// read-only and cannot re-enter it.
    pub(crate) fn with_agent<R>(&mut self, player: PlayerId, f: impl FnOnce(&mut dyn Agent, &Game) -> R) -> Option<R> {
        let mut agent = self.agents.get_mut(player).take()?;
        let out = f(agent.as_mut(), self);
        *self.agents.get_mut(player) = Some(agent);
        Some(out)
    }

    /// Replace the agent in a seat.
    pub fn set_agent(&mut self, player: PlayerId, agent: Box<dyn Agent>) {
        *self.agents.get_mut(player) = Some(agent);
    }

    // === Recording ===

    /// Hand the recorder the game, flushing any random numbers drawn since
    /// its last call.
    pub(crate) fn with_journal(&mut self, f: impl FnOnce(&mut Recorder, &Game)) {
        let Some(mut journal) = self.journal.take() else {
            return;
        };
        journal.random(std::mem::take(&mut *self.random_log.borrow_mut()));
        f(&mut journal, self);
        self.journal = Some(journal);
    }

    /// The replay recorded so far, if recording was enabled.
    pub fn replay(&mut self) -> Option<crate::replay::Replay> {
        let mut out = None;
        self.with_journal(|j, _| out = Some(j.replay()));
        out
    }

    pub(crate) fn record_action(&mut self, player: PlayerId, action: &PlayerAction) {
        let sequence = self.history.iter().filter(|r| r.turn == self.turn).count() as u32;
        self.history.push(ActionRecord::new(player, action.clone(), self.turn, sequence));
    }

    pub(crate) fn ensure_running(&self) -> std::result::Result<(), RuleViolation> {
        if self.is_over() {
            return Err(RuleViolation::GameOver);
        }
        Ok(())
    }
}

//! Per-entity event bus.
//!
//! Every entity (player, hero, minion) has its own set of subscriptions,
//! keyed by `(EntityId, EventKind)`. The bus only stores handlers; running
//! them is the caller's job, which lets the game hold `&mut self` while it
//! dispatches. A dispatch goes through three steps:
//!
//! 1. [`EventBus::snapshot`] copies the handlers registered right now.
//! 2. For each one, [`EventBus::begin`] decides whether it still runs (it may
//!    have been unbound by an earlier handler, or already be executing further
//!    up the stack) and consumes one-shot bindings.
//! 3. [`EventBus::finish`] releases the re-entrancy guard.
//!
//! ```
//! use ccg_tags::core::EntityId;
//! use ccg_tags::triggers::{EventBus, EventKind};
//!
//! let mut bus: EventBus<&str> = EventBus::new();
//! let minion = EntityId(5);
//! let a = bus.bind(minion, EventKind::Damaged, "a");
//! bus.bind_once(minion, EventKind::Damaged, "b");
//!
//! let mut fired = Vec::new();
//! for (id, h) in bus.snapshot(minion, EventKind::Damaged) {
//!     if bus.begin(id) {
//!         bus.finish(id);
//!         fired.push(h);
//!     }
//! }
//! assert_eq!(fired, vec!["a", "b"]);
//! assert_eq!(bus.snapshot(minion, EventKind::Damaged).len(), 1);
//! assert!(bus.is_bound(a));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::EntityId;

use super::event::EventKind;

/// Identity of one binding, used to unbind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandlerId(pub u32);

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Binding<H> {
    id: HandlerId,
    handler: H,
    once: bool,
}

/// Handlers registered per `(entity, event)`, in registration order.
#[derive(Clone, Debug)]
pub struct EventBus<H> {
    bindings: FxHashMap<(EntityId, EventKind), Vec<Binding<H>>>,
    by_id: FxHashMap<HandlerId, (EntityId, EventKind)>,
    running: FxHashSet<HandlerId>,
    next_id: u32,
}

impl<H> Default for EventBus<H> {
    fn default() -> Self {
        Self {
            bindings: FxHashMap::default(),
            by_id: FxHashMap::default(),
            running: FxHashSet::default(),
            next_id: 1,
        }
    }
}

impl<H: Clone> EventBus<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a permanent handler.
    pub fn bind(&mut self, owner: EntityId, kind: EventKind, handler: H) -> HandlerId {
        self.insert(owner, kind, handler, false)
    }

    /// Register a handler that is removed the first time it runs.
    pub fn bind_once(&mut self, owner: EntityId, kind: EventKind, handler: H) -> HandlerId {
        self.insert(owner, kind, handler, true)
    }

    fn insert(&mut self, owner: EntityId, kind: EventKind, handler: H, once: bool) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.bindings
            .entry((owner, kind))
            .or_default()
            .push(Binding { id, handler, once });
        self.by_id.insert(id, (owner, kind));
        id
    }

    /// Remove a handler. Returns it if it was still bound.
    pub fn unbind(&mut self, id: HandlerId) -> Option<H> {
        let key = self.by_id.remove(&id)?;
        let list = self.bindings.get_mut(&key)?;
        let pos = list.iter().position(|b| b.id == id)?;
        let binding = list.remove(pos);
        if list.is_empty() {
            self.bindings.remove(&key);
        }
        Some(binding.handler)
    }

    /// Remove every handler registered on `owner`'s own bus.
    pub fn unbind_owner(&mut self, owner: EntityId) -> usize {
        let ids: Vec<HandlerId> = self
            .by_id
            .iter()
            .filter(|(_, (o, _))| *o == owner)
            .map(|(id, _)| *id)
            .collect();
        for id in &ids {
            self.unbind(*id);
        }
        ids.len()
    }

    #[must_use]
    pub fn is_bound(&self, id: HandlerId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of handlers listening for `kind` on `owner`.
    #[must_use]
    pub fn count(&self, owner: EntityId, kind: EventKind) -> usize {
        self.bindings.get(&(owner, kind)).map_or(0, Vec::len)
    }

    /// Copy of the handlers registered for `kind` on `owner`, in order.
    #[must_use]
    pub fn snapshot(&self, owner: EntityId, kind: EventKind) -> SmallVec<[(HandlerId, H); 4]> {
        self.bindings
            .get(&(owner, kind))
            .map(|list| list.iter().map(|b| (b.id, b.handler.clone())).collect())
            .unwrap_or_default()
    }

    /// Claim a snapshotted handler for execution.
    ///
    /// Returns `false` when the handler was unbound since the snapshot or is
    /// already running. One-shot handlers are unbound here.
    pub fn begin(&mut self, id: HandlerId) -> bool {
        let Some(key) = self.by_id.get(&id).copied() else {
            return false;
        };
        if self.running.contains(&id) {
            return false;
        }
        let once = self
            .bindings
            .get(&key)
            .and_then(|list| list.iter().find(|b| b.id == id))
            .is_some_and(|b| b.once);
        if once {
            self.unbind(id);
        }
        self.running.insert(id);
        true
    }

    /// Release the re-entrancy guard taken by [`EventBus::begin`].
    pub fn finish(&mut self, id: HandlerId) {
        self.running.remove(&id);
    }
}

//! Delayed-trigger queue.
//!
//! Deaths (and any other notification that must look simultaneous) are not
//! raised when they happen. They are parked here under the entity that
//! produced them and released at the next flush point, entity by entity in
//! ascending `born` order. Heroes are born at 0 and therefore resolve first.
//!
//! A flush takes the current batch of entities in one step. Each entity's
//! events are taken (and cleared) right before they fire, so an entity can
//! never deliver the same notification twice. Events scheduled while a batch
//! is firing land in the next batch.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::core::EntityId;
use crate::triggers::GameEvent;

/// Pending notifications keyed by `(born, entity)`.
#[derive(Clone, Debug, Default)]
pub struct DelayedQueue {
    order: BTreeSet<(u32, EntityId)>,
    events: FxHashMap<EntityId, Vec<GameEvent>>,
}

impl DelayedQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `event` until the next flush.
    pub fn schedule(&mut self, entity: EntityId, born: u32, event: GameEvent) {
        self.order.insert((born, entity));
        self.events.entry(entity).or_default().push(event);
    }

    /// True when nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `entity` has notifications waiting.
    #[must_use]
    pub fn is_pending(&self, entity: EntityId) -> bool {
        self.events.get(&entity).is_some_and(|e| !e.is_empty())
    }

    /// Take the current batch of entities, smallest `born` first.
    pub fn take_batch(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.order)
            .into_iter()
            .map(|(_, id)| id)
            .collect()
    }

    /// Take every notification parked for `entity`.
    pub fn take_events(&mut self, entity: EntityId) -> Vec<GameEvent> {
        self.events.remove(&entity).unwrap_or_default()
    }

    /// Drop everything, for a game that has ended.
    pub fn clear(&mut self) {
        self.order.clear();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::EventKind;

    fn died(id: u32) -> GameEvent {
        GameEvent::new(EventKind::Died).with_subject(EntityId(id))
    }

    #[test]
    fn test_batch_is_ordered_by_born() {
        let mut queue = DelayedQueue::new();
        queue.schedule(EntityId(10), 7, died(10));
        queue.schedule(EntityId(11), 3, died(11));
        queue.schedule(EntityId(2), 0, died(2));

        assert_eq!(queue.take_batch(), vec![EntityId(2), EntityId(11), EntityId(10)]);
        assert!(queue.is_empty());
        // events are still parked until taken
        assert!(queue.is_pending(EntityId(10)));
    }

    #[test]
    fn test_take_events_clears() {
        let mut queue = DelayedQueue::new();
        queue.schedule(EntityId(4), 1, died(4));
        queue.schedule(EntityId(4), 1, died(4));

        assert_eq!(queue.take_batch(), vec![EntityId(4)]);
        assert_eq!(queue.take_events(EntityId(4)).len(), 2);
        assert!(queue.take_events(EntityId(4)).is_empty());
        assert!(!queue.is_pending(EntityId(4)));
    }

    #[test]
    fn test_scheduled_during_batch_goes_to_next_batch() {
        let mut queue = DelayedQueue::new();
        queue.schedule(EntityId(4), 1, died(4));
        let batch = queue.take_batch();
        queue.schedule(EntityId(5), 0, died(5));

        assert_eq!(batch, vec![EntityId(4)]);
        assert_eq!(queue.take_batch(), vec![EntityId(5)]);
    }

    #[test]
    fn test_clear() {
        let mut queue = DelayedQueue::new();
        queue.schedule(EntityId(4), 1, died(4));
        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.is_pending(EntityId(4)));
    }
}

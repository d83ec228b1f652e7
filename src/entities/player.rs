//! Player state: hand, deck, board, secrets, mana and player-level tags.

use smallvec::SmallVec;

use crate::core::{EntityId, PlayerId};
use crate::tags::{Aura, Condition, TagId};
use crate::triggers::HandlerId;

use super::character::AttachedEffect;
use super::deck::Deck;

/// One step of the mana-cost pipeline.
///
/// `amount` is added to the running cost, which may not drop below
/// `minimum` unless it was already below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManaFilter {
    pub amount: i32,
    pub minimum: i32,
    /// Which cards the filter applies to; `None` means every card.
    pub condition: Option<Condition>,
    /// The buff or aura that installed the filter. Removal goes by this tag,
    /// so identical filters from other sources keep their place.
    pub source: Option<TagId>,
}

impl ManaFilter {
    #[must_use]
    pub fn apply(&self, cost: i32) -> i32 {
        (cost + self.amount).max(cost.min(self.minimum))
    }
}

/// A live aura and the targets it is currently applied to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuraRecord {
    pub tag: TagId,
    /// The entity whose selector perspective the aura uses.
    pub owner: EntityId,
    pub aura: Aura,
    pub affected: Vec<EntityId>,
    /// Bindings of the aura's `until` event.
    pub handlers: SmallVec<[HandlerId; 2]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub hero: EntityId,
    pub deck: Deck,
    /// Card instances, in hand order.
    pub hand: Vec<EntityId>,
    /// Minions, in board order.
    pub minions: Vec<EntityId>,
    /// Secret card instances, in play order.
    pub secrets: Vec<EntityId>,
    pub graveyard: Vec<String>,
    pub mana: i32,
    pub max_mana: i32,
    /// Overload owed for next turn.
    pub overload: i32,
    /// Overload locking mana this turn.
    pub locked_mana: i32,
    pub fatigue: i32,
    pub spell_damage: i32,
    pub cards_played: u32,
    pub mana_filters: Vec<ManaFilter>,
    pub auras: Vec<AuraRecord>,
    pub effects: Vec<AttachedEffect>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, hero: EntityId, deck: Deck) -> Self {
        Self {
            id,
            hero,
            deck,
            hand: Vec::new(),
            minions: Vec::new(),
            secrets: Vec::new(),
            graveyard: Vec::new(),
            mana: 0,
            max_mana: 0,
            overload: 0,
            locked_mana: 0,
            fatigue: 0,
            spell_damage: 0,
            cards_played: 0,
            mana_filters: Vec::new(),
            auras: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// This player's own entity id.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        EntityId::player(self.id)
    }

    #[must_use]
    pub fn aura(&self, tag: TagId) -> Option<&AuraRecord> {
        self.auras.iter().find(|a| a.tag == tag)
    }
}

//! Minion-only state.

use crate::cards::MinionType;
use crate::tags::Deathrattle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinionState {
    /// Position in the owner's minion list.
    pub index: usize,
    pub minion_type: MinionType,
    pub deathrattles: Vec<Deathrattle>,
    /// Summoning sickness; cleared at the end of its owner's turn.
    pub exhausted: bool,
}

impl MinionState {
    #[must_use]
    pub fn new(minion_type: MinionType) -> Self {
        Self {
            index: 0,
            minion_type,
            deathrattles: Vec::new(),
            exhausted: true,
        }
    }
}

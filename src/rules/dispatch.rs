//! Handler values bound on the event bus and their dispatch.
//!
//! The bus stores plain data; `Game::dispatch` turns a fired handler back
//! into the tag it stands for by looking the tag up on its holder.

use crate::core::{EntityId, PlayerId, Result};
use crate::tags::{Deathrattle, TagId};
use crate::triggers::GameEvent;

use super::game::Game;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handler {
    /// An attached effect on a character or a player.
    Effect { holder: EntityId, tag: TagId },
    /// The `until` event of a buff.
    BuffExpiry { holder: EntityId, tag: TagId },
    /// The `until` event of an aura record.
    AuraExpiry { player: PlayerId, tag: TagId },
    /// An active secret waiting for its trigger.
    Secret { player: PlayerId, card: EntityId },
    /// Death resolution, bound once on the dying minion's `died` event with
    /// the deathrattles it had when it died.
    MinionDeath {
        minion: EntityId,
        deathrattles: Vec<Deathrattle>,
    },
}

impl Game {
    pub(crate) fn dispatch(&mut self, handler: &Handler, event: &GameEvent) -> Result<()> {
        match handler {
            Handler::Effect { holder, tag } => self.fire_effect(*holder, *tag, event),
            Handler::BuffExpiry { holder, tag } => {
                self.remove_buff(*holder, *tag);
                Ok(())
            }
            Handler::AuraExpiry { player, tag } => {
                self.remove_aura(*player, *tag);
                Ok(())
            }
            Handler::Secret { player, card } => self.reveal_secret(*player, *card, event),
            Handler::MinionDeath {
                minion,
                deathrattles,
            } => self.resolve_death(*minion, deathrattles, event.other),
        }
    }

    fn fire_effect(&mut self, holder: EntityId, tag: TagId, event: &GameEvent) -> Result<()> {
        let attached = match holder.as_player() {
            Some(p) => self.player(p).effects.iter().find(|e| e.tag == tag),
            None => self
                .character(holder)
                .and_then(|c| c.effects.iter().find(|e| e.tag == tag)),
        };
        let Some(effect) = attached.map(|e| e.effect.clone()) else {
            return Ok(());
        };
        let fired = effect.fire(self, holder, event)?;
        // Effects given to a player are spent by their first firing.
        if fired {
            if let Some(p) = holder.as_player() {
                self.remove_player_effect(p, tag);
            }
        }
        Ok(())
    }
}

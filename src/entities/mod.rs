//! Game entities.
//!
//! ## Key Types
//!
//! - [`Character`]: shared minion/hero state with [`StatusCounters`]
//! - [`MinionState`], [`HeroState`], [`Weapon`]: per-kind state
//! - [`Player`]: hand, deck, board, secrets, mana, [`ManaFilter`]s and
//!   player-held [`AuraRecord`]s
//! - [`Deck`]: fixed pool of names with a drawn bitset

mod character;
mod deck;
mod hero;
mod minion;
mod player;

pub use character::{AttachedBuff, AttachedEffect, Character, CharacterKind, StatusCounters};
pub use deck::Deck;
pub use hero::{HeroState, Weapon};
pub use minion::MinionState;
pub use player::{AuraRecord, ManaFilter, Player};

//! The declarative tag language cards are written in.
//!
//! ## Key Components
//!
//! - [`Condition`]: predicates over a payload and the owning entity
//! - [`Selector`]: who a tag applies to, with [`PlayerScope`] and [`Picker`]
//! - [`Status`]: reversible stat changes, the body of buffs and auras
//! - [`Action`]: one effect on one target
//! - [`Event`]: when a tag fires
//! - [`Effect`], [`Aura`], [`Buff`], [`Deathrattle`], [`Battlecry`],
//!   [`Choice`], [`Enrage`]: combinators attached to entities
//! - [`CardQuery`], [`Targeting`]: card production and play-time targets
//!
//! Every tag serializes as `{"name": "<snake_case>", ...fields}` and nests
//! recursively, so a card definition is a single JSON document.

mod action;
mod base;
mod condition;
mod event;
mod query;
mod selector;
mod status;
mod targeting;

pub use action::Action;
pub use base::{Aura, Battlecry, Buff, Choice, Deathrattle, Effect, Enrage, TagId};
pub use condition::{Condition, ConditionContext};
pub use event::Event;
pub use query::CardQuery;
pub use selector::{Picker, PlayerScope, Selector};
pub use status::Status;
pub use targeting::{TargetKind, Targeting};

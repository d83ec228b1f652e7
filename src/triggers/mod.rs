//! Event plumbing.
//!
//! ## Key Components
//!
//! - [`EventKind`]: the closed set of notifications the engine raises
//! - [`GameEvent`]: an event that occurred with contextual data
//! - [`EventBus`]: per-entity subscriptions with snapshot dispatch
//!
//! Tags (effects, auras, secrets) subscribe by binding a handler value on the
//! bus of the entity they watch. The game owns the bus and runs handlers.

mod bus;
mod event;

pub use bus::{EventBus, HandlerId};
pub use event::{EventKind, GameEvent};

//! Card system: definitions, instances, registry and the built-in set.
//!
//! ## Key Types
//!
//! - `CardDefinition`: static card data; a [`CardKind`] holds the tags
//! - `CardInstance`: a card in hand, resolving, or held as a secret
//! - `CardRegistry`: name-keyed definition lookup, built once and shared
//!
//! ## Card Set
//!
//! [`library::basic_cards`] lists the built-in definitions. Every card is a
//! composition of the primitives in `crate::tags`; none has bespoke code.

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod library;
pub mod registry;

pub use attributes::{CharacterClass, MinionType, Rarity};
pub use definition::{CardDefinition, CardKind, MinionCard, SecretCard, SpellCard, WeaponCard};
pub use instance::{CardInstance, CardZone};
pub use registry::CardRegistry;

//! Recording and replaying matches.
//!
//! A [`Replay`] holds the two decks, both card checks, every move and
//! every random number drawn. Moves name cards by hand index and
//! characters by board position ([`CardRef`], [`CharacterRef`]), so a
//! replay is independent of entity ids.
//!
//! Two interchangeable forms exist: a line-based text form
//! ([`Replay::to_text`] / [`Replay::parse`]) and JSON
//! ([`Replay::to_json`] / [`Replay::from_json`]).
//!
//! ```
//! use ccg_tags::replay::Replay;
//!
//! let replay = Replay::parse("deck(Mage,Wisp)\ndeck(Warrior,Wisp)\nstart()\nend()\n").unwrap();
//! let json = replay.to_json().unwrap();
//! assert_eq!(Replay::from_json(&json).unwrap(), replay);
//! ```

mod format;
mod moves;
mod playback;
mod recorder;
mod refs;

pub use format::{DeckList, RecordedMove, Replay, ReplayHeader};
pub use moves::ReplayMove;
pub use recorder::Recorder;
pub use refs::{CardRef, CharacterRef};

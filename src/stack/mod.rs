//! Resolution ordering.
//!
//! Events resolve immediately, except for the ones parked in the
//! [`DelayedQueue`] until an explicit flush point (after an attack, after a
//! card is played, or wherever a card needs its deaths settled first).

mod delayed;

pub use delayed::DelayedQueue;

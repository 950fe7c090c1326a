//! The `sender` module defines the participants that write to the store.
//!
//! - `participant`: `Sender`, one identity plus the write path into the store.
//! - `roster`: `Roster`, the externally defined set of known senders.

pub mod participant;
pub mod roster;

pub use participant::Sender;
pub use roster::Roster;

//! The `store` module holds the shared, append-only message history.
//!
//! - `message`: the immutable `Message` record.
//! - `engine`: `MessageStore`, the lock-protected history with its queries.

pub mod engine;
pub mod message;

pub use engine::MessageStore;
pub use message::Message;

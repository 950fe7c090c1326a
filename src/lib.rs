//! # chatlog
//!
//! `chatlog` is a minimal in-process message log: many participants send
//! messages concurrently into one shared, append-only history, which can
//! then be listed or searched by participant or keyword.
//!
//! ## Core Modules
//!
//! - `store`: the `Message` record and the lock-protected `MessageStore`.
//! - `sender`: `Sender`, the only write path into the store, and `Roster`.
//!
//! ## Collaborators
//!
//! - `simulation`: scripted senders run concurrently on tokio tasks.
//! - `console`: message formatting and the interactive text menu.
//! - `config`: settings loaded from `config/default` and the environment.
//! - `utils`: error types, logging setup and timestamps.

pub mod config;
pub mod console;
pub mod sender;
pub mod simulation;
pub mod store;
pub mod utils;

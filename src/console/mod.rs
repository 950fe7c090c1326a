//! The `console` module is the text front end over the store.
//!
//! - `format`: the one-line rendering of a message.
//! - `menu`: the interactive menu loop (send, list, search, exit).

pub mod format;
pub mod menu;

pub use format::format_message;
pub use menu::Menu;

#[cfg(test)]
mod tests;

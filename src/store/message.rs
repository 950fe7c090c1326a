//! Message definitions for the store
//!
//! `Message` is the record appended by a sender. It is immutable once built:
//! fields are private and exposed through accessors only.
//!
//! Notes on fields:
//! - `id`: random identifier so identical texts stay distinguishable
//! - `sender` / `recipient`: participant identities; the recipient is never
//!   checked against a roster
//! - `timestamp`: wall-clock time captured when the sender built the message
//! - `content`: free text, may be empty

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    sender: String,
    recipient: String,
    timestamp: Timestamp,
    content: String,
}

impl Message {
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        timestamp: Timestamp,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: sender.into(),
            recipient: recipient.into(),
            timestamp,
            content: content.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// True if `id` sent or received this message.
    pub fn involves(&self, id: &str) -> bool {
        self.sender == id || self.recipient == id
    }

    /// ASCII case-insensitive substring match against the content.
    ///
    /// Compares byte windows in place; non-ASCII bytes must match exactly.
    pub(crate) fn content_contains_ignore_ascii_case(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        if needle.is_empty() {
            return true;
        }
        self.content
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} -> {}: {}",
            self.timestamp, self.sender, self.recipient, self.content
        )
    }
}

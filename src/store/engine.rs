//! Message store engine
//!
//! The store owns the append-only message history and the single lock that
//! protects it. Every operation takes that lock for exactly as long as it
//! needs to push one message or copy the matching ones out; nothing is
//! formatted or printed while it is held.
//!
//! Concurrency and usage notes:
//! - Share the store as `Arc<MessageStore>`; all methods take `&self`.
//! - Insertion order is the order in which appends won the lock. It is the
//!   only global order; timestamps from different senders may tie or invert.
//! - Queries return owned snapshots, so callers can take their time with the
//!   results without blocking writers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::store::message::Message;

#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Mutex<Vec<Message>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    // A panic elsewhere cannot leave the vector half-pushed, so a poisoned
    // lock still guards a consistent history.
    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `message` to the end of the history.
    pub fn append(&self, message: Message) {
        self.lock().push(message);
    }

    /// Point-in-time copy of the full history in append order.
    pub fn all_messages(&self) -> Vec<Message> {
        self.lock().clone()
    }

    /// Messages sent or received by `id`, in store order.
    pub fn find_by_participant(&self, id: &str) -> Vec<Message> {
        let found: Vec<Message> = self
            .lock()
            .iter()
            .filter(|msg| msg.involves(id))
            .cloned()
            .collect();
        debug!(participant = id, matches = found.len(), "searched by participant");
        found
    }

    /// Messages whose content contains `keyword`, ignoring ASCII case.
    ///
    /// Non-ASCII characters must match exactly. An empty keyword matches
    /// everything.
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<Message> {
        let found: Vec<Message> = self
            .lock()
            .iter()
            .filter(|msg| msg.content_contains_ignore_ascii_case(keyword))
            .cloned()
            .collect();
        debug!(keyword, matches = found.len(), "searched by keyword");
        found
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

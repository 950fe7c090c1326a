use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::store::{Message, MessageStore};
use crate::utils::timestamp::Timestamp;

/// A participant bound to the shared message store.
///
/// `send` is the only way messages enter the store. Each sender keeps the
/// last timestamp it stamped so its own messages never go back in time.
#[derive(Debug)]
pub struct Sender {
    id: String,
    store: Arc<MessageStore>,
    last_stamp: Mutex<Option<Timestamp>>,
}

impl Sender {
    pub fn new(id: impl Into<String>, store: Arc<MessageStore>) -> Self {
        Self {
            id: id.into(),
            store,
            last_stamp: Mutex::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds a message from this participant to `recipient` and appends it.
    ///
    /// The recipient is not checked against any roster. The append completes
    /// before the log record is emitted. Returns a copy of the stored message.
    pub fn send(&self, recipient: &str, content: &str) -> Message {
        let message = {
            // Held across stamp + append so this sender's order and its
            // timestamps agree.
            let mut last = self
                .last_stamp
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let timestamp = Timestamp::now_after(*last);
            *last = Some(timestamp);

            let message = Message::new(self.id.as_str(), recipient, timestamp, content);
            self.store.append(message.clone());
            message
        };

        info!(sender = %self.id, recipient, "{message}");
        message
    }
}

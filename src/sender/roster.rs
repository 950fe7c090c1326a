use std::sync::Arc;

use crate::sender::Sender;
use crate::store::MessageStore;

/// The known participants, in registration order.
///
/// The core never consults the roster; it only lets the console turn a typed
/// identity into a [`Sender`].
#[derive(Debug)]
pub struct Roster {
    senders: Vec<Arc<Sender>>,
}

impl Roster {
    pub fn new<I, S>(store: &Arc<MessageStore>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let senders = ids
            .into_iter()
            .map(|id| Arc::new(Sender::new(id, Arc::clone(store))))
            .collect();
        Self { senders }
    }

    pub fn find(&self, id: &str) -> Option<&Arc<Sender>> {
        self.senders.iter().find(|s| s.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.senders.iter().map(|s| s.id())
    }

    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

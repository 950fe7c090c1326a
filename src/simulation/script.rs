/// The messages one participant sends during a simulation, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub sender: String,
    pub messages: Vec<(String, String)>,
}

impl Script {
    pub fn new<S, R, C>(sender: S, messages: impl IntoIterator<Item = (R, C)>) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        C: Into<String>,
    {
        Self {
            sender: sender.into(),
            messages: messages
                .into_iter()
                .map(|(r, c)| (r.into(), c.into()))
                .collect(),
        }
    }
}

pub const DEFAULT_PARTICIPANTS: [&str; 5] = ["Alice", "Bob", "Charlie", "Dave", "Eve"];

/// The demo conversation: five participants, three messages each.
pub fn default_scripts() -> Vec<Script> {
    vec![
        Script::new(
            "Alice",
            [
                ("Bob", "Hello Bob!"),
                ("Bob", "How are you?"),
                ("Bob", "Let's catch up soon."),
            ],
        ),
        Script::new(
            "Bob",
            [
                ("Alice", "Hi Alice!"),
                ("Alice", "I'm good, thanks."),
                ("Alice", "Sure, sounds great."),
            ],
        ),
        Script::new(
            "Charlie",
            [
                ("Alice", "Hey Alice and Bob!"),
                ("Bob", "What are you guys up to?"),
                ("Alice", "Join me for a game?"),
            ],
        ),
        Script::new(
            "Dave",
            [
                ("Alice", "Dave here!"),
                ("Charlie", "Anyone up for coffee?"),
                ("Eve", "Ping me later."),
            ],
        ),
        Script::new(
            "Eve",
            [
                ("Dave", "Eve has entered the chat."),
                ("Bob", "Hi all!"),
                ("Charlie", "Nice to meet you!"),
            ],
        ),
    ]
}

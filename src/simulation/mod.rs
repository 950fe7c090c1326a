//! Scripted concurrent senders.
//!
//! Each script runs on its own tokio task and sends its messages in order,
//! pausing between sends. `send` is synchronous and only holds the store lock
//! for the append itself, so the pause never blocks other senders.

pub mod script;

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tracing::{info, warn};

use crate::sender::Roster;
use crate::utils::error::Result;

pub use script::{DEFAULT_PARTICIPANTS, Script, default_scripts};

/// Runs every script concurrently and waits for all of them.
///
/// Scripts whose sender is not in the roster are skipped. Returns the number
/// of messages sent.
pub async fn run(roster: &Roster, scripts: Vec<Script>, interval: Duration) -> Result<usize> {
    let mut handles = Vec::with_capacity(scripts.len());

    for script in scripts {
        let Some(sender) = roster.find(&script.sender) else {
            warn!(sender = %script.sender, "skipping script for unknown sender");
            continue;
        };
        let sender = Arc::clone(sender);

        handles.push(tokio::spawn(async move {
            let total = script.messages.len();
            for (i, (recipient, content)) in script.messages.iter().enumerate() {
                sender.send(recipient, content);
                if i + 1 < total {
                    tokio::time::sleep(interval).await;
                }
            }
            total
        }));
    }

    info!(senders = handles.len(), "simulation started");
    let sent: usize = try_join_all(handles).await?.into_iter().sum();
    info!(sent, "simulation finished");
    Ok(sent)
}

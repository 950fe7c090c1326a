//! Error types for the outer layers (configuration, console, simulation).
//!
//! The message store itself never fails; everything here comes from the
//! collaborators wired around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("simulation task failed: {0}")]
    Simulation(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ChatError>;

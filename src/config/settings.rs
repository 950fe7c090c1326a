use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub log: LogSettings,
    pub simulation: SimulationSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogSettings {
    pub level: String,
}

/// Configuration for the scripted concurrent senders run at startup.
///
/// `interval_ms` is the pause each sender takes between two messages.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationSettings {
    pub enabled: bool,
    pub interval_ms: u64,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub log: Option<PartialLogSettings>,
    pub simulation: Option<PartialSimulationSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialSimulationSettings {
    pub enabled: Option<bool>,
    pub interval_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogSettings {
                level: "info".to_string(),
            },
            simulation: SimulationSettings {
                enabled: true,
                interval_ms: 100,
            },
        }
    }
}

mod settings;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{LogSettings, Settings, SimulationSettings};

/// Prefix for environment overrides, e.g. `CHATLOG__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CHATLOG";

/// Loads the configuration from `config/default` (optional) and the
/// environment, then fills anything missing from `Settings::default()`.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
        simulation: SimulationSettings {
            enabled: partial
                .simulation
                .as_ref()
                .and_then(|s| s.enabled)
                .unwrap_or(default.simulation.enabled),
            interval_ms: partial
                .simulation
                .as_ref()
                .and_then(|s| s.interval_ms)
                .unwrap_or(default.simulation.interval_ms),
        },
    })
}

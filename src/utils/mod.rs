//! Shared utilities: error types, logging setup and timestamps.

pub mod error;
pub mod logging;
pub mod timestamp;

#[cfg(test)]
mod tests {
    use super::logging;

    #[test]
    fn logging_init_accepts_levels() {
        // Should not panic
        logging::init("info");
        logging::init("debug");
        logging::init("warn");
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(logging::parse_level("loud"), tracing::Level::INFO);
        assert_eq!(logging::parse_level("WARNING"), tracing::Level::WARN);
    }
}

/// Initialize tracing/logging for the application.
///
/// Unknown level names fall back to `info`. Events go to stderr so they do
/// not mix with the console output on stdout.
pub fn init(default_level: &str) {
    let lvl = parse_level(default_level);

    // try_init so tests can call this repeatedly
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(crate) fn parse_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    }
}

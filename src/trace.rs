use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the diagnostics and confirmation printed on stdout.
pub fn init(color: bool, json: bool, levels: &str) {
    let filter = EnvFilter::try_new(levels).unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore errors when setting, since tests can initialize this
    // multiple times.
    let _ = if json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .try_init()
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(color)
            .try_init()
    };
}

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Events go to stderr so stdout stays
/// reserved for results. `FETCHER_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let use_json = std::env::var("FETCHER_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()));

    if use_json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

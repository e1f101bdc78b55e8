// * Telemetry - Structured Logging
// * JSON logs for unattended runs, pretty logs for a terminal session

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Initializes the tracing subscriber with JSON formatting
///
/// # Example
/// ```ignore
/// use travel_refinery::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(source = "Wikivoyage", "Scraping");
/// ```
pub fn init_tracing() {
    init_tracing_with_level("info", LogFormat::Json);
}

/// Initializes tracing with a custom default level; `RUST_LOG` still wins when set
pub fn init_tracing_with_level(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    // * try_init so a second call (tests, embedding) is a no-op
    let _ = match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(false)).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };
}

//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process from the environment.
///
/// An invalid `DOMAINKIT_LOG_FORMAT` falls back to the default configuration.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_else(|err| {
        eprintln!("observability: {err}; using defaults");
        ObservabilityConfig::default()
    });
    init_with(&config);
}

/// Initialize tracing/logging from an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.is_ok()
}

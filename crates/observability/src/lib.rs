//! Tracing/logging setup shared by binaries and test suites built on `domainkit-core`.

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Logging configuration (filter + output format).
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
pub use self::tracing::init_with;

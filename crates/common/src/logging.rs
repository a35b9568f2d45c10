//! Tracing subscriber initialization
//!
//! Consumers of the identity crates call [`init`] once at process start.
//! Respects `RUST_LOG`; falls back to the configured level.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Safe to call once per process; later calls are ignored so tests that
/// share a process do not panic.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

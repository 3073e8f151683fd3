//! Tracing subscriber setup for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a global `fmt` subscriber. `RUST_LOG` overrides the configured
/// level. Returns `false` when a subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_level()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.effective_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}

//! Tracing subscriber setup.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install a stderr `fmt` subscriber for the process.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init_tracing(config: &Config) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(log_level = %config.log_level, "Tracing initialized");
    }

    installed
}

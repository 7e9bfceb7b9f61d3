//! Tracing subscriber setup for simulation runs.
//!
//! Console output by default, JSON lines when `json_logs` is set. The filter
//! accepts anything `EnvFilter` understands, e.g. `info,qc_simulation=debug`.

use tracing_subscriber::EnvFilter;

use crate::config::SimulationConfig;

/// Install the global tracing subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing
/// one is kept.
pub fn init_tracing(config: &SimulationConfig) -> bool {
    let (filter, invalid_level) = match EnvFilter::try_new(&config.log_level) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    let installed = if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok()
    };

    if invalid_level {
        tracing::warn!(
            log_level = %config.log_level,
            "Invalid log level, falling back to info"
        );
    }

    installed
}

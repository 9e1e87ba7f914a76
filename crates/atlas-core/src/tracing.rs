//! Tracing subscriber setup.
//!
//! The filter comes from `ATLAS_LOG` when set, otherwise from the configured
//! level. Installing twice is harmless: the second call reports `false`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

/// Install the global fmt subscriber. Returns `true` if this call installed it.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .is_ok()
}

/// Install the subscriber with the level from `[logging]`.
pub fn init_from_config(config: &LoggingConfig) -> bool {
    init_tracing(&config.level)
}

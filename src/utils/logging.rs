//! Structured logging setup for tools embedding the codec.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! embedding tool installs a subscriber, for example through [`init_logging`].

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, letting `RUST_LOG` take precedence.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()))
}

/// Install a global fmt subscriber configured from `config`.
///
/// # Errors
/// Returns `CodecError::ConfigError` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| CodecError::ConfigError(format!("Failed to install subscriber: {e}")))?;
    tracing::info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}

//! # Configuration Management
//!
//! Centralized configuration for the codec.
//!
//! The codec itself needs very little: the host byte order captured by the
//! float readers, and how the metadata decoder treats `Long` records. Logging
//! settings are carried here for the tool that embeds the codec.
//!
//! ## Configuration Sources
//! - TOML strings or files via `from_toml()` / `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`

use crate::core::{Endianness, PrimitiveCodec};
use crate::error::{constants, CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::Level;

/// Byte that ends every metadata stream
pub const METADATA_TERMINATOR: u8 = 0x7F;

/// Upper bound accepted for `max_entries`
pub const MAX_ENTRIES_LIMIT: usize = 65_536;

/// How a `Long` metadata record is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongLayout {
    /// Decode all 8 little-endian bytes.
    #[default]
    Full,
    /// Decode only the first 4 bytes as the upper half of the value, then
    /// skip 8. Matches the historical packet analyzer output.
    Legacy,
}

impl FromStr for LongLayout {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(LongLayout::Full),
            "legacy" => Ok(LongLayout::Legacy),
            other => Err(CodecError::ConfigError(format!(
                "{}: {other}",
                constants::ERR_UNKNOWN_LONG_LAYOUT
            ))),
        }
    }
}

/// Main codec configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Host byte order used by float/double readers (probed when omitted)
    #[serde(default)]
    pub host: Endianness,

    /// Metadata decoder configuration
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(layout) = std::env::var("PE_CODEC_LONG_LAYOUT") {
            config.metadata.long_layout = layout.parse()?;
        }

        if let Ok(max) = std::env::var("PE_CODEC_MAX_ENTRIES") {
            config.metadata.max_entries = Some(max.parse::<usize>().map_err(|e| {
                CodecError::ConfigError(format!("Invalid PE_CODEC_MAX_ENTRIES '{max}': {e}"))
            })?);
        }

        if let Ok(level) = std::env::var("PE_CODEC_LOG_LEVEL") {
            config.logging.log_level = Level::from_str(&level)
                .map_err(|_| CodecError::ConfigError(format!("Invalid log level: {level}")))?;
        }

        let errors = config.metadata.validate();
        if !errors.is_empty() {
            return Err(CodecError::ConfigError(format!(
                "Invalid environment configuration:\n  - {}",
                errors.join("\n  - ")
            )));
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Float/double readers bound to the configured host order
    pub fn primitive_codec(&self) -> PrimitiveCodec {
        PrimitiveCodec::with_host(self.host)
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.host != Endianness::probe() {
            errors.push(format!(
                "Configured host byte order '{}' differs from the probed order '{}'",
                self.host,
                Endianness::probe()
            ));
        }

        errors.extend(self.metadata.validate());
        errors.extend(self.logging.validate());

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Metadata decoder configuration
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Decoding of `Long` records
    pub long_layout: LongLayout,

    /// Optional cap on records read before the stream is rejected.
    /// Unset, a stream is bounded only by its buffer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

impl MetadataConfig {
    /// Validate metadata configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        match self.max_entries {
            Some(0) => errors.push("Max entries must be greater than 0".to_string()),
            Some(max) if max > MAX_ENTRIES_LIMIT => errors.push(format!(
                "Max entries too large: {max} (maximum: {MAX_ENTRIES_LIMIT})"
            )),
            _ => {}
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("pe-packet-codec"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}

//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load the TOML hardware
//! configuration and turn each `[[hardware]]` entry into a Setup Descriptor.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hwio_common::config::{ConfigError, ConfigLoader, HardwareConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = HardwareConfig::load(Path::new("hardware.toml"))?;
//!     config.validate()?;
//!     println!("{} hardware entries", config.hardware.len());
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::hardware::DuplicatePolicy;
use crate::setup::SetupDescriptor;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Common configuration fields.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "hwio-node-01"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// How the dispatcher treats failed entries and name collisions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Stop processing at the first failed entry.
    #[serde(default)]
    pub abort_on_fault: bool,

    /// Policy for entries whose `name` is already in the table.
    #[serde(default)]
    pub duplicate_names: DuplicatePolicy,
}

/// One `[[hardware]]` entry: a type tag plus its setup fields.
///
/// Every key except `type` lands, in file order, in the Setup Descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareEntry {
    /// Type tag resolved in the registry (e.g. "onewire").
    #[serde(rename = "type")]
    pub tag: String,

    /// Driver setup fields, including `name`.
    #[serde(flatten)]
    pub setup: SetupDescriptor,
}

impl HardwareEntry {
    /// Build an entry from a tag and descriptor.
    pub fn new(tag: impl Into<String>, setup: SetupDescriptor) -> Self {
        Self {
            tag: tag.into(),
            setup,
        }
    }
}

/// The persisted hardware configuration file.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// service_name = "hwio-node-01"
///
/// [dispatcher]
/// abort_on_fault = false
/// duplicate_names = "reject"
///
/// [[hardware]]
/// type = "onewire"
/// name = "bus1"
/// pin = 4
///
/// [[hardware]]
/// type = "pwmoutput"
/// name = "ch1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareConfig {
    /// Common settings.
    pub shared: SharedConfig,

    /// Dispatcher behaviour.
    #[serde(default)]
    pub dispatcher: DispatcherConfig,

    /// Hardware entries in creation order.
    #[serde(default)]
    pub hardware: Vec<HardwareEntry>,
}

impl HardwareConfig {
    /// Parse from a TOML string.
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` on invalid TOML or schema mismatch.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate the configuration.
    ///
    /// Missing instance names are not checked here; factories report them
    /// per entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - the shared section is invalid
    /// - any entry has an empty `type`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        if let Some(idx) = self.hardware.iter().position(|entry| entry.tag.is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "hardware entry {idx} has an empty type"
            )));
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

//! Namespace configuration
//!
//! Configuration is a plain serde struct. It can be built in code or loaded
//! from JSON; missing fields take their defaults.

use ns_model::{PathSyntax, ZipRounding};
use serde::{Deserialize, Serialize};
use services_logger::{LogLevel, MemoryLog};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// JSON could not be produced
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// Separator cannot be used in paths
    #[error("Invalid separator: {0:?}")]
    InvalidSeparator(char),

    /// Main drive name cannot be used
    #[error("Invalid drive name: {0:?}")]
    InvalidDrive(String),
}

/// Namespace configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Path separator
    pub separator: char,
    /// Name of the drive created with the namespace
    pub main_drive: String,
    /// Rounding used by zip containers
    pub zip_rounding: ZipRounding,
    /// Minimum level kept in the namespace log
    pub log_level: LogLevel,
    /// Maximum number of log entries kept
    pub log_capacity: usize,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            separator: PathSyntax::DEFAULT_SEPARATOR,
            main_drive: "C:".to_string(),
            zip_rounding: ZipRounding::default(),
            log_level: LogLevel::Info,
            log_capacity: MemoryLog::DEFAULT_CAPACITY,
        }
    }
}

impl NamespaceConfig {
    /// Returns the path syntax for this configuration
    pub fn path_syntax(&self) -> PathSyntax {
        PathSyntax::new(self.separator)
    }

    /// Creates the log described by this configuration
    pub fn build_log(&self) -> MemoryLog {
        MemoryLog::new(self.log_level, self.log_capacity)
    }

    /// Checks that the separator and main drive are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sep = self.separator;
        if sep.is_alphanumeric() || sep.is_whitespace() || sep == '.' || sep == '\0' {
            return Err(ConfigError::InvalidSeparator(sep));
        }
        if !self.path_syntax().is_valid_name(&self.main_drive) {
            return Err(ConfigError::InvalidDrive(self.main_drive.clone()));
        }
        Ok(())
    }

    /// Parses and validates configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: NamespaceConfig =
            serde_json::from_slice(bytes).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes configuration to pretty JSON bytes
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        serde_json::to_vec_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Attempts to load configuration from bytes, falling back to defaults on error
pub fn load_config_safe(bytes: &[u8]) -> NamespaceConfig {
    NamespaceConfig::from_json(bytes).unwrap_or_default()
}

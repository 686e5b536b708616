//! Configuration management for conf2json
//!
//! Handles loading and validating optional configuration from YAML files.
//! Every field has a default, so an empty file (or no file) yields the
//! built-in behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Error parsing the configuration file
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rule converter settings
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Suffix renamer settings
    #[serde(default)]
    pub renamer: RenamerConfig,
}

/// Rule converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Prefix for every generated group label
    #[serde(default = "default_group_prefix")]
    pub group_prefix: String,

    /// Group used when no character name is known
    #[serde(default = "default_unknown_group")]
    pub unknown_group: String,

    /// Attempts allowed when resolving name collisions
    #[serde(default = "default_max_name_attempts")]
    pub max_name_attempts: usize,

    /// Literal pattern rewrites applied to every source pattern
    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,
}

/// A literal substring rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Text to search for
    pub from: String,
    /// Text to substitute
    pub to: String,
}

/// Suffix renamer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamerConfig {
    /// Suffix appended to the file stem
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// File extensions (with leading dot) eligible for renaming
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

// Default value functions
fn default_group_prefix() -> String {
    "GBF_mod".to_string()
}

fn default_unknown_group() -> String {
    "GBF_mod-Unknown".to_string()
}

fn default_max_name_attempts() -> usize {
    100
}

fn default_replacements() -> Vec<Replacement> {
    vec![Replacement {
        from: "prd-game-a[0-9]?-gbf".to_string(),
        to: "prd-game-a[0-9]?-granbluefantasy".to_string(),
    }]
}

fn default_suffix() -> String {
    "_ap".to_string()
}

fn default_extensions() -> Vec<String> {
    vec![".jpg".to_string(), ".jpeg".to_string(), ".png".to_string()]
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            group_prefix: default_group_prefix(),
            unknown_group: default_unknown_group(),
            max_name_attempts: default_max_name_attempts(),
            replacements: default_replacements(),
        }
    }
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        let config: Config = if contents.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the given file, or fall back to defaults when no path is provided
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.as_ref().display(), "Loading config file");
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        let converter = &self.converter;

        if converter.group_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "converter.group_prefix must not be empty".to_string(),
            ));
        }

        if converter.unknown_group.is_empty() {
            return Err(ConfigError::ValidationError(
                "converter.unknown_group must not be empty".to_string(),
            ));
        }

        if converter.max_name_attempts == 0 {
            return Err(ConfigError::ValidationError(
                "converter.max_name_attempts must be greater than 0".to_string(),
            ));
        }

        for replacement in &converter.replacements {
            if replacement.from.is_empty() {
                return Err(ConfigError::ValidationError(
                    "replacement 'from' must not be empty".to_string(),
                ));
            }
            // Normalization must stay idempotent
            if replacement.to.contains(&replacement.from) {
                return Err(ConfigError::ValidationError(format!(
                    "replacement target '{}' must not contain its source '{}'",
                    replacement.to, replacement.from
                )));
            }
        }

        if self.renamer.suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "renamer.suffix must not be empty".to_string(),
            ));
        }

        if let Some(ext) = self.renamer.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(ConfigError::ValidationError(format!(
                "renamer extension '{}' must start with '.'",
                ext
            )));
        }

        Ok(())
    }
}

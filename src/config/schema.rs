//! Configuration schema types
//!
//! This module defines the settings file structure for cfgtemplate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How optional entries are commented out in the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptionalStyle {
    /// `# <fragment> (optional)` with the fragment's own newlines left in
    /// place, so multi-line fragments are only commented on their first line
    #[default]
    Inherited,
    /// Every fragment line is commented; the first line carries the marker
    CommentEachLine,
}

impl fmt::Display for OptionalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionalStyle::Inherited => f.write_str("inherited"),
            OptionalStyle::CommentEachLine => f.write_str("comment_each_line"),
        }
    }
}

impl FromStr for OptionalStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inherited" => Ok(Self::Inherited),
            "comment_each_line" => Ok(Self::CommentEachLine),
            _ => Err(format!(
                "Invalid optional_style '{s}'. Expected 'inherited' or 'comment_each_line'"
            )),
        }
    }
}

/// Root settings structure
///
/// This maps to the TOML settings file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Document generation settings
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GeneratorConfig {
    /// Parses settings from a TOML string without environment handling
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or the settings are invalid
    pub fn from_toml_str(contents: &str) -> crate::domain::Result<Self> {
        let config: GeneratorConfig = toml::from_str(contents)?;
        config
            .validate()
            .map_err(crate::domain::TemplateError::Configuration)?;
        Ok(config)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.logging.validate()
    }
}

/// `[generator]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Comment style for optional entries
    #[serde(default)]
    pub optional_style: OptionalStyle,

    /// Emit optional entries at all
    #[serde(default = "default_true")]
    pub include_optional: bool,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            optional_style: OptionalStyle::default(),
            include_optional: true,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

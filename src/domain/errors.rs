//! Domain error types
//!
//! This module defines the error hierarchy for cfgtemplate.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main cfgtemplate error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A type descriptor matched no rendering rule
    ///
    /// This is fatal for the whole generation request: no partial document
    /// is returned.
    #[error("Unsupported type kind '{kind}' found for configurable: {variable}")]
    UnsupportedTypeKind {
        /// Name of the variable (or record field) being rendered
        variable: String,
        /// Human-readable name of the offending kind
        kind: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Resolver manifest errors
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl TemplateError {
    /// Creates an [`TemplateError::UnsupportedTypeKind`]
    pub fn unsupported(variable: impl Into<String>, kind: impl Into<String>) -> Self {
        TemplateError::UnsupportedTypeKind {
            variable: variable.into(),
            kind: kind.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        TemplateError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TemplateError {
    fn from(err: toml::de::Error) -> Self {
        TemplateError::Configuration(format!("TOML parse error: {err}"))
    }
}

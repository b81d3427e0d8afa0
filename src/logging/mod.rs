//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use cfgtemplate::logging::init_logging;
//! use cfgtemplate::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config.log_level, &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Generating Config.toml");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of one module section
///
/// # Example
///
/// ```no_run
/// use cfgtemplate::log_module_rendered;
/// use cfgtemplate::domain::ModuleKey;
///
/// let key = ModuleKey::new("myorg", "pkg").unwrap();
/// log_module_rendered!(&key, 3, 1);
/// ```
#[macro_export]
macro_rules! log_module_rendered {
    ($module:expr, $required:expr, $optional:expr) => {
        tracing::debug!(
            module = %$module,
            required = $required,
            optional = $optional,
            "Module section rendered"
        );
    };
}

/// Log a variable that produced no output because its shape has no template form
///
/// # Example
///
/// ```no_run
/// use cfgtemplate::log_entry_skipped;
/// use cfgtemplate::domain::ModuleKey;
///
/// let key = ModuleKey::new("myorg", "pkg").unwrap();
/// log_entry_skipped!(&key, "lookup", "map value is not a scalar");
/// ```
#[macro_export]
macro_rules! log_entry_skipped {
    ($module:expr, $variable:expr, $reason:expr) => {
        tracing::debug!(
            module = %$module,
            variable = $variable,
            reason = $reason,
            "Skipping configurable with no template representation"
        );
    };
}

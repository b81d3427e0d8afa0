//! Configuration management for cfgtemplate.
//!
//! Settings only tune how the document is written; they never change which
//! variables appear or what example values are used.
//!
//! # Example Configuration
//!
//! ```toml
//! [generator]
//! optional_style = "inherited"   # inherited | comment_each_line
//! include_optional = true
//!
//! [logging]
//! log_level = "info"
//! local_enabled = false
//! local_path = "${HOME}/.cache/cfgtemplate/logs"
//! local_rotation = "daily"       # daily | hourly | never
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted on load, and any key can be
//! overridden with `CFGTEMPLATE_<SECTION>_<KEY>`:
//!
//! ```bash
//! export CFGTEMPLATE_GENERATOR_OPTIONAL_STYLE=comment_each_line
//! export CFGTEMPLATE_LOGGING_LOG_LEVEL=debug
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cfgtemplate::config::load_config;
//! use cfgtemplate::core::{ConfigTomlGenerator, GeneratorOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("cfgtemplate.toml")?;
//! let generator = ConfigTomlGenerator::new(GeneratorOptions::from(&config.generator));
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{GeneratorConfig, GeneratorSection, LoggingConfig, OptionalStyle};

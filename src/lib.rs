// cfgtemplate - Config.toml template generator
// Copyright (c) 2025 cfgtemplate Contributors
// Licensed under the MIT License

//! # cfgtemplate - Example Config.toml generation
//!
//! cfgtemplate turns the configurable variables declared across the modules
//! of a package into a human-editable TOML document, pre-populated with
//! example values that match each variable's declared type. Operators use the
//! result as a starting point before filling in real values.
//!
//! ## Overview
//!
//! - **Classifies** each variable's type (scalars, xml/json, arrays, maps,
//!   records, tables, and constrained wrappers around any of them)
//! - **Renders** a fragment per variable with canonical example literals
//! - **Assembles** one section per module, required entries first and
//!   optional entries commented out
//!
//! ## Architecture
//!
//! - [`domain`] - Module keys, type descriptors, variables, errors
//! - [`core`] - Classification, rendering, grouping, and assembly
//! - [`manifest`] - JSON/TOML hand-off from the variable resolver
//! - [`config`] - Generator settings
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgtemplate::core::generate_config_toml;
//! use cfgtemplate::domain::{
//!     ConfigVariable, Field, ModuleGroup, ModuleKey, SimpleKind, TypeDescriptor,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = TypeDescriptor::table(TypeDescriptor::constrained(TypeDescriptor::record([
//!     Field::new("id", SimpleKind::Int.into()),
//! ])));
//!
//! let groups = vec![ModuleGroup::new(ModuleKey::new("org", "pkg")?)
//!     .with_variable(ConfigVariable::required("entries", entries))];
//!
//! let toml = generate_config_toml(&groups)?;
//! assert_eq!(toml, "[org.pkg]\n[[org.pkg.entries]]\nid = 12 # type: int\n\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`]. A variable whose type
//! cannot be classified aborts the whole document with
//! [`domain::TemplateError::UnsupportedTypeKind`]; shapes that are recognised
//! but have no template form (for example a map of records) render as nothing.
//!
//! ## Logging
//!
//! cfgtemplate uses structured logging with the `tracing` crate. Install a
//! subscriber with [`logging::init_logging`] or bring your own.

pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod manifest;

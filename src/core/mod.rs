//! Core template generation for cfgtemplate.
//!
//! # Modules
//!
//! - [`classify`] - Picks the rendering rule for a type, unwrapping constraints
//! - [`literal`] - Canonical example literals per scalar kind
//! - [`composite`] - Renders one variable's fragment (scalars, arrays, maps, records, tables)
//! - [`group`] - Groups variables by module and splits required from optional
//! - [`assemble`] - Builds the full document from module sections
//!
//! # Pipeline
//!
//! 1. **Partition**: split each module's variables into required and optional
//! 2. **Classify**: choose a rule for each variable's effective type
//! 3. **Render**: produce the fragment for that rule
//! 4. **Assemble**: header, required fragments, commented optional fragments, blank line
//!
//! Generation is a pure function of its input. An unrecognised type kind
//! anywhere aborts the whole document.
//!
//! # Example
//!
//! ```rust
//! use cfgtemplate::core::generate_config_toml;
//! use cfgtemplate::domain::{ConfigVariable, ModuleGroup, ModuleKey, SimpleKind};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let groups = vec![ModuleGroup::new(ModuleKey::new("myorg", "pkg")?)
//!     .with_variable(ConfigVariable::required("port", SimpleKind::Int))
//!     .with_variable(ConfigVariable::optional("debug", SimpleKind::Boolean))];
//!
//! let toml = generate_config_toml(&groups)?;
//! assert!(toml.starts_with("[myorg.pkg]\nport = 12 # type: int\n"));
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod classify;
pub mod composite;
pub mod group;
pub mod literal;

pub use assemble::{generate_config_toml, wrap_optional, ConfigTomlGenerator, GeneratorOptions};
pub use classify::{classify, effective_type, DocumentKind, RenderRule};
pub use composite::render_variable;
pub use group::{group_by_module, partition, PartitionedGroup};

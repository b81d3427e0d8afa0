//! Domain models and types for cfgtemplate.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Module identity** ([`ModuleKey`])
//! - **Type descriptors** ([`TypeDescriptor`], [`SimpleKind`], [`Field`])
//! - **Variables and groups** ([`ConfigVariable`], [`ModuleGroup`])
//! - **Error types** ([`TemplateError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use cfgtemplate::domain::{ConfigVariable, ModuleGroup, ModuleKey, SimpleKind, TypeDescriptor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let group = ModuleGroup::new(ModuleKey::new("myorg", "pkg")?)
//!     .with_variable(ConfigVariable::required("port", SimpleKind::Int))
//!     .with_variable(ConfigVariable::optional(
//!         "tags",
//!         TypeDescriptor::array(SimpleKind::String.into()),
//!     ));
//! assert_eq!(group.variables.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod types;
pub mod variable;

// Re-export commonly used types for convenience
pub use errors::TemplateError;
pub use ids::ModuleKey;
pub use result::Result;
pub use types::{Field, SimpleKind, TypeDescriptor};
pub use variable::{ConfigVariable, ModuleGroup};

//! Resolver manifests
//!
//! The resolver that walks a package's configurable variables hands its
//! result over as a JSON or TOML manifest. This module parses that manifest
//! into the ordered [`ModuleGroup`] list the generator consumes.
//!
//! # Example
//!
//! ```rust
//! use cfgtemplate::manifest::parse_json;
//! use cfgtemplate::core::generate_config_toml;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let groups = parse_json(r#"{
//!   "modules": [{
//!     "org": "myorg", "package": "pkg",
//!     "variables": [{ "name": "port", "type": { "kind": "int" } }]
//!   }]
//! }"#)?;
//!
//! assert_eq!(generate_config_toml(&groups)?, "[myorg.pkg]\nport = 12 # type: int\n\n");
//! # Ok(())
//! # }
//! ```

pub mod model;

pub use model::{FieldSpec, Manifest, ModuleSpec, TypeSpec, VariableSpec};

use crate::core::group_by_module;
use crate::domain::{ConfigVariable, ModuleGroup, ModuleKey, Result, TemplateError};
use std::fs;
use std::path::Path;

/// Parses a JSON manifest
///
/// # Errors
///
/// Returns [`TemplateError::Manifest`] if the document is malformed.
pub fn parse_json(contents: &str) -> Result<Vec<ModuleGroup>> {
    let manifest: Manifest = serde_json::from_str(contents)
        .map_err(|e| TemplateError::Manifest(format!("Failed to parse JSON manifest: {e}")))?;
    into_groups(manifest)
}

/// Parses a TOML manifest
///
/// # Errors
///
/// Returns [`TemplateError::Manifest`] if the document is malformed.
pub fn parse_toml(contents: &str) -> Result<Vec<ModuleGroup>> {
    let manifest: Manifest = toml::from_str(contents)
        .map_err(|e| TemplateError::Manifest(format!("Failed to parse TOML manifest: {e}")))?;
    into_groups(manifest)
}

/// Loads a manifest from disk, choosing the format by file extension
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension,
/// or is malformed.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<ModuleGroup>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let contents = fs::read_to_string(path).map_err(|e| {
        TemplateError::Io(format!("Failed to read manifest {}: {}", path.display(), e))
    })?;

    let groups = match extension.as_deref() {
        Some("json") => parse_json(&contents)?,
        Some("toml") => parse_toml(&contents)?,
        _ => {
            return Err(TemplateError::Manifest(format!(
                "Unsupported manifest format: {}. Expected a .json or .toml file",
                path.display()
            )))
        }
    };

    tracing::debug!(
        path = %path.display(),
        modules = groups.len(),
        variables = groups.iter().map(|g| g.variables.len()).sum::<usize>(),
        "Manifest loaded"
    );

    Ok(groups)
}

/// Converts a manifest into module groups
///
/// Repeated entries for the same module are merged into the first one, so
/// module order is first-seen order and variable order is file order.
/// Modules declared without variables still get a (header-only) group.
pub fn into_groups(manifest: Manifest) -> Result<Vec<ModuleGroup>> {
    let mut keys: Vec<ModuleKey> = Vec::with_capacity(manifest.modules.len());
    let mut pairs: Vec<(ModuleKey, ConfigVariable)> = Vec::new();
    for spec in manifest.modules {
        let key = spec.key()?;
        if !keys.contains(&key) {
            keys.push(key.clone());
        }
        pairs.extend(
            spec.variables
                .into_iter()
                .map(|variable| (key.clone(), variable.into())),
        );
    }

    let mut grouped = group_by_module(pairs);
    Ok(keys
        .into_iter()
        .map(|key| match grouped.iter().position(|g| g.key == key) {
            Some(index) => grouped.swap_remove(index),
            None => ModuleGroup::new(key),
        })
        .collect())
}

//! Module identifier types
//!
//! This module provides the [`ModuleKey`] newtype used to group configurable
//! variables by their declaring module.

use std::fmt;
use std::str::FromStr;

/// Identifies the module that declares a set of configurable variables
///
/// A key is made of an organization name, a package name, and an optional
/// module name. The canonical dotted form is `org.package` when the module
/// is absent or equal to the package name, and `org.package.module` otherwise.
///
/// # Examples
///
/// ```
/// use cfgtemplate::domain::ids::ModuleKey;
///
/// let root = ModuleKey::new("myorg", "pkg").unwrap();
/// assert_eq!(root.to_string(), "myorg.pkg");
///
/// let sub = ModuleKey::with_module("myorg", "pkg", "db").unwrap();
/// assert_eq!(sub.to_string(), "myorg.pkg.db");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey {
    org: String,
    package: String,
    module: Option<String>,
}

impl ModuleKey {
    /// Creates a key for the default (root) module of a package
    ///
    /// # Returns
    ///
    /// Returns `Err` if either name is empty
    pub fn new(org: impl Into<String>, package: impl Into<String>) -> Result<Self, String> {
        let org = org.into();
        let package = package.into();
        if org.trim().is_empty() {
            return Err("Organization name cannot be empty".to_string());
        }
        if package.trim().is_empty() {
            return Err("Package name cannot be empty".to_string());
        }
        Ok(Self {
            org,
            package,
            module: None,
        })
    }

    /// Creates a key for a named module of a package
    ///
    /// A module name equal to the package name denotes the root module and
    /// yields the same key as [`ModuleKey::new`].
    pub fn with_module(
        org: impl Into<String>,
        package: impl Into<String>,
        module: impl Into<String>,
    ) -> Result<Self, String> {
        let mut key = Self::new(org, package)?;
        let module = module.into();
        if module.trim().is_empty() {
            return Err("Module name cannot be empty".to_string());
        }
        if module != key.package {
            key.module = Some(module);
        }
        Ok(key)
    }

    /// Returns the organization name
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the package name
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns the module name, falling back to the package name for the root module
    pub fn module(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.package)
    }

    /// Returns true when this key denotes the package's root module
    pub fn is_root_module(&self) -> bool {
        self.module.is_none()
    }

    /// Returns the canonical dotted module path
    pub fn canonical(&self) -> String {
        if self.is_root_module() {
            format!("{}.{}", self.org, self.package)
        } else {
            format!("{}.{}.{}", self.org, self.package, self.module())
        }
    }

    /// Returns the dotted name used for tables and repeatable groups of `variable`
    pub fn qualify(&self, variable: &str) -> String {
        format!("{}.{}", self.canonical(), variable)
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl FromStr for ModuleKey {
    type Err = String;

    /// Parses `org.package` or `org.package.module`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [org, package] => Self::new(*org, *package),
            [org, package, module] => Self::with_module(*org, *package, *module),
            _ => Err(format!(
                "Invalid module key '{s}'. Expected 'org.package' or 'org.package.module'"
            )),
        }
    }
}

//! Configurable variable and module group models

use super::ids::ModuleKey;
use super::types::TypeDescriptor;

/// A named, externally overridable value declared by a module
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigVariable {
    /// Variable name as declared in source
    pub name: String,

    /// Fully resolved declared type
    pub ty: TypeDescriptor,

    /// Whether the variable must be supplied by the operator
    pub required: bool,
}

impl ConfigVariable {
    /// Creates a required variable
    pub fn required(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: true,
        }
    }

    /// Creates an optional variable (one with a default value in source)
    pub fn optional(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
        }
    }
}

/// The variables declared by one module, in resolver order
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleGroup {
    /// Declaring module
    pub key: ModuleKey,

    /// Variables in the order the resolver produced them
    pub variables: Vec<ConfigVariable>,
}

impl ModuleGroup {
    /// Creates an empty group for `key`
    pub fn new(key: ModuleKey) -> Self {
        Self {
            key,
            variables: Vec::new(),
        }
    }

    /// Appends a variable, keeping resolver order
    pub fn with_variable(mut self, variable: ConfigVariable) -> Self {
        self.variables.push(variable);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SimpleKind;

    #[test]
    fn test_variable_constructors() {
        let port = ConfigVariable::required("port", SimpleKind::Int);
        assert!(port.required);
        assert_eq!(port.ty, TypeDescriptor::Simple(SimpleKind::Int));

        let debug = ConfigVariable::optional("debug", SimpleKind::Boolean);
        assert!(!debug.required);
    }

    #[test]
    fn test_group_builder_keeps_order() {
        let key = ModuleKey::new("org", "pkg").unwrap();
        let group = ModuleGroup::new(key)
            .with_variable(ConfigVariable::required("b", SimpleKind::Int))
            .with_variable(ConfigVariable::required("a", SimpleKind::Int));

        let names: Vec<&str> = group.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}

//! Serialized manifest model
//!
//! These types mirror the JSON/TOML hand-off written by the resolver and are
//! converted into domain types before generation.

use crate::domain::{ConfigVariable, Field, ModuleKey, SimpleKind, TemplateError, TypeDescriptor};
use serde::{Deserialize, Serialize};

/// Root of a resolver manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Modules in resolver order
    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
}

/// One module entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Organization name
    pub org: String,
    /// Package name
    pub package: String,
    /// Module name; omitted or equal to `package` for the root module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Variables in declaration order
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
}

impl ModuleSpec {
    /// Builds the domain key for this module
    pub fn key(&self) -> Result<ModuleKey, TemplateError> {
        let key = match &self.module {
            Some(module) => ModuleKey::with_module(&self.org, &self.package, module),
            None => ModuleKey::new(&self.org, &self.package),
        };
        key.map_err(TemplateError::Manifest)
    }
}

/// One configurable variable entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Variable name
    pub name: String,
    /// Declared type
    #[serde(rename = "type")]
    pub ty: TypeSpec,
    /// Whether the variable has no default in source
    #[serde(default = "default_true")]
    pub required: bool,
}

impl From<VariableSpec> for ConfigVariable {
    fn from(spec: VariableSpec) -> Self {
        ConfigVariable {
            name: spec.name,
            ty: spec.ty.into(),
            required: spec.required,
        }
    }
}

/// Serialized record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,
    /// Field type
    #[serde(rename = "type")]
    pub ty: TypeSpec,
}

/// Serialized type descriptor, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeSpec {
    /// `true` / `false`
    Boolean,
    /// Unsigned 8-bit integer
    Byte,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// Fixed-point decimal
    Decimal,
    /// UTF-8 string
    String,
    /// XML document
    Xml,
    /// JSON document
    Json,
    /// Ordered list of `element`
    Array { element: Box<TypeSpec> },
    /// String-keyed map of `value`
    Map { value: Box<TypeSpec> },
    /// Named fields in declaration order
    Record {
        #[serde(default)]
        fields: Vec<FieldSpec>,
    },
    /// Repeatable group of `constraint` rows
    Table { constraint: Box<TypeSpec> },
    /// Refinement wrapper around its `effective` type
    Constrained { effective: Box<TypeSpec> },
    /// A kind the resolver could not map, kept by name
    Other { name: String },
}

impl From<TypeSpec> for TypeDescriptor {
    fn from(spec: TypeSpec) -> Self {
        match spec {
            TypeSpec::Boolean => SimpleKind::Boolean.into(),
            TypeSpec::Byte => SimpleKind::Byte.into(),
            TypeSpec::Int => SimpleKind::Int.into(),
            TypeSpec::Float => SimpleKind::Float.into(),
            TypeSpec::Decimal => SimpleKind::Decimal.into(),
            TypeSpec::String => SimpleKind::String.into(),
            TypeSpec::Xml => TypeDescriptor::Xml,
            TypeSpec::Json => TypeDescriptor::Json,
            TypeSpec::Array { element } => TypeDescriptor::array((*element).into()),
            TypeSpec::Map { value } => TypeDescriptor::map((*value).into()),
            TypeSpec::Record { fields } => TypeDescriptor::record(
                fields
                    .into_iter()
                    .map(|f| Field::new(f.name, f.ty.into())),
            ),
            TypeSpec::Table { constraint } => TypeDescriptor::table((*constraint).into()),
            TypeSpec::Constrained { effective } => {
                TypeDescriptor::constrained((*effective).into())
            }
            TypeSpec::Other { name } => TypeDescriptor::Other(name),
        }
    }
}

fn default_true() -> bool {
    true
}

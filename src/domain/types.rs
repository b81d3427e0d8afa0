//! Type descriptors for configurable variables
//!
//! A [`TypeDescriptor`] is a closed description of the static type of a
//! configurable variable, as resolved by the package's compiler front end.

use std::fmt;

/// Leaf scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleKind {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `decimal`
    Decimal,
    /// `string`
    String,
}

impl SimpleKind {
    /// All scalar kinds, in declaration order
    pub const ALL: [SimpleKind; 6] = [
        SimpleKind::Boolean,
        SimpleKind::Byte,
        SimpleKind::Int,
        SimpleKind::Float,
        SimpleKind::Decimal,
        SimpleKind::String,
    ];

    /// Returns the type name used in generated `# type:` comments
    pub fn type_name(self) -> &'static str {
        match self {
            SimpleKind::Boolean => "boolean",
            SimpleKind::Byte => "byte",
            SimpleKind::Int => "int",
            SimpleKind::Float => "float",
            SimpleKind::Decimal => "decimal",
            SimpleKind::String => "string",
        }
    }
}

impl fmt::Display for SimpleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A named record field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared field type
    pub ty: TypeDescriptor,
}

impl Field {
    /// Creates a new field
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Static type of a configurable variable
///
/// `Constrained` wrappers carry no rendering of their own and are always
/// stripped before a rendering decision is made.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// Scalar leaf type
    Simple(SimpleKind),
    /// XML document
    Xml,
    /// JSON document
    Json,
    /// Array of `element`
    Array(Box<TypeDescriptor>),
    /// String-keyed map of `value`
    Map(Box<TypeDescriptor>),
    /// Record with ordered fields
    Record(Vec<Field>),
    /// Table of entries constrained by a (record) type
    Table(Box<TypeDescriptor>),
    /// Read-only or refined wrapper around an effective type
    Constrained(Box<TypeDescriptor>),
    /// A type the resolver could not map to any known shape
    Other(String),
}

impl TypeDescriptor {
    /// Creates `Array(element)`
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    /// Creates `Map(value)`
    pub fn map(value: TypeDescriptor) -> Self {
        TypeDescriptor::Map(Box::new(value))
    }

    /// Creates `Record(fields)` from an iterator of fields
    pub fn record(fields: impl IntoIterator<Item = Field>) -> Self {
        TypeDescriptor::Record(fields.into_iter().collect())
    }

    /// Creates `Table(constraint)`
    pub fn table(constraint: TypeDescriptor) -> Self {
        TypeDescriptor::Table(Box::new(constraint))
    }

    /// Creates `Constrained(effective)`
    pub fn constrained(effective: TypeDescriptor) -> Self {
        TypeDescriptor::Constrained(Box::new(effective))
    }

    /// Returns a short name for the outermost shape, used in error messages
    pub fn kind_name(&self) -> &str {
        match self {
            TypeDescriptor::Simple(kind) => kind.type_name(),
            TypeDescriptor::Xml => "xml",
            TypeDescriptor::Json => "json",
            TypeDescriptor::Array(_) => "array",
            TypeDescriptor::Map(_) => "map",
            TypeDescriptor::Record(_) => "record",
            TypeDescriptor::Table(_) => "table",
            TypeDescriptor::Constrained(_) => "constrained",
            TypeDescriptor::Other(name) => name,
        }
    }
}

impl From<SimpleKind> for TypeDescriptor {
    fn from(kind: SimpleKind) -> Self {
        TypeDescriptor::Simple(kind)
    }
}

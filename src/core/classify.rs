//! Type classification
//!
//! Maps a [`TypeDescriptor`] to the [`RenderRule`] that renders it.
//! `Constrained` wrappers are stripped, to any depth, before a rule is chosen.

use crate::domain::{Field, Result, SimpleKind, TemplateError, TypeDescriptor};

/// Leaf document kinds rendered with a fixed literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// XML document
    Xml,
    /// JSON document
    Json,
}

/// Rendering rule chosen for a variable's type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderRule<'a> {
    /// `name = <literal> # type: <kind>`
    Primitive(SimpleKind),
    /// Fixed xml/json literal
    Document(DocumentKind),
    /// `name = [..]` for arrays of scalars
    InlineArray(SimpleKind),
    /// `[module.name]` followed by two example keys
    InlineMap(SimpleKind),
    /// `[module.name]` followed by the record's scalar fields
    Record(&'a [Field]),
    /// `[[module.name]]` followed by the record's scalar fields
    TableArray(&'a [Field]),
    /// A recognised shape with no template representation; renders as nothing
    Unsupported(&'static str),
}

/// Strips every `Constrained` wrapper and returns the effective type
pub fn effective_type(ty: &TypeDescriptor) -> &TypeDescriptor {
    let mut current = ty;
    while let TypeDescriptor::Constrained(inner) = current {
        current = inner;
    }
    current
}

/// Chooses the rendering rule for the variable `name` of type `ty`
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedTypeKind`] when the type itself or a
/// table constraint resolves to a kind no rule covers. Array elements and map
/// values of such kinds render as nothing instead.
pub fn classify<'a>(name: &str, ty: &'a TypeDescriptor) -> Result<RenderRule<'a>> {
    let rule = match ty {
        TypeDescriptor::Constrained(inner) => return classify(name, inner),
        TypeDescriptor::Simple(kind) => RenderRule::Primitive(*kind),
        TypeDescriptor::Xml => RenderRule::Document(DocumentKind::Xml),
        TypeDescriptor::Json => RenderRule::Document(DocumentKind::Json),
        TypeDescriptor::Array(element) => match effective_type(element) {
            TypeDescriptor::Record(fields) => RenderRule::TableArray(fields),
            TypeDescriptor::Simple(kind) => RenderRule::InlineArray(*kind),
            _ => RenderRule::Unsupported("array element has no inline representation"),
        },
        TypeDescriptor::Map(value) => match effective_type(value) {
            TypeDescriptor::Simple(kind) => RenderRule::InlineMap(*kind),
            _ => RenderRule::Unsupported("map value is not a scalar"),
        },
        TypeDescriptor::Record(fields) => RenderRule::Record(fields),
        TypeDescriptor::Table(constraint) => match effective_type(constraint) {
            TypeDescriptor::Record(fields) => RenderRule::TableArray(fields),
            other => {
                return Err(TemplateError::unsupported(
                    name,
                    format!("table<{}>", other.kind_name()),
                ))
            }
        },
        TypeDescriptor::Other(kind) => return Err(TemplateError::unsupported(name, kind)),
    };
    Ok(rule)
}

//! Fragment rendering for a single configurable variable
//!
//! Scalars and documents render as one `key = value` line. Composites render
//! as inline arrays, `[table]` sections (records and scalar-valued maps), or
//! `[[array-of-tables]]` headers for repeatable record groups. A table built
//! from `Table` and one built from an array of records render the same way.

use super::classify::{classify, effective_type, RenderRule};
use super::literal::{array_literal, document_entry, map_values, primitive_entry};
use crate::domain::{
    ConfigVariable, Field, ModuleKey, Result, SimpleKind, TemplateError, TypeDescriptor,
};
use crate::log_entry_skipped;

/// Renders the template fragment for `variable` declared in `module`
///
/// Returns an empty string for shapes that have no template representation.
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedTypeKind`] if the variable's type, or
/// any part of it the renderer inspects, is of an unrecognised kind.
pub fn render_variable(module: &ModuleKey, variable: &ConfigVariable) -> Result<String> {
    let name = variable.name.as_str();
    let fragment = match classify(name, &variable.ty)? {
        RenderRule::Primitive(kind) => primitive_entry(name, kind),
        RenderRule::Document(kind) => document_entry(name, kind),
        RenderRule::InlineArray(kind) => inline_array_entry(name, kind),
        RenderRule::InlineMap(kind) => inline_map_entry(&module.qualify(name), kind),
        RenderRule::Record(fields) => {
            format!("[{}]\n{}", module.qualify(name), record_fields(name, fields)?)
        }
        RenderRule::TableArray(fields) => {
            format!("[[{}]]\n{}", module.qualify(name), record_fields(name, fields)?)
        }
        RenderRule::Unsupported(reason) => {
            log_entry_skipped!(module, name, reason);
            String::new()
        }
    };
    Ok(fragment)
}

/// Renders `<name> = [..] # type: <kind>[]`
///
/// String arrays carry no type comment.
fn inline_array_entry(name: &str, kind: SimpleKind) -> String {
    match kind {
        SimpleKind::String => format!("{name} = {}\n", array_literal(kind)),
        _ => format!("{name} = {} # type: {kind}[]\n", array_literal(kind)),
    }
}

fn inline_map_entry(qualified: &str, kind: SimpleKind) -> String {
    let (first, second) = map_values(kind);
    format!("[{qualified}] # type: {kind}\nkey1 = {first}\nkey2 = {second}\n")
}

/// Renders the scalar surface of a record, in field declaration order
///
/// Composite and document fields are skipped; nested records are never
/// descended into.
fn record_fields(owner: &str, fields: &[Field]) -> Result<String> {
    let mut out = String::new();
    for field in fields {
        match effective_type(&field.ty) {
            TypeDescriptor::Simple(kind) => out.push_str(&primitive_entry(&field.name, *kind)),
            TypeDescriptor::Other(kind) => {
                return Err(TemplateError::unsupported(
                    format!("{owner}.{}", field.name),
                    kind,
                ))
            }
            other => {
                tracing::trace!(
                    variable = owner,
                    field = %field.name,
                    kind = other.kind_name(),
                    "Skipping non-scalar record field"
                );
            }
        }
    }
    Ok(out)
}

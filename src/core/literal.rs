//! Canonical example literals
//!
//! Every scalar kind has one fixed example value, independent of any real
//! runtime value. The literals below are part of the output contract.

use super::classify::DocumentKind;
use crate::domain::SimpleKind;

/// Returns the example literal for a scalar kind
pub fn scalar_literal(kind: SimpleKind) -> &'static str {
    match kind {
        SimpleKind::Boolean => "true",
        SimpleKind::Byte => "10",
        SimpleKind::Int => "12",
        SimpleKind::Float => "1.23",
        SimpleKind::Decimal => "12345.67",
        SimpleKind::String => "\"str1\"",
    }
}

/// Returns the example inline array for an array of `kind`
pub fn array_literal(kind: SimpleKind) -> &'static str {
    match kind {
        SimpleKind::Boolean => "[false, false, true]",
        SimpleKind::Byte => "[1, 2]",
        SimpleKind::Int => "[12, 34]",
        SimpleKind::Float => "[12.3, 45.6, 78.9]",
        SimpleKind::Decimal => "[12300.4, 56700.8, 89100.2]",
        SimpleKind::String => "[\"str1\", \"str2\", \"str3\"]",
    }
}

/// Returns the values for the `key1` / `key2` example map entries
pub fn map_values(kind: SimpleKind) -> (&'static str, &'static str) {
    match kind {
        SimpleKind::Boolean => ("true", "true"),
        SimpleKind::Byte => ("1", "80"),
        SimpleKind::Int => ("1", "9090"),
        SimpleKind::Float => ("100.00", "1900.00"),
        SimpleKind::Decimal => ("25000.00", "30000.00"),
        SimpleKind::String => ("\"value1\"", "\"value2\""),
    }
}

/// Renders `<name> = <literal> # type: <kind>\n`
pub fn primitive_entry(name: &str, kind: SimpleKind) -> String {
    format!("{name} = {} # type: {kind}\n", scalar_literal(kind))
}

/// Renders the fixed xml/json entry
pub fn document_entry(name: &str, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Xml => format!("{name} = \"<book>The Lost World</book>\" # type: xml\n"),
        DocumentKind::Json => format!("{name} = {{name = \"Jane\"}} # type: json\n"),
    }
}

// crates/stix-forge-core/src/core/canonical.rs
// ============================================================================
// Module: STIX Forge Canonical Serialization
// Description: Deterministic JSON rendering in schema-declared key order.
// Purpose: Produce byte-stable compact and pretty wire forms for frozen objects.
// Dependencies: crate::core::{object, value}, serde_json
// ============================================================================

//! ## Overview
//! The canonical writer walks the frozen property vector directly, so keys
//! appear exactly in schema declaration order rather than alphabetical or
//! insertion order. The compact form is the byte-stable wire rendering; the
//! pretty form indents with four spaces and is what [`std::fmt::Display`]
//! on a frozen object produces.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Number;
use serde_json::Value;

use crate::core::object::StixObject;
use crate::core::value::PropertyValue;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Renders the compact canonical JSON form of a frozen object.
///
/// Output is byte-for-byte deterministic for equal objects: schema-declared
/// key order, canonical timestamp strings, absent properties omitted.
#[must_use]
pub fn to_canonical_json(object: &StixObject) -> String {
    let mut out = String::new();
    write_properties(&mut out, object.properties(), None);
    out
}

/// Renders the pretty canonical JSON form with four-space indentation.
#[must_use]
pub fn to_canonical_json_pretty(object: &StixObject) -> String {
    let mut out = String::new();
    write_properties(&mut out, object.properties(), Some(0));
    out
}

// ============================================================================
// SECTION: Writer
// ============================================================================

/// Writes a property map, compact when `indent` is `None`.
fn write_properties(out: &mut String, properties: &[(String, PropertyValue)], indent: Option<usize>) {
    if properties.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (index, (name, value)) in properties.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_entry_prefix(out, indent);
        write_json_string(out, name);
        out.push(':');
        if indent.is_some() {
            out.push(' ');
        }
        write_value(out, value, indent.map(|level| level + 1));
    }
    push_close_prefix(out, indent);
    out.push('}');
}

/// Writes a list value, compact when `indent` is `None`.
fn write_list(out: &mut String, items: &[PropertyValue], indent: Option<usize>) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_entry_prefix(out, indent);
        write_value(out, item, indent.map(|level| level + 1));
    }
    push_close_prefix(out, indent);
    out.push(']');
}

/// Writes one value in canonical form.
fn write_value(out: &mut String, value: &PropertyValue, indent: Option<usize>) {
    match value {
        PropertyValue::Null => out.push_str("null"),
        PropertyValue::Boolean(flag) => out.push_str(if *flag { "true" } else { "false" }),
        PropertyValue::Integer(number) => out.push_str(&number.to_string()),
        PropertyValue::Float(number) => write_float(out, *number),
        PropertyValue::String(text) => write_json_string(out, text),
        PropertyValue::Timestamp(instant) => write_json_string(out, &instant.to_string()),
        PropertyValue::Identifier(id) => write_json_string(out, id.as_str()),
        PropertyValue::List(items) => write_list(out, items, indent),
        PropertyValue::Dictionary(pairs) => write_properties(out, pairs, indent),
        PropertyValue::Object(object) => write_properties(out, object.properties(), indent),
    }
}

/// Writes a float using the JSON data-model rendering.
fn write_float(out: &mut String, number: f64) {
    match Number::from_f64(number) {
        Some(rendered) => out.push_str(&Value::Number(rendered).to_string()),
        None => out.push_str("null"),
    }
}

/// Writes a JSON string literal with escaping.
fn write_json_string(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            control if (control as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", control as u32));
            }
            other => out.push(other),
        }
    }
    out.push('"');
}

/// Starts a container entry: newline plus one extra indent level in pretty
/// mode, nothing in compact mode.
fn push_entry_prefix(out: &mut String, indent: Option<usize>) {
    if let Some(level) = indent {
        out.push('\n');
        push_indent(out, level + 1);
    }
}

/// Starts a container close: newline plus the container's own indent level
/// in pretty mode, nothing in compact mode.
fn push_close_prefix(out: &mut String, indent: Option<usize>) {
    if let Some(level) = indent {
        out.push('\n');
        push_indent(out, level);
    }
}

/// Pushes four spaces per indent level.
fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("    ");
    }
}

// crates/stix-forge-core/src/runtime/parse.rs
// ============================================================================
// Module: STIX Forge Wire Decoding
// Description: JSON decoding of wire objects through the construction engine.
// Purpose: Route inbound documents through the same validation path as construction.
// Dependencies: crate::core, crate::objects, crate::runtime::builder, serde_json
// ============================================================================

//! ## Overview
//! Parsing decodes a JSON document, resolves the embedded `type` property
//! against the builtin schema registry, and replays every member through
//! the construction engine. A parsed object therefore satisfies exactly
//! the same guarantees as a constructed one; parsing invents no second
//! validation path. Contained objects (bundle members) parse recursively
//! with the same options, minus any expected-type pin.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;

use crate::core::errors::ObjectError;
use crate::core::object::StixObject;
use crate::core::property::PropertyKind;
use crate::core::schema::ObjectSchema;
use crate::core::value::PropertyValue;
use crate::objects::builtin_schemas;
use crate::runtime::builder::ObjectBuilder;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Edition of the object vocabulary a parse resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecEdition {
    /// The 2.1 vocabulary.
    #[default]
    V21,
}

/// Knobs for a single parse.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// When set, the document's `type` must name this schema.
    pub expected_type: Option<String>,
    /// Vocabulary edition to resolve schemas from.
    pub edition: SpecEdition,
    /// Whether unrecognized property names are admitted as custom
    /// properties, in addition to any schema-level policy.
    pub allow_custom: bool,
}

/// Returns the schema registry for an edition.
fn registry_for(edition: SpecEdition) -> &'static [&'static ObjectSchema] {
    match edition {
        SpecEdition::V21 => builtin_schemas(),
    }
}

/// Finds a schema by wire type name within a registry.
fn find_schema(
    registry: &'static [&'static ObjectSchema],
    type_name: &str,
) -> Option<&'static ObjectSchema> {
    registry.iter().find(|schema| schema.type_name == type_name).copied()
}

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Parses a JSON document with default options.
///
/// # Errors
///
/// Returns [`ObjectError::Json`] when the text is not a JSON object,
/// [`ObjectError::UnknownType`] when no schema matches, and any
/// construction error the decoded members raise.
pub fn parse(text: &str) -> Result<StixObject, ObjectError> {
    parse_with(text, &ParseOptions::default())
}

/// Parses a JSON document with explicit options.
///
/// # Errors
///
/// Same contract as [`parse`].
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<StixObject, ObjectError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| ObjectError::Json(err.to_string()))?;
    parse_value_with(&value, options)
}

/// Parses an already-decoded JSON value with default options.
///
/// # Errors
///
/// Same contract as [`parse`].
pub fn parse_value(value: &Value) -> Result<StixObject, ObjectError> {
    parse_value_with(value, &ParseOptions::default())
}

/// Parses an already-decoded JSON value with explicit options.
///
/// # Errors
///
/// Same contract as [`parse`].
pub fn parse_value_with(value: &Value, options: &ParseOptions) -> Result<StixObject, ObjectError> {
    let Value::Object(members) = value else {
        return Err(ObjectError::Json("top-level value must be a json object".to_string()));
    };
    let Some(Value::String(type_name)) = members.get("type") else {
        return Err(ObjectError::Json("object is missing its 'type' property".to_string()));
    };
    let registry = registry_for(options.edition);
    if let Some(expected) = &options.expected_type {
        let Some(expected_schema) = find_schema(registry, expected) else {
            return Err(ObjectError::UnknownType(expected.clone()));
        };
        if type_name != expected_schema.type_name {
            return Err(ObjectError::InvalidValue {
                object_type: expected_schema.display_name.to_string(),
                property: "type".to_string(),
                reason: format!("must equal '{}'.", expected_schema.type_name),
            });
        }
    }
    let Some(schema) = find_schema(registry, type_name) else {
        return Err(ObjectError::UnknownType(type_name.clone()));
    };
    let mut builder = ObjectBuilder::new(schema)
        .allow_custom(schema.allow_custom || options.allow_custom);
    for (key, member) in members {
        builder = builder.set(key.clone(), decode_property(schema, key, member, options)?);
    }
    builder.build()
}

// ============================================================================
// SECTION: Member Decoding
// ============================================================================

/// Decodes one wire member, recursing into contained objects.
fn decode_property(
    schema: &ObjectSchema,
    key: &str,
    member: &Value,
    options: &ParseOptions,
) -> Result<PropertyValue, ObjectError> {
    if let Some(spec) = schema.property(key)
        && matches!(spec.kind, PropertyKind::Objects)
        && let Value::Array(items) = member
    {
        let nested = ParseOptions {
            expected_type: None,
            edition: options.edition,
            allow_custom: options.allow_custom,
        };
        let mut objects = Vec::with_capacity(items.len());
        for item in items {
            objects.push(PropertyValue::Object(parse_value_with(item, &nested)?));
        }
        return Ok(PropertyValue::List(objects));
    }
    Ok(PropertyValue::from_json_value(member))
}

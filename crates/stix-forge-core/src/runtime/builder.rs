// crates/stix-forge-core/src/runtime/builder.rs
// ============================================================================
// Module: STIX Forge Construction Engine
// Description: Schema-driven resolution, validation, and freezing of objects.
// Purpose: Turn positional and keyword inputs into frozen objects or classified errors.
// Dependencies: crate::core::{errors, identifier, object, property, schema, value}, serde_json
// ============================================================================

//! ## Overview
//! The builder resolves caller inputs against a schema in a fixed order:
//! null bindings are stripped, positional values bind onto the required
//! properties in declaration order, fixed values are injected or enforced,
//! defaults resolve from one shared instant, an identifier is generated when
//! absent, presence and value rules run in declaration order, unrecognized
//! names are rejected or admitted as custom properties, cross-field rules
//! run over the resolved set, and the result freezes. Construction either
//! fully succeeds or returns exactly one classified error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::core::errors::ObjectError;
use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::property::DefaultValue;
use crate::core::schema::CrossFieldRule;
use crate::core::schema::ObjectSchema;
use crate::core::timestamp::StixTimestamp;
use crate::core::value::PropertyValue;

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Schema-driven object builder.
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    /// Schema the inputs resolve against.
    schema: &'static ObjectSchema,
    /// Keyword bindings in first-appearance order.
    bindings: Vec<(String, PropertyValue)>,
    /// Positional values bound onto required properties at build time.
    positional: Vec<PropertyValue>,
    /// Whether unrecognized property names are admitted as custom
    /// properties.
    allow_custom: bool,
}

impl ObjectBuilder {
    /// Creates a builder for the given schema.
    #[must_use]
    pub fn new(schema: &'static ObjectSchema) -> Self {
        Self {
            schema,
            bindings: Vec::new(),
            positional: Vec::new(),
            allow_custom: schema.allow_custom,
        }
    }

    /// Binds a property by name; a later binding for the same name replaces
    /// the earlier one in place.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.bindings.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.bindings.push((name, value));
        }
        self
    }

    /// Supplies positional values, bound onto the schema's required
    /// properties in declaration order at build time.
    #[must_use]
    pub fn positional(mut self, values: Vec<PropertyValue>) -> Self {
        self.positional = values;
        self
    }

    /// Overrides the schema's custom-property policy for this construction.
    #[must_use]
    pub const fn allow_custom(mut self, allow: bool) -> Self {
        self.allow_custom = allow;
        self
    }

    /// Resolves, validates, and freezes the object.
    ///
    /// # Errors
    ///
    /// Returns the first [`ObjectError`] raised by the resolution order
    /// described in the module overview.
    pub fn build(self) -> Result<StixObject, ObjectError> {
        let schema = self.schema;
        let mut bound: Vec<(String, PropertyValue)> = Vec::new();
        for (name, value) in self.bindings {
            if value.is_null() {
                continue;
            }
            bound.push((name, value));
        }
        bind_positional(schema, self.positional, &mut bound)?;
        apply_fixed(schema, &mut bound)?;
        apply_defaults(schema, &mut bound);
        resolve_identifier(schema, &mut bound)?;
        ensure_required(schema, &bound)?;
        coerce_values(schema, &mut bound)?;
        ensure_recognized(schema, &mut bound, self.allow_custom)?;
        apply_cross_field(schema, &bound)?;
        freeze_object(schema, &bound)
    }
}

// ============================================================================
// SECTION: Resolution Steps
// ============================================================================

/// Binds positional values onto the required properties in declaration
/// order, rejecting overflow and name conflicts.
fn bind_positional(
    schema: &ObjectSchema,
    values: Vec<PropertyValue>,
    bound: &mut Vec<(String, PropertyValue)>,
) -> Result<(), ObjectError> {
    if values.is_empty() {
        return Ok(());
    }
    let required = schema.required_names();
    if values.len() > required.len() {
        return Err(ObjectError::PositionalOverflow {
            object_type: schema.display_name.to_string(),
            expected: required.len(),
            actual: values.len(),
        });
    }
    for (name, value) in required.iter().zip(values) {
        if lookup(bound, name).is_some() {
            return Err(ObjectError::InvalidValue {
                object_type: schema.display_name.to_string(),
                property: (*name).to_string(),
                reason: "must not be supplied both positionally and by name.".to_string(),
            });
        }
        bound.push(((*name).to_string(), value));
    }
    Ok(())
}

/// Injects omitted fixed values and enforces supplied ones.
fn apply_fixed(
    schema: &ObjectSchema,
    bound: &mut Vec<(String, PropertyValue)>,
) -> Result<(), ObjectError> {
    for spec in &schema.properties {
        let Some(fixed) = &spec.fixed else {
            continue;
        };
        match lookup(bound, spec.name) {
            None => bound.push((spec.name.to_string(), fixed.clone())),
            Some(value) => {
                if value != fixed {
                    return Err(ObjectError::InvalidValue {
                        object_type: schema.display_name.to_string(),
                        property: spec.name.to_string(),
                        reason: format!("must equal '{}'.", fixed_literal(fixed)),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Renders a fixed value for its violation reason.
fn fixed_literal(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(text) => text.clone(),
        PropertyValue::Boolean(flag) => flag.to_string(),
        PropertyValue::Integer(number) => number.to_string(),
        other => other.to_json_value().to_string(),
    }
}

/// Resolves defaults for omitted properties from one shared instant.
fn apply_defaults(schema: &ObjectSchema, bound: &mut Vec<(String, PropertyValue)>) {
    let mut shared_now: Option<StixTimestamp> = None;
    for spec in &schema.properties {
        let Some(default) = &spec.default else {
            continue;
        };
        if lookup(bound, spec.name).is_some() {
            continue;
        }
        let value = match default {
            DefaultValue::Now => {
                let instant = *shared_now.get_or_insert_with(StixTimestamp::now);
                PropertyValue::Timestamp(instant)
            }
            DefaultValue::Value(fallback) => fallback.clone(),
        };
        bound.push((spec.name.to_string(), value));
    }
}

/// Generates an identifier when none was supplied: deterministic when the
/// schema designates contributing properties and all are present, random
/// otherwise.
fn resolve_identifier(
    schema: &ObjectSchema,
    bound: &mut Vec<(String, PropertyValue)>,
) -> Result<(), ObjectError> {
    if lookup(bound, "id").is_some() {
        return Ok(());
    }
    let id = if has_all_contributing(schema, bound) {
        derive_deterministic_id(schema, bound)?
    } else {
        StixId::random(schema.type_name)
    };
    bound.push(("id".to_string(), PropertyValue::Identifier(id)));
    Ok(())
}

/// Returns whether deterministic derivation applies to this construction.
fn has_all_contributing(schema: &ObjectSchema, bound: &[(String, PropertyValue)]) -> bool {
    !schema.id_contributing.is_empty()
        && schema.id_contributing.iter().all(|name| lookup(bound, name).is_some())
}

/// Derives the deterministic identifier from the contributing values.
fn derive_deterministic_id(
    schema: &ObjectSchema,
    bound: &[(String, PropertyValue)],
) -> Result<StixId, ObjectError> {
    let mut contributing = Map::new();
    for name in schema.id_contributing {
        if let Some(value) = lookup(bound, name) {
            contributing.insert((*name).to_string(), value.to_json_value());
        }
    }
    StixId::deterministic(schema.type_name, &Value::Object(contributing))
        .map_err(|err| ObjectError::Canonicalization(err.to_string()))
}

/// Collects every missing required name in declaration order.
fn ensure_required(
    schema: &ObjectSchema,
    bound: &[(String, PropertyValue)],
) -> Result<(), ObjectError> {
    let missing: Vec<String> = schema
        .properties
        .iter()
        .filter(|spec| spec.required && lookup(bound, spec.name).is_none())
        .map(|spec| spec.name.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ObjectError::MissingProperties {
            object_type: schema.display_name.to_string(),
            properties: missing,
        })
    }
}

/// Validates and coerces present values in declaration order, stopping at
/// the first violation.
fn coerce_values(
    schema: &ObjectSchema,
    bound: &mut [(String, PropertyValue)],
) -> Result<(), ObjectError> {
    for spec in &schema.properties {
        let Some(position) = bound.iter().position(|(key, _)| key == spec.name) else {
            continue;
        };
        let Some(entry) = bound.get_mut(position) else {
            continue;
        };
        let current = entry.1.clone();
        let result = if spec.name == "id" {
            coerce_own_identifier(schema, current)
        } else {
            spec.kind.coerce(current)
        };
        match result {
            Ok(coerced) => entry.1 = coerced,
            Err(reason) => {
                return Err(ObjectError::InvalidValue {
                    object_type: schema.display_name.to_string(),
                    property: spec.name.to_string(),
                    reason,
                });
            }
        }
    }
    Ok(())
}

/// Validates the object's own identifier: prefix first, then wire form.
fn coerce_own_identifier(
    schema: &ObjectSchema,
    value: PropertyValue,
) -> Result<PropertyValue, String> {
    let prefix_reason = format!("must start with '{}--'.", schema.type_name);
    let text = match &value {
        PropertyValue::Identifier(id) => id.as_str().to_string(),
        PropertyValue::String(text) => text.clone(),
        _ => return Err(prefix_reason),
    };
    if !text.starts_with(&format!("{}--", schema.type_name)) {
        return Err(prefix_reason);
    }
    match value {
        PropertyValue::Identifier(_) => Ok(value),
        _ => StixId::parse(&text)
            .map(PropertyValue::Identifier)
            .map_err(|_| "must be a valid identifier.".to_string()),
    }
}

/// Rejects unrecognized names, or validates and normalizes them as custom
/// properties when permitted.
fn ensure_recognized(
    schema: &ObjectSchema,
    bound: &mut [(String, PropertyValue)],
    allow_custom: bool,
) -> Result<(), ObjectError> {
    let extras: Vec<String> = bound
        .iter()
        .filter(|(key, _)| schema.property(key).is_none())
        .map(|(key, _)| key.clone())
        .collect();
    if extras.is_empty() {
        return Ok(());
    }
    if !allow_custom {
        return Err(ObjectError::ExtraProperties {
            object_type: schema.display_name.to_string(),
            properties: extras,
        });
    }
    for name in &extras {
        if !is_valid_custom_name(name) {
            return Err(ObjectError::InvalidValue {
                object_type: schema.display_name.to_string(),
                property: name.clone(),
                reason: "must be a valid custom property name.".to_string(),
            });
        }
    }
    for (key, value) in bound.iter_mut() {
        if schema.property(key).is_some() {
            continue;
        }
        match normalize_custom_value(value.clone()) {
            Ok(normalized) => *value = normalized,
            Err(reason) => {
                return Err(ObjectError::InvalidValue {
                    object_type: schema.display_name.to_string(),
                    property: key.clone(),
                    reason,
                });
            }
        }
    }
    Ok(())
}

/// Checks the custom-property name rule: lowercase start, `a-z0-9_`
/// charset, 3 to 250 characters.
fn is_valid_custom_name(name: &str) -> bool {
    (3..=250).contains(&name.len())
        && name.chars().next().is_some_and(|ch| ch.is_ascii_lowercase())
        && name.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}

/// Normalizes a custom value: rejects non-finite floats and sorts nested
/// dictionaries so serialization stays deterministic.
fn normalize_custom_value(value: PropertyValue) -> Result<PropertyValue, String> {
    match value {
        PropertyValue::Float(number) if !number.is_finite() => {
            Err("must be a finite number.".to_string())
        }
        PropertyValue::List(items) => {
            let mut normalized = Vec::with_capacity(items.len());
            for item in items {
                normalized.push(normalize_custom_value(item)?);
            }
            Ok(PropertyValue::List(normalized))
        }
        PropertyValue::Dictionary(pairs) => {
            let mut normalized = Vec::with_capacity(pairs.len());
            for (key, entry) in pairs {
                normalized.push((key, normalize_custom_value(entry)?));
            }
            normalized.sort_by(|left, right| left.0.cmp(&right.0));
            Ok(PropertyValue::Dictionary(normalized))
        }
        other => Ok(other),
    }
}

/// Evaluates cross-field rules over the resolved value set.
fn apply_cross_field(
    schema: &ObjectSchema,
    bound: &[(String, PropertyValue)],
) -> Result<(), ObjectError> {
    for rule in &schema.cross_field_rules {
        let CrossFieldRule::TemporalOrder {
            earlier,
            later,
        } = rule;
        let earlier_value = lookup(bound, earlier).and_then(PropertyValue::as_timestamp);
        let later_value = lookup(bound, later).and_then(PropertyValue::as_timestamp);
        let (Some(start), Some(stop)) = (earlier_value, later_value) else {
            continue;
        };
        if stop <= start {
            let Some(id) = lookup(bound, "id").and_then(PropertyValue::as_identifier) else {
                continue;
            };
            return Err(ObjectError::TemporalOrdering {
                id: id.clone(),
                earlier: (*earlier).to_string(),
                later: (*later).to_string(),
            });
        }
    }
    Ok(())
}

/// Freezes the resolved set in canonical order: declaration order first,
/// then custom properties in first-appearance order.
fn freeze_object(
    schema: &ObjectSchema,
    bound: &[(String, PropertyValue)],
) -> Result<StixObject, ObjectError> {
    let mut ordered = Vec::with_capacity(bound.len());
    for spec in &schema.properties {
        if let Some(value) = lookup(bound, spec.name) {
            ordered.push((spec.name.to_string(), value.clone()));
        }
    }
    for (name, value) in bound {
        if schema.property(name).is_none() {
            ordered.push((name.clone(), value.clone()));
        }
    }
    let Some(id) = lookup(bound, "id").and_then(PropertyValue::as_identifier) else {
        return Err(ObjectError::InvalidValue {
            object_type: schema.display_name.to_string(),
            property: "id".to_string(),
            reason: "must be a valid identifier.".to_string(),
        });
    };
    Ok(StixObject::freeze(
        schema.type_name.to_string(),
        schema.display_name.to_string(),
        id.clone(),
        ordered,
    ))
}

/// Looks up a bound value by property name.
fn lookup<'bound>(
    bound: &'bound [(String, PropertyValue)],
    name: &str,
) -> Option<&'bound PropertyValue> {
    bound.iter().find(|(key, _)| key == name).map(|(_, value)| value)
}

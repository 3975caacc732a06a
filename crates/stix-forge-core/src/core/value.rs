// crates/stix-forge-core/src/core/value.rs
// ============================================================================
// Module: STIX Forge Property Values
// Description: Closed value model for validated object properties.
// Purpose: Carry typed property values with lossless JSON conversion.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Validated properties hold one of the variants below rather than raw JSON,
//! so the engine and serializer can rely on type identity after coercion.
//! Timestamps and identifiers render as their canonical strings on the wire;
//! dictionaries keep their pairs sorted by key so serialization stays
//! deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::timestamp::StixTimestamp;

// ============================================================================
// SECTION: Property Value
// ============================================================================

/// A validated property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Explicit null, representable inside nested custom payloads.
    ///
    /// # Invariants
    /// - A top-level property bound to `Null` is treated as absent by the
    ///   construction engine.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Signed integer value.
    Integer(i64),
    /// IEEE-754 floating point value.
    Float(f64),
    /// UTF-8 string value.
    String(String),
    /// Canonical timestamp value.
    Timestamp(StixTimestamp),
    /// Validated object identifier.
    Identifier(StixId),
    /// Ordered list of values.
    List(Vec<PropertyValue>),
    /// Key-value pairs sorted by key.
    Dictionary(Vec<(String, PropertyValue)>),
    /// Nested frozen object, used by bundle contents.
    Object(StixObject),
}

impl PropertyValue {
    /// Returns `true` for the explicit null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string payload when the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(text) = self { Some(text) } else { None }
    }

    /// Returns the boolean payload when the value is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(flag) = self { Some(*flag) } else { None }
    }

    /// Returns the integer payload when the value is an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        if let Self::Integer(number) = self { Some(*number) } else { None }
    }

    /// Returns the timestamp payload when the value is a timestamp.
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<StixTimestamp> {
        if let Self::Timestamp(instant) = self { Some(*instant) } else { None }
    }

    /// Returns the identifier payload when the value is an identifier.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&StixId> {
        if let Self::Identifier(id) = self { Some(id) } else { None }
    }

    /// Returns the element slice when the value is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        if let Self::List(items) = self { Some(items) } else { None }
    }

    /// Returns the nested object when the value is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&StixObject> {
        if let Self::Object(object) = self { Some(object) } else { None }
    }

    /// Converts the value into its JSON data-model form.
    ///
    /// Timestamps and identifiers become their canonical strings. Non-finite
    /// floats, which the engine rejects before freezing, degrade to JSON
    /// null.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Boolean(flag) => Value::Bool(*flag),
            Self::Integer(number) => Value::Number(Number::from(*number)),
            Self::Float(number) => Number::from_f64(*number).map_or(Value::Null, Value::Number),
            Self::String(text) => Value::String(text.clone()),
            Self::Timestamp(instant) => Value::String(instant.to_string()),
            Self::Identifier(id) => Value::String(id.as_str().to_string()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json_value).collect()),
            Self::Dictionary(pairs) => {
                let mut map = Map::new();
                for (key, value) in pairs {
                    map.insert(key.clone(), value.to_json_value());
                }
                Value::Object(map)
            }
            Self::Object(object) => object.to_json_value(),
        }
    }

    /// Converts a JSON value into the property-value model.
    ///
    /// Strings stay strings; timestamp and identifier coercion is
    /// schema-driven and happens later in the engine. Object keys are sorted
    /// into dictionary order.
    #[must_use]
    pub fn from_json_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Boolean(*flag),
            Value::Number(number) => number.as_i64().map_or_else(
                || number.as_f64().map_or(Self::Null, Self::Float),
                Self::Integer,
            ),
            Value::String(text) => Self::String(text.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from_json_value).collect()),
            Value::Object(map) => {
                let mut pairs: Vec<(String, Self)> = map
                    .iter()
                    .map(|(key, entry)| (key.clone(), Self::from_json_value(entry)))
                    .collect();
                pairs.sort_by(|left, right| left.0.cmp(&right.0));
                Self::Dictionary(pairs)
            }
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<StixTimestamp> for PropertyValue {
    fn from(value: StixTimestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<StixId> for PropertyValue {
    fn from(value: StixId) -> Self {
        Self::Identifier(value)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(value: Vec<PropertyValue>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value.into_iter().map(Self::String).collect())
    }
}

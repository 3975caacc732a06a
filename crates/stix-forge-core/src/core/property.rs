// crates/stix-forge-core/src/core/property.rs
// ============================================================================
// Module: STIX Forge Property Specifications
// Description: Declarative per-property rules for typed object schemas.
// Purpose: Define required/optional/fixed/default semantics and value coercion.
// Dependencies: crate::core::{identifier, timestamp, value}
// ============================================================================

//! ## Overview
//! A property specification declares one property's name, requiredness,
//! value kind, optional fixed value, and optional default supplier. The kind
//! doubles as the validation-and-coercion rule: string inputs for timestamp
//! and reference properties are coerced into their typed forms, and every
//! violation yields a deterministic reason string of the form
//! `must <constraint>.`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifier::StixId;
use crate::core::timestamp::StixTimestamp;
use crate::core::value::PropertyValue;

// ============================================================================
// SECTION: Property Specification
// ============================================================================

/// Declarative specification for one property of an object schema.
///
/// # Invariants
/// - A property is never both required and carrying a default; the
///   constructors below make that combination unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// Wire name of the property.
    pub name: &'static str,
    /// Whether the property must be present after defaults resolve.
    pub required: bool,
    /// Type rule and coercion applied to supplied values.
    pub kind: PropertyKind,
    /// Constant value injected when omitted and enforced when supplied.
    pub fixed: Option<PropertyValue>,
    /// Default supplier applied when the property is omitted.
    pub default: Option<DefaultValue>,
}

impl PropertySpec {
    /// Declares a required property.
    #[must_use]
    pub const fn required(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            required: true,
            kind,
            fixed: None,
            default: None,
        }
    }

    /// Declares an optional property.
    #[must_use]
    pub const fn optional(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            required: false,
            kind,
            fixed: None,
            default: None,
        }
    }

    /// Declares an optional property with a default supplier.
    #[must_use]
    pub const fn optional_with_default(
        name: &'static str,
        kind: PropertyKind,
        default: DefaultValue,
    ) -> Self {
        Self {
            name,
            required: false,
            kind,
            fixed: None,
            default: Some(default),
        }
    }

    /// Declares a fixed-value string property such as a type discriminator.
    #[must_use]
    pub fn fixed(name: &'static str, value: &str) -> Self {
        Self {
            name,
            required: false,
            kind: PropertyKind::String,
            fixed: Some(PropertyValue::String(value.to_string())),
            default: None,
        }
    }
}

/// Default supplier for an omitted property.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// The shared instant captured once per construction.
    Now,
    /// A fixed fallback value.
    Value(PropertyValue),
}

// ============================================================================
// SECTION: Property Kinds
// ============================================================================

/// Type rule and coercion for a property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    /// UTF-8 string.
    String,
    /// Canonical timestamp; RFC 3339 strings are coerced.
    Timestamp,
    /// The object's own identifier; prefix enforcement is schema-driven.
    Identifier,
    /// Reference to another object by identifier, optionally restricted to
    /// a set of target type names.
    Reference {
        /// Permitted target type names, or `None` for any type.
        targets: Option<&'static [&'static str]>,
    },
    /// Boolean flag.
    Boolean,
    /// Signed integer constrained to an inclusive range.
    Integer {
        /// Smallest permitted value.
        min: i64,
        /// Largest permitted value.
        max: i64,
    },
    /// Homogeneous list with element-wise validation.
    List(Box<PropertyKind>),
    /// List of nested frozen objects, used by bundle contents.
    Objects,
}

impl PropertyKind {
    /// Validates and coerces a supplied value.
    ///
    /// String inputs are promoted to timestamps or identifiers where the
    /// kind calls for them; list elements are coerced individually.
    ///
    /// # Errors
    ///
    /// Returns the human-readable reason string on violation.
    pub fn coerce(&self, value: PropertyValue) -> Result<PropertyValue, String> {
        match self {
            Self::String => match value {
                PropertyValue::String(_) => Ok(value),
                _ => Err("must be a string.".to_string()),
            },
            Self::Timestamp => coerce_timestamp(value),
            Self::Identifier => coerce_identifier(value),
            Self::Reference {
                targets,
            } => coerce_reference(value, *targets),
            Self::Boolean => match value {
                PropertyValue::Boolean(_) => Ok(value),
                _ => Err("must be a boolean.".to_string()),
            },
            Self::Integer {
                min,
                max,
            } => coerce_integer(value, *min, *max),
            Self::List(inner) => coerce_list(value, inner),
            Self::Objects => coerce_objects(value),
        }
    }

    /// Returns the plural noun used in list-element violation reasons.
    #[must_use]
    pub const fn plural_noun(&self) -> &'static str {
        match self {
            Self::String => "strings",
            Self::Timestamp => "timestamps",
            Self::Identifier | Self::Reference { .. } => "identifiers",
            Self::Boolean => "booleans",
            Self::Integer { .. } => "integers",
            Self::List(_) => "lists",
            Self::Objects => "objects",
        }
    }
}

// ============================================================================
// SECTION: Coercion Helpers
// ============================================================================

/// Coerces a timestamp value or RFC 3339 string.
fn coerce_timestamp(value: PropertyValue) -> Result<PropertyValue, String> {
    match value {
        PropertyValue::Timestamp(_) => Ok(value),
        PropertyValue::String(text) => StixTimestamp::parse(&text)
            .map(PropertyValue::Timestamp)
            .map_err(|_| "must be a valid RFC 3339 timestamp.".to_string()),
        _ => Err("must be a valid RFC 3339 timestamp.".to_string()),
    }
}

/// Coerces an identifier value or wire-form string.
fn coerce_identifier(value: PropertyValue) -> Result<PropertyValue, String> {
    match value {
        PropertyValue::Identifier(_) => Ok(value),
        PropertyValue::String(text) => StixId::parse(&text)
            .map(PropertyValue::Identifier)
            .map_err(|_| "must be a valid identifier.".to_string()),
        _ => Err("must be a valid identifier.".to_string()),
    }
}

/// Coerces a reference value, then checks the permitted target types.
fn coerce_reference(
    value: PropertyValue,
    targets: Option<&'static [&'static str]>,
) -> Result<PropertyValue, String> {
    let coerced = coerce_identifier(value)?;
    if let Some(allowed) = targets
        && let PropertyValue::Identifier(id) = &coerced
        && !allowed.contains(&id.type_name())
    {
        return Err(format!("must reference an object of type {}.", target_list(allowed)));
    }
    Ok(coerced)
}

/// Formats the permitted reference target types for a violation reason.
fn target_list(allowed: &[&str]) -> String {
    let quoted: Vec<String> = allowed.iter().map(|name| format!("'{name}'")).collect();
    quoted.join(" or ")
}

/// Validates an integer against its inclusive bounds.
fn coerce_integer(value: PropertyValue, min: i64, max: i64) -> Result<PropertyValue, String> {
    let PropertyValue::Integer(number) = value else {
        return Err("must be an integer.".to_string());
    };
    if number < min || number > max {
        return Err(format!("must be between {min} and {max}."));
    }
    Ok(PropertyValue::Integer(number))
}

/// Coerces every element of a homogeneous list.
fn coerce_list(value: PropertyValue, inner: &PropertyKind) -> Result<PropertyValue, String> {
    let reason = format!("must be a list of {}.", inner.plural_noun());
    let PropertyValue::List(items) = value else {
        return Err(reason);
    };
    let mut coerced = Vec::with_capacity(items.len());
    for item in items {
        let Ok(element) = inner.coerce(item) else {
            return Err(reason);
        };
        coerced.push(element);
    }
    Ok(PropertyValue::List(coerced))
}

/// Validates a list of nested frozen objects.
fn coerce_objects(value: PropertyValue) -> Result<PropertyValue, String> {
    let reason = "must be a list of objects.".to_string();
    let PropertyValue::List(items) = value else {
        return Err(reason);
    };
    if items.iter().all(|item| matches!(item, PropertyValue::Object(_))) {
        Ok(PropertyValue::List(items))
    } else {
        Err(reason)
    }
}

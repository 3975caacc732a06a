// crates/stix-forge-core/src/core/schema.rs
// ============================================================================
// Module: STIX Forge Object Schemas
// Description: Ordered property declarations and object-level rules per type.
// Purpose: Define canonical schemas with validation helpers.
// Dependencies: crate::core::property, thiserror
// ============================================================================

//! ## Overview
//! A schema is the ordered list of property specifications plus cross-field
//! rules for one object type. Declaration order is load-bearing: it is the
//! canonical serialization key order, the order missing required names are
//! reported in, and the order positional values bind in.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::property::PropertySpec;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Specification version emitted in the `spec_version` property.
pub const SPEC_VERSION: &str = "2.1";

// ============================================================================
// SECTION: Cross-Field Rules
// ============================================================================

/// Object-level rule spanning two or more resolved property values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// Requires `later` to hold a strictly later instant than `earlier`
    /// whenever both properties are present.
    TemporalOrder {
        /// Property holding the earlier instant.
        earlier: &'static str,
        /// Property holding the strictly later instant.
        later: &'static str,
    },
}

// ============================================================================
// SECTION: Object Schema
// ============================================================================

/// Canonical schema for one object type.
///
/// # Invariants
/// - `properties` always declares `type` and `id`.
/// - Property names are unique within the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    /// Lowercase wire type name, e.g. `relationship`.
    pub type_name: &'static str,
    /// Capitalized display name used in error messages, e.g. `Relationship`.
    pub display_name: &'static str,
    /// Property declarations in canonical order.
    pub properties: Vec<PropertySpec>,
    /// Object-level rules evaluated after per-property validation.
    pub cross_field_rules: Vec<CrossFieldRule>,
    /// Whether custom properties are tolerated without a per-construction
    /// opt-in.
    pub allow_custom: bool,
    /// Property names whose values derive the deterministic identifier, or
    /// empty when identifiers are random.
    pub id_contributing: &'static [&'static str],
}

impl ObjectSchema {
    /// Looks up a property declaration by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|spec| spec.name == name)
    }

    /// Returns the required property names in declaration order.
    #[must_use]
    pub fn required_names(&self) -> Vec<&'static str> {
        self.properties.iter().filter(|spec| spec.required).map(|spec| spec.name).collect()
    }

    /// Validates the schema invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a declaration-level invariant fails.
    pub fn validate(&self) -> Result<(), SchemaError> {
        ensure_unique_properties(self)?;
        ensure_anchor_properties(self)?;
        ensure_defaults_are_optional(self)?;
        ensure_rule_properties_resolve(self)?;
        ensure_contributing_properties_resolve(self)?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Schema declaration errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two property declarations share a name.
    #[error("duplicate property declaration: {0}")]
    DuplicateProperty(String),
    /// The schema does not declare the `type` property.
    #[error("schema for {0} must declare the 'type' property")]
    MissingTypeProperty(String),
    /// The schema does not declare the `id` property.
    #[error("schema for {0} must declare the 'id' property")]
    MissingIdProperty(String),
    /// A required property also carries a default supplier.
    #[error("required property cannot carry a default: {0}")]
    RequiredWithDefault(String),
    /// A cross-field rule references an undeclared property.
    #[error("cross-field rule references undeclared property: {0}")]
    UnknownRuleProperty(String),
    /// The id-contributing list references an undeclared property.
    #[error("id derivation references undeclared property: {0}")]
    UnknownContributingProperty(String),
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures property names are unique within the schema.
fn ensure_unique_properties(schema: &ObjectSchema) -> Result<(), SchemaError> {
    for (index, spec) in schema.properties.iter().enumerate() {
        if schema.properties.iter().skip(index + 1).any(|other| other.name == spec.name) {
            return Err(SchemaError::DuplicateProperty(spec.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures the `type` and `id` anchor properties are declared.
fn ensure_anchor_properties(schema: &ObjectSchema) -> Result<(), SchemaError> {
    if schema.property("type").is_none() {
        return Err(SchemaError::MissingTypeProperty(schema.type_name.to_string()));
    }
    if schema.property("id").is_none() {
        return Err(SchemaError::MissingIdProperty(schema.type_name.to_string()));
    }
    Ok(())
}

/// Ensures no required property carries a default supplier.
fn ensure_defaults_are_optional(schema: &ObjectSchema) -> Result<(), SchemaError> {
    for spec in &schema.properties {
        if spec.required && spec.default.is_some() {
            return Err(SchemaError::RequiredWithDefault(spec.name.to_string()));
        }
    }
    Ok(())
}

/// Ensures cross-field rules reference declared properties.
fn ensure_rule_properties_resolve(schema: &ObjectSchema) -> Result<(), SchemaError> {
    for rule in &schema.cross_field_rules {
        let CrossFieldRule::TemporalOrder {
            earlier,
            later,
        } = rule;
        for name in [earlier, later] {
            if schema.property(name).is_none() {
                return Err(SchemaError::UnknownRuleProperty((*name).to_string()));
            }
        }
    }
    Ok(())
}

/// Ensures id-contributing names reference declared properties.
fn ensure_contributing_properties_resolve(schema: &ObjectSchema) -> Result<(), SchemaError> {
    for name in schema.id_contributing {
        if schema.property(name).is_none() {
            return Err(SchemaError::UnknownContributingProperty((*name).to_string()));
        }
    }
    Ok(())
}

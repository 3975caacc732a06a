// crates/stix-forge-core/src/core/errors.rs
// ============================================================================
// Module: STIX Forge Object Errors
// Description: Classified construction, parse, and mutation errors.
// Purpose: Provide deterministic, exact-match-testable error values for the engine.
// Dependencies: crate::core::identifier, thiserror
// ============================================================================

//! ## Overview
//! Every failure raised by the construction engine, the canonical serializer,
//! and the frozen-object surface is one of the variants below. Construction
//! either fully succeeds or returns exactly one of these errors; partial
//! objects are never produced. Message text is stable and part of the crate
//! contract, so callers may match on rendered strings as well as on variants.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifier::StixId;

// ============================================================================
// SECTION: Object Errors
// ============================================================================

/// Errors raised while constructing, parsing, or mutating typed objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// One or more required properties were absent from the input.
    ///
    /// # Invariants
    /// - `properties` lists every missing required name, in schema
    ///   declaration order, for a single failed construction.
    #[error("No values for required properties for {}: ({}).", .object_type, .properties.join(", "))]
    MissingProperties {
        /// Display name of the object type, e.g. `Relationship`.
        object_type: String,
        /// All missing required property names in declaration order.
        properties: Vec<String>,
    },

    /// A single property value failed its type, format, or fixed-value rule.
    #[error("Invalid value for {} '{}': {}", .object_type, .property, .reason)]
    InvalidValue {
        /// Display name of the object type, e.g. `Relationship`.
        object_type: String,
        /// Name of the offending property.
        property: String,
        /// Human-readable constraint text of the form `must <constraint>.`.
        reason: String,
    },

    /// Property names were supplied that the schema does not declare.
    ///
    /// # Invariants
    /// - `properties` lists every unrecognized name in order of first
    ///   appearance in the input.
    #[error("Unexpected properties for {}: ({}).", .object_type, .properties.join(", "))]
    ExtraProperties {
        /// Display name of the object type, e.g. `Relationship`.
        object_type: String,
        /// All unrecognized property names in first-appearance order.
        properties: Vec<String>,
    },

    /// A cross-field temporal rule failed over the resolved value set.
    #[error("{} '{}' must be later than '{}'", .id, .later, .earlier)]
    TemporalOrdering {
        /// Resolved identifier of the object the rule was evaluated against.
        id: StixId,
        /// Property that must hold the earlier instant.
        earlier: String,
        /// Property that must hold the strictly later instant.
        later: String,
    },

    /// A write was attempted against a frozen object.
    #[error("Cannot modify '{}' property in '{}' after creation.", .property, .object_type)]
    Immutable {
        /// Display name of the object type, e.g. `Relationship`.
        object_type: String,
        /// Property the caller attempted to set or remove.
        property: String,
    },

    /// More positional values were supplied than the schema declares
    /// required properties.
    #[error(
        "too many positional values for {}: expected at most {}, got {}",
        .object_type,
        .expected,
        .actual
    )]
    PositionalOverflow {
        /// Display name of the object type, e.g. `Relationship`.
        object_type: String,
        /// Number of required properties the schema declares.
        expected: usize,
        /// Number of positional values supplied.
        actual: usize,
    },

    /// The `type` field named an object type with no registered schema.
    #[error("unknown object type: {0}")]
    UnknownType(String),

    /// The input could not be decoded as a typed-object JSON document.
    #[error("failed to decode json: {0}")]
    Json(String),

    /// Canonicalizing property values for hashing or identifier
    /// derivation failed.
    #[error("failed to canonicalize object: {0}")]
    Canonicalization(String),
}

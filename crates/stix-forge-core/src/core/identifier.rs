// crates/stix-forge-core/src/core/identifier.rs
// ============================================================================
// Module: STIX Forge Identifiers
// Description: Typed object identifiers of the form `{type}--{uuid}`.
// Purpose: Provide random and deterministic identifier generation with a stable wire form.
// Dependencies: serde, serde_jcs, thiserror, uuid
// ============================================================================

//! ## Overview
//! Every object carries an identifier whose wire form is the lowercase type
//! name, a literal `--`, and a canonical hyphenated UUID. Identifiers are
//! either random (UUIDv4) or derived deterministically (UUIDv5) from the
//! RFC 8785 canonicalization of designated property values, so two
//! logically-equal objects share an identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde::Serializer;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

// ============================================================================
// SECTION: Namespace
// ============================================================================

/// Fixed namespace UUID for deterministic identifier derivation.
///
/// # Invariants
/// - Process-wide constant; never varies between constructions or hosts.
pub const IDENTIFIER_NAMESPACE: Uuid = Uuid::from_bytes([
    0x00, 0xab, 0xed, 0xb4, 0xaa, 0x42, 0x46, 0x6c, 0x9c, 0x01, 0xfe, 0xd2, 0x33, 0x15, 0xa9, 0xb7,
]);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when decoding or deriving identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The text has no `--` separator between type name and UUID.
    #[error("identifier is missing the '--' separator: {0}")]
    MissingSeparator(String),
    /// The type part before the separator is not a valid type name.
    #[error("identifier has an invalid type part: {0}")]
    InvalidType(String),
    /// The tail after the separator is not a canonical hyphenated UUID.
    #[error("identifier tail is not a valid uuid: {0}")]
    InvalidUuid(String),
    /// Canonicalizing the contributing properties failed.
    #[error("failed to canonicalize contributing properties: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Identifier Type
// ============================================================================

/// Validated object identifier in `{type}--{uuid}` wire form.
///
/// # Invariants
/// - The type part is a lowercase name of 3 to 250 characters drawn from
///   `a-z`, `0-9`, and `-`, starting with a letter.
/// - The UUID part is a canonical lowercase hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StixId(String);

impl StixId {
    /// Parses and validates an identifier from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the separator, type part, or UUID
    /// part is malformed.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let Some((type_part, uuid_part)) = value.split_once("--") else {
            return Err(IdentifierError::MissingSeparator(value.to_string()));
        };
        if !is_valid_type_name(type_part) {
            return Err(IdentifierError::InvalidType(value.to_string()));
        }
        let Ok(parsed) = Uuid::try_parse(uuid_part) else {
            return Err(IdentifierError::InvalidUuid(value.to_string()));
        };
        if parsed.as_hyphenated().to_string() != uuid_part {
            return Err(IdentifierError::InvalidUuid(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Generates a random identifier for the given type name.
    ///
    /// # Invariants
    /// - Callers supply a well-formed type name; schemas are the only
    ///   construction site inside this crate.
    #[must_use]
    pub fn random(type_name: &str) -> Self {
        Self(format!("{type_name}--{}", Uuid::new_v4()))
    }

    /// Derives a deterministic identifier from the canonical JSON form of
    /// the id-contributing property values.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Canonicalization`] when the contributing
    /// values cannot be canonicalized.
    pub fn deterministic(type_name: &str, contributing: &Value) -> Result<Self, IdentifierError> {
        let bytes = serde_jcs::to_vec(contributing)
            .map_err(|err| IdentifierError::Canonicalization(err.to_string()))?;
        let uuid = Uuid::new_v5(&IDENTIFIER_NAMESPACE, &bytes);
        Ok(Self(format!("{type_name}--{uuid}")))
    }

    /// Returns the type part before the separator.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.0.split_once("--").map_or("", |(type_name, _)| type_name)
    }

    /// Returns the UUID part after the separator.
    #[must_use]
    pub fn uuid_part(&self) -> &str {
        self.0.split_once("--").map_or("", |(_, uuid_part)| uuid_part)
    }

    /// Returns the identifier as its wire-form string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the wire-form string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<StixId> for String {
    fn from(value: StixId) -> Self {
        value.0
    }
}

impl Serialize for StixId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Checks the type-part charset and length rules.
fn is_valid_type_name(name: &str) -> bool {
    let length_ok = (3..=250).contains(&name.len());
    let starts_ok = name.chars().next().is_some_and(|ch| ch.is_ascii_lowercase());
    let charset_ok = name.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
    length_ok && starts_ok && charset_ok
}

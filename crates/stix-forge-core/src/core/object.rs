// crates/stix-forge-core/src/core/object.rs
// ============================================================================
// Module: STIX Forge Frozen Objects
// Description: Immutable property mappings produced by the construction engine.
// Purpose: Expose read access, reject writes, and provide canonical digests.
// Dependencies: crate::core::{canonical, errors, identifier, value}, serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! A frozen object is the validated result of one construction: the type
//! name, the resolved identifier, and every property value in canonical
//! order. Objects never change after freezing; the mutation surface exists
//! only to classify write attempts, and the supported update path is
//! [`crate::versioning::new_version`]. Frozen objects are safe for
//! unsynchronized concurrent reads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use serde_json::Map;
use serde_json::Value;
use sha2::Digest;
use sha2::Sha256;

use crate::core::canonical;
use crate::core::errors::ObjectError;
use crate::core::identifier::StixId;
use crate::core::value::PropertyValue;

// ============================================================================
// SECTION: Frozen Object
// ============================================================================

/// Immutable typed object produced by the construction engine.
///
/// # Invariants
/// - `properties` holds every resolved property, including `type` and `id`,
///   in canonical order: schema declaration order first, then permitted
///   custom properties in first-appearance order.
/// - No property value changes after freezing.
#[derive(Debug, Clone, PartialEq)]
pub struct StixObject {
    /// Lowercase wire type name, e.g. `relationship`.
    type_name: String,
    /// Capitalized display name used in error messages, e.g. `Relationship`.
    display_name: String,
    /// Resolved object identifier.
    id: StixId,
    /// Frozen property values in canonical order.
    properties: Vec<(String, PropertyValue)>,
}

impl StixObject {
    /// Freezes a validated property set into an immutable object.
    ///
    /// Crate-internal: the construction engine is the only producer, so the
    /// inputs are already validated and canonically ordered.
    pub(crate) const fn freeze(
        type_name: String,
        display_name: String,
        id: StixId,
        properties: Vec<(String, PropertyValue)>,
    ) -> Self {
        Self {
            type_name,
            display_name,
            id,
            properties,
        }
    }

    /// Returns the lowercase wire type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the display name used in error messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the resolved object identifier.
    #[must_use]
    pub const fn id(&self) -> &StixId {
        &self.id
    }

    /// Looks up a property value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    /// Returns whether the object carries the named property.
    #[must_use]
    pub fn contains_property(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the frozen property pairs in canonical order.
    #[must_use]
    pub fn properties(&self) -> &[(String, PropertyValue)] {
        &self.properties
    }

    /// Returns whether the object has been marked revoked.
    #[must_use]
    pub fn is_revoked(&self) -> bool {
        self.get("revoked").and_then(PropertyValue::as_bool).unwrap_or(false)
    }

    /// Rejects a post-construction property write.
    ///
    /// # Errors
    ///
    /// Always returns [`ObjectError::Immutable`] naming the declared type
    /// and the property.
    pub fn set_property(&self, property: &str, _value: PropertyValue) -> Result<(), ObjectError> {
        Err(ObjectError::Immutable {
            object_type: self.display_name.clone(),
            property: property.to_string(),
        })
    }

    /// Rejects a post-construction property removal.
    ///
    /// # Errors
    ///
    /// Always returns [`ObjectError::Immutable`] naming the declared type
    /// and the property.
    pub fn remove_property(&self, property: &str) -> Result<(), ObjectError> {
        Err(ObjectError::Immutable {
            object_type: self.display_name.clone(),
            property: property.to_string(),
        })
    }

    /// Converts the frozen properties into their JSON data-model form.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.properties {
            map.insert(name.clone(), value.to_json_value());
        }
        Value::Object(map)
    }

    /// Computes the SHA-256 digest of the object's RFC 8785 canonical form.
    ///
    /// The digest is stable across key order and whitespace, so it serves
    /// content addressing and exchange-level deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Canonicalization`] when canonicalization fails.
    pub fn canonical_digest(&self) -> Result<ObjectDigest, ObjectError> {
        let bytes = serde_jcs::to_vec(&self.to_json_value())
            .map_err(|err| ObjectError::Canonicalization(err.to_string()))?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();
        Ok(ObjectDigest {
            algorithm: DigestAlgorithm::Sha256,
            value: hex_encode(&digest),
        })
    }
}

impl fmt::Display for StixObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical::to_canonical_json_pretty(self))
    }
}

impl Serialize for StixObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value().serialize(serializer)
    }
}

// ============================================================================
// SECTION: Content Digest
// ============================================================================

/// Hash algorithms supported for object content digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    /// SHA-256 hashing.
    Sha256,
}

/// Deterministic content hash of an object's canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDigest {
    /// Hash algorithm identifier.
    pub algorithm: DigestAlgorithm,
    /// Lowercase hex-encoded digest bytes.
    pub value: String,
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}

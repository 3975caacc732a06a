// crates/stix-forge-core/src/versioning.rs
// ============================================================================
// Module: STIX Forge Versioning
// Description: New-version and revocation flows over frozen objects.
// Purpose: Express object evolution as fresh constructions instead of mutation.
// Dependencies: crate::core, crate::objects, crate::runtime, thiserror
// ============================================================================

//! ## Overview
//! Frozen objects never mutate; evolution happens by constructing a
//! successor. [`new_version`] copies an object, applies the requested
//! changes, and advances `modified` monotonically; [`revoke`] is a new
//! version that sets `revoked`. Anchor properties (`type`,
//! `spec_version`, `id`, `created`, `created_by_ref`) can never change
//! across versions, and a revoked object accepts no further versions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::errors::ObjectError;
use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::timestamp::StixTimestamp;
use crate::core::value::PropertyValue;
use crate::objects::lookup_schema;
use crate::runtime::builder::ObjectBuilder;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures raised by the versioning flows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VersionError {
    /// A change named a property that is pinned across versions.
    #[error("cannot change properties when creating a new version: ({}).", .properties.join(", "))]
    Unmodifiable {
        /// Offending property names in first-appearance order.
        properties: Vec<String>,
    },
    /// The object's schema does not declare a `modified` property.
    #[error("objects of type '{}' do not support versioning", .object_type)]
    NotVersionable {
        /// Wire type name of the object.
        object_type: String,
    },
    /// The object is revoked and accepts no further versions.
    #[error("cannot create a new version of revoked object {}", .id)]
    Revoked {
        /// Identifier of the revoked object.
        id: StixId,
    },
    /// An explicit `modified` value did not advance the version clock.
    #[error("new 'modified' value {} must be later than {}", .attempted, .previous)]
    NonMonotonic {
        /// The current object's `modified` value.
        previous: StixTimestamp,
        /// The rejected replacement value.
        attempted: StixTimestamp,
    },
    /// The successor construction failed.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Properties pinned across versions.
const UNMODIFIABLE: [&str; 5] = ["type", "spec_version", "id", "created", "created_by_ref"];

// ============================================================================
// SECTION: Flows
// ============================================================================

/// Constructs a successor version of `object` with `changes` applied.
///
/// A change bound to [`PropertyValue::Null`] removes the property. When
/// no explicit `modified` value is supplied the successor takes the
/// current instant, nudged forward one millisecond if the clock has not
/// advanced past the previous version.
///
/// # Errors
///
/// Returns [`VersionError::NotVersionable`] for schemas without a
/// `modified` property, [`VersionError::Revoked`] for revoked objects,
/// [`VersionError::Unmodifiable`] when a change names a pinned property,
/// [`VersionError::NonMonotonic`] when an explicit `modified` does not
/// advance, and any construction error from the rebuild.
pub fn new_version(
    object: &StixObject,
    changes: Vec<(String, PropertyValue)>,
) -> Result<StixObject, VersionError> {
    let Some(schema) = lookup_schema(object.type_name()) else {
        return Err(VersionError::NotVersionable {
            object_type: object.type_name().to_string(),
        });
    };
    if schema.property("modified").is_none() {
        return Err(VersionError::NotVersionable {
            object_type: object.type_name().to_string(),
        });
    }
    if object.is_revoked() {
        return Err(VersionError::Revoked {
            id: object.id().clone(),
        });
    }
    let pinned: Vec<String> = changes
        .iter()
        .filter(|(name, _)| UNMODIFIABLE.contains(&name.as_str()))
        .map(|(name, _)| name.clone())
        .collect();
    if !pinned.is_empty() {
        return Err(VersionError::Unmodifiable {
            properties: pinned,
        });
    }
    let previous = object
        .get("modified")
        .and_then(PropertyValue::as_timestamp)
        .unwrap_or(StixTimestamp::EPOCH);
    let successor_modified = resolve_modified(schema.display_name, &changes, previous)?;
    let allow_custom =
        object.properties().iter().any(|(name, _)| schema.property(name).is_none());
    let mut builder = ObjectBuilder::new(schema).allow_custom(allow_custom);
    for (name, value) in object.properties() {
        builder = builder.set(name.clone(), value.clone());
    }
    for (name, value) in changes {
        builder = builder.set(name, value);
    }
    builder = builder.set("modified", successor_modified);
    builder.build().map_err(VersionError::from)
}

/// Constructs a revoked successor version of `object`.
///
/// # Errors
///
/// Same contract as [`new_version`].
pub fn revoke(object: &StixObject) -> Result<StixObject, VersionError> {
    new_version(object, vec![("revoked".to_string(), PropertyValue::Boolean(true))])
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the successor's `modified` value, enforcing monotonicity for
/// explicit values and nudging automatic ones past the previous version.
fn resolve_modified(
    display_name: &str,
    changes: &[(String, PropertyValue)],
    previous: StixTimestamp,
) -> Result<StixTimestamp, VersionError> {
    let explicit = changes.iter().find(|(name, _)| name == "modified").map(|(_, value)| value);
    if let Some(value) = explicit {
        let attempted = match value {
            PropertyValue::Timestamp(stamp) => *stamp,
            PropertyValue::String(text) => StixTimestamp::parse(text).map_err(|_| {
                VersionError::Object(ObjectError::InvalidValue {
                    object_type: display_name.to_string(),
                    property: "modified".to_string(),
                    reason: "must be a valid RFC 3339 timestamp.".to_string(),
                })
            })?,
            _ => {
                return Err(VersionError::Object(ObjectError::InvalidValue {
                    object_type: display_name.to_string(),
                    property: "modified".to_string(),
                    reason: "must be a valid RFC 3339 timestamp.".to_string(),
                }));
            }
        };
        if attempted <= previous {
            return Err(VersionError::NonMonotonic {
                previous,
                attempted,
            });
        }
        return Ok(attempted);
    }
    let now = StixTimestamp::now();
    if now <= previous {
        Ok(previous.plus_millis(1))
    } else {
        Ok(now)
    }
}

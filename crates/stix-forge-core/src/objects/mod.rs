// crates/stix-forge-core/src/objects/mod.rs
// ============================================================================
// Module: STIX Forge Builtin Objects
// Description: Builtin schemas, shared property sets, and typed wrappers.
// Purpose: Define the shipped object vocabulary and its typed surface.
// Dependencies: crate::core, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! Every builtin object type lives in its own module: a lazily-built
//! schema plus a typed wrapper over [`crate::core::StixObject`]. Domain
//! objects share a common property prefix (`type`, `spec_version`, `id`,
//! `created_by_ref`, `created`, `modified`) and trailer (`revoked`,
//! `labels`, `confidence`, `lang`, `object_marking_refs`); observables
//! share a shorter prefix and derive deterministic identifiers from their
//! contributing values. The registry backs wire-type lookup during
//! parsing. Schema well-formedness for every builtin is asserted by the
//! integration tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use crate::core::property::DefaultValue;
use crate::core::property::PropertyKind;
use crate::core::property::PropertySpec;
use crate::core::schema::ObjectSchema;

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Bundle container object.
pub mod bundle;
/// Identity domain object.
pub mod identity;
/// Indicator domain object.
pub mod indicator;
/// Malware domain object.
pub mod malware;
/// Observable objects with deterministic identifiers.
pub mod observable;
/// Relationship object connecting two others.
pub mod relationship;
/// Sighting object recording an observation.
pub mod sighting;

pub use bundle::Bundle;
pub use bundle::BundleBuilder;
pub use identity::Identity;
pub use identity::IdentityBuilder;
pub use indicator::Indicator;
pub use indicator::IndicatorBuilder;
pub use malware::Malware;
pub use malware::MalwareBuilder;
pub use observable::DomainName;
pub use observable::Ipv4Address;
pub use relationship::Relationship;
pub use relationship::RelationshipBuilder;
pub use sighting::Sighting;
pub use sighting::SightingBuilder;

// ============================================================================
// SECTION: Shared Property Sets
// ============================================================================

/// Common prefix shared by every domain object schema.
pub(crate) fn sdo_common_properties(type_name: &'static str) -> Vec<PropertySpec> {
    vec![
        PropertySpec::fixed("type", type_name),
        PropertySpec::fixed("spec_version", crate::core::schema::SPEC_VERSION),
        PropertySpec::optional("id", PropertyKind::Identifier),
        PropertySpec::optional(
            "created_by_ref",
            PropertyKind::Reference {
                targets: Some(&["identity"]),
            },
        ),
        PropertySpec::optional_with_default("created", PropertyKind::Timestamp, DefaultValue::Now),
        PropertySpec::optional_with_default("modified", PropertyKind::Timestamp, DefaultValue::Now),
    ]
}

/// Common trailer shared by every domain object schema.
pub(crate) fn sdo_trailer_properties() -> Vec<PropertySpec> {
    vec![
        PropertySpec::optional("revoked", PropertyKind::Boolean),
        PropertySpec::optional("labels", PropertyKind::List(Box::new(PropertyKind::String))),
        PropertySpec::optional(
            "confidence",
            PropertyKind::Integer {
                min: 0,
                max: 100,
            },
        ),
        PropertySpec::optional("lang", PropertyKind::String),
        PropertySpec::optional(
            "object_marking_refs",
            PropertyKind::List(Box::new(PropertyKind::Reference {
                targets: Some(&["marking-definition"]),
            })),
        ),
    ]
}

/// Common prefix shared by every observable schema.
pub(crate) fn sco_common_properties(type_name: &'static str) -> Vec<PropertySpec> {
    vec![
        PropertySpec::fixed("type", type_name),
        PropertySpec::fixed("spec_version", crate::core::schema::SPEC_VERSION),
        PropertySpec::optional("id", PropertyKind::Identifier),
    ]
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Builtin schema registry in wire-type order.
static BUILTIN_SCHEMAS: LazyLock<Vec<&'static ObjectSchema>> = LazyLock::new(|| {
    vec![
        bundle::schema(),
        observable::domain_name_schema(),
        identity::schema(),
        indicator::schema(),
        observable::ipv4_address_schema(),
        malware::schema(),
        relationship::schema(),
        sighting::schema(),
    ]
});

/// Returns every builtin schema.
#[must_use]
pub fn builtin_schemas() -> &'static [&'static ObjectSchema] {
    &BUILTIN_SCHEMAS
}

/// Looks up a builtin schema by wire type name.
#[must_use]
pub fn lookup_schema(type_name: &str) -> Option<&'static ObjectSchema> {
    BUILTIN_SCHEMAS.iter().find(|schema| schema.type_name == type_name).copied()
}

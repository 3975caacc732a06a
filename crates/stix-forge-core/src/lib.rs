// crates/stix-forge-core/src/lib.rs
// ============================================================================
// Module: STIX Forge Core Library
// Description: Public API surface for the STIX Forge core.
// Purpose: Expose the object model, builtin schemas, and runtime helpers.
// Dependencies: crate::{core, interfaces, objects, runtime, versioning}
// ============================================================================

//! ## Overview
//! STIX Forge core provides a declarative object model for structured
//! threat intelligence: schema-driven construction with classified
//! errors, immutable objects with canonical serialization, random and
//! deterministic identifiers, and explicit versioning flows. It embeds
//! no transport or storage; integration happens through the frozen
//! object type and its JSON forms.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod objects;
pub mod runtime;
pub mod versioning;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::CrossFieldRule;
pub use self::core::DefaultValue;
pub use self::core::DigestAlgorithm;
pub use self::core::IDENTIFIER_NAMESPACE;
pub use self::core::IdentifierError;
pub use self::core::ObjectDigest;
pub use self::core::ObjectError;
pub use self::core::ObjectSchema;
pub use self::core::PropertyKind;
pub use self::core::PropertySpec;
pub use self::core::PropertyValue;
pub use self::core::SPEC_VERSION;
pub use self::core::SchemaError;
pub use self::core::StixId;
pub use self::core::StixObject;
pub use self::core::StixTimestamp;
pub use self::core::TimestampError;
pub use self::core::to_canonical_json;
pub use self::core::to_canonical_json_pretty;
pub use interfaces::ReferenceTarget;
pub use interfaces::TypedObject;
pub use objects::Bundle;
pub use objects::BundleBuilder;
pub use objects::DomainName;
pub use objects::Identity;
pub use objects::IdentityBuilder;
pub use objects::Indicator;
pub use objects::IndicatorBuilder;
pub use objects::Ipv4Address;
pub use objects::Malware;
pub use objects::MalwareBuilder;
pub use objects::Relationship;
pub use objects::RelationshipBuilder;
pub use objects::Sighting;
pub use objects::SightingBuilder;
pub use objects::builtin_schemas;
pub use objects::lookup_schema;
pub use runtime::ObjectBuilder;
pub use runtime::ParseOptions;
pub use runtime::SpecEdition;
pub use runtime::parse;
pub use runtime::parse_value;
pub use runtime::parse_value_with;
pub use runtime::parse_with;
pub use versioning::VersionError;
pub use versioning::new_version;
pub use versioning::revoke;

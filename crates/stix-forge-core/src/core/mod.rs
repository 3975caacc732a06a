// crates/stix-forge-core/src/core/mod.rs
// ============================================================================
// Module: STIX Forge Core Data Model
// Description: Errors, timestamps, identifiers, values, schemas, and frozen objects.
// Purpose: Re-export the core data model under one namespace.
// Dependencies: crate::core submodules
// ============================================================================

//! ## Overview
//! The core data model: classified errors, canonical timestamps, typed
//! identifiers, property values, declarative schemas, frozen objects, and
//! the canonical serializer they share.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod canonical;
pub mod errors;
pub mod identifier;
pub mod object;
pub mod property;
pub mod schema;
pub mod timestamp;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use canonical::to_canonical_json;
pub use canonical::to_canonical_json_pretty;
pub use errors::ObjectError;
pub use identifier::IDENTIFIER_NAMESPACE;
pub use identifier::IdentifierError;
pub use identifier::StixId;
pub use object::DigestAlgorithm;
pub use object::ObjectDigest;
pub use object::StixObject;
pub use property::DefaultValue;
pub use property::PropertyKind;
pub use property::PropertySpec;
pub use schema::CrossFieldRule;
pub use schema::ObjectSchema;
pub use schema::SPEC_VERSION;
pub use schema::SchemaError;
pub use timestamp::StixTimestamp;
pub use timestamp::TimestampError;
pub use value::PropertyValue;

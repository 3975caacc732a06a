// crates/stix-forge-core/src/interfaces/mod.rs
// ============================================================================
// Module: STIX Forge Interfaces
// Description: Capability traits at the typed-object boundary.
// Purpose: Let richer objects stand in for identifier strings without duck typing.
// Dependencies: crate::core::{identifier, object, schema}
// ============================================================================

//! ## Overview
//! Reference properties accept anything that exposes an identifier, so
//! callers can pass a full typed object where a reference string is
//! expected. The coercion reads the identifier and nothing else; the
//! argument is never mutated.

use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::schema::ObjectSchema;

/// Capability of exposing the identifier a reference property resolves to.
pub trait ReferenceTarget {
    /// Returns the identifier the reference resolves to.
    fn reference_id(&self) -> &StixId;
}

impl ReferenceTarget for StixId {
    fn reference_id(&self) -> &StixId {
        self
    }
}

impl ReferenceTarget for StixObject {
    fn reference_id(&self) -> &StixId {
        self.id()
    }
}

/// Contract implemented by every typed wrapper over a frozen object.
pub trait TypedObject: Sized {
    /// Lowercase wire type name of the wrapped objects.
    const TYPE_NAME: &'static str;

    /// Returns the schema the wrapper validates against.
    fn schema() -> &'static ObjectSchema;

    /// Borrows the wrapped frozen object.
    fn as_object(&self) -> &StixObject;

    /// Consumes the wrapper, returning the frozen object.
    fn into_object(self) -> StixObject;
}

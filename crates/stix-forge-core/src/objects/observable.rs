// crates/stix-forge-core/src/objects/observable.rs
// ============================================================================
// Module: Observable Objects
// Description: Schemas and typed wrappers for the builtin observables.
// Purpose: Model network observables whose identifiers derive from their values.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! Observables designate `value` as their identifier-contributing
//! property: constructing the same value twice yields the same
//! identifier, derived from the canonical form of the contributing set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use crate::core::errors::ObjectError;
use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::property::PropertyKind;
use crate::core::property::PropertySpec;
use crate::core::schema::ObjectSchema;
use crate::core::value::PropertyValue;
use crate::interfaces::ReferenceTarget;
use crate::interfaces::TypedObject;
use crate::objects::sco_common_properties;
use crate::runtime::builder::ObjectBuilder;

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// IPv4 address schema in declaration order.
static IPV4_ADDRESS_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sco_common_properties("ipv4-addr");
    properties.push(PropertySpec::required("value", PropertyKind::String));
    ObjectSchema {
        type_name: "ipv4-addr",
        display_name: "IPv4Address",
        properties,
        cross_field_rules: Vec::new(),
        allow_custom: false,
        id_contributing: &["value"],
    }
});

/// Domain name schema in declaration order.
static DOMAIN_NAME_SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sco_common_properties("domain-name");
    properties.push(PropertySpec::required("value", PropertyKind::String));
    ObjectSchema {
        type_name: "domain-name",
        display_name: "DomainName",
        properties,
        cross_field_rules: Vec::new(),
        allow_custom: false,
        id_contributing: &["value"],
    }
});

/// Returns the IPv4 address schema.
#[must_use]
pub fn ipv4_address_schema() -> &'static ObjectSchema {
    &IPV4_ADDRESS_SCHEMA
}

/// Returns the domain name schema.
#[must_use]
pub fn domain_name_schema() -> &'static ObjectSchema {
    &DOMAIN_NAME_SCHEMA
}

// ============================================================================
// SECTION: IPv4 Address
// ============================================================================

/// Frozen IPv4 address observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Ipv4Address {
    /// Underlying frozen object.
    object: StixObject,
}

impl Ipv4Address {
    /// Creates an IPv4 address observable; equal values yield equal
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(value: impl Into<String>) -> Result<Self, ObjectError> {
        ObjectBuilder::new(ipv4_address_schema())
            .set("value", value.into())
            .build()
            .map(|object| Self {
                object,
            })
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `ipv4-addr`.
    pub fn from_object(object: StixObject) -> Result<Self, ObjectError> {
        if object.type_name() == Self::TYPE_NAME {
            Ok(Self {
                object,
            })
        } else {
            Err(ObjectError::InvalidValue {
                object_type: ipv4_address_schema().display_name.to_string(),
                property: "type".to_string(),
                reason: format!("must equal '{}'.", Self::TYPE_NAME),
            })
        }
    }

    /// Returns the object identifier.
    #[must_use]
    pub const fn id(&self) -> &StixId {
        self.object.id()
    }

    /// Returns the address text.
    #[must_use]
    pub fn value(&self) -> &str {
        self.object.get("value").and_then(PropertyValue::as_str).unwrap_or("")
    }

    /// Borrows the underlying frozen object.
    #[must_use]
    pub const fn as_object(&self) -> &StixObject {
        &self.object
    }

    /// Unwraps into the underlying frozen object.
    #[must_use]
    pub fn into_object(self) -> StixObject {
        self.object
    }
}

impl TypedObject for Ipv4Address {
    const TYPE_NAME: &'static str = "ipv4-addr";

    fn schema() -> &'static ObjectSchema {
        ipv4_address_schema()
    }

    fn as_object(&self) -> &StixObject {
        &self.object
    }

    fn into_object(self) -> StixObject {
        self.object
    }
}

impl ReferenceTarget for Ipv4Address {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// ============================================================================
// SECTION: Domain Name
// ============================================================================

/// Frozen domain name observable.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainName {
    /// Underlying frozen object.
    object: StixObject,
}

impl DomainName {
    /// Creates a domain name observable; equal values yield equal
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(value: impl Into<String>) -> Result<Self, ObjectError> {
        ObjectBuilder::new(domain_name_schema())
            .set("value", value.into())
            .build()
            .map(|object| Self {
                object,
            })
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `domain-name`.
    pub fn from_object(object: StixObject) -> Result<Self, ObjectError> {
        if object.type_name() == Self::TYPE_NAME {
            Ok(Self {
                object,
            })
        } else {
            Err(ObjectError::InvalidValue {
                object_type: domain_name_schema().display_name.to_string(),
                property: "type".to_string(),
                reason: format!("must equal '{}'.", Self::TYPE_NAME),
            })
        }
    }

    /// Returns the object identifier.
    #[must_use]
    pub const fn id(&self) -> &StixId {
        self.object.id()
    }

    /// Returns the domain text.
    #[must_use]
    pub fn value(&self) -> &str {
        self.object.get("value").and_then(PropertyValue::as_str).unwrap_or("")
    }

    /// Borrows the underlying frozen object.
    #[must_use]
    pub const fn as_object(&self) -> &StixObject {
        &self.object
    }

    /// Unwraps into the underlying frozen object.
    #[must_use]
    pub fn into_object(self) -> StixObject {
        self.object
    }
}

impl TypedObject for DomainName {
    const TYPE_NAME: &'static str = "domain-name";

    fn schema() -> &'static ObjectSchema {
        domain_name_schema()
    }

    fn as_object(&self) -> &StixObject {
        &self.object
    }

    fn into_object(self) -> StixObject {
        self.object
    }
}

impl ReferenceTarget for DomainName {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// crates/stix-forge-core/src/objects/identity.rs
// ============================================================================
// Module: Identity Object
// Description: Schema and typed wrapper for the identity object.
// Purpose: Name an individual, organization, or group.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! An identity names an actor: an individual, organization, system, or
//! group. Identities are the only valid target of `created_by_ref`.

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
use crate::core::timestamp::StixTimestamp;
use crate::core::value::PropertyValue;
use crate::interfaces::ReferenceTarget;
use crate::interfaces::TypedObject;
use crate::objects::sdo_common_properties;
use crate::objects::sdo_trailer_properties;
use crate::runtime::builder::ObjectBuilder;

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Identity schema in declaration order.
static SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sdo_common_properties("identity");
    properties.push(PropertySpec::required("name", PropertyKind::String));
    properties.push(PropertySpec::optional("description", PropertyKind::String));
    properties.push(PropertySpec::optional(
        "roles",
        PropertyKind::List(Box::new(PropertyKind::String)),
    ));
    properties.push(PropertySpec::optional("identity_class", PropertyKind::String));
    properties.push(PropertySpec::optional(
        "sectors",
        PropertyKind::List(Box::new(PropertyKind::String)),
    ));
    properties.push(PropertySpec::optional("contact_information", PropertyKind::String));
    properties.extend(sdo_trailer_properties());
    ObjectSchema {
        type_name: "identity",
        display_name: "Identity",
        properties,
        cross_field_rules: Vec::new(),
        allow_custom: false,
        id_contributing: &[],
    }
});

/// Returns the identity schema.
#[must_use]
pub fn schema() -> &'static ObjectSchema {
    &SCHEMA
}

// ============================================================================
// SECTION: Typed Wrapper
// ============================================================================

/// Frozen identity object.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Underlying frozen object.
    object: StixObject,
}

impl Identity {
    /// Creates an identity with the given name.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(name: impl Into<String>) -> Result<Self, ObjectError> {
        Self::builder().name(name).build()
    }

    /// Starts an identity builder.
    #[must_use]
    pub fn builder() -> IdentityBuilder {
        IdentityBuilder {
            inner: ObjectBuilder::new(schema()),
        }
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `identity`.
    pub fn from_object(object: StixObject) -> Result<Self, ObjectError> {
        if object.type_name() == Self::TYPE_NAME {
            Ok(Self {
                object,
            })
        } else {
            Err(ObjectError::InvalidValue {
                object_type: schema().display_name.to_string(),
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

    /// Returns the identity's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.object.get("name").and_then(PropertyValue::as_str).unwrap_or("")
    }

    /// Returns the identity class when present.
    #[must_use]
    pub fn identity_class(&self) -> Option<&str> {
        self.object.get("identity_class").and_then(PropertyValue::as_str)
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

impl TypedObject for Identity {
    const TYPE_NAME: &'static str = "identity";

    fn schema() -> &'static ObjectSchema {
        schema()
    }

    fn as_object(&self) -> &StixObject {
        &self.object
    }

    fn into_object(self) -> StixObject {
        self.object
    }
}

impl ReferenceTarget for Identity {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Identity`].
#[derive(Debug, Clone)]
pub struct IdentityBuilder {
    /// Generic engine builder the setters feed.
    inner: ObjectBuilder,
}

impl IdentityBuilder {
    /// Sets the object identifier.
    #[must_use]
    pub fn id(mut self, id: StixId) -> Self {
        self.inner = self.inner.set("id", PropertyValue::Identifier(id));
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("name", value.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("description", value.into());
        self
    }

    /// Sets the role list.
    #[must_use]
    pub fn roles(mut self, values: Vec<String>) -> Self {
        self.inner = self.inner.set("roles", values);
        self
    }

    /// Sets the identity class.
    #[must_use]
    pub fn identity_class(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("identity_class", value.into());
        self
    }

    /// Sets the sector list.
    #[must_use]
    pub fn sectors(mut self, values: Vec<String>) -> Self {
        self.inner = self.inner.set("sectors", values);
        self
    }

    /// Sets the contact information.
    #[must_use]
    pub fn contact_information(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("contact_information", value.into());
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn created(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("created", value);
        self
    }

    /// Sets the last-modification timestamp.
    #[must_use]
    pub fn modified(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("modified", value);
        self
    }

    /// Sets an arbitrary property by name.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.inner = self.inner.set(name, value);
        self
    }

    /// Overrides the custom-property policy for this construction.
    #[must_use]
    pub fn allow_custom(mut self, allow: bool) -> Self {
        self.inner = self.inner.allow_custom(allow);
        self
    }

    /// Builds the identity.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn build(self) -> Result<Identity, ObjectError> {
        self.inner.build().map(|object| Identity {
            object,
        })
    }
}

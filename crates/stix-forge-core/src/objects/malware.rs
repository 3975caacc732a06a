// crates/stix-forge-core/src/objects/malware.rs
// ============================================================================
// Module: Malware Object
// Description: Schema and typed wrapper for the malware object.
// Purpose: Describe a malware instance or family.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! A malware object describes either a single instance or a whole family,
//! distinguished by the required `is_family` flag.

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

/// Malware schema in declaration order.
static SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sdo_common_properties("malware");
    properties.push(PropertySpec::optional("name", PropertyKind::String));
    properties.push(PropertySpec::optional("description", PropertyKind::String));
    properties.push(PropertySpec::optional(
        "malware_types",
        PropertyKind::List(Box::new(PropertyKind::String)),
    ));
    properties.push(PropertySpec::required("is_family", PropertyKind::Boolean));
    properties.push(PropertySpec::optional("first_seen", PropertyKind::Timestamp));
    properties.push(PropertySpec::optional("last_seen", PropertyKind::Timestamp));
    properties.extend(sdo_trailer_properties());
    ObjectSchema {
        type_name: "malware",
        display_name: "Malware",
        properties,
        cross_field_rules: Vec::new(),
        allow_custom: false,
        id_contributing: &[],
    }
});

/// Returns the malware schema.
#[must_use]
pub fn schema() -> &'static ObjectSchema {
    &SCHEMA
}

// ============================================================================
// SECTION: Typed Wrapper
// ============================================================================

/// Frozen malware object.
#[derive(Debug, Clone, PartialEq)]
pub struct Malware {
    /// Underlying frozen object.
    object: StixObject,
}

impl Malware {
    /// Creates a malware object with the family flag.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(is_family: bool) -> Result<Self, ObjectError> {
        Self::builder().is_family(is_family).build()
    }

    /// Starts a malware builder.
    #[must_use]
    pub fn builder() -> MalwareBuilder {
        MalwareBuilder {
            inner: ObjectBuilder::new(schema()),
        }
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `malware`.
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

    /// Returns whether this object describes a family.
    #[must_use]
    pub fn is_family(&self) -> bool {
        self.object.get("is_family").and_then(PropertyValue::as_bool).unwrap_or(false)
    }

    /// Returns the name when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.object.get("name").and_then(PropertyValue::as_str)
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

impl TypedObject for Malware {
    const TYPE_NAME: &'static str = "malware";

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

impl ReferenceTarget for Malware {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Malware`].
#[derive(Debug, Clone)]
pub struct MalwareBuilder {
    /// Generic engine builder the setters feed.
    inner: ObjectBuilder,
}

impl MalwareBuilder {
    /// Sets the object identifier.
    #[must_use]
    pub fn id(mut self, id: StixId) -> Self {
        self.inner = self.inner.set("id", PropertyValue::Identifier(id));
        self
    }

    /// Sets the family flag.
    #[must_use]
    pub fn is_family(mut self, value: bool) -> Self {
        self.inner = self.inner.set("is_family", value);
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

    /// Sets the malware type labels.
    #[must_use]
    pub fn malware_types(mut self, values: Vec<String>) -> Self {
        self.inner = self.inner.set("malware_types", values);
        self
    }

    /// Sets the first-seen timestamp.
    #[must_use]
    pub fn first_seen(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("first_seen", value);
        self
    }

    /// Sets the last-seen timestamp.
    #[must_use]
    pub fn last_seen(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("last_seen", value);
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

    /// Builds the malware object.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn build(self) -> Result<Malware, ObjectError> {
        self.inner.build().map(|object| Malware {
            object,
        })
    }
}

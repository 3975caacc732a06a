// crates/stix-forge-core/src/objects/sighting.rs
// ============================================================================
// Module: Sighting Object
// Description: Schema and typed wrapper for the sighting object.
// Purpose: Record that an object was observed, with an optional window and count.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! A sighting records that the object behind `sighting_of_ref` was seen.
//! The observation window (`first_seen`, `last_seen`) must be strictly
//! ordered and the observation count is capped at 999,999,999.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use crate::core::errors::ObjectError;
use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::property::PropertyKind;
use crate::core::property::PropertySpec;
use crate::core::schema::CrossFieldRule;
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

/// Sighting schema in declaration order.
static SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sdo_common_properties("sighting");
    properties.push(PropertySpec::optional("description", PropertyKind::String));
    properties.push(PropertySpec::optional("first_seen", PropertyKind::Timestamp));
    properties.push(PropertySpec::optional("last_seen", PropertyKind::Timestamp));
    properties.push(PropertySpec::optional(
        "count",
        PropertyKind::Integer {
            min: 0,
            max: 999_999_999,
        },
    ));
    properties.push(PropertySpec::required(
        "sighting_of_ref",
        PropertyKind::Reference {
            targets: None,
        },
    ));
    properties.push(PropertySpec::optional(
        "observed_data_refs",
        PropertyKind::List(Box::new(PropertyKind::Reference {
            targets: Some(&["observed-data"]),
        })),
    ));
    properties.push(PropertySpec::optional(
        "where_sighted_refs",
        PropertyKind::List(Box::new(PropertyKind::Reference {
            targets: Some(&["identity", "location"]),
        })),
    ));
    properties.push(PropertySpec::optional("summary", PropertyKind::Boolean));
    properties.extend(sdo_trailer_properties());
    ObjectSchema {
        type_name: "sighting",
        display_name: "Sighting",
        properties,
        cross_field_rules: vec![CrossFieldRule::TemporalOrder {
            earlier: "first_seen",
            later: "last_seen",
        }],
        allow_custom: false,
        id_contributing: &[],
    }
});

/// Returns the sighting schema.
#[must_use]
pub fn schema() -> &'static ObjectSchema {
    &SCHEMA
}

// ============================================================================
// SECTION: Typed Wrapper
// ============================================================================

/// Frozen sighting object.
#[derive(Debug, Clone, PartialEq)]
pub struct Sighting {
    /// Underlying frozen object.
    object: StixObject,
}

impl Sighting {
    /// Creates a sighting of the given object.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(sighting_of_ref: &impl ReferenceTarget) -> Result<Self, ObjectError> {
        Self::builder().sighting_of_ref(sighting_of_ref).build()
    }

    /// Starts a sighting builder.
    #[must_use]
    pub fn builder() -> SightingBuilder {
        SightingBuilder {
            inner: ObjectBuilder::new(schema()),
        }
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `sighting`.
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

    /// Returns the sighted object's reference.
    #[must_use]
    pub fn sighting_of_ref(&self) -> &StixId {
        self.object
            .get("sighting_of_ref")
            .and_then(PropertyValue::as_identifier)
            .unwrap_or_else(|| self.object.id())
    }

    /// Returns the observation count when present.
    #[must_use]
    pub fn count(&self) -> Option<i64> {
        self.object.get("count").and_then(PropertyValue::as_integer)
    }

    /// Returns the window start when present.
    #[must_use]
    pub fn first_seen(&self) -> Option<StixTimestamp> {
        self.object.get("first_seen").and_then(PropertyValue::as_timestamp)
    }

    /// Returns the window end when present.
    #[must_use]
    pub fn last_seen(&self) -> Option<StixTimestamp> {
        self.object.get("last_seen").and_then(PropertyValue::as_timestamp)
    }

    /// Returns whether this sighting is a summary.
    #[must_use]
    pub fn summary(&self) -> Option<bool> {
        self.object.get("summary").and_then(PropertyValue::as_bool)
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

impl TypedObject for Sighting {
    const TYPE_NAME: &'static str = "sighting";

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

impl ReferenceTarget for Sighting {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Sighting`].
#[derive(Debug, Clone)]
pub struct SightingBuilder {
    /// Generic engine builder the setters feed.
    inner: ObjectBuilder,
}

impl SightingBuilder {
    /// Sets the object identifier.
    #[must_use]
    pub fn id(mut self, id: StixId) -> Self {
        self.inner = self.inner.set("id", PropertyValue::Identifier(id));
        self
    }

    /// Sets the sighted object's reference.
    #[must_use]
    pub fn sighting_of_ref(mut self, target: &impl ReferenceTarget) -> Self {
        self.inner = self
            .inner
            .set("sighting_of_ref", PropertyValue::Identifier(target.reference_id().clone()));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("description", value.into());
        self
    }

    /// Sets the window start.
    #[must_use]
    pub fn first_seen(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("first_seen", value);
        self
    }

    /// Sets the window end.
    #[must_use]
    pub fn last_seen(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("last_seen", value);
        self
    }

    /// Sets the observation count.
    #[must_use]
    pub fn count(mut self, value: i64) -> Self {
        self.inner = self.inner.set("count", value);
        self
    }

    /// Sets the observed-data references backing this sighting.
    #[must_use]
    pub fn observed_data_refs(mut self, ids: Vec<StixId>) -> Self {
        let refs: Vec<PropertyValue> = ids.into_iter().map(PropertyValue::Identifier).collect();
        self.inner = self.inner.set("observed_data_refs", refs);
        self
    }

    /// Sets the references describing where the sighting occurred.
    #[must_use]
    pub fn where_sighted_refs(mut self, ids: Vec<StixId>) -> Self {
        let refs: Vec<PropertyValue> = ids.into_iter().map(PropertyValue::Identifier).collect();
        self.inner = self.inner.set("where_sighted_refs", refs);
        self
    }

    /// Marks this sighting as a summary.
    #[must_use]
    pub fn summary(mut self, value: bool) -> Self {
        self.inner = self.inner.set("summary", value);
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

    /// Builds the sighting.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn build(self) -> Result<Sighting, ObjectError> {
        self.inner.build().map(|object| Sighting {
            object,
        })
    }
}

// crates/stix-forge-core/src/objects/relationship.rs
// ============================================================================
// Module: Relationship Object
// Description: Schema and typed wrapper for the relationship object.
// Purpose: Connect a source object to a target object with a named link.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! A relationship links a source object to a target object through a
//! `relationship_type` verb such as `indicates` or `mitigates`. The
//! optional activity window (`start_time`, `stop_time`) must be strictly
//! ordered. The typed constructor takes the three required values in
//! source, verb, target order and binds each by name.

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

/// Relationship schema in declaration order.
static SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sdo_common_properties("relationship");
    properties.push(PropertySpec::required("relationship_type", PropertyKind::String));
    properties.push(PropertySpec::optional("description", PropertyKind::String));
    properties.push(PropertySpec::required(
        "source_ref",
        PropertyKind::Reference {
            targets: None,
        },
    ));
    properties.push(PropertySpec::required(
        "target_ref",
        PropertyKind::Reference {
            targets: None,
        },
    ));
    properties.push(PropertySpec::optional("start_time", PropertyKind::Timestamp));
    properties.push(PropertySpec::optional("stop_time", PropertyKind::Timestamp));
    properties.extend(sdo_trailer_properties());
    ObjectSchema {
        type_name: "relationship",
        display_name: "Relationship",
        properties,
        cross_field_rules: vec![CrossFieldRule::TemporalOrder {
            earlier: "start_time",
            later: "stop_time",
        }],
        allow_custom: false,
        id_contributing: &[],
    }
});

/// Returns the relationship schema.
#[must_use]
pub fn schema() -> &'static ObjectSchema {
    &SCHEMA
}

// ============================================================================
// SECTION: Typed Wrapper
// ============================================================================

/// Frozen relationship object.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Underlying frozen object.
    object: StixObject,
}

impl Relationship {
    /// Creates a relationship from source, verb, and target.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(
        source_ref: &impl ReferenceTarget,
        relationship_type: impl Into<String>,
        target_ref: &impl ReferenceTarget,
    ) -> Result<Self, ObjectError> {
        Self::builder()
            .source_ref(source_ref)
            .relationship_type(relationship_type)
            .target_ref(target_ref)
            .build()
    }

    /// Starts a relationship builder.
    #[must_use]
    pub fn builder() -> RelationshipBuilder {
        RelationshipBuilder {
            inner: ObjectBuilder::new(schema()),
        }
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `relationship`.
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

    /// Returns the relationship verb.
    #[must_use]
    pub fn relationship_type(&self) -> &str {
        self.object.get("relationship_type").and_then(PropertyValue::as_str).unwrap_or("")
    }

    /// Returns the source reference.
    #[must_use]
    pub fn source_ref(&self) -> &StixId {
        self.object
            .get("source_ref")
            .and_then(PropertyValue::as_identifier)
            .unwrap_or_else(|| self.object.id())
    }

    /// Returns the target reference.
    #[must_use]
    pub fn target_ref(&self) -> &StixId {
        self.object
            .get("target_ref")
            .and_then(PropertyValue::as_identifier)
            .unwrap_or_else(|| self.object.id())
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created(&self) -> StixTimestamp {
        self.object
            .get("created")
            .and_then(PropertyValue::as_timestamp)
            .unwrap_or(StixTimestamp::EPOCH)
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub fn modified(&self) -> StixTimestamp {
        self.object
            .get("modified")
            .and_then(PropertyValue::as_timestamp)
            .unwrap_or(StixTimestamp::EPOCH)
    }

    /// Returns the description when present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.object.get("description").and_then(PropertyValue::as_str)
    }

    /// Returns the activity-window start when present.
    #[must_use]
    pub fn start_time(&self) -> Option<StixTimestamp> {
        self.object.get("start_time").and_then(PropertyValue::as_timestamp)
    }

    /// Returns the activity-window stop when present.
    #[must_use]
    pub fn stop_time(&self) -> Option<StixTimestamp> {
        self.object.get("stop_time").and_then(PropertyValue::as_timestamp)
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

impl TypedObject for Relationship {
    const TYPE_NAME: &'static str = "relationship";

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

impl ReferenceTarget for Relationship {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Relationship`].
#[derive(Debug, Clone)]
pub struct RelationshipBuilder {
    /// Generic engine builder the setters feed.
    inner: ObjectBuilder,
}

impl RelationshipBuilder {
    /// Sets the object identifier.
    #[must_use]
    pub fn id(mut self, id: StixId) -> Self {
        self.inner = self.inner.set("id", PropertyValue::Identifier(id));
        self
    }

    /// Sets the relationship verb.
    #[must_use]
    pub fn relationship_type(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("relationship_type", value.into());
        self
    }

    /// Sets the source reference.
    #[must_use]
    pub fn source_ref(mut self, target: &impl ReferenceTarget) -> Self {
        self.inner =
            self.inner.set("source_ref", PropertyValue::Identifier(target.reference_id().clone()));
        self
    }

    /// Sets the target reference.
    #[must_use]
    pub fn target_ref(mut self, target: &impl ReferenceTarget) -> Self {
        self.inner =
            self.inner.set("target_ref", PropertyValue::Identifier(target.reference_id().clone()));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("description", value.into());
        self
    }

    /// Sets the creator reference.
    #[must_use]
    pub fn created_by_ref(mut self, target: &impl ReferenceTarget) -> Self {
        self.inner = self
            .inner
            .set("created_by_ref", PropertyValue::Identifier(target.reference_id().clone()));
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

    /// Sets the activity-window start.
    #[must_use]
    pub fn start_time(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("start_time", value);
        self
    }

    /// Sets the activity-window stop.
    #[must_use]
    pub fn stop_time(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("stop_time", value);
        self
    }

    /// Sets the confidence score.
    #[must_use]
    pub fn confidence(mut self, value: i64) -> Self {
        self.inner = self.inner.set("confidence", value);
        self
    }

    /// Sets the label list.
    #[must_use]
    pub fn labels(mut self, values: Vec<String>) -> Self {
        self.inner = self.inner.set("labels", values);
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

    /// Builds the relationship.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn build(self) -> Result<Relationship, ObjectError> {
        self.inner.build().map(|object| Relationship {
            object,
        })
    }
}

// crates/stix-forge-core/src/objects/indicator.rs
// ============================================================================
// Module: Indicator Object
// Description: Schema and typed wrapper for the indicator object.
// Purpose: Carry a detection pattern with its validity window.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! An indicator carries a detection `pattern` in a named `pattern_type`
//! language. `valid_from` defaults to the construction instant, and when
//! `valid_until` is supplied it must fall strictly after `valid_from`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use crate::core::errors::ObjectError;
use crate::core::identifier::StixId;
use crate::core::object::StixObject;
use crate::core::property::DefaultValue;
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

/// Indicator schema in declaration order.
static SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let mut properties = sdo_common_properties("indicator");
    properties.push(PropertySpec::optional("name", PropertyKind::String));
    properties.push(PropertySpec::optional("description", PropertyKind::String));
    properties.push(PropertySpec::optional(
        "indicator_types",
        PropertyKind::List(Box::new(PropertyKind::String)),
    ));
    properties.push(PropertySpec::required("pattern", PropertyKind::String));
    properties.push(PropertySpec::required("pattern_type", PropertyKind::String));
    properties.push(PropertySpec::optional("pattern_version", PropertyKind::String));
    properties.push(PropertySpec::optional_with_default(
        "valid_from",
        PropertyKind::Timestamp,
        DefaultValue::Now,
    ));
    properties.push(PropertySpec::optional("valid_until", PropertyKind::Timestamp));
    properties.extend(sdo_trailer_properties());
    ObjectSchema {
        type_name: "indicator",
        display_name: "Indicator",
        properties,
        cross_field_rules: vec![CrossFieldRule::TemporalOrder {
            earlier: "valid_from",
            later: "valid_until",
        }],
        allow_custom: false,
        id_contributing: &[],
    }
});

/// Returns the indicator schema.
#[must_use]
pub fn schema() -> &'static ObjectSchema {
    &SCHEMA
}

// ============================================================================
// SECTION: Typed Wrapper
// ============================================================================

/// Frozen indicator object.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    /// Underlying frozen object.
    object: StixObject,
}

impl Indicator {
    /// Creates an indicator from a pattern and its language.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(
        pattern: impl Into<String>,
        pattern_type: impl Into<String>,
    ) -> Result<Self, ObjectError> {
        Self::builder().pattern(pattern).pattern_type(pattern_type).build()
    }

    /// Starts an indicator builder.
    #[must_use]
    pub fn builder() -> IndicatorBuilder {
        IndicatorBuilder {
            inner: ObjectBuilder::new(schema()),
        }
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `indicator`.
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

    /// Returns the detection pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.object.get("pattern").and_then(PropertyValue::as_str).unwrap_or("")
    }

    /// Returns the pattern language.
    #[must_use]
    pub fn pattern_type(&self) -> &str {
        self.object.get("pattern_type").and_then(PropertyValue::as_str).unwrap_or("")
    }

    /// Returns the name when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.object.get("name").and_then(PropertyValue::as_str)
    }

    /// Returns the start of the validity window.
    #[must_use]
    pub fn valid_from(&self) -> StixTimestamp {
        self.object
            .get("valid_from")
            .and_then(PropertyValue::as_timestamp)
            .unwrap_or(StixTimestamp::EPOCH)
    }

    /// Returns the end of the validity window when present.
    #[must_use]
    pub fn valid_until(&self) -> Option<StixTimestamp> {
        self.object.get("valid_until").and_then(PropertyValue::as_timestamp)
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

impl TypedObject for Indicator {
    const TYPE_NAME: &'static str = "indicator";

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

impl ReferenceTarget for Indicator {
    fn reference_id(&self) -> &StixId {
        self.object.id()
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Indicator`].
#[derive(Debug, Clone)]
pub struct IndicatorBuilder {
    /// Generic engine builder the setters feed.
    inner: ObjectBuilder,
}

impl IndicatorBuilder {
    /// Sets the object identifier.
    #[must_use]
    pub fn id(mut self, id: StixId) -> Self {
        self.inner = self.inner.set("id", PropertyValue::Identifier(id));
        self
    }

    /// Sets the detection pattern.
    #[must_use]
    pub fn pattern(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("pattern", value.into());
        self
    }

    /// Sets the pattern language.
    #[must_use]
    pub fn pattern_type(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.set("pattern_type", value.into());
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

    /// Sets the indicator type labels.
    #[must_use]
    pub fn indicator_types(mut self, values: Vec<String>) -> Self {
        self.inner = self.inner.set("indicator_types", values);
        self
    }

    /// Sets the start of the validity window.
    #[must_use]
    pub fn valid_from(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("valid_from", value);
        self
    }

    /// Sets the end of the validity window.
    #[must_use]
    pub fn valid_until(mut self, value: StixTimestamp) -> Self {
        self.inner = self.inner.set("valid_until", value);
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

    /// Builds the indicator.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn build(self) -> Result<Indicator, ObjectError> {
        self.inner.build().map(|object| Indicator {
            object,
        })
    }
}

// crates/stix-forge-core/src/objects/bundle.rs
// ============================================================================
// Module: Bundle Object
// Description: Schema and typed wrapper for the bundle container.
// Purpose: Carry a collection of frozen objects as one document.
// Dependencies: crate::core, crate::interfaces, crate::runtime, std::sync::LazyLock
// ============================================================================

//! ## Overview
//! A bundle is a transport container: an identifier plus the contained
//! objects, each already frozen and validated. Bundles carry no
//! `spec_version` of their own and no timestamps; they assert nothing
//! beyond membership.

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
use crate::interfaces::TypedObject;
use crate::runtime::builder::ObjectBuilder;

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Bundle schema in declaration order.
static SCHEMA: LazyLock<ObjectSchema> = LazyLock::new(|| ObjectSchema {
    type_name: "bundle",
    display_name: "Bundle",
    properties: vec![
        PropertySpec::fixed("type", "bundle"),
        PropertySpec::optional("id", PropertyKind::Identifier),
        PropertySpec::required("objects", PropertyKind::Objects),
    ],
    cross_field_rules: Vec::new(),
    allow_custom: false,
    id_contributing: &[],
});

/// Returns the bundle schema.
#[must_use]
pub fn schema() -> &'static ObjectSchema {
    &SCHEMA
}

// ============================================================================
// SECTION: Typed Wrapper
// ============================================================================

/// Frozen bundle container.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    /// Underlying frozen object.
    object: StixObject,
}

impl Bundle {
    /// Creates a bundle over the given objects.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn new(objects: Vec<StixObject>) -> Result<Self, ObjectError> {
        Self::builder().objects(objects).build()
    }

    /// Starts a bundle builder.
    #[must_use]
    pub fn builder() -> BundleBuilder {
        BundleBuilder {
            inner: ObjectBuilder::new(schema()),
            collected: Vec::new(),
        }
    }

    /// Wraps an already-constructed object after checking its type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::InvalidValue`] when the object's wire type
    /// is not `bundle`.
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

    /// Returns the bundle identifier.
    #[must_use]
    pub const fn id(&self) -> &StixId {
        self.object.id()
    }

    /// Returns the contained objects.
    #[must_use]
    pub fn objects(&self) -> Vec<&StixObject> {
        self.object
            .get("objects")
            .and_then(PropertyValue::as_list)
            .map(|items| items.iter().filter_map(PropertyValue::as_object).collect())
            .unwrap_or_default()
    }

    /// Returns how many objects the bundle contains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects().len()
    }

    /// Returns whether the bundle contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects().is_empty()
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

impl TypedObject for Bundle {
    const TYPE_NAME: &'static str = "bundle";

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

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`Bundle`].
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    /// Generic engine builder the setters feed.
    inner: ObjectBuilder,
    /// Objects collected so far, in insertion order.
    collected: Vec<StixObject>,
}

impl BundleBuilder {
    /// Sets the bundle identifier.
    #[must_use]
    pub fn id(mut self, id: StixId) -> Self {
        self.inner = self.inner.set("id", PropertyValue::Identifier(id));
        self
    }

    /// Appends a typed object.
    #[must_use]
    pub fn add(mut self, object: impl TypedObject) -> Self {
        self.collected.push(object.into_object());
        self
    }

    /// Appends an already-frozen object.
    #[must_use]
    pub fn add_object(mut self, object: StixObject) -> Self {
        self.collected.push(object);
        self
    }

    /// Replaces the collected objects.
    #[must_use]
    pub fn objects(mut self, objects: Vec<StixObject>) -> Self {
        self.collected = objects;
        self
    }

    /// Builds the bundle.
    ///
    /// # Errors
    ///
    /// Returns any [`ObjectError`] the construction engine raises.
    pub fn build(self) -> Result<Bundle, ObjectError> {
        let members: Vec<PropertyValue> =
            self.collected.into_iter().map(PropertyValue::Object).collect();
        self.inner.set("objects", PropertyValue::List(members)).build().map(|object| Bundle {
            object,
        })
    }
}

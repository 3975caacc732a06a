// crates/stix-forge-core/tests/relationship.rs
// ============================================================================
// Module: Relationship Object Tests
// Description: Verifies relationship construction, serialization, and errors.
// ============================================================================
//! ## Overview
//! Exercises the relationship object end to end: golden serialization in
//! declaration order, classified construction errors with their exact
//! messages, the activity-window ordering rule, immutability, and parsing
//! back from wire documents.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use stix_forge_core::ObjectBuilder;
use stix_forge_core::ObjectError;
use stix_forge_core::ParseOptions;
use stix_forge_core::PropertyValue;
use stix_forge_core::Relationship;
use stix_forge_core::StixId;
use stix_forge_core::StixTimestamp;
use stix_forge_core::lookup_schema;
use stix_forge_core::parse;
use stix_forge_core::parse_with;
use stix_forge_core::to_canonical_json;

const INDICATOR_ID: &str = "indicator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7";
const MALWARE_ID: &str = "malware--9c4638ec-f1de-4ddb-abf4-1b760417654e";
const RELATIONSHIP_ID: &str = "relationship--df7c87eb-75d2-4948-af81-9d49d246f301";

const EXPECTED_RELATIONSHIP: &str = r#"{
    "type": "relationship",
    "spec_version": "2.1",
    "id": "relationship--df7c87eb-75d2-4948-af81-9d49d246f301",
    "created": "2016-04-06T20:06:37.000Z",
    "modified": "2016-04-06T20:06:37.000Z",
    "relationship_type": "indicates",
    "source_ref": "indicator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7",
    "target_ref": "malware--9c4638ec-f1de-4ddb-abf4-1b760417654e"
}"#;

/// Builds the golden relationship with pinned identifiers and timestamps.
fn golden_relationship() -> Relationship {
    let created = StixTimestamp::parse("2016-04-06T20:06:37.000Z").expect("timestamp");
    Relationship::builder()
        .id(StixId::parse(RELATIONSHIP_ID).expect("id"))
        .created(created)
        .modified(created)
        .relationship_type("indicates")
        .source_ref(&StixId::parse(INDICATOR_ID).expect("source id"))
        .target_ref(&StixId::parse(MALWARE_ID).expect("target id"))
        .build()
        .expect("relationship")
}

// ============================================================================
// SECTION: Golden Serialization
// ============================================================================

#[test]
fn golden_relationship_serializes_in_declaration_order() {
    let link = golden_relationship();
    assert_eq!(link.as_object().to_string(), EXPECTED_RELATIONSHIP);
}

#[test]
fn typed_constructor_binds_source_verb_target() {
    let source = StixId::parse(INDICATOR_ID).expect("source id");
    let target = StixId::parse(MALWARE_ID).expect("target id");
    let link = Relationship::new(&source, "indicates", &target).expect("relationship");
    assert_eq!(link.relationship_type(), "indicates");
    assert_eq!(link.source_ref().as_str(), INDICATOR_ID);
    assert_eq!(link.target_ref().as_str(), MALWARE_ID);
    assert!(link.id().as_str().starts_with("relationship--"), "generated id must carry the type prefix");
}

#[test]
fn fresh_relationship_defaults_created_and_modified_to_one_instant() {
    let source = StixId::parse(INDICATOR_ID).expect("source id");
    let target = StixId::parse(MALWARE_ID).expect("target id");
    let link = Relationship::new(&source, "indicates", &target).expect("relationship");
    assert_eq!(link.created(), link.modified());
}

#[test]
fn accessors_expose_the_frozen_values() {
    let link = golden_relationship();
    assert_eq!(link.id().as_str(), RELATIONSHIP_ID);
    assert_eq!(link.created().to_string(), "2016-04-06T20:06:37.000Z");
    assert_eq!(link.description(), None);
    assert_eq!(link.start_time(), None);
    assert_eq!(link.stop_time(), None);
}

#[test]
fn typed_accessors_agree_with_key_lookup() {
    let link = golden_relationship();
    let object = link.as_object();
    assert_eq!(
        object.get("relationship_type").and_then(PropertyValue::as_str),
        Some(link.relationship_type()),
    );
    assert_eq!(
        object.get("source_ref").and_then(PropertyValue::as_identifier),
        Some(link.source_ref()),
    );
    assert_eq!(
        object.get("target_ref").and_then(PropertyValue::as_identifier),
        Some(link.target_ref()),
    );
    assert_eq!(
        object.get("created").and_then(PropertyValue::as_timestamp),
        Some(link.created()),
    );
    assert_eq!(object.get("id").and_then(PropertyValue::as_identifier), Some(link.id()));
}

// ============================================================================
// SECTION: Construction Errors
// ============================================================================

#[test]
fn wrong_type_value_is_rejected() {
    let schema = lookup_schema("relationship").expect("schema");
    let err = ObjectBuilder::new(schema).set("type", "xxx").build().unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for Relationship 'type': must equal 'relationship'.");
}

#[test]
fn foreign_id_prefix_is_rejected() {
    let schema = lookup_schema("relationship").expect("schema");
    let err = ObjectBuilder::new(schema)
        .set("id", "my-prefix--")
        .set("relationship_type", "indicates")
        .set("source_ref", INDICATOR_ID)
        .set("target_ref", MALWARE_ID)
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for Relationship 'id': must start with 'relationship--'.");
}

#[test]
fn missing_required_properties_are_reported_in_declaration_order() {
    let schema = lookup_schema("relationship").expect("schema");
    let err = ObjectBuilder::new(schema).build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "No values for required properties for Relationship: (relationship_type, source_ref, target_ref)."
    );
    assert!(matches!(
        err,
        ObjectError::MissingProperties {
            ..
        }
    ));
}

#[test]
fn unexpected_properties_are_rejected_by_default() {
    let schema = lookup_schema("relationship").expect("schema");
    let err = ObjectBuilder::new(schema)
        .set("relationship_type", "indicates")
        .set("source_ref", INDICATOR_ID)
        .set("target_ref", MALWARE_ID)
        .set("my_custom_property", "foo")
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Unexpected properties for Relationship: (my_custom_property).");
}

#[test]
fn relationship_type_must_be_a_string() {
    let schema = lookup_schema("relationship").expect("schema");
    let err = ObjectBuilder::new(schema)
        .set("relationship_type", 7_i64)
        .set("source_ref", INDICATOR_ID)
        .set("target_ref", MALWARE_ID)
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for Relationship 'relationship_type': must be a string.");
}

#[test]
fn source_ref_must_be_a_valid_identifier() {
    let schema = lookup_schema("relationship").expect("schema");
    let err = ObjectBuilder::new(schema)
        .set("relationship_type", "indicates")
        .set("source_ref", "not an id")
        .set("target_ref", MALWARE_ID)
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for Relationship 'source_ref': must be a valid identifier.");
}

// ============================================================================
// SECTION: Temporal Rules
// ============================================================================

#[test]
fn stop_time_before_start_time_is_rejected() {
    let start = StixTimestamp::parse("2016-04-06T20:06:38.000Z").expect("start");
    let stop = StixTimestamp::parse("2016-04-06T20:06:37.000Z").expect("stop");
    let err = Relationship::builder()
        .id(StixId::parse(RELATIONSHIP_ID).expect("id"))
        .relationship_type("related-to")
        .source_ref(&StixId::parse(INDICATOR_ID).expect("source id"))
        .target_ref(&StixId::parse(MALWARE_ID).expect("target id"))
        .start_time(start)
        .stop_time(stop)
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), format!("{RELATIONSHIP_ID} 'stop_time' must be later than 'start_time'"));
}

#[test]
fn equal_start_and_stop_times_are_rejected() {
    let instant = StixTimestamp::parse("2016-04-06T20:06:37.000Z").expect("instant");
    let err = Relationship::builder()
        .id(StixId::parse(RELATIONSHIP_ID).expect("id"))
        .relationship_type("related-to")
        .source_ref(&StixId::parse(INDICATOR_ID).expect("source id"))
        .target_ref(&StixId::parse(MALWARE_ID).expect("target id"))
        .start_time(instant)
        .stop_time(instant)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        ObjectError::TemporalOrdering {
            ..
        }
    ));
}

#[test]
fn ordered_window_is_accepted() {
    let start = StixTimestamp::parse("2016-04-06T20:06:37.000Z").expect("start");
    let stop = StixTimestamp::parse("2016-04-06T20:06:38.000Z").expect("stop");
    let link = Relationship::builder()
        .relationship_type("related-to")
        .source_ref(&StixId::parse(INDICATOR_ID).expect("source id"))
        .target_ref(&StixId::parse(MALWARE_ID).expect("target id"))
        .start_time(start)
        .stop_time(stop)
        .build()
        .expect("relationship");
    assert_eq!(link.start_time(), Some(start));
    assert_eq!(link.stop_time(), Some(stop));
}

#[test]
fn timestamp_strings_coerce_at_the_builder_surface() {
    let link = Relationship::builder()
        .relationship_type("indicates")
        .source_ref(&StixId::parse(INDICATOR_ID).expect("source id"))
        .target_ref(&StixId::parse(MALWARE_ID).expect("target id"))
        .property("stop_time", "2036-04-06T20:03:48Z")
        .build()
        .expect("relationship");
    let expected = StixTimestamp::parse("2036-04-06T20:03:48.000Z").expect("stop");
    assert_eq!(link.stop_time(), Some(expected));
}

// ============================================================================
// SECTION: Immutability
// ============================================================================

#[test]
fn property_writes_after_creation_are_rejected() {
    let link = golden_relationship();
    let err = link
        .as_object()
        .set_property("relationship_type", PropertyValue::from("malicious-activity"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot modify 'relationship_type' property in 'Relationship' after creation.");
}

#[test]
fn property_removal_after_creation_is_rejected() {
    let link = golden_relationship();
    let err = link.as_object().remove_property("relationship_type").unwrap_err();
    assert_eq!(err.to_string(), "Cannot modify 'relationship_type' property in 'Relationship' after creation.");
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parse_round_trips_the_golden_document() {
    let options = ParseOptions {
        expected_type: Some("relationship".to_string()),
        ..ParseOptions::default()
    };
    let object = parse_with(EXPECTED_RELATIONSHIP, &options).expect("parse");
    assert_eq!(object.to_string(), EXPECTED_RELATIONSHIP);
}

#[test]
fn parse_accepts_timestamps_without_fractional_seconds() {
    let document = r#"{
        "type": "relationship",
        "spec_version": "2.1",
        "id": "relationship--df7c87eb-75d2-4948-af81-9d49d246f301",
        "created": "2016-04-06T20:06:37Z",
        "modified": "2016-04-06T20:06:37Z",
        "relationship_type": "indicates",
        "source_ref": "indicator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7",
        "target_ref": "malware--9c4638ec-f1de-4ddb-abf4-1b760417654e"
    }"#;
    let options = ParseOptions {
        expected_type: Some("relationship".to_string()),
        ..ParseOptions::default()
    };
    let object = parse_with(document, &options).expect("parse");
    assert_eq!(object.to_string(), EXPECTED_RELATIONSHIP);
}

#[test]
fn parse_rejects_a_mismatched_expected_type() {
    let options = ParseOptions {
        expected_type: Some("indicator".to_string()),
        ..ParseOptions::default()
    };
    let err = parse_with(EXPECTED_RELATIONSHIP, &options).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for Indicator 'type': must equal 'indicator'.");
}

#[test]
fn fresh_relationships_round_trip_property_by_property() {
    let source = StixId::parse(INDICATOR_ID).expect("source id");
    let target = StixId::parse(MALWARE_ID).expect("target id");
    let link = Relationship::new(&source, "indicates", &target).expect("relationship");
    let wire = to_canonical_json(link.as_object());
    let parsed = parse(&wire).expect("parse");
    assert_eq!(&parsed, link.as_object());
}

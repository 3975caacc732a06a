// crates/stix-forge-core/tests/parse.rs
// ============================================================================
// Module: Wire Decoding Tests
// Description: Verifies JSON parsing, schema resolution, and parse options.
// ============================================================================
//! ## Overview
//! Exercises the wire decoder: document-shape errors, unknown-type
//! resolution, expected-type pinning, custom-property admission, and the
//! guarantee that parsed objects pass through the same validation path as
//! constructed ones.

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

use serde_json::json;
use stix_forge_core::ObjectError;
use stix_forge_core::ParseOptions;
use stix_forge_core::PropertyValue;
use stix_forge_core::parse;
use stix_forge_core::parse_value;
use stix_forge_core::parse_value_with;
use stix_forge_core::parse_with;

// ============================================================================
// SECTION: Document Shape
// ============================================================================

#[test]
fn malformed_text_is_a_json_error() {
    let err = parse("{ not json").unwrap_err();
    assert!(matches!(err, ObjectError::Json(_)));
    assert!(err.to_string().starts_with("failed to decode json:"));
}

#[test]
fn top_level_arrays_are_rejected() {
    let err = parse("[1, 2, 3]").unwrap_err();
    assert_eq!(err.to_string(), "failed to decode json: top-level value must be a json object");
}

#[test]
fn documents_without_a_type_are_rejected() {
    let err = parse(r#"{"name": "ACME"}"#).unwrap_err();
    assert_eq!(err.to_string(), "failed to decode json: object is missing its 'type' property");
}

#[test]
fn unknown_types_are_rejected_by_name() {
    let err = parse(r#"{"type": "campaign"}"#).unwrap_err();
    assert_eq!(err, ObjectError::UnknownType("campaign".to_string()));
    assert_eq!(err.to_string(), "unknown object type: campaign");
}

// ============================================================================
// SECTION: Schema Resolution
// ============================================================================

#[test]
fn minimal_documents_resolve_and_validate() {
    let object = parse(r#"{"type": "identity", "name": "ACME Corp"}"#).expect("identity");
    assert_eq!(object.type_name(), "identity");
    assert_eq!(object.get("spec_version").and_then(PropertyValue::as_str), Some("2.1"));
    assert!(object.id().as_str().starts_with("identity--"));
    assert!(object.contains_property("created"));
    assert!(object.contains_property("modified"));
}

#[test]
fn parse_value_accepts_decoded_documents() {
    let document = json!({"type": "malware", "is_family": false});
    let object = parse_value(&document).expect("malware");
    assert_eq!(object.get("is_family"), Some(&PropertyValue::Boolean(false)));
}

#[test]
fn parsed_documents_run_full_validation() {
    let err = parse(r#"{"type": "relationship"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No values for required properties for Relationship: (relationship_type, source_ref, target_ref).",
    );
}

#[test]
fn parsed_documents_reject_unrecognized_properties() {
    let err = parse(r#"{"type": "identity", "name": "ACME Corp", "x_rating": 5}"#).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected properties for Identity: (x_rating).");
}

// ============================================================================
// SECTION: Options
// ============================================================================

#[test]
fn expected_type_pins_the_document_type() {
    let options = ParseOptions {
        expected_type: Some("indicator".to_string()),
        ..ParseOptions::default()
    };
    let err = parse_with(r#"{"type": "malware", "is_family": true}"#, &options).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for Indicator 'type': must equal 'indicator'.");
}

#[test]
fn unknown_expected_types_are_rejected_before_the_document_type() {
    let options = ParseOptions {
        expected_type: Some("campaign".to_string()),
        ..ParseOptions::default()
    };
    let err = parse_with(r#"{"type": "malware", "is_family": true}"#, &options).unwrap_err();
    assert_eq!(err, ObjectError::UnknownType("campaign".to_string()));
}

#[test]
fn allow_custom_admits_unrecognized_properties() {
    let options = ParseOptions {
        allow_custom: true,
        ..ParseOptions::default()
    };
    let object = parse_with(
        r#"{"type": "identity", "name": "ACME Corp", "x_rating": 5}"#,
        &options,
    )
    .expect("identity");
    assert_eq!(object.get("x_rating"), Some(&PropertyValue::Integer(5)));
    let (last_name, _) = object.properties().last().expect("properties");
    assert_eq!(last_name, "x_rating");
}

#[test]
fn allow_custom_still_enforces_the_name_rule() {
    let options = ParseOptions {
        allow_custom: true,
        ..ParseOptions::default()
    };
    let err = parse_with(
        r#"{"type": "identity", "name": "ACME Corp", "X-Rating": 5}"#,
        &options,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value for Identity 'X-Rating': must be a valid custom property name.",
    );
}

// ============================================================================
// SECTION: Contained Objects
// ============================================================================

#[test]
fn bundle_members_parse_recursively() {
    let document = json!({
        "type": "bundle",
        "id": "bundle--5d0092c5-5f74-4287-9642-33f4c354e56d",
        "objects": [
            {
                "type": "indicator",
                "pattern": "[ipv4-addr:value = '8.8.8.8']",
                "pattern_type": "stix",
            },
            {"type": "malware", "is_family": false},
        ],
    });
    let bundle = parse_value(&document).expect("bundle");
    assert_eq!(bundle.id().as_str(), "bundle--5d0092c5-5f74-4287-9642-33f4c354e56d");
    let members = bundle.get("objects").and_then(PropertyValue::as_list).expect("objects");
    assert_eq!(members.len(), 2);
    let indicator = members[0].as_object().expect("indicator");
    assert_eq!(indicator.type_name(), "indicator");
    assert!(indicator.contains_property("valid_from"));
}

#[test]
fn invalid_bundle_members_fail_the_whole_parse() {
    let document = json!({
        "type": "bundle",
        "objects": [{"type": "malware"}],
    });
    let err = parse_value(&document).unwrap_err();
    assert_eq!(err.to_string(), "No values for required properties for Malware: (is_family).");
}

#[test]
fn unknown_member_types_fail_the_whole_parse() {
    let document = json!({
        "type": "bundle",
        "objects": [{"type": "campaign", "name": "Glass Gazelle"}],
    });
    let err = parse_value(&document).unwrap_err();
    assert_eq!(err, ObjectError::UnknownType("campaign".to_string()));
}

#[test]
fn expected_type_does_not_cascade_into_members() {
    let document = json!({
        "type": "bundle",
        "objects": [{"type": "malware", "is_family": true}],
    });
    let options = ParseOptions {
        expected_type: Some("bundle".to_string()),
        ..ParseOptions::default()
    };
    let bundle = parse_value_with(&document, &options).expect("bundle");
    let members = bundle.get("objects").and_then(PropertyValue::as_list).expect("objects");
    assert_eq!(members.len(), 1);
}

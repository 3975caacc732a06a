// crates/stix-forge-core/tests/identifiers.rs
// ============================================================================
// Module: Identifier Tests
// Description: Verifies identifier parsing, generation, and derivation.
// ============================================================================
//! ## Overview
//! Covers the wire-form identifier rules: parsing and rejection cases,
//! random generation, and deterministic derivation from canonicalized
//! contributing properties with known-value vectors.

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
use stix_forge_core::IDENTIFIER_NAMESPACE;
use stix_forge_core::IdentifierError;
use stix_forge_core::StixId;

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parse_accepts_a_canonical_identifier() {
    let id = StixId::parse("indicator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7").expect("id");
    assert_eq!(id.type_name(), "indicator");
    assert_eq!(id.uuid_part(), "a740531e-63ff-4e49-a9e1-a0a3eed0e3e7");
    assert_eq!(id.to_string(), "indicator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7");
}

#[test]
fn parse_rejects_text_without_a_separator() {
    let err = StixId::parse("indicator-a740531e-63ff-4e49-a9e1-a0a3eed0e3e7").unwrap_err();
    assert!(matches!(err, IdentifierError::MissingSeparator(_)));
}

#[test]
fn parse_rejects_an_invalid_type_part() {
    for bad in ["Indicator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7", "in--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7", "ind_icator--a740531e-63ff-4e49-a9e1-a0a3eed0e3e7"] {
        let err = StixId::parse(bad).unwrap_err();
        assert!(matches!(err, IdentifierError::InvalidType(_)), "expected invalid type for {bad}");
    }
}

#[test]
fn parse_rejects_an_invalid_uuid_tail() {
    let err = StixId::parse("indicator--not-a-uuid").unwrap_err();
    assert!(matches!(err, IdentifierError::InvalidUuid(_)));
}

#[test]
fn parse_rejects_a_non_canonical_uuid_tail() {
    let err = StixId::parse("indicator--A740531E-63FF-4E49-A9E1-A0A3EED0E3E7").unwrap_err();
    assert!(matches!(err, IdentifierError::InvalidUuid(_)));
}

// ============================================================================
// SECTION: Generation
// ============================================================================

#[test]
fn random_identifiers_carry_the_type_prefix_and_parse_back() {
    let id = StixId::random("indicator");
    assert!(id.as_str().starts_with("indicator--"));
    StixId::parse(id.as_str()).expect("wire form");
}

#[test]
fn random_identifiers_differ_across_calls() {
    assert_ne!(StixId::random("indicator"), StixId::random("indicator"));
}

#[test]
fn namespace_matches_the_reserved_value() {
    assert_eq!(IDENTIFIER_NAMESPACE.to_string(), "00abedb4-aa42-466c-9c01-fed23315a9b7");
}

// ============================================================================
// SECTION: Deterministic Derivation
// ============================================================================

#[test]
fn deterministic_derivation_matches_known_vectors() {
    // uuid5 over {"value":"8.8.8.8"} in the reserved namespace
    let ip = StixId::deterministic("ipv4-addr", &json!({"value": "8.8.8.8"})).expect("ipv4 id");
    assert_eq!(ip.as_str(), "ipv4-addr--2f689bf9-0ff2-545f-aa61-e495eb8cecc7");

    // uuid5 over {"value":"example.com"} in the reserved namespace
    let domain =
        StixId::deterministic("domain-name", &json!({"value": "example.com"})).expect("domain id");
    assert_eq!(domain.as_str(), "domain-name--bedb4899-d24b-5401-bc86-8f6b4cc18ec7");
}

#[test]
fn deterministic_derivation_is_stable_across_calls() {
    let first = StixId::deterministic("ipv4-addr", &json!({"value": "198.51.100.3"})).expect("id");
    let second = StixId::deterministic("ipv4-addr", &json!({"value": "198.51.100.3"})).expect("id");
    assert_eq!(first, second);
}

#[test]
fn deterministic_derivation_ignores_contributing_key_order() {
    let forward = StixId::deterministic("domain-name", &json!({"value": "example.com", "x_rank": 1}))
        .expect("id");
    let reversed = StixId::deterministic("domain-name", &json!({"x_rank": 1, "value": "example.com"}))
        .expect("id");
    assert_eq!(forward, reversed);
}

#[test]
fn deterministic_derivation_differs_across_values() {
    let first = StixId::deterministic("ipv4-addr", &json!({"value": "8.8.8.8"})).expect("id");
    let second = StixId::deterministic("ipv4-addr", &json!({"value": "8.8.4.4"})).expect("id");
    assert_ne!(first, second);
}

// crates/stix-forge-core/tests/observables.rs
// ============================================================================
// Module: Observable Object Tests
// Description: Verifies deterministic observable identifiers and wrappers.
// ============================================================================
//! ## Overview
//! Covers the value-keyed observables: deterministic identifier derivation
//! with known-value vectors, identity across repeated construction,
//! divergence across values, explicit identifier override, and the wire
//! rendering of a derived object.

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

use stix_forge_core::DomainName;
use stix_forge_core::Ipv4Address;
use stix_forge_core::ObjectBuilder;
use stix_forge_core::TypedObject;
use stix_forge_core::parse;
use stix_forge_core::to_canonical_json;

/// Derived identifier for the `8.8.8.8` address.
const GOOGLE_DNS_ID: &str = "ipv4-addr--2f689bf9-0ff2-545f-aa61-e495eb8cecc7";

/// Derived identifier for the `example.com` domain.
const EXAMPLE_COM_ID: &str = "domain-name--bedb4899-d24b-5401-bc86-8f6b4cc18ec7";

// ============================================================================
// SECTION: Deterministic Identifiers
// ============================================================================

#[test]
fn address_identifiers_derive_from_the_value() {
    let address = Ipv4Address::new("8.8.8.8").expect("address");
    assert_eq!(address.id().as_str(), GOOGLE_DNS_ID);
    assert_eq!(address.value(), "8.8.8.8");
}

#[test]
fn domain_identifiers_derive_from_the_value() {
    let domain = DomainName::new("example.com").expect("domain");
    assert_eq!(domain.id().as_str(), EXAMPLE_COM_ID);
    assert_eq!(domain.value(), "example.com");
}

#[test]
fn equal_values_yield_equal_identifiers() {
    let first = Ipv4Address::new("198.51.100.3").expect("first");
    let second = Ipv4Address::new("198.51.100.3").expect("second");
    assert_eq!(first.id(), second.id());
    assert_eq!(first.id().as_str(), "ipv4-addr--28bb3599-77cd-5a82-a950-b5bc3caf07c4");
}

#[test]
fn different_values_yield_different_identifiers() {
    let first = Ipv4Address::new("8.8.8.8").expect("first");
    let second = Ipv4Address::new("8.8.4.4").expect("second");
    assert_ne!(first.id(), second.id());
}

#[test]
fn identifiers_do_not_collide_across_types() {
    let address = Ipv4Address::new("example.com").expect("address");
    let domain = DomainName::new("example.com").expect("domain");
    assert_ne!(address.id(), domain.id());
    assert_eq!(address.id().uuid_part(), domain.id().uuid_part());
}

#[test]
fn explicit_identifiers_override_derivation() {
    let pinned = "ipv4-addr--11111111-2222-4333-8444-555555555555";
    let object = ObjectBuilder::new(Ipv4Address::schema())
        .set("id", pinned)
        .set("value", "8.8.8.8")
        .build()
        .expect("address");
    assert_eq!(object.id().as_str(), pinned);
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn the_value_property_is_required() {
    let err = ObjectBuilder::new(Ipv4Address::schema()).build().unwrap_err();
    assert_eq!(err.to_string(), "No values for required properties for IPv4Address: (value).");
}

#[test]
fn non_string_values_are_rejected() {
    let err = ObjectBuilder::new(Ipv4Address::schema())
        .set("value", 8_i64)
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for IPv4Address 'value': must be a string.");
}

#[test]
fn observables_carry_no_timestamps() {
    let address = Ipv4Address::new("8.8.8.8").expect("address");
    assert!(!address.as_object().contains_property("created"));
    assert!(!address.as_object().contains_property("modified"));
}

// ============================================================================
// SECTION: Wire Form
// ============================================================================

#[test]
fn derived_objects_render_the_stable_identifier() {
    let address = Ipv4Address::new("8.8.8.8").expect("address");
    let text = to_canonical_json(address.as_object());
    assert_eq!(
        text,
        format!(r#"{{"type":"ipv4-addr","spec_version":"2.1","id":"{GOOGLE_DNS_ID}","value":"8.8.8.8"}}"#),
    );
}

#[test]
fn parsing_a_derived_object_preserves_its_identifier() {
    let address = Ipv4Address::new("8.8.8.8").expect("address");
    let parsed = parse(&to_canonical_json(address.as_object())).expect("parsed");
    assert_eq!(parsed.id().as_str(), GOOGLE_DNS_ID);
    let wrapped = Ipv4Address::from_object(parsed).expect("wrapped");
    assert_eq!(wrapped.value(), "8.8.8.8");
}

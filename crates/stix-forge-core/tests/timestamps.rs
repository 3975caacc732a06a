// crates/stix-forge-core/tests/timestamps.rs
// ============================================================================
// Module: Timestamp Tests
// Description: Verifies canonical timestamp parsing, truncation, and display.
// ============================================================================
//! ## Overview
//! Covers the canonical timestamp rules: RFC 3339 parsing with and without
//! fractional seconds, millisecond truncation at every construction site,
//! offset normalization to UTC, and the fixed three-digit rendering.

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

use stix_forge_core::StixTimestamp;
use stix_forge_core::TimestampError;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Parsing
// ============================================================================

#[test]
fn parse_round_trips_a_millisecond_timestamp() {
    let ts = StixTimestamp::parse("2016-04-06T20:06:37.123Z").expect("timestamp");
    assert_eq!(ts.to_string(), "2016-04-06T20:06:37.123Z");
}

#[test]
fn parse_accepts_text_without_fractional_seconds() {
    let ts = StixTimestamp::parse("2016-04-06T20:06:37Z").expect("timestamp");
    assert_eq!(ts.to_string(), "2016-04-06T20:06:37.000Z");
}

#[test]
fn parse_truncates_sub_millisecond_precision() {
    let ts = StixTimestamp::parse("2016-04-06T20:06:37.999999Z").expect("timestamp");
    assert_eq!(ts.to_string(), "2016-04-06T20:06:37.999Z");
}

#[test]
fn parse_normalizes_offsets_to_utc() {
    let ts = StixTimestamp::parse("2016-04-06T21:06:37.000+01:00").expect("timestamp");
    assert_eq!(ts.to_string(), "2016-04-06T20:06:37.000Z");
}

#[test]
fn parse_rejects_malformed_text() {
    let err = StixTimestamp::parse("not a timestamp").unwrap_err();
    assert_eq!(err, TimestampError::Parse("not a timestamp".to_string()));
    assert_eq!(err.to_string(), "invalid rfc3339 timestamp: not a timestamp");
}

#[test]
fn parse_rejects_a_bare_date() {
    assert!(StixTimestamp::parse("2016-04-06").is_err());
}

// ============================================================================
// SECTION: Truncation
// ============================================================================

#[test]
fn from_datetime_floors_rather_than_rounds() {
    let raw = OffsetDateTime::parse("2016-04-06T20:06:37.1239999Z", &Rfc3339).expect("raw");
    let ts = StixTimestamp::from_datetime(raw);
    assert_eq!(ts.to_string(), "2016-04-06T20:06:37.123Z");
}

#[test]
fn truncated_values_compare_equal() {
    let coarse = StixTimestamp::parse("2016-04-06T20:06:37.123Z").expect("coarse");
    let fine = StixTimestamp::parse("2016-04-06T20:06:37.123456Z").expect("fine");
    assert_eq!(coarse, fine);
}

#[test]
fn now_carries_no_sub_millisecond_precision() {
    let now = StixTimestamp::now();
    assert_eq!(now.as_datetime().nanosecond() % 1_000_000, 0);
}

// ============================================================================
// SECTION: Ordering and Arithmetic
// ============================================================================

#[test]
fn epoch_renders_the_canonical_origin() {
    assert_eq!(StixTimestamp::EPOCH.to_string(), "1970-01-01T00:00:00.000Z");
}

#[test]
fn timestamps_order_chronologically() {
    let earlier = StixTimestamp::parse("2016-04-06T20:06:37.000Z").expect("earlier");
    let later = StixTimestamp::parse("2016-04-06T20:06:37.001Z").expect("later");
    assert!(earlier < later);
    assert!(later > earlier);
}

#[test]
fn plus_millis_advances_the_rendered_value() {
    let base = StixTimestamp::parse("2016-04-06T20:06:37.999Z").expect("base");
    let bumped = base.plus_millis(1);
    assert_eq!(bumped.to_string(), "2016-04-06T20:06:38.000Z");
    assert!(bumped > base);
}

#[test]
fn plus_millis_crosses_date_boundaries() {
    let base = StixTimestamp::parse("2016-12-31T23:59:59.999Z").expect("base");
    assert_eq!(base.plus_millis(1).to_string(), "2017-01-01T00:00:00.000Z");
}

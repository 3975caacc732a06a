// crates/stix-forge-core/examples/minimal.rs
// ============================================================================
// Module: STIX Forge Minimal Example
// Description: Minimal end-to-end object lifecycle using the builtin schemas.
// Purpose: Demonstrate construction, bundling, parsing, and versioning.
// Dependencies: stix-forge-core
// ============================================================================

//! ## Overview
//! Builds a small intelligence graph, bundles it, round-trips the bundle
//! through canonical JSON, and walks one object through a new version and
//! revocation. Suitable for quick verification.

use stix_forge_core::Bundle;
use stix_forge_core::Identity;
use stix_forge_core::Indicator;
use stix_forge_core::Ipv4Address;
use stix_forge_core::Malware;
use stix_forge_core::ParseOptions;
use stix_forge_core::PropertyValue;
use stix_forge_core::Relationship;
use stix_forge_core::Sighting;
use stix_forge_core::parse_with;
use stix_forge_core::revoke;
use stix_forge_core::to_canonical_json_pretty;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let author = Identity::builder()
        .name("ACME Threat Intel")
        .identity_class("organization")
        .build()?;

    let indicator = Indicator::builder()
        .name("File hash for Pteranodon")
        .pattern("[file:hashes.'SHA-256' = 'aec070645fe53ee3b3763059376134f058cc337247c978add178b6ccdfb0019f']")
        .pattern_type("stix")
        .created_by_ref(&author)
        .build()?;

    let malware = Malware::builder()
        .name("Pteranodon")
        .is_family(true)
        .malware_types(vec!["backdoor".to_string()])
        .build()?;

    let link = Relationship::new(&indicator, "indicates", &malware)?;
    let sighting = Sighting::builder().sighting_of_ref(&indicator).count(3).build()?;

    let first = Ipv4Address::new("198.51.100.3")?;
    let second = Ipv4Address::new("198.51.100.3")?;
    if first.id() != second.id() {
        return Err(Box::new(ExampleError("equal values must derive equal identifiers")));
    }

    let bundle = Bundle::builder()
        .add(author)
        .add(indicator)
        .add(malware)
        .add(link.clone())
        .add(sighting)
        .add(first)
        .build()?;

    let rendered = to_canonical_json_pretty(bundle.as_object());
    let options = ParseOptions {
        expected_type: Some("bundle".to_string()),
        ..ParseOptions::default()
    };
    let parsed = parse_with(&rendered, &options)?;
    if parsed.canonical_digest()? != bundle.as_object().canonical_digest()? {
        return Err(Box::new(ExampleError("round-trip must preserve the canonical digest")));
    }

    let renamed = stix_forge_core::new_version(
        link.as_object(),
        vec![("description".to_string(), PropertyValue::from("observed in campaign delta"))],
    )?;
    let retired = revoke(&renamed)?;
    let _ = (parsed, retired);
    Ok(())
}

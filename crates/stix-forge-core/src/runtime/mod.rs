// crates/stix-forge-core/src/runtime/mod.rs
// ============================================================================
// Module: STIX Forge Runtime
// Description: Construction engine and wire decoding.
// Purpose: Group the schema-driven builder with the parse entry points.
// Dependencies: crate::core, crate::objects
// ============================================================================

//! ## Overview
//! The runtime layer owns everything that turns inputs into frozen
//! objects: the schema-driven [`ObjectBuilder`] and the JSON parse entry
//! points that replay wire documents through it.

/// Schema-driven object construction.
pub mod builder;
/// JSON wire decoding.
pub mod parse;

pub use builder::ObjectBuilder;
pub use parse::ParseOptions;
pub use parse::SpecEdition;
pub use parse::parse;
pub use parse::parse_value;
pub use parse::parse_value_with;
pub use parse::parse_with;

//! Typed model of the design document JSON format.
//!
//! # Responsibility
//! - Define records, closed enums and tagged unions matching the wire shape.
//! - Provide discriminant-based narrowing helpers.
//!
//! # Invariants
//! - Field names and enum values are wire values and never renamed.
//! - Documented defaults are never applied while decoding.
//! - No value-range validation happens here.

pub mod blend;
pub mod effect;
pub mod export;
pub mod layout;
pub mod meta;
pub mod node;
pub mod paint;
pub mod primitives;
pub mod text;

//! Geometry and color primitives shared by every other model module.
//!
//! # Responsibility
//! - Define the small value records embedded in paints, effects and nodes.
//!
//! # Invariants
//! - Field names match the external JSON keys exactly.
//! - No range checks are applied; values are carried as received.

use serde::{Deserialize, Serialize};

/// An RGBA color. Every channel is expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Builds a color from its four channels.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// A bounding box in absolute coordinates. `x`/`y` are the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2d vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Builds a vector from its two components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Top two rows of a 2D affine matrix, row-major.
///
/// The bottom row is implicitly `(0, 0, 1)` and is never sent. Kept as a
/// nested sequence so a producer that omits or adds rows still decodes.
pub type Transform = Vec<Vec<f64>>;

/// Fill rule for a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathWindingRule {
    #[serde(rename = "EVENODD")]
    EvenOdd,
    #[serde(rename = "NONZERO")]
    NonZero,
}

impl PathWindingRule {
    pub const ALL: [Self; 2] = [Self::EvenOdd, Self::NonZero];

    /// Wire value of this rule.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EvenOdd => "EVENODD",
            Self::NonZero => "NONZERO",
        }
    }
}

/// A vector path in SVG notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    /// Sequence of path commands, e.g. `M 0 0 L 10 10 Z`.
    pub path: String,
    pub winding_rule: PathWindingRule,
}

/// A relative offset within a frame.
///
/// Unlike most records here this one uses snake_case keys on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameOffset {
    /// Id of the frame the offset is relative to.
    pub node_id: String,
    pub node_offset: Vector,
}

/// A gradient stop: position along the gradient axis and its color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Between 0 and 1.
    pub position: f64,
    pub color: Color,
}

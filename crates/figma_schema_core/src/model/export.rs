//! Export settings attached to canvases, frames and slices.

use serde::{Deserialize, Serialize};

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageType {
    Jpg,
    Png,
    Svg,
}

impl ImageType {
    /// Every image format, in wire order.
    pub const ALL: [Self; 3] = [Self::Jpg, Self::Png, Self::Svg];

    /// Wire value of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "JPG",
            Self::Png => "PNG",
            Self::Svg => "SVG",
        }
    }
}

/// Discriminant of [`Constrain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstrainType {
    Scale,
    Width,
    Height,
}

impl ConstrainType {
    /// Every constraint type, in wire order.
    pub const ALL: [Self; 3] = [Self::Scale, Self::Width, Self::Height];

    /// Wire value of this constraint type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scale => "SCALE",
            Self::Width => "WIDTH",
            Self::Height => "HEIGHT",
        }
    }
}

/// Sizing constraint for an exported asset, tagged by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Constrain {
    /// Scale by `value`.
    Scale { value: f64 },
    /// Scale proportionally and set width to `value`.
    Width { value: f64 },
    /// Scale proportionally and set height to `value`.
    Height { value: f64 },
}

impl Constrain {
    /// The `type` tag of this constraint.
    pub fn constrain_type(&self) -> ConstrainType {
        match self {
            Self::Scale { .. } => ConstrainType::Scale,
            Self::Width { .. } => ConstrainType::Width,
            Self::Height { .. } => ConstrainType::Height,
        }
    }

    /// The payload shared by every variant; its meaning depends on the tag.
    pub fn value(&self) -> f64 {
        match self {
            Self::Scale { value } | Self::Width { value } | Self::Height { value } => *value,
        }
    }
}

/// Format and size to export an asset at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSetting {
    /// File suffix appended to every exported filename.
    pub suffix: String,
    pub format: ImageType,
    pub constraint: Constrain,
}

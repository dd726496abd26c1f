//! Fill and stroke paints.
//!
//! # Responsibility
//! - Model the `Paint` tagged union and its narrowing helpers.
//!
//! # Invariants
//! - `visible` and `opacity` are present on every paint. Their documented
//!   defaults (`true`, `1`) are never filled in by this crate.
//! - Gradient payload is guaranteed iff the tag is one of the four
//!   `GRADIENT_*` values.

use crate::model::primitives::{Color, ColorStop, Vector};
use serde::{Deserialize, Serialize};

/// Discriminant of [`Paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    /// A solid color.
    Solid,
    /// A linear gradient.
    GradientLinear,
    /// A radial gradient.
    GradientRadial,
    /// A conic gradient around the center handle.
    GradientAngular,
    /// A diamond-shaped gradient.
    GradientDiamond,
    /// An image fill.
    Image,
    /// An emoji glyph.
    Emoji,
}

impl PaintType {
    /// Every paint type, in wire order.
    pub const ALL: [Self; 7] = [
        Self::Solid,
        Self::GradientLinear,
        Self::GradientRadial,
        Self::GradientAngular,
        Self::GradientDiamond,
        Self::Image,
        Self::Emoji,
    ];

    /// Wire value of this paint type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "SOLID",
            Self::GradientLinear => "GRADIENT_LINEAR",
            Self::GradientRadial => "GRADIENT_RADIAL",
            Self::GradientAngular => "GRADIENT_ANGULAR",
            Self::GradientDiamond => "GRADIENT_DIAMOND",
            Self::Image => "IMAGE",
            Self::Emoji => "EMOJI",
        }
    }

    /// True for the four `GRADIENT_*` types.
    pub fn is_gradient(self) -> bool {
        matches!(
            self,
            Self::GradientLinear
                | Self::GradientRadial
                | Self::GradientAngular
                | Self::GradientDiamond
        )
    }
}

/// How an image paint is scaled into its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageScaleMode {
    /// Covers the node, cropping the image.
    Fill,
    /// Fits inside the node, keeping the aspect ratio.
    Fit,
    /// Repeats the image at its natural size.
    Tile,
    /// Stretches to the node bounds.
    Stretch,
}

impl ImageScaleMode {
    /// Every scale mode, in wire order.
    pub const ALL: [Self; 4] = [Self::Fill, Self::Fit, Self::Tile, Self::Stretch];

    /// Wire value of this scale mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "FILL",
            Self::Fit => "FIT",
            Self::Tile => "TILE",
            Self::Stretch => "STRETCH",
        }
    }
}

/// Payload of `SOLID`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidPaint {
    /// Documented default `true`.
    pub visible: bool,
    /// Documented default `1`. Multiplies with the alpha of `color`.
    pub opacity: f64,
    pub color: Color,
}

/// Payload of the four `GRADIENT_*` paints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientPaint {
    pub visible: bool,
    pub opacity: f64,
    /// Three positions in normalized object space: start (stop 0), end
    /// (stop 1), and a width handle used only by non-linear gradients.
    pub gradient_handle_positions: Vec<Vector>,
    /// Key points along the gradient axis; colors interpolate between them.
    pub gradient_stops: Vec<ColorStop>,
}

/// Payload of `IMAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePaint {
    pub visible: bool,
    pub opacity: f64,
    pub scale_mode: ImageScaleMode,
}

/// Payload of `EMOJI`, which has no paint-specific fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmojiPaint {
    pub visible: bool,
    pub opacity: f64,
}

/// A solid color, gradient, image or emoji applied as a fill or stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(SolidPaint),
    GradientLinear(GradientPaint),
    GradientRadial(GradientPaint),
    GradientAngular(GradientPaint),
    GradientDiamond(GradientPaint),
    Image(ImagePaint),
    Emoji(EmojiPaint),
}

impl Paint {
    /// The `type` tag of this paint.
    pub fn paint_type(&self) -> PaintType {
        match self {
            Self::Solid(_) => PaintType::Solid,
            Self::GradientLinear(_) => PaintType::GradientLinear,
            Self::GradientRadial(_) => PaintType::GradientRadial,
            Self::GradientAngular(_) => PaintType::GradientAngular,
            Self::GradientDiamond(_) => PaintType::GradientDiamond,
            Self::Image(_) => PaintType::Image,
            Self::Emoji(_) => PaintType::Emoji,
        }
    }

    /// Whether the paint is enabled.
    pub fn visible(&self) -> bool {
        match self {
            Self::Solid(paint) => paint.visible,
            Self::GradientLinear(paint)
            | Self::GradientRadial(paint)
            | Self::GradientAngular(paint)
            | Self::GradientDiamond(paint) => paint.visible,
            Self::Image(paint) => paint.visible,
            Self::Emoji(paint) => paint.visible,
        }
    }

    /// Overall opacity of the paint.
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Solid(paint) => paint.opacity,
            Self::GradientLinear(paint)
            | Self::GradientRadial(paint)
            | Self::GradientAngular(paint)
            | Self::GradientDiamond(paint) => paint.opacity,
            Self::Image(paint) => paint.opacity,
            Self::Emoji(paint) => paint.opacity,
        }
    }

    /// Solid payload of `SOLID`.
    pub fn as_solid(&self) -> Option<&SolidPaint> {
        match self {
            Self::Solid(paint) => Some(paint),
            _ => None,
        }
    }

    /// Gradient payload of any `GRADIENT_*` paint.
    pub fn as_gradient(&self) -> Option<&GradientPaint> {
        match self {
            Self::GradientLinear(paint)
            | Self::GradientRadial(paint)
            | Self::GradientAngular(paint)
            | Self::GradientDiamond(paint) => Some(paint),
            _ => None,
        }
    }

    /// Image payload of `IMAGE`.
    pub fn as_image(&self) -> Option<&ImagePaint> {
        match self {
            Self::Image(paint) => Some(paint),
            _ => None,
        }
    }
}

/// Returns whether `paint` is `SOLID`.
pub fn is_paint_solid(paint: &Paint) -> bool {
    paint.paint_type() == PaintType::Solid
}

/// Returns whether `paint` is one of the four `GRADIENT_*` paints.
pub fn is_paint_gradient(paint: &Paint) -> bool {
    paint.paint_type().is_gradient()
}

/// Returns whether `paint` is `IMAGE`.
pub fn is_paint_image(paint: &Paint) -> bool {
    paint.paint_type() == PaintType::Image
}

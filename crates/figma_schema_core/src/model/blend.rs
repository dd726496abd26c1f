//! Blend modes and prototyping easing curves.

use serde::{Deserialize, Serialize};

/// How a layer or shadow blends with what lies behind it.
///
/// Grouped as normal, darken, lighten, contrast, inversion and component
/// blends, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    /// Only applicable to objects with children.
    PassThrough,
    /// Paints over what lies behind.
    Normal,
    /// Keeps the darker channel of the two colors.
    Darken,
    /// Multiplies the two colors.
    Multiply,
    /// Adds the two colors and subtracts white.
    LinearBurn,
    /// Darkens what lies behind by raising contrast.
    ColorBurn,
    /// Keeps the lighter channel of the two colors.
    Lighten,
    /// Multiplies the inverses of the two colors.
    Screen,
    /// Adds the two colors.
    LinearDodge,
    /// Brightens what lies behind by lowering contrast.
    ColorDodge,
    /// Multiplies or screens depending on the color behind.
    Overlay,
    /// Gently darkens or lightens depending on the layer color.
    SoftLight,
    /// Multiplies or screens depending on the layer color.
    HardLight,
    /// Subtracts the darker color from the lighter one.
    Difference,
    /// Like `Difference` with lower contrast.
    Exclusion,
    /// Hue of the layer over the saturation and luminosity behind.
    Hue,
    /// Saturation of the layer over the hue and luminosity behind.
    Saturation,
    /// Hue and saturation of the layer over the luminosity behind.
    Color,
    /// Luminosity of the layer over the hue and saturation behind.
    Luminosity,
}

impl BlendMode {
    /// Every blend mode, in wire order.
    pub const ALL: [Self; 19] = [
        Self::PassThrough,
        Self::Normal,
        Self::Darken,
        Self::Multiply,
        Self::LinearBurn,
        Self::ColorBurn,
        Self::Lighten,
        Self::Screen,
        Self::LinearDodge,
        Self::ColorDodge,
        Self::Overlay,
        Self::SoftLight,
        Self::HardLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];

    /// Wire value of this blend mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PassThrough => "PASS_THROUGH",
            Self::Normal => "NORMAL",
            Self::Darken => "DARKEN",
            Self::Multiply => "MULTIPLY",
            Self::LinearBurn => "LINEAR_BURN",
            Self::ColorBurn => "COLOR_BURN",
            Self::Lighten => "LIGHTEN",
            Self::Screen => "SCREEN",
            Self::LinearDodge => "LINEAR_DODGE",
            Self::ColorDodge => "COLOR_DODGE",
            Self::Overlay => "OVERLAY",
            Self::SoftLight => "SOFT_LIGHT",
            Self::HardLight => "HARD_LIGHT",
            Self::Difference => "DIFFERENCE",
            Self::Exclusion => "EXCLUSION",
            Self::Hue => "HUE",
            Self::Saturation => "SATURATION",
            Self::Color => "COLOR",
            Self::Luminosity => "LUMINOSITY",
        }
    }
}

/// Animation easing curve used by prototyping transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EasingType {
    /// Similar to CSS `ease-in`.
    EaseIn,
    /// Similar to CSS `ease-out`.
    EaseOut,
    /// Similar to CSS `ease-in-out`.
    EaseInAndOut,
}

impl EasingType {
    /// Every easing curve, in wire order.
    pub const ALL: [Self; 3] = [Self::EaseIn, Self::EaseOut, Self::EaseInAndOut];

    /// Wire value of this easing curve.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EaseIn => "EASE_IN",
            Self::EaseOut => "EASE_OUT",
            Self::EaseInAndOut => "EASE_IN_AND_OUT",
        }
    }
}

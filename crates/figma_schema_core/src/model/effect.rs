//! Shadow and blur effects.
//!
//! # Invariants
//! - Shadow variants always carry color, blend mode and offset.
//! - Blur variants carry only the fields shared by every effect.

use crate::model::blend::BlendMode;
use crate::model::primitives::{Color, Vector};
use serde::{Deserialize, Serialize};

/// Discriminant of [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    /// Shadow cast inside the node outline.
    InnerShadow,
    /// Shadow cast behind the node.
    DropShadow,
    /// Blurs the node itself.
    LayerBlur,
    /// Blurs what lies behind the node.
    BackgroundBlur,
}

impl EffectType {
    /// Every effect type, in wire order.
    pub const ALL: [Self; 4] = [
        Self::InnerShadow,
        Self::DropShadow,
        Self::LayerBlur,
        Self::BackgroundBlur,
    ];

    /// Wire value of this effect type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InnerShadow => "INNER_SHADOW",
            Self::DropShadow => "DROP_SHADOW",
            Self::LayerBlur => "LAYER_BLUR",
            Self::BackgroundBlur => "BACKGROUND_BLUR",
        }
    }

    /// True for `INNER_SHADOW` and `DROP_SHADOW`.
    pub fn is_shadow(self) -> bool {
        matches!(self, Self::InnerShadow | Self::DropShadow)
    }

    /// True for `LAYER_BLUR` and `BACKGROUND_BLUR`.
    pub fn is_blur(self) -> bool {
        matches!(self, Self::LayerBlur | Self::BackgroundBlur)
    }
}

/// Payload of `INNER_SHADOW` and `DROP_SHADOW`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowEffect {
    /// Is the effect active?
    pub visible: bool,
    /// Blur radius of the shadow.
    pub radius: f64,
    pub color: Color,
    pub blend_mode: BlendMode,
    /// How far the shadow is projected in x and y.
    pub offset: Vector,
}

/// Payload of `LAYER_BLUR` and `BACKGROUND_BLUR`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurEffect {
    pub visible: bool,
    pub radius: f64,
}

/// A visual effect attached to a node, tagged by `type`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    InnerShadow(ShadowEffect),
    DropShadow(ShadowEffect),
    LayerBlur(BlurEffect),
    BackgroundBlur(BlurEffect),
}

impl Effect {
    /// The `type` tag of this effect.
    pub fn effect_type(&self) -> EffectType {
        match self {
            Self::InnerShadow(_) => EffectType::InnerShadow,
            Self::DropShadow(_) => EffectType::DropShadow,
            Self::LayerBlur(_) => EffectType::LayerBlur,
            Self::BackgroundBlur(_) => EffectType::BackgroundBlur,
        }
    }

    /// Whether the effect is active.
    pub fn visible(&self) -> bool {
        match self {
            Self::InnerShadow(shadow) | Self::DropShadow(shadow) => shadow.visible,
            Self::LayerBlur(blur) | Self::BackgroundBlur(blur) => blur.visible,
        }
    }

    /// Blur radius, shared by every variant.
    pub fn radius(&self) -> f64 {
        match self {
            Self::InnerShadow(shadow) | Self::DropShadow(shadow) => shadow.radius,
            Self::LayerBlur(blur) | Self::BackgroundBlur(blur) => blur.radius,
        }
    }

    /// Shadow payload of the two shadow variants.
    pub fn as_shadow(&self) -> Option<&ShadowEffect> {
        match self {
            Self::InnerShadow(shadow) | Self::DropShadow(shadow) => Some(shadow),
            Self::LayerBlur(_) | Self::BackgroundBlur(_) => None,
        }
    }

    /// Blur payload of the two blur variants.
    pub fn as_blur(&self) -> Option<&BlurEffect> {
        match self {
            Self::LayerBlur(blur) | Self::BackgroundBlur(blur) => Some(blur),
            Self::InnerShadow(_) | Self::DropShadow(_) => None,
        }
    }
}

/// Returns whether `effect` is `DROP_SHADOW` or `INNER_SHADOW`.
pub fn is_effect_shadow(effect: &Effect) -> bool {
    effect.effect_type().is_shadow()
}

/// Returns whether `effect` is `LAYER_BLUR` or `BACKGROUND_BLUR`.
pub fn is_effect_blur(effect: &Effect) -> bool {
    effect.effect_type().is_blur()
}

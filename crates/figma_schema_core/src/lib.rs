//! Typed schema for design documents returned by the Figma REST API.
//! This crate is the single source of truth for wire names and shapes.

pub mod codec;
pub mod logging;
pub mod model;

pub use codec::{DecodeError, DecodeResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::blend::{BlendMode, EasingType};
pub use model::effect::{
    is_effect_blur, is_effect_shadow, BlurEffect, Effect, EffectType, ShadowEffect,
};
pub use model::export::{Constrain, ConstrainType, ExportSetting, ImageType};
pub use model::layout::{
    DirectionalGrid, LayoutConstraint, LayoutConstraintHorizontal, LayoutConstraintVertical,
    LayoutGrid, LayoutGridAlignment, LayoutGridPattern, SquareGrid,
};
pub use model::meta::{ClientMeta, Comment, Component, Style, StyleType, User, Version};
pub use model::node::{
    is_node_type, BooleanNode, CanvasNode, ComponentId, DocumentNode, FrameNode, InstanceNode,
    Node, NodeId, NodeKind, NodeType, RectangleNode, SliceNode, StrokeAlign, StyleId, TextNode,
    VectorNode, Walk,
};
pub use model::paint::{
    is_paint_gradient, is_paint_image, is_paint_solid, EmojiPaint, GradientPaint,
    ImagePaint, ImageScaleMode, Paint, PaintType, SolidPaint,
};
pub use model::primitives::{
    Color, ColorStop, FrameOffset, Path, PathWindingRule, Rectangle, Transform, Vector,
};
pub use model::text::{TextAlignHorizontal, TextAlignVertical, TypeStyle};

/// Minimal health-check API for integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Document node tree.
//!
//! # Responsibility
//! - Model every node variant as one arm of a `type`-tagged union.
//! - Provide read-only traversal over the tree.
//!
//! # Invariants
//! - `id`, `name`, `visible` and `type` are present on every node.
//! - Variant fields are guaranteed present iff the tag selects that variant.
//! - Optionality differs between sibling shapes (e.g. `opacity` is required
//!   on frames but optional on vectors) and is kept as the service sends it.
//! - Optional fields are omitted again on encode.

use crate::model::blend::{BlendMode, EasingType};
use crate::model::effect::Effect;
use crate::model::export::ExportSetting;
use crate::model::layout::{LayoutConstraint, LayoutGrid};
use crate::model::meta::StyleType;
use crate::model::paint::Paint;
use crate::model::primitives::{Color, Path, Rectangle, Transform, Vector};
use crate::model::text::TypeStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque node identifier, e.g. `1:2`.
pub type NodeId = String;

/// Key into the file's components table.
pub type ComponentId = String;

/// Key into the file's styles table.
pub type StyleId = String;

/// Discriminant of [`NodeKind`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// Root of the document tree.
    Document,
    /// A page.
    Canvas,
    /// A fixed-size container.
    Frame,
    /// A logical grouping of nodes.
    Group,
    /// A vector network.
    Vector,
    /// A boolean group tagged `BOOLEAN`.
    Boolean,
    /// A boolean group tagged `BOOLEAN_OPERATION`.
    BooleanOperation,
    /// A star shape.
    Star,
    /// A straight line.
    Line,
    /// An ellipse.
    Ellipse,
    /// A regular n-sided polygon.
    RegularPolygon,
    /// A rectangle, optionally with rounded corners.
    Rectangle,
    /// A text box.
    Text,
    /// An exportable region of the canvas.
    Slice,
    /// A master component.
    Component,
    /// An instance of a component.
    Instance,
}

impl NodeType {
    /// Every node type, in wire order.
    pub const ALL: [Self; 16] = [
        Self::Document,
        Self::Canvas,
        Self::Frame,
        Self::Group,
        Self::Vector,
        Self::Boolean,
        Self::BooleanOperation,
        Self::Star,
        Self::Line,
        Self::Ellipse,
        Self::RegularPolygon,
        Self::Rectangle,
        Self::Text,
        Self::Slice,
        Self::Component,
        Self::Instance,
    ];

    /// Wire value of this node type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Canvas => "CANVAS",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Vector => "VECTOR",
            Self::Boolean => "BOOLEAN",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Star => "STAR",
            Self::Line => "LINE",
            Self::Ellipse => "ELLIPSE",
            Self::RegularPolygon => "REGULAR_POLYGON",
            Self::Rectangle => "RECTANGLE",
            Self::Text => "TEXT",
            Self::Slice => "SLICE",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
        }
    }
}

/// Where a stroke is drawn relative to the shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    /// Drawn inside the outline.
    Inside,
    /// Drawn outside the outline.
    Outside,
    /// Centered on the outline.
    Center,
}

impl StrokeAlign {
    /// Every stroke alignment, in wire order.
    pub const ALL: [Self; 3] = [Self::Inside, Self::Outside, Self::Center];

    /// Wire value of this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inside => "INSIDE",
            Self::Outside => "OUTSIDE",
            Self::Center => "CENTER",
        }
    }
}

/// One element of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within the file.
    pub id: NodeId,
    /// Name given by the user in the editor.
    pub name: String,
    /// Whether the node is shown on the canvas. Documented default `true`.
    pub visible: bool,
    /// Serialized inline, with the variant name as `type`.
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Variant payloads keyed by the node `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// The root node.
    Document(DocumentNode),
    /// A single page.
    Canvas(CanvasNode),
    /// A node of fixed size containing other nodes.
    Frame(FrameNode),
    /// A logical grouping of nodes.
    Group(FrameNode),
    /// A vector network of vertices and edges.
    Vector(VectorNode),
    /// A group with a boolean operation applied.
    Boolean(BooleanNode),
    /// Same payload as `Boolean`, under its own tag.
    BooleanOperation(BooleanNode),
    /// A star shape.
    Star(VectorNode),
    /// A straight line.
    Line(VectorNode),
    /// An ellipse.
    Ellipse(VectorNode),
    /// A regular n-sided polygon.
    RegularPolygon(VectorNode),
    /// A rectangle with an optional corner radius.
    Rectangle(RectangleNode),
    /// A text box with per-character style overrides.
    Text(TextNode),
    /// A rectangular region of the canvas that can be exported.
    Slice(SliceNode),
    /// A node that instances can be created from.
    Component(FrameNode),
    /// An instance of a component; changes to the component apply here too.
    Instance(InstanceNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Canvases attached to the document.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    /// Top level layers on the canvas.
    pub children: Vec<Node>,
    pub background_color: Color,
    /// Documented default `[]`.
    pub export_settings: Vec<ExportSetting>,
}

/// Shared payload of `FRAME`, `GROUP` and `COMPONENT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameNode {
    pub children: Vec<Node>,
    pub background_color: Color,
    /// Documented default `[]`.
    pub export_settings: Vec<ExportSetting>,
    pub blend_mode: BlendMode,
    /// Documented default `false`.
    pub preserve_ratio: bool,
    pub constraints: LayoutConstraint,
    /// Target of the prototyping transition.
    #[serde(
        rename = "transitionNodeID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_node_id: Option<NodeId>,
    /// In milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_easing: Option<EasingType>,
    /// Documented default `1`.
    pub opacity: f64,
    pub absolute_bounding_box: Rectangle,
    /// Only present when geometry paths were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vector>,
    /// Only present when geometry paths were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_transform: Option<Transform>,
    pub clips_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_grids: Option<Vec<LayoutGrid>>,
    /// Documented default `[]`.
    pub effects: Vec<Effect>,
    /// Documented default `false`.
    pub is_mask: bool,
}

/// Shared payload of `VECTOR`, `STAR`, `LINE`, `ELLIPSE` and
/// `REGULAR_POLYGON`, and the base of boolean, rectangle and text nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorNode {
    pub export_settings: Vec<ExportSetting>,
    pub blend_mode: BlendMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_ratio: Option<bool>,
    pub constraints: LayoutConstraint,
    #[serde(
        rename = "transitionNodeID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_node_id: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_easing: Option<EasingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub absolute_bounding_box: Rectangle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_transform: Option<Transform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mask: Option<bool>,
    pub fills: Vec<Paint>,
    /// Only present when geometry paths were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_geometry: Option<Vec<Path>>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_geometry: Option<Vec<Path>>,
    pub stroke_align: StrokeAlign,
    /// Style ids applied to this node, keyed by style kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<BTreeMap<StyleType, StyleId>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanNode {
    #[serde(flatten)]
    pub vector: VectorNode,
    /// Nodes the boolean operation is applied to.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleNode {
    #[serde(flatten)]
    pub vector: VectorNode,
    pub corner_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(flatten)]
    pub vector: VectorNode,
    pub characters: String,
    pub style: TypeStyle,
    /// One entry per character, indexing `style_override_table`; `0` means
    /// the default `style`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_style_overrides: Option<Vec<u32>>,
    /// Keyed by the override index as it appears on the wire (a JSON
    /// object key, so a decimal string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_override_table: Option<BTreeMap<String, TypeStyle>>,
}

impl TextNode {
    /// Resolves the effective style for the character at `index`.
    ///
    /// Falls back to `style` when there is no override entry or the
    /// override table lacks the referenced id.
    pub fn style_at(&self, index: usize) -> &TypeStyle {
        let override_id = self
            .character_style_overrides
            .as_ref()
            .and_then(|overrides| overrides.get(index).copied())
            .unwrap_or(0);
        if override_id == 0 {
            return &self.style;
        }
        self.style_override(override_id).unwrap_or(&self.style)
    }

    /// Looks up one override table entry by numeric id.
    pub fn style_override(&self, id: u32) -> Option<&TypeStyle> {
        self.style_override_table
            .as_ref()
            .and_then(|table| table.get(&id.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceNode {
    pub export_settings: Vec<ExportSetting>,
    pub absolute_bounding_box: Rectangle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_transform: Option<Transform>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceNode {
    #[serde(flatten)]
    pub frame: FrameNode,
    /// Component this instance came from.
    pub component_id: ComponentId,
}

impl NodeKind {
    /// The `type` tag of this variant.
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Document(_) => NodeType::Document,
            Self::Canvas(_) => NodeType::Canvas,
            Self::Frame(_) => NodeType::Frame,
            Self::Group(_) => NodeType::Group,
            Self::Vector(_) => NodeType::Vector,
            Self::Boolean(_) => NodeType::Boolean,
            Self::BooleanOperation(_) => NodeType::BooleanOperation,
            Self::Star(_) => NodeType::Star,
            Self::Line(_) => NodeType::Line,
            Self::Ellipse(_) => NodeType::Ellipse,
            Self::RegularPolygon(_) => NodeType::RegularPolygon,
            Self::Rectangle(_) => NodeType::Rectangle,
            Self::Text(_) => NodeType::Text,
            Self::Slice(_) => NodeType::Slice,
            Self::Component(_) => NodeType::Component,
            Self::Instance(_) => NodeType::Instance,
        }
    }
}

impl Node {
    /// The `type` tag of this node.
    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// Direct children; empty for leaf variants.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Document(node) => &node.children,
            NodeKind::Canvas(node) => &node.children,
            NodeKind::Frame(node) | NodeKind::Group(node) | NodeKind::Component(node) => {
                &node.children
            }
            NodeKind::Instance(node) => &node.frame.children,
            NodeKind::Boolean(node) | NodeKind::BooleanOperation(node) => &node.children,
            NodeKind::Vector(_)
            | NodeKind::Star(_)
            | NodeKind::Line(_)
            | NodeKind::Ellipse(_)
            | NodeKind::RegularPolygon(_)
            | NodeKind::Rectangle(_)
            | NodeKind::Text(_)
            | NodeKind::Slice(_) => &[],
        }
    }

    /// Frame payload of `FRAME`, `GROUP`, `COMPONENT` and `INSTANCE`.
    pub fn as_frame(&self) -> Option<&FrameNode> {
        match &self.kind {
            NodeKind::Frame(node) | NodeKind::Group(node) | NodeKind::Component(node) => {
                Some(node)
            }
            NodeKind::Instance(node) => Some(&node.frame),
            _ => None,
        }
    }

    /// Vector payload of every vector-derived variant, including boolean,
    /// rectangle and text nodes.
    pub fn as_vector(&self) -> Option<&VectorNode> {
        match &self.kind {
            NodeKind::Vector(node)
            | NodeKind::Star(node)
            | NodeKind::Line(node)
            | NodeKind::Ellipse(node)
            | NodeKind::RegularPolygon(node) => Some(node),
            NodeKind::Boolean(node) | NodeKind::BooleanOperation(node) => Some(&node.vector),
            NodeKind::Rectangle(node) => Some(&node.vector),
            NodeKind::Text(node) => Some(&node.vector),
            _ => None,
        }
    }

    /// Text payload of `TEXT`.
    pub fn as_text(&self) -> Option<&TextNode> {
        match &self.kind {
            NodeKind::Text(node) => Some(node),
            _ => None,
        }
    }

    /// Instance payload of `INSTANCE`.
    pub fn as_instance(&self) -> Option<&InstanceNode> {
        match &self.kind {
            NodeKind::Instance(node) => Some(node),
            _ => None,
        }
    }

    /// Depth-first, pre-order traversal starting at (and including) `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// First node in pre-order whose id equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.walk().find(|node| node.id == id)
    }

    /// Number of nodes of each type in this subtree, `self` included.
    pub fn count_by_type(&self) -> BTreeMap<NodeType, usize> {
        let mut counts = BTreeMap::new();
        for node in self.walk() {
            *counts.entry(node.node_type()).or_insert(0) += 1;
        }
        counts
    }
}

/// Pre-order iterator returned by [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Returns whether `node` has the given `type` tag.
pub fn is_node_type(node: &Node, node_type: NodeType) -> bool {
    node.node_type() == node_type
}

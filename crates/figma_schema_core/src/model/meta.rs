//! File-level metadata records: styles, components, comments, users, versions.
//!
//! These records use snake_case wire keys, unlike the node tree.

use crate::model::primitives::{FrameOffset, Vector};
use serde::{Deserialize, Serialize};

/// Kind of a published style.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    /// A fill paint style.
    Fill,
    /// A text style.
    Text,
    /// An effect style.
    Effect,
    /// A layout grid style.
    Grid,
}

impl StyleType {
    pub const ALL: [Self; 4] = [Self::Fill, Self::Text, Self::Effect, Self::Grid];

    /// Wire value of this style type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "FILL",
            Self::Text => "TEXT",
            Self::Effect => "EFFECT",
            Self::Grid => "GRID",
        }
    }
}

/// A master component, used to identify what instances are attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// As entered in the editor.
    pub description: String,
}

/// A named, publishable set of properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub style_type: StyleType,
}

/// A description of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub handle: String,
    /// Profile image URL.
    pub img_url: String,
}

/// Where a comment is pinned.
///
/// The two shapes share no keys, so the wire form is matched structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientMeta {
    /// Offset relative to a frame.
    FrameOffset(FrameOffset),
    /// Absolute canvas coordinates.
    Position(Vector),
}

impl ClientMeta {
    /// Frame id when the comment is pinned inside a frame.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::FrameOffset(offset) => Some(offset.node_id.as_str()),
            Self::Position(_) => None,
        }
    }
}

/// A comment or reply left by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub client_meta: ClientMeta,
    /// Key of the file the comment lives in.
    pub file_key: String,
    /// Id of the comment this one replies to.
    pub parent_id: String,
    pub user: User,
    /// UTC ISO 8601.
    pub created_at: String,
    /// UTC ISO 8601, when resolved.
    pub resolved_at: String,
    /// Display number, only set on top level comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u32>,
    pub message: String,
}

impl Comment {
    /// True when `parent_id` names another comment.
    pub fn is_reply(&self) -> bool {
        !self.parent_id.is_empty()
    }

    /// True once `resolved_at` is set.
    pub fn is_resolved(&self) -> bool {
        !self.resolved_at.is_empty()
    }
}

/// A version of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub id: String,
    /// UTC ISO 8601.
    pub created_at: String,
    pub label: String,
    pub description: String,
    pub user: User,
}

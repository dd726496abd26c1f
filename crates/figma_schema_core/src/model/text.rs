//! Character formatting for text nodes.

use crate::model::paint::Paint;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Right,
    Center,
    Justified,
}

impl TextAlignHorizontal {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Center, Self::Justified];

    /// Wire value of this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Center => "CENTER",
            Self::Justified => "JUSTIFIED",
        }
    }
}

/// Vertical alignment of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    Top,
    Center,
    Bottom,
}

impl TextAlignVertical {
    pub const ALL: [Self; 3] = [Self::Top, Self::Center, Self::Bottom];

    /// Wire value of this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Center => "CENTER",
            Self::Bottom => "BOTTOM",
        }
    }
}

/// Metadata for character formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    /// Standard family name, e.g. `Inter`.
    pub font_family: String,
    pub font_post_script_name: String,
    pub italic: bool,
    pub font_weight: f64,
    /// In px.
    pub font_size: f64,
    pub text_align_horizontal: TextAlignHorizontal,
    pub text_align_vertical: TextAlignVertical,
    /// In px.
    pub letter_spacing: f64,
    /// Paints applied to the characters.
    pub fills: Vec<Paint>,
    pub line_height_px: f64,
    /// Percentage of the font's normal line height.
    pub line_height_percent: f64,
}

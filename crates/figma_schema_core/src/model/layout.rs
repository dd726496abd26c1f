//! Layout constraints and layout grids.
//!
//! # Invariants
//! - `COLUMNS`/`ROWS` grids always carry alignment, gutter, offset and count.
//! - `GRID` grids may carry the same keys, but they have no meaning there.

use crate::model::primitives::Color;
use serde::{Deserialize, Serialize};

/// Vertical constraint relative to the containing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutConstraintVertical {
    /// Laid out relative to the top of the frame.
    Top,
    /// Laid out relative to the bottom of the frame.
    Bottom,
    /// Vertically centered in the frame.
    Center,
    /// Top and bottom both pinned; the node stretches with the frame.
    TopBottom,
    /// Scales vertically with the frame.
    Scale,
}

impl LayoutConstraintVertical {
    pub const ALL: [Self; 5] = [
        Self::Top,
        Self::Bottom,
        Self::Center,
        Self::TopBottom,
        Self::Scale,
    ];

    /// Wire value of this constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::Center => "CENTER",
            Self::TopBottom => "TOP_BOTTOM",
            Self::Scale => "SCALE",
        }
    }
}

/// Horizontal constraint relative to the containing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutConstraintHorizontal {
    /// Laid out relative to the left of the frame.
    Left,
    /// Laid out relative to the right of the frame.
    Right,
    /// Horizontally centered in the frame.
    Center,
    /// Left and right both pinned; the node stretches with the frame.
    LeftRight,
    /// Scales horizontally with the frame.
    Scale,
}

impl LayoutConstraintHorizontal {
    pub const ALL: [Self; 5] = [
        Self::Left,
        Self::Right,
        Self::Center,
        Self::LeftRight,
        Self::Scale,
    ];

    /// Wire value of this constraint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Center => "CENTER",
            Self::LeftRight => "LEFT_RIGHT",
            Self::Scale => "SCALE",
        }
    }
}

/// Layout constraint relative to the containing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConstraint {
    pub vertical: LayoutConstraintVertical,
    pub horizontal: LayoutConstraintHorizontal,
}

/// Discriminant of [`LayoutGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutGridPattern {
    /// Vertical grid.
    Columns,
    /// Horizontal grid.
    Rows,
    /// Square grid.
    Grid,
}

impl LayoutGridPattern {
    pub const ALL: [Self; 3] = [Self::Columns, Self::Rows, Self::Grid];

    /// Wire value of this pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Columns => "COLUMNS",
            Self::Rows => "ROWS",
            Self::Grid => "GRID",
        }
    }
}

/// Where a directional grid starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutGridAlignment {
    /// Left or top of the frame.
    Min,
    /// Right or bottom of the frame.
    Max,
    /// Centered in the frame.
    Center,
}

impl LayoutGridAlignment {
    pub const ALL: [Self; 3] = [Self::Min, Self::Max, Self::Center];

    /// Wire value of this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Center => "CENTER",
        }
    }
}

/// Payload of a `COLUMNS` or `ROWS` grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalGrid {
    /// Width of a column or height of a row.
    pub section_size: f64,
    pub visible: bool,
    pub color: Color,
    pub alignment: LayoutGridAlignment,
    /// Spacing between columns or rows.
    pub gutter_size: f64,
    /// Spacing before the first column or row.
    pub offset: f64,
    pub count: i32,
}

/// Payload of a `GRID` (square) grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareGrid {
    /// Square cell spacing.
    pub section_size: f64,
    pub visible: bool,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<LayoutGridAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

/// Guides to align and place objects within a frame, tagged by `pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutGrid {
    Columns(DirectionalGrid),
    Rows(DirectionalGrid),
    Grid(SquareGrid),
}

impl LayoutGrid {
    /// The `pattern` tag of this grid.
    pub fn pattern(&self) -> LayoutGridPattern {
        match self {
            Self::Columns(_) => LayoutGridPattern::Columns,
            Self::Rows(_) => LayoutGridPattern::Rows,
            Self::Grid(_) => LayoutGridPattern::Grid,
        }
    }

    /// Width of columns and rows, or cell size of a square grid.
    pub fn section_size(&self) -> f64 {
        match self {
            Self::Columns(grid) | Self::Rows(grid) => grid.section_size,
            Self::Grid(grid) => grid.section_size,
        }
    }

    /// Whether the grid is shown in the editor.
    pub fn visible(&self) -> bool {
        match self {
            Self::Columns(grid) | Self::Rows(grid) => grid.visible,
            Self::Grid(grid) => grid.visible,
        }
    }

    /// Color used to draw the grid.
    pub fn color(&self) -> Color {
        match self {
            Self::Columns(grid) | Self::Rows(grid) => grid.color,
            Self::Grid(grid) => grid.color,
        }
    }

    /// Narrows to the directional payload for `COLUMNS` and `ROWS`.
    pub fn as_directional(&self) -> Option<&DirectionalGrid> {
        match self {
            Self::Columns(grid) | Self::Rows(grid) => Some(grid),
            Self::Grid(_) => None,
        }
    }
}

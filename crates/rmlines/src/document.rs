//! Decoded document tree
//!
//! ```text
//! ParsedDocument
//! └── Layer (file order)
//!     └── ToolKey -> ToolStrokes (first-seen order)
//!         └── group name -> StyleGroup { style, polylines }
//!             └── Polyline -> Point (x, y)
//! ```
//!
//! Numeric fields are [`Fixed3`] so serialization matches the three-decimal
//! text consumers expect.

use indexmap::IndexMap;
use serde::Serialize;

use crate::fixed::Fixed3;
use crate::tool::{ToolKey, ToolMeta, ToolRenderStyle};
use crate::types::FormatVersion;

/// A page-space point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: Fixed3,
    pub y: Fixed3,
}

impl Point {
    /// Round both coordinates to three decimals
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Fixed3::round(x),
            y: Fixed3::round(y),
        }
    }

    pub fn scaled(self, scale: f64) -> Self {
        Self {
            x: self.x.scaled(scale),
            y: self.y.scaled(scale),
        }
    }
}

/// Ordered points produced by one stroke
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Render style as stored in the tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GroupStyle {
    pub opacity: Fixed3,
    pub stroke_width: Fixed3,
    #[serde(skip)]
    pub color_class: u32,
}

impl From<&ToolRenderStyle> for GroupStyle {
    fn from(style: &ToolRenderStyle) -> Self {
        Self {
            opacity: Fixed3::round(style.opacity),
            stroke_width: Fixed3::round(style.stroke_width),
            color_class: style.color_class,
        }
    }
}

/// Polylines drawn with one style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleGroup {
    pub style: GroupStyle,
    #[serde(rename = "points")]
    pub polylines: Vec<Polyline>,
}

impl StyleGroup {
    pub fn new(style: GroupStyle) -> Self {
        Self {
            style,
            polylines: Vec::new(),
        }
    }
}

/// All strokes of one [`ToolKey`] within a layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolStrokes {
    pub tool: ToolMeta,
    #[serde(rename = "segments")]
    pub groups: IndexMap<String, StyleGroup>,
}

impl ToolStrokes {
    pub fn new(tool: ToolMeta) -> Self {
        Self {
            tool,
            groups: IndexMap::new(),
        }
    }
}

/// One layer of a page, tools in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layer {
    pub strokes: IndexMap<ToolKey, ToolStrokes>,
}

impl Layer {
    /// Every style group in this layer, tools in first-seen order
    pub fn groups(&self) -> impl Iterator<Item = &StyleGroup> {
        self.strokes.values().flat_map(|tool| tool.groups.values())
    }
}

/// Output of a successful decode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDocument {
    pub version: FormatVersion,
    pub layers: Vec<Layer>,
    /// True if any stroke on any layer used a highlighter
    pub has_highlighter: bool,
}

impl ParsedDocument {
    /// Every polyline in layer, tool, then stroke order
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.layers
            .iter()
            .flat_map(|layer| layer.groups())
            .flat_map(|group| group.polylines.iter())
    }

    /// Number of decoded strokes
    pub fn stroke_count(&self) -> usize {
        self.polylines().count()
    }

    /// Number of decoded points across all strokes
    pub fn point_count(&self) -> usize {
        self.polylines().map(Polyline::len).sum()
    }

    /// Render the tree as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

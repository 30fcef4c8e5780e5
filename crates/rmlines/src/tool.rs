//! Pen code to tool family resolution and render style formulas
//!
//! Each pen code maps to exactly one [`ToolFamily`]. Families with two codes
//! (older and newer firmware) keep both codes distinct through [`ToolKey`].
//! Width formulas were calibrated by eye against device exports, per tool.

use std::fmt;

use serde::{Serialize, Serializer};

use rmlines_config::PageDimensions;

use crate::constants::{A4_CALIBRATION, CANONICAL_PEN_BOOST};
use crate::error::UnknownToolError;

/// Semantic tool name shared by one or more pen codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolFamily {
    Brush,
    Ballpoint,
    Fineliner,
    Marker,
    Eraser,
    EraseArea,
    SharpPencil,
    TiltPencil,
    Highlighter,
    CalligraphyPen,
}

impl ToolFamily {
    /// Look up the family for a pen code
    pub fn from_pen_code(pen_code: u32) -> Result<Self, UnknownToolError> {
        let family = match pen_code {
            0 | 12 => Self::Brush,
            2 | 15 => Self::Ballpoint,
            4 | 17 => Self::Fineliner,
            3 | 16 => Self::Marker,
            6 => Self::Eraser,
            8 => Self::EraseArea,
            7 | 13 => Self::SharpPencil,
            1 | 14 => Self::TiltPencil,
            5 | 18 => Self::Highlighter,
            21 => Self::CalligraphyPen,
            _ => return Err(UnknownToolError { pen_code }),
        };
        Ok(family)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Ballpoint => "Ballpoint",
            Self::Fineliner => "Fineliner",
            Self::Marker => "Marker",
            Self::Eraser => "Eraser",
            Self::EraseArea => "EraseArea",
            Self::SharpPencil => "SharpPencil",
            Self::TiltPencil => "TiltPencil",
            Self::Highlighter => "Highlighter",
            Self::CalligraphyPen => "CalligraphyPen",
        }
    }
}

impl fmt::Display for ToolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a tool within a layer: family plus the exact pen code.
///
/// Displays as `Family_code`, e.g. `Brush_12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolKey {
    pub family: ToolFamily,
    pub pen_code: u32,
}

impl ToolKey {
    pub fn new(pen_code: u32) -> Result<Self, UnknownToolError> {
        Ok(Self {
            family: ToolFamily::from_pen_code(pen_code)?,
            pen_code,
        })
    }
}

impl fmt::Display for ToolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.family, self.pen_code)
    }
}

impl Serialize for ToolKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Numeric render style for a stroke, before three-decimal formatting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolRenderStyle {
    pub stroke_width: f64,
    /// 0.0 (invisible) to 1.0
    pub opacity: f64,
    pub color_class: u32,
}

/// Per-tool metadata kept next to the tool's geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolMeta {
    pub pen_code: u32,
    /// Color code after tool overrides
    pub color_code: u32,
}

/// Everything derived from one stroke header's tool fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTool {
    pub key: ToolKey,
    pub style: ToolRenderStyle,
    pub meta: ToolMeta,
}

/// Resolve a pen code and derive its render style.
///
/// `raw_width` is the width field of the stroke header; `opacity` is the
/// starting opacity (normally 1.0). All widths end up divided by the A4
/// calibration constant.
pub fn resolve_tool(
    pen_code: u32,
    target: PageDimensions,
    raw_width: f32,
    opacity: f64,
    color_code: u32,
) -> Result<ResolvedTool, UnknownToolError> {
    let key = ToolKey::new(pen_code)?;
    let w = raw_width as f64;

    let (width, opacity, color_code) = match key.family {
        ToolFamily::Brush | ToolFamily::CalligraphyPen => (w, opacity, color_code),
        ToolFamily::Ballpoint | ToolFamily::Fineliner => {
            let mut width = 32.0 * w * w - 116.0 * w + 107.0;
            if target.is_canonical() {
                width *= CANONICAL_PEN_BOOST;
            }
            (width, opacity, color_code)
        }
        ToolFamily::Marker => ((64.0 * w - 112.0) / 2.0, 0.9, color_code),
        ToolFamily::Highlighter => (30.0, 0.6, 3),
        ToolFamily::Eraser => (1280.0 * w * w - 4800.0 * w + 4510.0, opacity, 2),
        ToolFamily::SharpPencil | ToolFamily::TiltPencil => (16.0 * w - 27.0, 0.9, color_code),
        ToolFamily::EraseArea => (w, 0.0, color_code),
    };

    Ok(ResolvedTool {
        key,
        style: ToolRenderStyle {
            stroke_width: width / A4_CALIBRATION,
            opacity,
            color_class: color_code,
        },
        meta: ToolMeta {
            pen_code,
            color_code,
        },
    })
}

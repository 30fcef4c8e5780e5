//! Groups decoded strokes by tool within each layer

use tracing::trace;

use crate::constants::DEFAULT_GROUP;
use crate::document::{GroupStyle, Layer, ParsedDocument, Polyline, StyleGroup, ToolStrokes};
use crate::tool::{ResolvedTool, ToolFamily};
use crate::types::FormatVersion;

/// Builds a [`ParsedDocument`] one stroke at a time.
///
/// The first stroke of a [`ToolKey`](crate::tool::ToolKey) in a layer fixes
/// that tool's style for the rest of the layer. Later strokes only append
/// polylines. The highlighter flag spans the whole document.
#[derive(Debug)]
pub struct GeometryAggregator {
    version: FormatVersion,
    layers: Vec<Layer>,
    current: Option<Layer>,
    has_highlighter: bool,
}

impl GeometryAggregator {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            layers: Vec::new(),
            current: None,
            has_highlighter: false,
        }
    }

    /// Close the current layer (if any) and start a new one
    pub fn begin_layer(&mut self) {
        if let Some(layer) = self.current.take() {
            self.layers.push(layer);
        }
        self.current = Some(Layer::default());
    }

    /// Append one stroke's polyline under its tool
    pub fn add_stroke(&mut self, tool: &ResolvedTool, polyline: Polyline) {
        if tool.key.family == ToolFamily::Highlighter {
            self.has_highlighter = true;
        }

        let layer = self.current.get_or_insert_with(Layer::default);
        let strokes = layer
            .strokes
            .entry(tool.key)
            .or_insert_with(|| ToolStrokes::new(tool.meta));

        let group = strokes
            .groups
            .entry(DEFAULT_GROUP.to_string())
            .or_insert_with(|| {
                trace!(tool = %tool.key, width = tool.style.stroke_width, "new style group");
                StyleGroup::new(GroupStyle::from(&tool.style))
            });
        group.polylines.push(polyline);
    }

    pub fn has_highlighter(&self) -> bool {
        self.has_highlighter
    }

    /// Number of layers started so far
    pub fn layer_count(&self) -> usize {
        self.layers.len() + usize::from(self.current.is_some())
    }

    /// Close the last layer and produce the document
    pub fn finish(mut self) -> ParsedDocument {
        if let Some(layer) = self.current.take() {
            self.layers.push(layer);
        }
        ParsedDocument {
            version: self.version,
            layers: self.layers,
            has_highlighter: self.has_highlighter,
        }
    }
}

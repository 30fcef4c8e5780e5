//! Uniform post-decode scaling

use tracing::debug;

use crate::document::ParsedDocument;

/// Multiply every stroke width and coordinate by `scale`.
///
/// Values are re-rounded to three decimals after scaling. A scale of exactly
/// 1 returns the document untouched. Opacity is not scaled.
pub fn rescale(mut doc: ParsedDocument, scale: f64) -> ParsedDocument {
    if scale == 1.0 {
        return doc;
    }

    debug!(scale, strokes = doc.stroke_count(), "rescaling document");

    for layer in &mut doc.layers {
        for tool in layer.strokes.values_mut() {
            for group in tool.groups.values_mut() {
                group.style.stroke_width = group.style.stroke_width.scaled(scale);
                for polyline in &mut group.polylines {
                    for point in &mut polyline.points {
                        *point = point.scaled(scale);
                    }
                }
            }
        }
    }

    doc
}

//! Axis-aligned bounds of decoded geometry

use serde::Serialize;

use crate::document::ParsedDocument;

/// Smallest axis-aligned rectangle containing a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingEnvelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingEnvelope {
    /// Degenerate envelope around a single point
    pub fn from_point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow to include a point
    pub fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Smallest envelope containing both
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Upper corner, used to decide whether content overflows the page
    pub fn max_bound(&self) -> (f64, f64) {
        (self.max_x, self.max_y)
    }

    /// Inclusive containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Envelope of every point of every polyline in the document.
///
/// Returns `None` when the document has no points at all (no strokes, or
/// only strokes with zero segments), so callers never divide by an empty
/// extent.
pub fn bounding_envelope(doc: &ParsedDocument) -> Option<BoundingEnvelope> {
    doc.polylines()
        .flat_map(|polyline| polyline.points.iter())
        .fold(None, |envelope, point| {
            let (x, y) = (point.x.value(), point.y.value());
            match envelope {
                None => Some(BoundingEnvelope::from_point(x, y)),
                Some(mut envelope) => {
                    envelope.include(x, y);
                    Some(envelope)
                }
            }
        })
}

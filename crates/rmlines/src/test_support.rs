//! Synthetic `.rm` files for tests

use crate::constants::{TAG_V3, TAG_V5};
use crate::types::FormatVersion;

#[derive(Debug, Clone)]
struct TestStroke {
    pen_code: u32,
    color_code: u32,
    raw_width: f32,
    points: Vec<(f32, f32)>,
}

/// Builds `.rm` bytes layer by layer. Counts are derived from the content
/// unless overridden.
#[derive(Debug, Clone)]
pub struct RmFileBuilder {
    version: FormatVersion,
    layers: Vec<Vec<TestStroke>>,
    stroke_count_overrides: Vec<(usize, u32)>,
}

impl RmFileBuilder {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            layers: Vec::new(),
            stroke_count_overrides: Vec::new(),
        }
    }

    pub fn layer(mut self) -> Self {
        self.layers.push(Vec::new());
        self
    }

    /// Add a stroke to the last layer
    pub fn stroke(
        mut self,
        pen_code: u32,
        color_code: u32,
        raw_width: f32,
        points: &[(f32, f32)],
    ) -> Self {
        let stroke = TestStroke {
            pen_code,
            color_code,
            raw_width,
            points: points.to_vec(),
        };
        match self.layers.last_mut() {
            Some(layer) => layer.push(stroke),
            None => self.layers.push(vec![stroke]),
        }
        self
    }

    /// Write `count` as the stroke count of `layer` instead of the real one
    pub fn with_stroke_count_override(mut self, layer: usize, count: u32) -> Self {
        self.stroke_count_overrides.push((layer, count));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = Vec::new();
        let tag = match self.version {
            FormatVersion::V3 => TAG_V3,
            FormatVersion::V5 => TAG_V5,
        };
        data.extend_from_slice(tag);
        data.extend_from_slice(&(self.layers.len() as u32).to_le_bytes());

        for (index, layer) in self.layers.iter().enumerate() {
            let stroke_count = self
                .stroke_count_overrides
                .iter()
                .find(|(i, _)| *i == index)
                .map(|&(_, count)| count)
                .unwrap_or(layer.len() as u32);
            data.extend_from_slice(&stroke_count.to_le_bytes());

            for stroke in layer {
                data.extend_from_slice(&stroke.pen_code.to_le_bytes());
                data.extend_from_slice(&stroke.color_code.to_le_bytes());
                data.extend_from_slice(&0u32.to_le_bytes());
                data.extend_from_slice(&stroke.raw_width.to_le_bytes());
                if self.version == FormatVersion::V5 {
                    data.extend_from_slice(&0.0f32.to_le_bytes());
                }
                data.extend_from_slice(&(stroke.points.len() as u32).to_le_bytes());

                for &(x, y) in &stroke.points {
                    for value in [x, y, 0.5, 0.0, 0.0, 0.0] {
                        data.extend_from_slice(&value.to_le_bytes());
                    }
                }
            }
        }
        data
    }
}

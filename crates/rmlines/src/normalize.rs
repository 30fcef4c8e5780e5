//! Device to page coordinate mapping
//!
//! Samples are recorded on the fixed device canvas. The target page can have
//! any proportions, so the axis along which the page is relatively longer is
//! stretched by the ratio of the two aspect ratios. When the target is the
//! device canvas itself the ratio is exactly 1 and the mapping is the identity.

use rmlines_config::{DEVICE_HEIGHT, DEVICE_WIDTH, PageDimensions};

/// Maps device-space samples onto a target page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateNormalizer {
    target: PageDimensions,
    ratio: f64,
}

impl Default for CoordinateNormalizer {
    fn default() -> Self {
        Self::new(PageDimensions::CANONICAL)
    }
}

impl CoordinateNormalizer {
    pub fn new(target: PageDimensions) -> Self {
        let ratio = (target.height / target.width) / (DEVICE_HEIGHT / DEVICE_WIDTH);
        Self { target, ratio }
    }

    pub fn target(&self) -> PageDimensions {
        self.target
    }

    /// (page h/w) over (device h/w)
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Map one device point to page space
    #[inline]
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        let PageDimensions { width, height } = self.target;
        if self.ratio > 1.0 {
            (
                self.ratio * ((x * width) / DEVICE_WIDTH),
                (y * height) / DEVICE_HEIGHT,
            )
        } else {
            (
                (x * width) / DEVICE_WIDTH,
                (1.0 / self.ratio) * ((y * height) / DEVICE_HEIGHT),
            )
        }
    }
}

/// One-off normalization without keeping a [`CoordinateNormalizer`]
pub fn normalize_point(x: f64, y: f64, target: PageDimensions) -> (f64, f64) {
    CoordinateNormalizer::new(target).normalize(x, y)
}

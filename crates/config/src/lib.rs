//! Shared configuration for rmlines
//!
//! This crate provides the single source of truth for the tablet's native
//! canvas size, target page dimensions, and decode options shared between
//! the `.rm` decoder and whatever draws its output onto a document page.

use serde::{Deserialize, Serialize};

/// Native device canvas width in device units
pub const DEVICE_WIDTH: f64 = 1404.0;

/// Native device canvas height in device units
pub const DEVICE_HEIGHT: f64 = 1872.0;

/// Default opacity assigned to a stroke before tool adjustments
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Dimensions of the page strokes are mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    /// Page width in page units
    pub width: f64,
    /// Page height in page units
    pub height: f64,
}

impl Default for PageDimensions {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl PageDimensions {
    /// The device's own canvas. Used when the target page is unknown.
    pub const CANONICAL: Self = Self {
        width: DEVICE_WIDTH,
        height: DEVICE_HEIGHT,
    };

    /// Create page dimensions with the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when these are exactly the device canvas dimensions
    pub fn is_canonical(&self) -> bool {
        self.width == DEVICE_WIDTH && self.height == DEVICE_HEIGHT
    }

    /// Width over height
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// True if this page is at least as wide (relative to its height) as the device
    fn is_wider_than_device(&self) -> bool {
        self.aspect_ratio() >= DEVICE_WIDTH / DEVICE_HEIGHT
    }
}

/// Scale that fits the device canvas onto `page` without a gap.
///
/// Pages wider than the device are matched on width, narrower ones on height.
pub fn page_to_device_ratio(page: PageDimensions) -> f64 {
    if page.is_wider_than_device() {
        page.width / DEVICE_WIDTH
    } else {
        page.height / DEVICE_HEIGHT
    }
}

/// Page dimensions adjusted so the scaled device canvas fills the dominant axis.
pub fn adjusted_page_dims(page: PageDimensions, scale: f64) -> PageDimensions {
    if page.is_wider_than_device() {
        PageDimensions::new(DEVICE_WIDTH * scale, page.height)
    } else {
        PageDimensions::new(page.width, DEVICE_HEIGHT * scale)
    }
}

/// Device canvas dimensions multiplied by `scale`
pub fn rescaled_device_dims(scale: f64) -> PageDimensions {
    PageDimensions::new(DEVICE_WIDTH * scale, DEVICE_HEIGHT * scale)
}

/// Options for a single decode call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Page the device coordinates are normalized onto
    pub target: PageDimensions,
    /// Opacity every stroke starts from before tool adjustments
    pub initial_opacity: f64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            target: PageDimensions::CANONICAL,
            initial_opacity: DEFAULT_OPACITY,
        }
    }
}

impl DecodeOptions {
    /// Options targeting the given page with default opacity
    pub fn with_target(target: PageDimensions) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }
}

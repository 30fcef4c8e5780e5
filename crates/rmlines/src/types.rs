use std::mem::size_of;

use serde::Serialize;

/// Recognised `.rm` layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatVersion {
    V3,
    V5,
}

impl FormatVersion {
    /// Size in bytes of one stroke header for this version
    pub fn stroke_record_len(self) -> usize {
        match self {
            Self::V3 => size_of::<RawStrokeV3>(),
            Self::V5 => size_of::<RawStrokeV5>(),
        }
    }
}

/// Stroke header as laid out in a version 3 file.
///
/// Fields are little-endian on disk; convert with [`StrokeRecord::from`].
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct RawStrokeV3 {
    pub pen_code: u32,
    pub color_code: u32,
    pub reserved: u32,
    pub raw_width: f32,
    pub segment_count: u32,
}

/// Stroke header as laid out in a version 5 file.
///
/// Same as [`RawStrokeV3`] with one extra float before the segment count.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct RawStrokeV5 {
    pub pen_code: u32,
    pub color_code: u32,
    pub reserved: u32,
    pub raw_width: f32,
    pub reserved_b: f32,
    pub segment_count: u32,
}

/// One sampled point, identical in both versions.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct RawSegment {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    pub tilt: f32,
    pub reserved_a: f32,
    pub reserved_b: f32,
}

const _: () = assert!(size_of::<RawStrokeV3>() == 20);
const _: () = assert!(size_of::<RawStrokeV5>() == 24);
const _: () = assert!(size_of::<RawSegment>() == 24);

#[inline]
fn le_f32(value: f32) -> f32 {
    f32::from_bits(u32::from_le(value.to_bits()))
}

/// Decoded stroke header, independent of the on-disk version
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRecord {
    pub pen_code: u32,
    pub color_code: u32,
    pub reserved: u32,
    pub raw_width: f32,
    /// Only present in version 5 files
    pub reserved_b: Option<f32>,
    /// Exact number of segment records that follow
    pub segment_count: u32,
}

impl From<RawStrokeV3> for StrokeRecord {
    fn from(raw: RawStrokeV3) -> Self {
        Self {
            pen_code: u32::from_le(raw.pen_code),
            color_code: u32::from_le(raw.color_code),
            reserved: u32::from_le(raw.reserved),
            raw_width: le_f32(raw.raw_width),
            reserved_b: None,
            segment_count: u32::from_le(raw.segment_count),
        }
    }
}

impl From<RawStrokeV5> for StrokeRecord {
    fn from(raw: RawStrokeV5) -> Self {
        Self {
            pen_code: u32::from_le(raw.pen_code),
            color_code: u32::from_le(raw.color_code),
            reserved: u32::from_le(raw.reserved),
            raw_width: le_f32(raw.raw_width),
            reserved_b: Some(le_f32(raw.reserved_b)),
            segment_count: u32::from_le(raw.segment_count),
        }
    }
}

/// A device-space sample. Pressure and tilt are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSample {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    pub tilt: f32,
}

impl From<RawSegment> for SegmentSample {
    fn from(raw: RawSegment) -> Self {
        Self {
            x: le_f32(raw.x),
            y: le_f32(raw.y),
            pressure: le_f32(raw.pressure),
            tilt: le_f32(raw.tilt),
        }
    }
}

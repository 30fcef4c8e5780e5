//! Per-point decoding for one stroke

use std::mem::size_of;

use crate::document::{Point, Polyline};
use crate::error::FormatError;
use crate::normalize::CoordinateNormalizer;
use crate::types::{RawSegment, SegmentSample};

use super::cursor::ByteCursor;

/// Read a single segment record
pub fn read_segment(cursor: &mut ByteCursor<'_>) -> Result<SegmentSample, FormatError> {
    Ok(cursor.read_pod::<RawSegment>()?.into())
}

/// Read exactly `count` segments and map them into page space.
///
/// The whole run is length-checked up front, so a bogus count fails before
/// any point is decoded.
pub fn read_polyline(
    cursor: &mut ByteCursor<'_>,
    count: u32,
    normalizer: &CoordinateNormalizer,
) -> Result<Polyline, FormatError> {
    let count = count as usize;
    cursor.ensure(count.saturating_mul(size_of::<RawSegment>()))?;

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let sample = read_segment(cursor)?;
        let (x, y) = normalizer.normalize(sample.x as f64, sample.y as f64);
        points.push(Point::new(x, y));
    }
    Ok(Polyline::new(points))
}

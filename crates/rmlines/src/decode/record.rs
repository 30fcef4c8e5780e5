//! Per-stroke header decoding

use crate::error::FormatError;
use crate::types::{FormatVersion, RawStrokeV3, RawStrokeV5, StrokeRecord};

use super::cursor::ByteCursor;

/// Read one stroke header in the layout of `version`.
///
/// Pen codes are not checked here.
pub fn read_stroke_record(
    cursor: &mut ByteCursor<'_>,
    version: FormatVersion,
) -> Result<StrokeRecord, FormatError> {
    let record: StrokeRecord = match version {
        FormatVersion::V3 => cursor.read_pod::<RawStrokeV3>()?.into(),
        FormatVersion::V5 => cursor.read_pod::<RawStrokeV5>()?.into(),
    };
    Ok(record)
}

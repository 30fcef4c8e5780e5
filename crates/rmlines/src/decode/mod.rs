//! `.rm` stroke file decoding
//!
//! A file is a version tag and layer count, then for each layer a stroke
//! count and that many strokes, each a fixed-size header followed by its
//! segments:
//!
//! ```text
//! Header:   43-byte ASCII tag, u32 layer_count
//! Layer:    u32 stroke_count
//! Stroke:   u32 pen, u32 color, u32 reserved, f32 width,
//!           [f32 reserved_b  (v5 only)], u32 segment_count
//! Segment:  f32 x, f32 y, f32 pressure, f32 tilt, f32, f32
//! ```
//!
//! Everything is little-endian. Decoding is strictly sequential; the counts
//! in the file are trusted and any mismatch surfaces as a
//! [`FormatError::Truncated`](crate::error::FormatError::Truncated) further on.

mod cursor;
mod header;
mod record;
mod segment;

use std::path::Path;

use tracing::{debug, trace, warn};

use rmlines_config::{DecodeOptions, PageDimensions};

use crate::aggregate::GeometryAggregator;
use crate::document::ParsedDocument;
use crate::error::DecodeError;
use crate::normalize::CoordinateNormalizer;
use crate::tool::resolve_tool;

pub use cursor::ByteCursor;
pub use header::{Header, identify_tag, read_header};
pub use record::read_stroke_record;
pub use segment::{read_polyline, read_segment};

/// Decoder over one fully buffered `.rm` file
#[derive(Debug)]
pub struct LinesDecoder<'a> {
    cursor: ByteCursor<'a>,
    path: &'a Path,
    options: DecodeOptions,
    normalizer: CoordinateNormalizer,
}

impl<'a> LinesDecoder<'a> {
    /// `path` is only used in error messages
    pub fn new(data: &'a [u8], path: &'a Path, options: DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            path,
            options,
            normalizer: CoordinateNormalizer::new(options.target),
        }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    /// Decode the whole buffer.
    ///
    /// On error nothing is returned; a partially built document is dropped.
    pub fn decode(&mut self) -> Result<ParsedDocument, DecodeError> {
        let path = self.path;
        let header = read_header(&mut self.cursor).map_err(|e| DecodeError::format(path, e))?;

        let mut aggregator = GeometryAggregator::new(header.version);
        for layer_index in 0..header.layer_count {
            aggregator.begin_layer();
            self.decode_layer(layer_index, &header, &mut aggregator)?;
        }

        if !self.cursor.is_eof() {
            warn!(
                path = %path.display(),
                trailing = self.cursor.remaining(),
                "bytes left after the last declared layer"
            );
        }

        let doc = aggregator.finish();
        debug!(
            path = %path.display(),
            layers = doc.layers.len(),
            strokes = doc.stroke_count(),
            has_highlighter = doc.has_highlighter,
            "decoded .rm file"
        );
        Ok(doc)
    }

    fn decode_layer(
        &mut self,
        layer_index: u32,
        header: &Header,
        aggregator: &mut GeometryAggregator,
    ) -> Result<(), DecodeError> {
        let path = self.path;
        let stroke_count = self
            .cursor
            .read_u32_le()
            .map_err(|e| DecodeError::format(path, e))?;
        debug!(layer = layer_index, stroke_count, "decoding layer");

        for _ in 0..stroke_count {
            let record = read_stroke_record(&mut self.cursor, header.version)
                .map_err(|e| DecodeError::format(path, e))?;

            let tool = resolve_tool(
                record.pen_code,
                self.options.target,
                record.raw_width,
                self.options.initial_opacity,
                record.color_code,
            )
            .map_err(|e| DecodeError::unknown_tool(path, e))?;

            trace!(
                tool = %tool.key,
                segments = record.segment_count,
                offset = self.cursor.position(),
                "stroke"
            );

            let polyline = read_polyline(&mut self.cursor, record.segment_count, &self.normalizer)
                .map_err(|e| DecodeError::format(path, e))?;
            aggregator.add_stroke(&tool, polyline);
        }
        Ok(())
    }
}

/// Decode an in-memory `.rm` file
pub fn decode_bytes(
    data: &[u8],
    path: impl AsRef<Path>,
    options: DecodeOptions,
) -> Result<ParsedDocument, DecodeError> {
    LinesDecoder::new(data, path.as_ref(), options).decode()
}

/// Read a `.rm` file in one go and decode it
pub fn decode_file(
    path: impl AsRef<Path>,
    options: DecodeOptions,
) -> Result<ParsedDocument, DecodeError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_bytes(&data, path, options)
}

/// Decode a `.rm` file onto `target`, returning the document and whether
/// it contains any highlighter strokes
pub fn decode(
    path: impl AsRef<Path>,
    target: PageDimensions,
) -> Result<(ParsedDocument, bool), DecodeError> {
    let doc = decode_file(path, DecodeOptions::with_target(target))?;
    let has_highlighter = doc.has_highlighter;
    Ok((doc, has_highlighter))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::constants::{DEFAULT_GROUP, HEADER_LEN, TAG_V3};
    use crate::error::{FormatError, UnknownToolError};
    use crate::test_support::RmFileBuilder;
    use crate::types::FormatVersion;

    fn decode_all(data: &[u8]) -> Result<ParsedDocument, DecodeError> {
        decode_bytes(data, "test.rm", DecodeOptions::default())
    }

    #[test]
    fn test_single_fineliner_stroke_v5() {
        let data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(4, 0, 2.0, &[(702.0, 936.0)])
            .build();
        assert_eq!(data.len(), HEADER_LEN + 4 + 24 + 24);

        let doc = decode_all(&data).unwrap();
        assert_eq!(doc.version, FormatVersion::V5);
        assert!(!doc.has_highlighter);

        let tools = &doc.layers[0].strokes;
        let (key, strokes) = tools.get_index(0).unwrap();
        assert_eq!(key.to_string(), "Fineliner_4");
        assert_eq!(strokes.tool.pen_code, 4);

        let group = &strokes.groups[DEFAULT_GROUP];
        let expected = ((32.0 * 4.0 - 116.0 * 2.0 + 107.0) * 1.8) / 2.3;
        assert_eq!(group.style.stroke_width.to_string(), format!("{:.3}", expected));
        assert_eq!(group.style.opacity.to_string(), "1.000");
        assert_eq!(group.polylines.len(), 1);
        let point = group.polylines[0].points[0];
        assert_eq!(point.x.to_string(), "702.000");
        assert_eq!(point.y.to_string(), "936.000");
    }

    #[test]
    fn test_cursor_ends_at_eof() {
        for version in [FormatVersion::V3, FormatVersion::V5] {
            let data = RmFileBuilder::new(version)
                .layer()
                .stroke(2, 0, 2.0, &[(1.0, 2.0), (3.0, 4.0)])
                .stroke(17, 1, 1.0, &[])
                .layer()
                .stroke(5, 0, 2.0, &[(5.0, 6.0)])
                .build();

            let path = Path::new("eof.rm");
            let mut decoder = LinesDecoder::new(&data, path, DecodeOptions::default());
            let doc = decoder.decode().unwrap();
            assert_eq!(decoder.position(), data.len());
            assert_eq!(decoder.remaining(), 0);
            assert_eq!(doc.layers.len(), 2);
            assert_eq!(doc.stroke_count(), 3);
            assert_eq!(doc.point_count(), 3);
        }
    }

    #[test]
    fn test_trailing_bytes_are_tolerated() {
        let mut data = RmFileBuilder::new(FormatVersion::V3)
            .layer()
            .stroke(2, 0, 2.0, &[(1.0, 2.0)])
            .build();
        data.extend_from_slice(&[0xAB; 7]);

        let path = Path::new("trailing.rm");
        let mut decoder = LinesDecoder::new(&data, path, DecodeOptions::default());
        decoder.decode().unwrap();
        assert_eq!(decoder.remaining(), 7);
    }

    #[test]
    fn test_highlighter_on_last_layer() {
        let data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(2, 0, 2.0, &[(1.0, 1.0)])
            .layer()
            .layer()
            .stroke(5, 0, 2.0, &[(1.0, 1.0)])
            .build();

        let doc = decode_all(&data).unwrap();
        assert!(doc.has_highlighter);
        let key = doc.layers[2].strokes.keys().next().unwrap();
        assert_eq!(key.to_string(), "Highlighter_5");
    }

    #[test]
    fn test_unknown_pen_code_fails() {
        let data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(2, 0, 2.0, &[(1.0, 1.0)])
            .stroke(9, 0, 2.0, &[(1.0, 1.0)])
            .build();

        let err = decode_all(&data).unwrap_err();
        assert_eq!(err.as_unknown_tool(), Some(&UnknownToolError { pen_code: 9 }));
        assert!(err.to_string().starts_with("test.rm: "));
    }

    #[test]
    fn test_truncated_segments_fail() {
        let mut data = RmFileBuilder::new(FormatVersion::V3)
            .layer()
            .stroke(2, 0, 2.0, &[(1.0, 1.0), (2.0, 2.0)])
            .build();
        data.truncate(data.len() - 1);

        let err = decode_all(&data).unwrap_err();
        assert!(matches!(err.as_format(), Some(FormatError::Truncated { .. })));
    }

    #[test]
    fn test_overstated_stroke_count_fails() {
        let data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(2, 0, 2.0, &[(1.0, 1.0)])
            .with_stroke_count_override(0, 2)
            .build();

        let err = decode_all(&data).unwrap_err();
        assert!(matches!(err.as_format(), Some(FormatError::Truncated { .. })));
    }

    #[test]
    fn test_wrong_version_layout_desynchronizes() {
        // A v5 body behind a v3 tag reads reserved_b (0.0) as the segment
        // count, so the real count and segment are left over
        let mut data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(4, 0, 2.0, &[(1.0, 1.0)])
            .build();
        data[..TAG_V3.len()].copy_from_slice(TAG_V3);

        let path = Path::new("v5-as-v3.rm");
        let mut decoder = LinesDecoder::new(&data, path, DecodeOptions::default());
        let doc = decoder.decode().unwrap();
        assert_eq!(doc.point_count(), 0);
        assert_eq!(decoder.remaining(), 4 + 24);
    }

    #[test]
    fn test_header_errors() {
        let err = decode_all(b"reMarkable").unwrap_err();
        assert_eq!(err.as_format(), Some(&FormatError::TooShort { len: 10 }));

        let data = RmFileBuilder::new(FormatVersion::V5).build();
        let err = decode_all(&data).unwrap_err();
        assert_eq!(err.as_format(), Some(&FormatError::NoLayers));
    }

    #[test]
    fn test_target_page_is_applied() {
        let data = RmFileBuilder::new(FormatVersion::V3)
            .layer()
            .stroke(2, 0, 2.0, &[(100.0, 100.0)])
            .build();
        let options = DecodeOptions::with_target(PageDimensions::new(1404.0, 3744.0));

        let doc = decode_bytes(&data, "tall.rm", options).unwrap();
        let point = doc.polylines().next().unwrap().points[0];
        assert_eq!(point.x.to_string(), "200.000");
        assert_eq!(point.y.to_string(), "200.000");

        // Ballpoint boost is not applied off the device canvas
        let group = doc.layers[0].groups().next().unwrap();
        assert_eq!(group.style.stroke_width.to_string(), format!("{:.3}", 3.0 / 2.3));
    }

    #[test]
    fn test_decode_file_reads_from_disk() {
        let data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(18, 0, 2.0, &[(1.0, 2.0)])
            .build();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let (doc, has_highlighter) = decode(file.path(), PageDimensions::CANONICAL).unwrap();
        assert!(has_highlighter);
        assert_eq!(doc.stroke_count(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err =
            decode_file("/nonexistent/rmlines/page.rm", DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, DecodeError::Io { .. }));
    }

    #[test]
    fn test_json_output() {
        let data = RmFileBuilder::new(FormatVersion::V5)
            .layer()
            .stroke(3, 1, 2.0, &[(1.0, 2.0)])
            .build();
        let doc = decode_all(&data).unwrap();
        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        let marker = &json["layers"][0]["strokes"]["Marker_3"];
        assert_eq!(marker["tool"]["pen-code"], 3);
        assert_eq!(marker["tool"]["color-code"], 1);
        let group = &marker["segments"]["default"];
        assert_eq!(group["style"]["opacity"], "0.900");
        assert_eq!(group["style"]["stroke-width"], "3.478");
        assert_eq!(group["points"][0][0]["x"], "1.000");
        assert_eq!(group["points"][0][0]["y"], "2.000");
    }
}

//! rmlines - reMarkable `.rm` stroke file decoding
//!
//! This crate turns the tablet's per-page stroke files into page-relative
//! vector geometry for a renderer to draw:
//! - [`decode`] - Header validation, stroke and segment decoding
//! - [`tool`] - Pen code to tool family and render style
//! - [`normalize`] - Device to page coordinate mapping
//! - [`aggregate`] - Per-layer, per-tool grouping of polylines
//! - [`envelope`] - Bounding envelope of decoded geometry
//! - [`rescale`] - Uniform post-decode scaling
//!
//! Each decode call works on one fully buffered file and shares no state with
//! other calls, so callers may decode pages in parallel freely.

pub mod aggregate;
pub mod constants;
pub mod decode;
pub mod document;
pub mod envelope;
pub mod error;
pub mod fixed;
pub mod normalize;
pub mod rescale;
pub mod tool;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::GeometryAggregator;
pub use decode::{LinesDecoder, decode, decode_bytes, decode_file};
pub use document::*;
pub use envelope::{BoundingEnvelope, bounding_envelope};
pub use error::{DecodeError, FormatError, UnknownToolError};
pub use fixed::Fixed3;
pub use normalize::{CoordinateNormalizer, normalize_point};
pub use rescale::rescale;
pub use tool::*;
pub use types::*;

pub use rmlines_config::{DecodeOptions, PageDimensions};

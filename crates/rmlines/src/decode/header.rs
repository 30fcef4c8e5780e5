//! File identity and version check

use tracing::debug;

use crate::constants::{HEADER_LEN, HEADER_TAG_LEN, TAG_V3, TAG_V5, TAG_V6_PREFIX};
use crate::error::FormatError;
use crate::types::FormatVersion;

use super::cursor::ByteCursor;

/// Validated file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: FormatVersion,
    pub layer_count: u32,
}

/// Match a version tag against the known layouts
pub fn identify_tag(tag: &[u8]) -> Result<FormatVersion, FormatError> {
    if tag == TAG_V3 {
        Ok(FormatVersion::V3)
    } else if tag == TAG_V5 {
        Ok(FormatVersion::V5)
    } else if tag.starts_with(TAG_V6_PREFIX) {
        Err(FormatError::UnsupportedVersion(6))
    } else {
        Err(FormatError::UnknownTag {
            tag: String::from_utf8_lossy(tag).trim_end().to_string(),
        })
    }
}

/// Read and validate the header, leaving the cursor at the first layer.
pub fn read_header(cursor: &mut ByteCursor<'_>) -> Result<Header, FormatError> {
    if cursor.len() < HEADER_LEN {
        return Err(FormatError::TooShort { len: cursor.len() });
    }

    let tag = cursor.read_bytes(HEADER_TAG_LEN)?;
    let layer_count = cursor.read_u32_le()?;
    let version = identify_tag(tag)?;

    if layer_count < 1 {
        return Err(FormatError::NoLayers);
    }

    debug!(?version, layer_count, "read .rm header");

    Ok(Header {
        version,
        layer_count,
    })
}

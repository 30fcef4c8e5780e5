//! Error types for `.rm` decoding

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Structural problems with the byte stream. Always fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("too short to be a valid .rm file ({len} bytes)")]
    TooShort { len: usize },
    #[error("not a valid .rm file: unrecognised header {tag:?}")]
    UnknownTag { tag: String },
    #[error("unsupported .rm format version {0}")]
    UnsupportedVersion(u8),
    #[error("not a valid .rm file: layer count is zero")]
    NoLayers,
    #[error("truncated at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
}

/// A stroke used a pen code outside the known tool table.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown tool: pen code {pen_code}")]
pub struct UnknownToolError {
    pub pen_code: u32,
}

/// Error returned by the decode entry points.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("{}: {source}", .path.display())]
    UnknownTool {
        path: PathBuf,
        #[source]
        source: UnknownToolError,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DecodeError {
    pub(crate) fn format(path: &Path, source: FormatError) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn unknown_tool(path: &Path, source: UnknownToolError) -> Self {
        Self::UnknownTool {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The structural error, if this is one
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The unknown tool error, if this is one
    pub fn as_unknown_tool(&self) -> Option<&UnknownToolError> {
        match self {
            Self::UnknownTool { source, .. } => Some(source),
            _ => None,
        }
    }
}

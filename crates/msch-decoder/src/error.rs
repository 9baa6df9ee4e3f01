use msch_types::{ContentKind, EnumKind};
use msch_wire::WireError;

/// Errors that can occur while decoding a schematic.
///
/// Every variant records the byte offset at which the problem was
/// detected. Header and decompression errors are offsets into the raw
/// buffer; everything after that is an offset into the inflated body,
/// since that is the buffer the section readers walk.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── BadSignature          ← first 4 bytes are not "msch"
///   ├── UnsupportedVersion    ← version byte is not 0 or 1
///   ├── TruncatedHeader       ← buffer ends inside the 5-byte header
///   ├── Decompression         ← zlib stream is malformed
///   ├── DecompressionBomb     ← inflated body exceeds the configured limit
///   ├── TrailingInput         ← bytes after the zlib stream (strict mode)
///   ├── Truncated             ← a read ran past the end of the body
///   ├── InvalidUtf8           ← a string field isn't UTF-8
///   ├── UnknownBlockIndex     ← tile points past the block dictionary
///   ├── UnknownConfigTag      ← modern config tag outside the known table
///   ├── UnsupportedConfigTag  ← known tag this decoder can't resolve
///   ├── UnresolvedContent     ← registry has no name for a content id
///   ├── UnresolvedEnum        ← registry has no name for an enum ordinal
///   ├── TrailingData          ← bytes after the last tile (strict mode)
///   └── Wire(WireError)       ← any other wire-level failure
/// ```
///
/// All of these are terminal: the decoder never returns a partially
/// populated schematic.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DecodeError {
    /// The buffer does not start with the `"msch"` signature.
    #[error("not a schematic: bad signature {found:02X?}")]
    BadSignature { found: [u8; 4] },

    /// The version byte names a format this decoder doesn't implement.
    #[error("unsupported schematic version {version} at offset {offset}")]
    UnsupportedVersion { version: u8, offset: usize },

    /// The buffer ends before the signature and version byte are complete.
    #[error("truncated header at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedHeader {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The compressed body could not be inflated.
    ///
    /// Common causes: the body is not zlib at all, the stream is
    /// truncated, or its checksum doesn't match.
    #[error("decompression failed at offset {offset}: {reason}")]
    Decompression { offset: usize, reason: String },

    /// The inflated body is larger than
    /// [`DecoderConfig::max_decompressed_size`](crate::DecoderConfig).
    #[error("decompressed size exceeds limit {limit} (body starts at offset {offset})")]
    DecompressionBomb { offset: usize, limit: usize },

    /// The raw buffer continues past the end of the zlib stream and the
    /// decoder was configured to reject that. `offset` is into the raw
    /// buffer.
    #[error("unexpected data after compressed body ({extra_bytes} bytes at offset {offset})")]
    TrailingInput { offset: usize, extra_bytes: usize },

    /// A read needed more bytes than were left in the body.
    #[error("truncated buffer at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A tag, block name, or string config value is not valid UTF-8.
    #[error("invalid UTF-8 in {len}-byte string at offset {offset}")]
    InvalidUtf8 { offset: usize, len: usize },

    /// A tile record's block index is not in the block dictionary.
    #[error("block index {index} out of range (dictionary has {dictionary_len} entries) at offset {offset}")]
    UnknownBlockIndex {
        index: u8,
        dictionary_len: usize,
        offset: usize,
    },

    /// A modern config value carries a tag outside the known table.
    #[error("unknown config tag {tag} at offset {offset}")]
    UnknownConfigTag { tag: u8, offset: usize },

    /// A modern config value carries a known tag that can't be decoded
    /// here, either at all or without a content registry.
    #[error("unsupported config tag {tag} at offset {offset}")]
    UnsupportedConfigTag { tag: u8, offset: usize },

    /// A content reference names an id the registry doesn't know.
    #[error("unresolved {kind:?} content id {id} at offset {offset}")]
    UnresolvedContent {
        kind: ContentKind,
        id: i32,
        offset: usize,
    },

    /// An enum value names an ordinal the registry doesn't know.
    #[error("unresolved {kind:?} ordinal {ordinal} at offset {offset}")]
    UnresolvedEnum {
        kind: EnumKind,
        ordinal: u16,
        offset: usize,
    },

    /// Bytes remain after the last tile record and the decoder was
    /// configured to reject them.
    #[error("unexpected data after last tile ({extra_bytes} bytes at offset {offset})")]
    TrailingData { offset: usize, extra_bytes: usize },

    /// A wire-level failure with no dedicated variant above.
    #[error(transparent)]
    Wire(WireError),
}

impl DecodeError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::BadSignature { .. } => 0,
            Self::UnsupportedVersion { offset, .. }
            | Self::TruncatedHeader { offset, .. }
            | Self::Decompression { offset, .. }
            | Self::DecompressionBomb { offset, .. }
            | Self::Truncated { offset, .. }
            | Self::InvalidUtf8 { offset, .. }
            | Self::UnknownBlockIndex { offset, .. }
            | Self::UnknownConfigTag { offset, .. }
            | Self::UnsupportedConfigTag { offset, .. }
            | Self::UnresolvedContent { offset, .. }
            | Self::UnresolvedEnum { offset, .. }
            | Self::TrailingInput { offset, .. }
            | Self::TrailingData { offset, .. } => *offset,
            Self::Wire(inner) => inner.offset(),
        }
    }
}

impl DecodeError {
    /// Convert an error from the header read. Running out of bytes there
    /// is reported as [`DecodeError::TruncatedHeader`] so it can't be
    /// mistaken for a body offset.
    pub(crate) fn from_header(err: WireError) -> Self {
        match err {
            WireError::Truncated {
                offset,
                needed,
                available,
            } => Self::TruncatedHeader {
                offset,
                needed,
                available,
            },
            other => other.into(),
        }
    }
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::Truncated {
                offset,
                needed,
                available,
            } => Self::Truncated {
                offset,
                needed,
                available,
            },
            WireError::BadSignature { found } => Self::BadSignature { found },
            WireError::UnsupportedVersion { version, offset } => {
                Self::UnsupportedVersion { version, offset }
            }
            WireError::InvalidUtf8 { offset, len } => Self::InvalidUtf8 { offset, len },
            other @ WireError::UnsupportedWidth { .. } => Self::Wire(other),
        }
    }
}

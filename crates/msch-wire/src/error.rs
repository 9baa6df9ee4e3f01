/// Low-level errors raised while reading raw schematic bytes.
///
/// These cover the two things the wire layer knows about: the fixed
/// 5-byte header and primitive reads through a [`Cursor`](crate::Cursor).
/// Anything that needs knowledge of sections, dictionaries, or config
/// tags lives one layer up in `msch-decoder`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WireError {
    /// A read would run past the end of the buffer.
    ///
    /// `offset` is where the read started, `needed` is how many bytes it
    /// asked for and `available` is how many were actually left.
    #[error("truncated buffer at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The first four bytes were not `"msch"`.
    #[error("bad signature: expected \"msch\", got {found:02X?}")]
    BadSignature { found: [u8; 4] },

    /// The version byte is neither 0 (legacy) nor 1 (modern).
    #[error("unsupported schematic version {version} at offset {offset}")]
    UnsupportedVersion { version: u8, offset: usize },

    /// A string field was not valid UTF-8.
    #[error("invalid UTF-8 in {len}-byte string at offset {offset}")]
    InvalidUtf8 { offset: usize, len: usize },

    /// `read_uint` was asked for a width it cannot represent in a `u32`.
    #[error("unsupported integer width {width} at offset {offset}")]
    UnsupportedWidth { width: usize, offset: usize },
}

impl WireError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::Truncated { offset, .. }
            | Self::UnsupportedVersion { offset, .. }
            | Self::InvalidUtf8 { offset, .. }
            | Self::UnsupportedWidth { offset, .. } => *offset,
            Self::BadSignature { .. } => 0,
        }
    }
}

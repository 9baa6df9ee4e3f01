use crate::error::WireError;

/// Magic signature: ASCII "msch".
/// Compared as raw bytes, so byte order never enters into it.
pub const MSCH_MAGIC: [u8; 4] = *b"msch";

/// Total header size in bytes (signature + version). Everything after
/// this offset is the compressed body.
pub const HEADER_SIZE: usize = 5;

/// Offset of the version byte inside the header.
const VERSION_OFFSET: usize = 4;

/// Schematic format version.
///
/// The version selects how each tile's config value is laid out on the
/// wire, and nothing else: the section order is identical in both.
///
/// ```text
/// ┌──────┬─────────┬──────────────────────────────────────────┐
/// │ Byte │ Variant │ Config encoding                          │
/// ├──────┼─────────┼──────────────────────────────────────────┤
/// │ 0x00 │ Legacy  │ raw uint32, meaning depends on the block │
/// │ 0x01 │ Modern  │ self-describing tagged value             │
/// └──────┴─────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatVersion {
    Legacy,
    Modern,
}

impl FormatVersion {
    /// Return the wire byte for this version.
    pub fn wire_id(self) -> u8 {
        match self {
            Self::Legacy => 0,
            Self::Modern => 1,
        }
    }

    /// Parse a version byte. Unknown versions yield `None`.
    pub fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Legacy),
            1 => Some(Self::Modern),
            _ => None,
        }
    }
}

/// Schematic file header, the first 5 bytes of every buffer.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────┐
/// │ Offset │ Size    │ Description                  │
/// ├────────┼─────────┼──────────────────────────────┤
/// │ 0x00   │ 4 bytes │ Signature: "msch"            │
/// │ 0x04   │ 1 byte  │ Format version (0 or 1)      │
/// │ 0x05.. │ rest    │ zlib-compressed body         │
/// └────────┴─────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MschHeader {
    pub version: FormatVersion,
}

impl MschHeader {
    /// Parse a header from the first 5 bytes of the provided buffer.
    ///
    /// Validation order is signature first, then version, so a file that
    /// is not a schematic at all always reports `BadSignature`.
    ///
    /// # Errors
    ///
    /// - [`WireError::Truncated`] if the buffer is shorter than the
    ///   4-byte signature, or has no version byte.
    /// - [`WireError::BadSignature`] if the signature doesn't match.
    /// - [`WireError::UnsupportedVersion`] if the version byte is unknown.
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        let Some(signature) = buf.get(..VERSION_OFFSET) else {
            return Err(WireError::Truncated {
                offset: 0,
                needed: VERSION_OFFSET,
                available: buf.len(),
            });
        };

        if signature != MSCH_MAGIC {
            let mut found = [0u8; 4];
            found.copy_from_slice(signature);
            return Err(WireError::BadSignature { found });
        }

        let Some(&raw_version) = buf.get(VERSION_OFFSET) else {
            return Err(WireError::Truncated {
                offset: VERSION_OFFSET,
                needed: 1,
                available: 0,
            });
        };

        let version =
            FormatVersion::from_wire_id(raw_version).ok_or(WireError::UnsupportedVersion {
                version: raw_version,
                offset: VERSION_OFFSET,
            })?;

        Ok(Self { version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_header() {
        let parsed = MschHeader::read_from(b"msch\x00rest").unwrap();
        assert_eq!(parsed.version, FormatVersion::Legacy);
    }

    #[test]
    fn parses_modern_header() {
        let parsed = MschHeader::read_from(b"msch\x01").unwrap();
        assert_eq!(parsed.version, FormatVersion::Modern);
    }

    #[test]
    fn reject_bad_signature() {
        let result = MschHeader::read_from(b"XXXX\x00garbage");
        assert_eq!(
            result,
            Err(WireError::BadSignature {
                found: *b"XXXX"
            })
        );
    }

    #[test]
    fn reject_unsupported_version() {
        let result = MschHeader::read_from(b"msch\x07");
        assert!(matches!(
            result,
            Err(WireError::UnsupportedVersion {
                version: 7,
                offset: 4
            })
        ));
    }

    #[test]
    fn reject_buffer_too_short() {
        let result = MschHeader::read_from(b"ms");
        assert!(matches!(result, Err(WireError::Truncated { offset: 0, .. })));
    }

    #[test]
    fn reject_missing_version_byte() {
        let result = MschHeader::read_from(b"msch");
        assert!(matches!(result, Err(WireError::Truncated { offset: 4, .. })));
    }

    #[test]
    fn signature_checked_before_version() {
        // Bad signature and bad version: the signature wins.
        let result = MschHeader::read_from(b"nope\xFF");
        assert!(matches!(result, Err(WireError::BadSignature { .. })));
    }

    #[test]
    fn version_wire_ids_roundtrip() {
        for version in [FormatVersion::Legacy, FormatVersion::Modern] {
            assert_eq!(FormatVersion::from_wire_id(version.wire_id()), Some(version));
        }
        assert_eq!(FormatVersion::from_wire_id(2), None);
    }
}

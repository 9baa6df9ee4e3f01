use crate::error::WireError;

/// Sequential big-endian reader over a borrowed byte buffer.
///
/// A `Cursor` is a plain value: it owns its read offset and nothing else,
/// so two buffers (or two passes over one buffer) never share position
/// state. Every read checks the remaining length up front and fails with
/// [`WireError::Truncated`] instead of slicing past the end; a failed read
/// leaves the offset where it was.
///
/// ```text
///   data:   [ .. consumed .. | .. remaining .. ]
///                            ^
///                            offset
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Create a cursor positioned at `offset` inside `data`.
    ///
    /// Used by the streaming decoder, which keeps the inflated body and
    /// its offset between events and rebuilds a cursor for each step.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            offset: offset.min(data.len()),
        }
    }

    /// Current read offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read `n` raw bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::Truncated`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let start = self.offset;
        let end = start
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(WireError::Truncated {
                offset: start,
                needed: n,
                available: self.remaining(),
            })?;
        self.offset = end;
        Ok(&self.data[start..end])
    }

    /// Read `n` bytes and decode them as UTF-8.
    ///
    /// # Errors
    ///
    /// - [`WireError::Truncated`] if fewer than `n` bytes remain.
    /// - [`WireError::InvalidUtf8`] if the bytes are not UTF-8. The cursor
    ///   has already advanced past them in that case.
    pub fn read_string(&mut self, n: usize) -> Result<String, WireError> {
        let start = self.offset;
        let bytes = self.read_bytes(n)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| WireError::InvalidUtf8 {
                offset: start,
                len: n,
            })
    }

    /// Read an unsigned big-endian integer `n` bytes wide (`1..=4`).
    ///
    /// # Errors
    ///
    /// - [`WireError::UnsupportedWidth`] if `n` is 0 or larger than 4.
    /// - [`WireError::Truncated`] if fewer than `n` bytes remain.
    pub fn read_uint(&mut self, n: usize) -> Result<u32, WireError> {
        if n == 0 || n > 4 {
            return Err(WireError::UnsupportedWidth {
                width: n,
                offset: self.offset,
            });
        }
        let bytes = self.read_bytes(n)?;
        Ok(bytes
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read an IEEE-754 single from its big-endian bit pattern.
    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Read a `u16` length prefix followed by that many UTF-8 bytes.
    ///
    /// This is the string encoding used by every dictionary in the body.
    pub fn read_prefixed_string(&mut self) -> Result<String, WireError> {
        let len = self.read_u16()?;
        self.read_string(usize::from(len))
    }
}

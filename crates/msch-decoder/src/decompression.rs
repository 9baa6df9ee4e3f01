// zlib inflation of the schematic body.

use std::io::Read;

use flate2::read::ZlibDecoder;
use msch_wire::HEADER_SIZE;

use crate::error::DecodeError;

/// Result of inflating the compressed body.
#[derive(Debug, PartialEq)]
pub(crate) struct Inflated {
    pub body: Vec<u8>,
    /// Compressed bytes the zlib stream used, checksum included. Anything
    /// in the input past this point is not part of the stream.
    pub consumed: usize,
}

/// Inflate the zlib-compressed body that follows the header.
///
/// Output is capped at `max_size` bytes: the reader stops one byte past
/// the limit, so an oversized stream is detected without inflating all
/// of it.
///
/// # Errors
///
/// - [`DecodeError::Decompression`] if the stream is not valid zlib.
/// - [`DecodeError::DecompressionBomb`] if the output exceeds `max_size`.
pub(crate) fn inflate(data: &[u8], max_size: usize) -> Result<Inflated, DecodeError> {
    let limit = u64::try_from(max_size).unwrap_or(u64::MAX).saturating_add(1);
    let mut decoder = ZlibDecoder::new(data);
    let mut inflated = Vec::new();
    (&mut decoder)
        .take(limit)
        .read_to_end(&mut inflated)
        .map_err(|e| DecodeError::Decompression {
            offset: HEADER_SIZE,
            reason: e.to_string(),
        })?;

    if inflated.len() > max_size {
        return Err(DecodeError::DecompressionBomb {
            offset: HEADER_SIZE,
            limit: max_size,
        });
    }

    let consumed = usize::try_from(decoder.total_in()).map_or(data.len(), |n| n.min(data.len()));
    Ok(Inflated {
        body: inflated,
        consumed,
    })
}

use indexmap::IndexMap;
use msch_types::{ContentRegistry, FormatVersion, Schematic};
use tracing::debug;

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::sections::Dimensions;
use crate::streaming::{DecoderEvent, StreamingDecoder};

/// Synchronous whole-buffer schematic decoder.
///
/// Decodes a complete `.msch` payload into a [`Schematic`]:
///
/// ```text
///   ┌──────────┐   ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌───────┐
///   │ "msch"   │──▶│ version │──▶│ inflate  │──▶│ sections │──▶│ tiles │
///   │ 4 bytes  │   │ 1 byte  │   │ zlib     │   │ dims/    │   │ × N   │
///   └──────────┘   └─────────┘   └──────────┘   │ tags/    │   └───────┘
///                                               │ blocks   │
///                                               └──────────┘
/// ```
///
/// This is a collector over [`StreamingDecoder`]: it drives the stream to
/// the end and assembles the events. Decoding is all-or-nothing; the
/// first error is returned and nothing else.
///
/// # Example
///
/// ```rust,no_run
/// use msch_decoder::SchematicDecoder;
///
/// let payload = std::fs::read("bridge.msch").unwrap();
/// let schematic = SchematicDecoder::decode(&payload).unwrap();
/// println!("{} tiles", schematic.tiles().len());
/// ```
pub struct SchematicDecoder;

impl SchematicDecoder {
  /// Decode a payload with the default configuration and no content
  /// registry.
  ///
  /// Content references are kept as raw ids; registry-gated modern tags
  /// fail with [`DecodeError::UnsupportedConfigTag`].
  ///
  /// # Errors
  ///
  /// Returns [`DecodeError`] if the payload is not a valid schematic.
  pub fn decode(payload: &[u8]) -> Result<Schematic, DecodeError> {
    Self::decode_with_config(payload, &DecoderConfig::default(), None)
  }

  /// Decode a payload, resolving content references against `registry`.
  ///
  /// # Errors
  ///
  /// As [`decode`](Self::decode), plus
  /// [`DecodeError::UnresolvedContent`] and
  /// [`DecodeError::UnresolvedEnum`] for ids the registry can't name.
  pub fn decode_with_registry(
    payload: &[u8],
    registry: &dyn ContentRegistry,
  ) -> Result<Schematic, DecodeError> {
    Self::decode_with_config(payload, &DecoderConfig::default(), Some(registry))
  }

  /// Decode a payload with an explicit configuration and optional
  /// registry.
  ///
  /// # Errors
  ///
  /// Returns the first [`DecodeError`] hit while decoding.
  pub fn decode_with_config(
    payload: &[u8],
    config: &DecoderConfig,
    registry: Option<&dyn ContentRegistry>,
  ) -> Result<Schematic, DecodeError> {
    let mut version = FormatVersion::Legacy;
    let mut dimensions = Dimensions {
      width: 0,
      height: 0,
    };
    let mut tags = IndexMap::new();
    let mut blocks = Vec::new();
    let mut tiles = Vec::new();

    let mut stream = StreamingDecoder::with_config(payload, config, registry);
    for event in stream.by_ref() {
      match event? {
        DecoderEvent::Header(header) => version = header.version,
        DecoderEvent::Dimensions(dims) => dimensions = dims,
        DecoderEvent::Tags(t) => tags = t,
        DecoderEvent::BlockDictionary(b) => blocks = b,
        DecoderEvent::TileCount(_) => {}
        DecoderEvent::Tile(tile) => tiles.push(tile),
      }
    }

    debug!(
      width = dimensions.width,
      height = dimensions.height,
      tiles = tiles.len(),
      inflated = stream.body_len(),
      "decoded schematic"
    );

    Ok(Schematic::from_parts(
      version,
      dimensions.width,
      dimensions.height,
      tags,
      blocks,
      tiles,
    ))
  }
}

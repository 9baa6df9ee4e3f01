use std::iter::FusedIterator;

use indexmap::IndexMap;
use msch_types::{ContentRegistry, Tile};
use msch_wire::{Cursor, FormatVersion, HEADER_SIZE, MschHeader};
use tracing::{debug, warn};

use crate::config::DecoderConfig;
use crate::config_resolver::ConfigStrategy;
use crate::decompression::inflate;
use crate::error::DecodeError;
use crate::sections::{self, Dimensions};

/// Events emitted by the streaming decoder.
///
/// A successful decode yields the sections in wire order, then one
/// `Tile` event per tile record:
///
/// ```text
///   Header(MschHeader)
///   Dimensions(Dimensions)
///   Tags(IndexMap<String, String>)
///   BlockDictionary(Vec<String>)
///   TileCount(u32)
///   Tile(Tile)
///   Tile(Tile)
///   ... (exactly TileCount tiles)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum DecoderEvent {
  /// Signature and version have been validated.
  Header(MschHeader),

  /// The body has been inflated and the grid size read.
  Dimensions(Dimensions),

  Tags(IndexMap<String, String>),

  BlockDictionary(Vec<String>),

  /// Number of tile records that follow.
  TileCount(u32),

  /// A tile record has been fully decoded.
  Tile(Tile),
}

/// Pull-based schematic decoder that yields one event at a time.
///
/// Useful for tooling that wants the metadata without materialising
/// every tile, or that wants to stop at the first tile matching some
/// predicate. [`SchematicDecoder`](crate::SchematicDecoder) is a thin
/// collector over this type, so both share the same decode path.
///
/// The compressed body is inflated when the first event after the header
/// is requested. Every event after that walks the inflated body with a
/// fresh [`Cursor`] positioned at the saved offset.
///
/// After any error the iterator is exhausted: the next call returns
/// `None`.
///
/// # Example
///
/// ```rust,no_run
/// use msch_decoder::{DecoderEvent, StreamingDecoder};
///
/// fn first_tile_name(payload: &[u8]) -> Option<String> {
///   StreamingDecoder::new(payload)
///     .filter_map(Result::ok)
///     .find_map(|event| match event {
///       DecoderEvent::Tile(tile) => Some(tile.block),
///       _ => None,
///     })
/// }
/// ```
pub struct StreamingDecoder<'a> {
  payload: &'a [u8],
  config: &'a DecoderConfig,
  registry: Option<&'a dyn ContentRegistry>,
  state: StreamState,
  /// Replaced once the header names the real version.
  strategy: ConfigStrategy<'a>,
  /// Inflated body. Empty until the header has been read.
  body: Vec<u8>,
  /// Read offset into `body`.
  offset: usize,
  blocks: Vec<String>,
  tiles_left: u32,
}

/// Internal state machine for the streaming decoder.
///
/// ```text
///   ReadHeader → ReadDimensions → ReadTags → ReadBlocks
///              → ReadTileCount → ReadTiles (× tile count) → Done
/// ```
///
/// Any error moves straight to `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamState {
  ReadHeader,
  ReadDimensions,
  ReadTags,
  ReadBlocks,
  ReadTileCount,
  ReadTiles,
  Done,
}

static DEFAULT_CONFIG: std::sync::LazyLock<DecoderConfig> =
  std::sync::LazyLock::new(DecoderConfig::default);

impl<'a> StreamingDecoder<'a> {
  /// Create a streaming decoder with the default configuration and no
  /// content registry.
  #[must_use]
  pub fn new(payload: &'a [u8]) -> Self {
    Self::with_config(payload, &DEFAULT_CONFIG, None)
  }

  #[must_use]
  pub fn with_config(
    payload: &'a [u8],
    config: &'a DecoderConfig,
    registry: Option<&'a dyn ContentRegistry>,
  ) -> Self {
    Self {
      payload,
      config,
      registry,
      state: StreamState::ReadHeader,
      strategy: ConfigStrategy::select(FormatVersion::Legacy, &config.legacy_table, registry),
      body: Vec::new(),
      offset: 0,
      blocks: Vec::new(),
      tiles_left: 0,
    }
  }

  /// Current read offset into the inflated body.
  pub fn offset(&self) -> usize {
    self.offset
  }

  /// Size of the inflated body, or 0 before it has been inflated.
  pub fn body_len(&self) -> usize {
    self.body.len()
  }

  fn read_header(&mut self) -> Result<DecoderEvent, DecodeError> {
    let header = MschHeader::read_from(self.payload).map_err(DecodeError::from_header)?;
    debug!(version = header.version.wire_id(), "read header");
    self.strategy = ConfigStrategy::select(header.version, &self.config.legacy_table, self.registry);
    self.state = StreamState::ReadDimensions;
    Ok(DecoderEvent::Header(header))
  }

  fn read_dimensions(&mut self) -> Result<DecoderEvent, DecodeError> {
    let compressed = self.payload.get(HEADER_SIZE..).unwrap_or_default();
    let inflated = inflate(compressed, self.config.max_decompressed_size)?;
    self.check_leftover_input(compressed.len() - inflated.consumed, inflated.consumed)?;
    self.body = inflated.body;
    debug!(
      compressed = inflated.consumed,
      inflated = self.body.len(),
      "inflated body"
    );

    let dimensions = with_cursor(&self.body, &mut self.offset, sections::read_dimensions)?;
    debug!(width = dimensions.width, height = dimensions.height, "read dimensions");
    self.state = StreamState::ReadTags;
    Ok(DecoderEvent::Dimensions(dimensions))
  }

  fn read_tags(&mut self) -> Result<DecoderEvent, DecodeError> {
    let tags = with_cursor(&self.body, &mut self.offset, sections::read_tags)?;
    debug!(count = tags.len(), "read tags");
    self.state = StreamState::ReadBlocks;
    Ok(DecoderEvent::Tags(tags))
  }

  fn read_blocks(&mut self) -> Result<DecoderEvent, DecodeError> {
    let blocks = with_cursor(&self.body, &mut self.offset, sections::read_block_dictionary)?;
    debug!(count = blocks.len(), "read block dictionary");
    self.blocks.clone_from(&blocks);
    self.state = StreamState::ReadTileCount;
    Ok(DecoderEvent::BlockDictionary(blocks))
  }

  fn read_tile_count(&mut self) -> Result<DecoderEvent, DecodeError> {
    let count = with_cursor(&self.body, &mut self.offset, sections::read_tile_count)?;
    debug!(count, "read tile count");
    self.tiles_left = count;
    self.state = StreamState::ReadTiles;
    Ok(DecoderEvent::TileCount(count))
  }

  fn read_tile(&mut self) -> Result<DecoderEvent, DecodeError> {
    let strategy = self.strategy;
    let blocks = &self.blocks;
    let tile = with_cursor(&self.body, &mut self.offset, |cursor| {
      sections::read_tile(cursor, blocks, &strategy)
    })?;
    self.tiles_left -= 1;
    Ok(DecoderEvent::Tile(tile))
  }

  /// Handle raw bytes that follow the end of the zlib stream.
  fn check_leftover_input(&self, extra_bytes: usize, consumed: usize) -> Result<(), DecodeError> {
    if extra_bytes == 0 {
      return Ok(());
    }
    let offset = HEADER_SIZE + consumed;
    if !self.config.allow_trailing_data {
      return Err(DecodeError::TrailingInput { offset, extra_bytes });
    }
    warn!(offset, extra_bytes, "ignoring data after compressed body");
    Ok(())
  }

  /// Handle whatever is left of the body after the last tile.
  fn finish(&self) -> Result<(), DecodeError> {
    let extra_bytes = self.body.len().saturating_sub(self.offset);
    if extra_bytes == 0 {
      return Ok(());
    }
    if !self.config.allow_trailing_data {
      return Err(DecodeError::TrailingData {
        offset: self.offset,
        extra_bytes,
      });
    }
    warn!(offset = self.offset, extra_bytes, "ignoring data after last tile");
    Ok(())
  }
}

/// Run `read` on a cursor at `*offset`, saving the new offset on success.
fn with_cursor<'b, T>(
  body: &'b [u8],
  offset: &mut usize,
  read: impl FnOnce(&mut Cursor<'b>) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
  let mut cursor = Cursor::at(body, *offset);
  let value = read(&mut cursor)?;
  *offset = cursor.offset();
  Ok(value)
}

impl Iterator for StreamingDecoder<'_> {
  type Item = Result<DecoderEvent, DecodeError>;

  fn next(&mut self) -> Option<Self::Item> {
    let result = match self.state {
      StreamState::ReadHeader => self.read_header(),
      StreamState::ReadDimensions => self.read_dimensions(),
      StreamState::ReadTags => self.read_tags(),
      StreamState::ReadBlocks => self.read_blocks(),
      StreamState::ReadTileCount => self.read_tile_count(),
      StreamState::ReadTiles if self.tiles_left > 0 => self.read_tile(),
      StreamState::ReadTiles => {
        self.state = StreamState::Done;
        return self.finish().err().map(Err);
      }
      StreamState::Done => return None,
    };
    if result.is_err() {
      self.state = StreamState::Done;
    }
    Some(result)
  }
}

impl FusedIterator for StreamingDecoder<'_> {}

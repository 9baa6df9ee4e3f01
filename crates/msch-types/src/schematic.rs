use indexmap::IndexMap;
use msch_wire::{FormatVersion, Position};

use crate::tile::Tile;

/// Conventional tag key holding the schematic's display name.
pub const NAME_TAG: &str = "name";

/// Conventional tag key holding the schematic's description.
pub const DESCRIPTION_TAG: &str = "description";

/// A fully decoded schematic.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ Schematic                                                │
/// │   version: FormatVersion        ← from the header        │
/// │   width, height: u16            ← grid dimensions        │
/// │   tags: IndexMap<String,String> ← free-form metadata     │
/// │   blocks: Vec<String>           ← block-name dictionary  │
/// │   tiles: Vec<Tile>              ← placements, wire order │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// A `Schematic` is only ever built by a successful decode. After that it
/// is read-only except for the dimension setters, which are shallow: they
/// don't move, clip, or validate tiles.
///
/// Tag equality ignores insertion order; tile order is significant and is
/// the order the tiles appeared on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct Schematic {
  version: FormatVersion,
  width: u16,
  height: u16,
  tags: IndexMap<String, String>,
  blocks: Vec<String>,
  tiles: Vec<Tile>,
}

impl Schematic {
  /// Assemble a schematic from its decoded sections.
  ///
  /// The decoder guarantees that every tile's block appears in `blocks`;
  /// this constructor does not re-check it.
  pub fn from_parts(
    version: FormatVersion,
    width: u16,
    height: u16,
    tags: IndexMap<String, String>,
    blocks: Vec<String>,
    tiles: Vec<Tile>,
  ) -> Self {
    Self {
      version,
      width,
      height,
      tags,
      blocks,
      tiles,
    }
  }

  pub fn version(&self) -> FormatVersion {
    self.version
  }

  pub fn width(&self) -> u16 {
    self.width
  }

  pub fn height(&self) -> u16 {
    self.height
  }

  pub fn set_width(&mut self, width: u16) -> &mut Self {
    self.width = width;
    self
  }

  pub fn set_height(&mut self, height: u16) -> &mut Self {
    self.height = height;
    self
  }

  /// Set both dimensions at once.
  pub fn resize(&mut self, width: u16, height: u16) -> &mut Self {
    self.width = width;
    self.height = height;
    self
  }

  pub fn tags(&self) -> &IndexMap<String, String> {
    &self.tags
  }

  pub fn tag(&self, key: &str) -> Option<&str> {
    self.tags.get(key).map(String::as_str)
  }

  pub fn name(&self) -> Option<&str> {
    self.tag(NAME_TAG)
  }

  pub fn description(&self) -> Option<&str> {
    self.tag(DESCRIPTION_TAG)
  }

  /// The block-name dictionary, in wire order.
  pub fn blocks(&self) -> &[String] {
    &self.blocks
  }

  pub fn tiles(&self) -> &[Tile] {
    &self.tiles
  }

  /// First tile placed at `(x, y)`, in wire order.
  pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
    let target = Position::new(x, y);
    self.tiles.iter().find(|t| t.position == target)
  }

  /// Number of tiles per block name, in order of first appearance.
  pub fn block_counts(&self) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for tile in &self.tiles {
      *counts.entry(tile.block.as_str()).or_insert(0) += 1;
    }
    counts
  }
}

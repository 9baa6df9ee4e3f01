use msch_wire::Position;

use crate::content_registry::ContentRegistry;

/// Which external content table a [`ConfigValue::ContentRef`] points into.
///
/// The legacy format only ever produces `Item` and `Liquid`. The modern
/// tagged encoding carries an explicit content-type byte, so it can also
/// name blocks, units, or content types this crate has no name for.
///
/// ```text
/// ┌──────┬──────────┐
/// │ Wire │ Variant  │
/// ├──────┼──────────┤
/// │ 0x00 │ Item     │
/// │ 0x01 │ Block    │
/// │ 0x04 │ Liquid   │
/// │ 0x06 │ Unit     │
/// │ else │ Other(n) │
/// └──────┴──────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
  Item,
  Block,
  Liquid,
  Unit,
  Other(u8),
}

impl ContentKind {
  pub fn wire_id(self) -> u8 {
    match self {
      Self::Item => 0x00,
      Self::Block => 0x01,
      Self::Liquid => 0x04,
      Self::Unit => 0x06,
      Self::Other(id) => id,
    }
  }

  pub fn from_wire_id(id: u8) -> Self {
    match id {
      0x00 => Self::Item,
      0x01 => Self::Block,
      0x04 => Self::Liquid,
      0x06 => Self::Unit,
      other => Self::Other(other),
    }
  }
}

/// Enumerations that modern config values may reference by ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumKind {
  /// Logic processor sensor/control field (tag 13).
  LogicAccess,
  /// Team (tag 20).
  Team,
}

/// The decoded configuration of a single tile.
///
/// Exactly one variant is populated per tile. `None` means either that
/// the tile carried no config or that its block type has no known config
/// interpretation; it is never used to paper over a decode failure.
///
/// ```text
/// ┌────────────────┬──────────────────────────────────────────────┐
/// │ Variant        │ Produced by                                  │
/// ├────────────────┼──────────────────────────────────────────────┤
/// │ None           │ legacy: unmapped block / modern: tag 0       │
/// │ Int            │ legacy: light blocks / modern: tag 1         │
/// │ Long           │ modern: tag 2                                │
/// │ Float          │ modern: tag 3                                │
/// │ Bool           │ modern: tag 10                               │
/// │ String         │ modern: tag 4                                │
/// │ PositionDelta  │ legacy: link blocks (target - own position)  │
/// │ Point          │ modern: tag 7 (absolute pair)                │
/// │ ContentRef     │ legacy: item/liquid blocks / modern: tag 5   │
/// │ IntArray       │ modern: tag 6                                │
/// │ PointArray     │ modern: tag 8                                │
/// │ Bytes          │ modern: tag 14                               │
/// │ BoolArray      │ modern: tag 16                               │
/// │ Enum           │ modern: tags 13, 20                          │
/// └────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConfigValue {
  #[default]
  None,
  Int(i32),
  Long(i64),
  Float(f32),
  Bool(bool),
  String(String),
  /// Offset from the tile's own position to the tile it links to.
  PositionDelta { dx: i32, dy: i32 },
  /// An absolute coordinate pair.
  Point { x: i32, y: i32 },
  ContentRef { kind: ContentKind, id: i32 },
  IntArray(Vec<i32>),
  PointArray(Vec<Position>),
  Bytes(Vec<u8>),
  BoolArray(Vec<bool>),
  Enum { kind: EnumKind, ordinal: u16 },
}

impl ConfigValue {
  pub fn is_none(&self) -> bool {
    matches!(self, Self::None)
  }

  /// Short lowercase label for the variant, for diagnostics and tooling.
  pub fn kind_label(&self) -> &'static str {
    match self {
      Self::None => "none",
      Self::Int(_) => "int",
      Self::Long(_) => "long",
      Self::Float(_) => "float",
      Self::Bool(_) => "bool",
      Self::String(_) => "string",
      Self::PositionDelta { .. } => "position_delta",
      Self::Point { .. } => "point",
      Self::ContentRef { .. } => "content",
      Self::IntArray(_) => "int_array",
      Self::PointArray(_) => "point_array",
      Self::Bytes(_) => "bytes",
      Self::BoolArray(_) => "bool_array",
      Self::Enum { .. } => "enum",
    }
  }

  /// Resolve a content reference or enum to its registry name.
  ///
  /// Returns `None` for every other variant, and for ids the registry
  /// doesn't know.
  pub fn registry_name<'r>(&self, registry: &'r dyn ContentRegistry) -> Option<&'r str> {
    match *self {
      Self::ContentRef { kind, id } => registry.lookup_content(kind, id),
      Self::Enum { kind, ordinal } => registry.lookup_enum(kind, ordinal),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::content_registry::MemoryContentRegistry;

  #[test]
  fn content_kind_wire_ids_roundtrip() {
    for kind in [
      ContentKind::Item,
      ContentKind::Block,
      ContentKind::Liquid,
      ContentKind::Unit,
      ContentKind::Other(0x09),
    ] {
      assert_eq!(ContentKind::from_wire_id(kind.wire_id()), kind);
    }
  }

  #[test]
  fn default_is_none() {
    assert!(ConfigValue::default().is_none());
    assert!(!ConfigValue::Int(0).is_none());
  }

  #[test]
  fn registry_name_resolves_refs_only() {
    let registry = MemoryContentRegistry::new()
      .with_item(2, "copper")
      .with_enum(EnumKind::Team, 1, "sharded");

    let copper = ConfigValue::ContentRef {
      kind: ContentKind::Item,
      id: 2,
    };
    assert_eq!(copper.registry_name(&registry), Some("copper"));

    let team = ConfigValue::Enum {
      kind: EnumKind::Team,
      ordinal: 1,
    };
    assert_eq!(team.registry_name(&registry), Some("sharded"));

    assert_eq!(ConfigValue::Int(2).registry_name(&registry), None);
  }
}

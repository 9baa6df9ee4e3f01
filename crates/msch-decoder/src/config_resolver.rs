use std::collections::HashMap;

use msch_types::{ConfigTag, ConfigValue, ContentKind, ContentRegistry, EnumKind, TagSupport};
use msch_wire::{Cursor, FormatVersion, Position, unpack};

use crate::error::DecodeError;

/// Turns a version 0 raw config into a value, given the tile's position.
pub type LegacyResolver = fn(u32, Position) -> ConfigValue;

/// Reinterpret a raw config as a signed 32-bit value.
fn as_signed(raw: u32) -> i32 {
    i32::from_be_bytes(raw.to_be_bytes())
}

/// Raw config is an item id.
pub fn item_ref(raw: u32, _position: Position) -> ConfigValue {
    ConfigValue::ContentRef {
        kind: ContentKind::Item,
        id: as_signed(raw),
    }
}

/// Raw config is a liquid id.
pub fn liquid_ref(raw: u32, _position: Position) -> ConfigValue {
    ConfigValue::ContentRef {
        kind: ContentKind::Liquid,
        id: as_signed(raw),
    }
}

/// Raw config is the packed position of a linked tile. The result is
/// the offset from the tile to its link target.
pub fn relative_link(raw: u32, position: Position) -> ConfigValue {
    let (dx, dy) = unpack(raw).offset_from(position);
    ConfigValue::PositionDelta { dx, dy }
}

/// Raw config is a plain integer (a packed colour, for lights).
pub fn raw_int(raw: u32, _position: Position) -> ConfigValue {
    ConfigValue::Int(as_signed(raw))
}

/// Block name → resolver table for version 0 schematics.
///
/// Version 0 configs carry no type information: every tile stores a bare
/// `u32`, and only the block's name says what it means. Blocks missing
/// from the table decode to [`ConfigValue::None`].
///
/// ```text
/// ┌─────────────────────────────────────────────────┬──────────────────┐
/// │ Block                                           │ Resolver         │
/// ├─────────────────────────────────────────────────┼──────────────────┤
/// │ item-source, unloader, sorter, inverted-sorter  │ item_ref         │
/// │ liquid-source                                   │ liquid_ref       │
/// │ mass-driver, bridge-conveyor, phase-conveyor    │ relative_link    │
/// │ illuminator                                     │ raw_int          │
/// └─────────────────────────────────────────────────┴──────────────────┘
/// ```
///
/// The table is open: callers can register more names (or override the
/// built-ins) before decoding.
#[derive(Clone, Debug)]
pub struct LegacyConfigTable {
    resolvers: HashMap<String, LegacyResolver>,
}

impl LegacyConfigTable {
    /// A table with no entries. Every block decodes to `None`.
    pub fn empty() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Register (or replace) the resolver for `block`.
    pub fn insert(&mut self, block: impl Into<String>, resolver: LegacyResolver) {
        self.resolvers.insert(block.into(), resolver);
    }

    #[must_use]
    pub fn with(mut self, block: impl Into<String>, resolver: LegacyResolver) -> Self {
        self.insert(block, resolver);
        self
    }

    pub fn get(&self, block: &str) -> Option<LegacyResolver> {
        self.resolvers.get(block).copied()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolve `raw` for a tile of `block` at `position`.
    pub fn resolve(&self, block: &str, raw: u32, position: Position) -> ConfigValue {
        self.get(block)
            .map_or(ConfigValue::None, |resolve| resolve(raw, position))
    }
}

impl Default for LegacyConfigTable {
    fn default() -> Self {
        Self::empty()
            .with("item-source", item_ref)
            .with("unloader", item_ref)
            .with("sorter", item_ref)
            .with("inverted-sorter", item_ref)
            .with("liquid-source", liquid_ref)
            .with("mass-driver", relative_link)
            .with("bridge-conveyor", relative_link)
            .with("phase-conveyor", relative_link)
            .with("illuminator", raw_int)
    }
}

/// Decoder for the version 1 tagged config encoding.
///
/// Each config starts with a one-byte [`ConfigTag`] followed by a
/// tag-specific payload. Tags fall into four groups (see
/// [`TagSupport`]): base tags always decode; registry tags decode only
/// when a [`ContentRegistry`] is present; unsupported and unknown tags
/// always fail.
#[derive(Clone, Copy, Default)]
pub struct ModernTagTable<'a> {
    registry: Option<&'a dyn ContentRegistry>,
}

impl<'a> ModernTagTable<'a> {
    pub fn new(registry: Option<&'a dyn ContentRegistry>) -> Self {
        Self { registry }
    }

    /// Read one tagged config value.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownConfigTag`] for a tag outside the table.
    /// - [`DecodeError::UnsupportedConfigTag`] for a known tag this
    ///   decoder can't read, or a registry tag with no registry.
    /// - [`DecodeError::UnresolvedContent`] / [`DecodeError::UnresolvedEnum`]
    ///   when the registry has no name for the referenced id.
    /// - [`DecodeError::Truncated`] / [`DecodeError::InvalidUtf8`] from
    ///   the payload reads.
    pub fn decode(&self, cursor: &mut Cursor<'_>) -> Result<ConfigValue, DecodeError> {
        let offset = cursor.offset();
        let raw = cursor.read_u8()?;
        let tag = ConfigTag::from_wire_id(raw);

        match tag.support() {
            TagSupport::Unknown => return Err(DecodeError::UnknownConfigTag { tag: raw, offset }),
            TagSupport::Unsupported => {
                return Err(DecodeError::UnsupportedConfigTag { tag: raw, offset });
            }
            TagSupport::RequiresRegistry if self.registry.is_none() => {
                return Err(DecodeError::UnsupportedConfigTag { tag: raw, offset });
            }
            TagSupport::Base | TagSupport::RequiresRegistry => {}
        }

        let value = match tag {
            ConfigTag::Null => ConfigValue::None,
            ConfigTag::Int => ConfigValue::Int(cursor.read_i32()?),
            ConfigTag::Long => ConfigValue::Long(i64::from(cursor.read_i32()?)),
            ConfigTag::Float => ConfigValue::Float(cursor.read_f32()?),
            ConfigTag::String => ConfigValue::String(cursor.read_prefixed_string()?),
            ConfigTag::Content => {
                let kind = ContentKind::from_wire_id(cursor.read_u8()?);
                let id = i32::from(cursor.read_u16()?);
                ConfigValue::ContentRef { kind, id }
            }
            ConfigTag::IntSeq => {
                let len = cursor.read_u16()?;
                let values = (0..len)
                    .map(|_| cursor.read_i32())
                    .collect::<Result<Vec<_>, _>>()?;
                ConfigValue::IntArray(values)
            }
            ConfigTag::Point => {
                let x = cursor.read_i32()?;
                let y = cursor.read_i32()?;
                ConfigValue::Point { x, y }
            }
            ConfigTag::PointArray => {
                let len = cursor.read_u8()?;
                let points = (0..len)
                    .map(|_| cursor.read_u32().map(unpack))
                    .collect::<Result<Vec<_>, _>>()?;
                ConfigValue::PointArray(points)
            }
            ConfigTag::Bool => ConfigValue::Bool(cursor.read_u8()? != 0),
            ConfigTag::LogicAccess => ConfigValue::Enum {
                kind: EnumKind::LogicAccess,
                ordinal: cursor.read_u16()?,
            },
            ConfigTag::Bytes => {
                let len = read_length(cursor)?;
                ConfigValue::Bytes(cursor.read_bytes(len)?.to_vec())
            }
            ConfigTag::BoolArray => {
                let len = read_length(cursor)?;
                let flags = cursor.read_bytes(len)?.iter().map(|&b| b != 0).collect();
                ConfigValue::BoolArray(flags)
            }
            ConfigTag::Team => ConfigValue::Enum {
                kind: EnumKind::Team,
                ordinal: u16::from(cursor.read_u8()?),
            },
            _ => return Err(DecodeError::UnsupportedConfigTag { tag: raw, offset }),
        };

        check_registered(&value, self.registry, offset)?;
        Ok(value)
    }
}

/// A `u32` length prefix as a `usize`.
fn read_length(cursor: &mut Cursor<'_>) -> Result<usize, DecodeError> {
    let len = cursor.read_u32()?;
    // Lengths that don't fit in usize can't fit in the buffer either; let
    // the following read report the truncation.
    Ok(usize::try_from(len).unwrap_or(usize::MAX))
}

/// Fail if `value` references content or an enum the registry can't name.
///
/// Without a registry nothing is checked.
fn check_registered(
    value: &ConfigValue,
    registry: Option<&dyn ContentRegistry>,
    offset: usize,
) -> Result<(), DecodeError> {
    let Some(registry) = registry else {
        return Ok(());
    };
    match *value {
        ConfigValue::ContentRef { kind, id } if registry.lookup_content(kind, id).is_none() => {
            Err(DecodeError::UnresolvedContent { kind, id, offset })
        }
        ConfigValue::Enum { kind, ordinal } if registry.lookup_enum(kind, ordinal).is_none() => {
            Err(DecodeError::UnresolvedEnum {
                kind,
                ordinal,
                offset,
            })
        }
        _ => Ok(()),
    }
}

/// How tile configs are read, chosen once per decode from the format
/// version.
///
/// ```text
///   FormatVersion::Legacy ──▶ Legacy { table, registry }   raw u32 + block name
///   FormatVersion::Modern ──▶ Modern(ModernTagTable)       tag byte + payload
/// ```
#[derive(Clone, Copy)]
pub enum ConfigStrategy<'a> {
    Legacy {
        table: &'a LegacyConfigTable,
        registry: Option<&'a dyn ContentRegistry>,
    },
    Modern(ModernTagTable<'a>),
}

impl<'a> ConfigStrategy<'a> {
    pub fn select(
        version: FormatVersion,
        table: &'a LegacyConfigTable,
        registry: Option<&'a dyn ContentRegistry>,
    ) -> Self {
        match version {
            FormatVersion::Legacy => Self::Legacy { table, registry },
            FormatVersion::Modern => Self::Modern(ModernTagTable::new(registry)),
        }
    }

    /// Read the config field of a tile of `block` placed at `position`.
    ///
    /// # Errors
    ///
    /// Any error from the underlying reads, or from
    /// [`ModernTagTable::decode`]. Legacy item and liquid references
    /// missing from a wired registry fail with
    /// [`DecodeError::UnresolvedContent`].
    pub fn resolve(
        &self,
        cursor: &mut Cursor<'_>,
        block: &str,
        position: Position,
    ) -> Result<ConfigValue, DecodeError> {
        match self {
            Self::Legacy { table, registry } => {
                let offset = cursor.offset();
                let raw = cursor.read_u32()?;
                let value = table.resolve(block, raw, position);
                check_registered(&value, *registry, offset)?;
                Ok(value)
            }
            Self::Modern(tags) => tags.decode(cursor),
        }
    }
}

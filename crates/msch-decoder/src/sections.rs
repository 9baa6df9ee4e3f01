//! Readers for the sections of the inflated body.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │ width u16 │ height u16                                         │
//! │ tag count u8    │ (key: u16 len + utf8, value: u16 len + utf8)* │
//! │ block count u8  │ (name: u16 len + utf8)*                       │
//! │ tile count u32  │ tile record*                                  │
//! └────────────────────────────────────────────────────────────────┘
//!
//! tile record = block index u8 │ position u32 │ config │ rotation u8
//! ```
//!
//! Each reader consumes exactly its section from the cursor, so they must
//! be called in the order above.

use indexmap::IndexMap;
use msch_types::Tile;
use msch_wire::{Cursor, unpack};
use tracing::trace;

use crate::config_resolver::ConfigStrategy;
use crate::error::DecodeError;

/// Grid size of the schematic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

pub fn read_dimensions(cursor: &mut Cursor<'_>) -> Result<Dimensions, DecodeError> {
    let width = cursor.read_u16()?;
    let height = cursor.read_u16()?;
    Ok(Dimensions { width, height })
}

/// Read the tag dictionary. A key that appears twice keeps its last value.
pub fn read_tags(cursor: &mut Cursor<'_>) -> Result<IndexMap<String, String>, DecodeError> {
    let count = cursor.read_u8()?;
    let mut tags = IndexMap::with_capacity(usize::from(count));
    for _ in 0..count {
        let key = cursor.read_prefixed_string()?;
        let value = cursor.read_prefixed_string()?;
        tags.insert(key, value);
    }
    Ok(tags)
}

/// Read the block-name dictionary, in wire order.
pub fn read_block_dictionary(cursor: &mut Cursor<'_>) -> Result<Vec<String>, DecodeError> {
    let count = cursor.read_u8()?;
    (0..count)
        .map(|_| cursor.read_prefixed_string().map_err(DecodeError::from))
        .collect()
}

pub fn read_tile_count(cursor: &mut Cursor<'_>) -> Result<u32, DecodeError> {
    Ok(cursor.read_u32()?)
}

/// Read one tile record.
///
/// The block index is checked against `blocks` before anything else is
/// read, so an out-of-range index reports the offset of the index byte.
pub fn read_tile(
    cursor: &mut Cursor<'_>,
    blocks: &[String],
    strategy: &ConfigStrategy<'_>,
) -> Result<Tile, DecodeError> {
    let offset = cursor.offset();
    let index = cursor.read_u8()?;
    let block = blocks
        .get(usize::from(index))
        .ok_or(DecodeError::UnknownBlockIndex {
            index,
            dictionary_len: blocks.len(),
            offset,
        })?;

    let position = unpack(cursor.read_u32()?);
    let config = strategy.resolve(cursor, block, position)?;
    let rotation = cursor.read_u8()?;

    trace!(
        offset,
        block = block.as_str(),
        x = position.x,
        y = position.y,
        config = config.kind_label(),
        rotation,
        "tile"
    );

    Ok(Tile {
        block: block.clone(),
        position,
        config,
        rotation,
    })
}

#[cfg(test)]
mod tests {
    use msch_types::{ConfigValue, ContentKind};
    use msch_wire::{FormatVersion, Position, pack};

    use super::*;
    use crate::config_resolver::LegacyConfigTable;

    fn string(s: &str) -> Vec<u8> {
        let mut out = u16::try_from(s.len()).unwrap().to_be_bytes().to_vec();
        out.extend_from_slice(s.as_bytes());
        out
    }

    #[test]
    fn dimensions() {
        let mut cursor = Cursor::new(&[0, 3, 1, 0]);
        assert_eq!(
            read_dimensions(&mut cursor).unwrap(),
            Dimensions {
                width: 3,
                height: 256
            }
        );
    }

    #[test]
    fn tags_last_write_wins() {
        let mut bytes = vec![3];
        for (k, v) in [("name", "a"), ("description", "d"), ("name", "b")] {
            bytes.extend(string(k));
            bytes.extend(string(v));
        }
        let mut cursor = Cursor::new(&bytes);
        let tags = read_tags(&mut cursor).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["name"], "b");
        assert_eq!(tags["description"], "d");
        assert!(cursor.is_empty());
    }

    #[test]
    fn empty_tags_and_blocks() {
        let mut cursor = Cursor::new(&[0, 0]);
        assert!(read_tags(&mut cursor).unwrap().is_empty());
        assert!(read_block_dictionary(&mut cursor).unwrap().is_empty());
    }

    #[test]
    fn block_dictionary_in_order() {
        let mut bytes = vec![2];
        bytes.extend(string("sorter"));
        bytes.extend(string("conveyor"));
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(
            read_block_dictionary(&mut cursor).unwrap(),
            vec!["sorter".to_string(), "conveyor".to_string()]
        );
    }

    #[test]
    fn legacy_tile_record() {
        let table = LegacyConfigTable::default();
        let strategy = ConfigStrategy::select(FormatVersion::Legacy, &table, None);
        let blocks = vec!["conveyor".to_string(), "sorter".to_string()];

        let mut bytes = vec![1];
        bytes.extend(pack(2, 3).unwrap().to_be_bytes());
        bytes.extend(5u32.to_be_bytes());
        bytes.push(1);

        let mut cursor = Cursor::new(&bytes);
        let tile = read_tile(&mut cursor, &blocks, &strategy).unwrap();
        assert_eq!(tile.block, "sorter");
        assert_eq!(tile.position, Position::new(2, 3));
        assert_eq!(
            tile.config,
            ConfigValue::ContentRef {
                kind: ContentKind::Item,
                id: 5
            }
        );
        assert_eq!(tile.rotation, 1);
        assert!(cursor.is_empty());
    }

    #[test]
    fn block_index_out_of_range() {
        let table = LegacyConfigTable::default();
        let strategy = ConfigStrategy::select(FormatVersion::Modern, &table, None);
        let blocks = vec!["conveyor".to_string()];
        let bytes = [0xAA, 1, 0, 0, 0, 0, 0, 0];
        let mut cursor = Cursor::at(&bytes, 1);
        assert_eq!(
            read_tile(&mut cursor, &blocks, &strategy),
            Err(DecodeError::UnknownBlockIndex {
                index: 1,
                dictionary_len: 1,
                offset: 1
            })
        );
    }
}

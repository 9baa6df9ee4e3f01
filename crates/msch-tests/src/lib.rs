//! Test support for the msch workspace.
//!
//! [`SchematicBuilder`] writes schematic payloads byte by byte, so tests
//! can produce both valid files and precisely broken ones (bad block
//! indices, lying tile counts, trailing bytes, unknown config tags)
//! without shipping binary fixtures for every case.
//!
//! ```text
//!   SchematicBuilder::modern()
//!       .size(2, 1)
//!       .tag("name", "demo")
//!       .block("switch")
//!       .modern_tile(0, 0, 0, &tagged::boolean(true), 0)
//!       .build()          ──▶  "msch" │ 0x01 │ zlib(body)
//! ```

#![allow(clippy::pedantic)]

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use msch_wire::{MSCH_MAGIC, pack};

/// zlib-compress `body` at the default level.
pub fn compress(body: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body).expect("writing to a Vec cannot fail");
    encoder.finish().expect("writing to a Vec cannot fail")
}

/// Signature, version byte, then `compressed` verbatim.
pub fn frame(version: u8, compressed: &[u8]) -> Vec<u8> {
    let mut out = MSCH_MAGIC.to_vec();
    out.push(version);
    out.extend_from_slice(compressed);
    out
}

/// Pack a coordinate, panicking outside the legal domain.
pub fn packed(x: i32, y: i32) -> u32 {
    pack(x, y).unwrap_or_else(|| panic!("({x}, {y}) is outside the packed domain"))
}

fn push_string(out: &mut Vec<u8>, s: &str) {
    let len = u16::try_from(s.len()).expect("string longer than u16::MAX");
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Byte-level writer for schematic payloads.
#[derive(Clone, Debug)]
pub struct SchematicBuilder {
    version: u8,
    width: u16,
    height: u16,
    tags: Vec<(String, String)>,
    blocks: Vec<String>,
    tiles: Vec<u8>,
    tile_count: u32,
    tile_count_override: Option<u32>,
    trailing: Vec<u8>,
}

impl SchematicBuilder {
    pub fn with_version(version: u8) -> Self {
        Self {
            version,
            width: 0,
            height: 0,
            tags: Vec::new(),
            blocks: Vec::new(),
            tiles: Vec::new(),
            tile_count: 0,
            tile_count_override: None,
            trailing: Vec::new(),
        }
    }

    /// Version 0: configs are raw `u32`s.
    pub fn legacy() -> Self {
        Self::with_version(0)
    }

    /// Version 1: configs are tagged values.
    pub fn modern() -> Self {
        Self::with_version(1)
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a name to the block dictionary. Its index is the number of
    /// blocks added before it.
    pub fn block(mut self, name: &str) -> Self {
        self.blocks.push(name.to_string());
        self
    }

    /// Append a tile record with raw config bytes.
    pub fn raw_tile(mut self, block: u8, x: i32, y: i32, config: &[u8], rotation: u8) -> Self {
        self.tiles.push(block);
        self.tiles.extend_from_slice(&packed(x, y).to_be_bytes());
        self.tiles.extend_from_slice(config);
        self.tiles.push(rotation);
        self.tile_count += 1;
        self
    }

    /// Append a tile with a version 0 config.
    pub fn legacy_tile(self, block: u8, x: i32, y: i32, config: u32, rotation: u8) -> Self {
        self.raw_tile(block, x, y, &config.to_be_bytes(), rotation)
    }

    /// Append a tile with a version 1 tagged config (see [`tagged`]).
    pub fn modern_tile(self, block: u8, x: i32, y: i32, config: &[u8], rotation: u8) -> Self {
        self.raw_tile(block, x, y, config, rotation)
    }

    /// Declare `count` tiles regardless of how many were added.
    pub fn declare_tiles(mut self, count: u32) -> Self {
        self.tile_count_override = Some(count);
        self
    }

    /// Bytes appended to the body after the last tile.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    /// The uncompressed body.
    pub fn body(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.width.to_be_bytes());
        out.extend_from_slice(&self.height.to_be_bytes());

        out.push(u8::try_from(self.tags.len()).expect("more than 255 tags"));
        for (key, value) in &self.tags {
            push_string(&mut out, key);
            push_string(&mut out, value);
        }

        out.push(u8::try_from(self.blocks.len()).expect("more than 255 blocks"));
        for name in &self.blocks {
            push_string(&mut out, name);
        }

        let count = self.tile_count_override.unwrap_or(self.tile_count);
        out.extend_from_slice(&count.to_be_bytes());
        out.extend_from_slice(&self.tiles);
        out.extend_from_slice(&self.trailing);
        out
    }

    /// The full payload: header plus compressed body.
    pub fn build(&self) -> Vec<u8> {
        frame(self.version, &compress(&self.body()))
    }
}

/// Encoders for version 1 tagged config values.
pub mod tagged {
    /// Tag byte followed by `payload`.
    pub fn raw(tag: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = vec![tag];
        out.extend_from_slice(payload);
        out
    }

    pub fn null() -> Vec<u8> {
        vec![0]
    }

    pub fn int(value: i32) -> Vec<u8> {
        raw(1, &value.to_be_bytes())
    }

    pub fn long(value: i32) -> Vec<u8> {
        raw(2, &value.to_be_bytes())
    }

    pub fn float(value: f32) -> Vec<u8> {
        raw(3, &value.to_bits().to_be_bytes())
    }

    pub fn string(value: &str) -> Vec<u8> {
        let mut out = vec![4];
        super::push_string(&mut out, value);
        out
    }

    pub fn content(kind: u8, id: u16) -> Vec<u8> {
        let mut out = vec![5, kind];
        out.extend_from_slice(&id.to_be_bytes());
        out
    }

    pub fn int_seq(values: &[i32]) -> Vec<u8> {
        let len = u16::try_from(values.len()).expect("too many ints");
        let mut out = raw(6, &len.to_be_bytes());
        for v in values {
            out.extend_from_slice(&v.to_be_bytes());
        }
        out
    }

    pub fn point(x: i32, y: i32) -> Vec<u8> {
        let mut out = raw(7, &x.to_be_bytes());
        out.extend_from_slice(&y.to_be_bytes());
        out
    }

    pub fn point_array(points: &[(i32, i32)]) -> Vec<u8> {
        let mut out = vec![8, u8::try_from(points.len()).expect("too many points")];
        for &(x, y) in points {
            out.extend_from_slice(&super::packed(x, y).to_be_bytes());
        }
        out
    }

    pub fn boolean(value: bool) -> Vec<u8> {
        vec![10, u8::from(value)]
    }

    pub fn logic(ordinal: u16) -> Vec<u8> {
        raw(13, &ordinal.to_be_bytes())
    }

    pub fn bytes(values: &[u8]) -> Vec<u8> {
        let len = u32::try_from(values.len()).expect("too many bytes");
        let mut out = raw(14, &len.to_be_bytes());
        out.extend_from_slice(values);
        out
    }

    pub fn bool_array(values: &[bool]) -> Vec<u8> {
        let len = u32::try_from(values.len()).expect("too many flags");
        let mut out = raw(16, &len.to_be_bytes());
        out.extend(values.iter().map(|&b| u8::from(b)));
        out
    }

    pub fn team(ordinal: u8) -> Vec<u8> {
        vec![20, ordinal]
    }
}

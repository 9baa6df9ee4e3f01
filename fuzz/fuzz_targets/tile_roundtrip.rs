#![no_main]

use std::io::Write;

use arbitrary::Arbitrary;
use flate2::{Compression, write::ZlibEncoder};
use libfuzzer_sys::fuzz_target;
use msch_types::{ConfigValue, Position};
use msch_wire::{MSCH_MAGIC, pack};

// Fuzz target: structured version 1 schematic write -> decode.
//
// Takes an arbitrary block dictionary and tile list, writes them as a
// modern payload, decodes it, and asserts every tile comes back with
// the same block, position, rotation and config.

#[derive(Arbitrary, Debug)]
enum Config {
    Null,
    Int(i32),
    Float(f32),
    Bool(bool),
    Text(String),
    Point(i32, i32),
}

#[derive(Arbitrary, Debug)]
struct TileInput {
    block: u8,
    x: u16,
    y: u16,
    rotation: u8,
    config: Config,
}

#[derive(Arbitrary, Debug)]
struct Input {
    width: u16,
    height: u16,
    blocks: Vec<String>,
    tiles: Vec<TileInput>,
}

fn push_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

fn encode_config(out: &mut Vec<u8>, config: &Config) -> ConfigValue {
    match config {
        Config::Null => {
            out.push(0);
            ConfigValue::None
        }
        Config::Int(v) => {
            out.push(1);
            out.extend_from_slice(&v.to_be_bytes());
            ConfigValue::Int(*v)
        }
        Config::Float(v) => {
            out.push(3);
            out.extend_from_slice(&v.to_bits().to_be_bytes());
            ConfigValue::Float(*v)
        }
        Config::Bool(v) => {
            out.push(10);
            out.push(u8::from(*v));
            ConfigValue::Bool(*v)
        }
        Config::Text(s) => {
            out.push(4);
            push_string(out, s);
            ConfigValue::String(s.clone())
        }
        Config::Point(x, y) => {
            out.push(7);
            out.extend_from_slice(&x.to_be_bytes());
            out.extend_from_slice(&y.to_be_bytes());
            ConfigValue::Point { x: *x, y: *y }
        }
    }
}

fn fits(s: &str) -> bool {
    s.len() <= usize::from(u16::MAX)
}

fuzz_target!(|input: Input| {
    if input.blocks.is_empty()
        || input.blocks.len() > 255
        || !input.blocks.iter().all(|b| fits(b))
        || input
            .tiles
            .iter()
            .any(|t| matches!(&t.config, Config::Text(s) if !fits(s)))
    {
        return;
    }

    let mut body = Vec::new();
    body.extend_from_slice(&input.width.to_be_bytes());
    body.extend_from_slice(&input.height.to_be_bytes());
    body.push(0);
    body.push(input.blocks.len() as u8);
    for name in &input.blocks {
        push_string(&mut body, name);
    }
    body.extend_from_slice(&(input.tiles.len() as u32).to_be_bytes());

    let mut expected = Vec::with_capacity(input.tiles.len());
    for tile in &input.tiles {
        let index = usize::from(tile.block) % input.blocks.len();
        let position = Position::new(i32::from(tile.x % 65535), i32::from(tile.y));
        body.push(index as u8);
        body.extend_from_slice(&pack(position.x, position.y).unwrap().to_be_bytes());
        let config = encode_config(&mut body, &tile.config);
        body.push(tile.rotation);
        expected.push((index, position, config, tile.rotation));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(&body).unwrap();
    let mut payload = MSCH_MAGIC.to_vec();
    payload.push(1);
    payload.extend_from_slice(&encoder.finish().unwrap());

    let schematic = msch_decoder::SchematicDecoder::decode(&payload).unwrap();
    assert_eq!(schematic.width(), input.width);
    assert_eq!(schematic.height(), input.height);
    assert_eq!(schematic.blocks(), input.blocks.as_slice());
    assert_eq!(schematic.tiles().len(), expected.len());

    for (tile, (index, position, config, rotation)) in schematic.tiles().iter().zip(&expected) {
        assert_eq!(tile.block, input.blocks[*index]);
        assert_eq!(tile.position, *position);
        assert_eq!(tile.rotation, *rotation);
        match (&tile.config, config) {
            (ConfigValue::Float(a), ConfigValue::Float(b)) => assert_eq!(a.to_bits(), b.to_bits()),
            (actual, expected) => assert_eq!(actual, expected),
        }
    }
});

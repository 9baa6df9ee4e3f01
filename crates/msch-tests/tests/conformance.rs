//! Conformance tests: golden fixture files decoded and rendered to insta
//! snapshots.
//!
//! Each test reads a committed `.msch` fixture from `tests/golden/`,
//! decodes it, and renders the result with the `msch inspect` summary.
//! The rendered text is compared against an inline snapshot, so a diff
//! means either a deliberate format change (accept via
//! `cargo insta review`) or a decoding regression.
//!
//! Fixtures are written by `src/bin/generate_golden.rs`.

use std::path::{Path, PathBuf};

use insta::{assert_debug_snapshot, assert_snapshot};
use msch_cli::summary::{TileView, render};
use msch_decoder::{DecodeError, DecoderConfig, SchematicDecoder};
use msch_types::{EnumKind, MemoryContentRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn golden_path(fixture: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(format!("{fixture}.msch"))
}

fn golden(fixture: &str) -> Vec<u8> {
    let path = golden_path(fixture);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

fn summary(fixture: &str) -> String {
    let schematic = SchematicDecoder::decode(&golden(fixture))
        .unwrap_or_else(|e| panic!("decode failed for {fixture}: {e}"));
    render(&schematic, None, TileView::All)
}

// ── Version 0 ─────────────────────────────────────────────────────────────────

#[test]
fn core_shard() {
    assert_snapshot!(summary("core_shard"), @r"
    Header: msch v0 (legacy), 1x1, 1 tile
    Tags: (none)
    Blocks: core-shard
    Tile 0: core-shard @ (0, 0) rot=0 config=none
    ");
}

#[test]
fn legacy_logistics() {
    assert_snapshot!(summary("legacy_logistics"), @r#"
    Header: msch v0 (legacy), 4x2, 6 tiles
    Tags:
      name = "Sorter line"
      description = "copper to the core"
    Blocks: conveyor, sorter, bridge-conveyor, illuminator, liquid-source
    Tile 0: conveyor @ (0, 0) rot=0 config=none
    Tile 1: sorter @ (1, 0) rot=0 config=item #0
    Tile 2: bridge-conveyor @ (2, 0) rot=1 config=link (+0, +1)
    Tile 3: bridge-conveyor @ (2, 1) rot=1 config=link (-2, -1)
    Tile 4: illuminator @ (3, 1) rot=0 config=int -7864065
    Tile 5: liquid-source @ (0, 1) rot=0 config=liquid #1
    "#);
}

#[test]
fn legacy_logistics_block_counts() {
    let schematic = SchematicDecoder::decode(&golden("legacy_logistics")).unwrap();
    assert_snapshot!(render(&schematic, None, TileView::Counts), @r#"
    Header: msch v0 (legacy), 4x2, 6 tiles
    Tags:
      name = "Sorter line"
      description = "copper to the core"
    Blocks: conveyor, sorter, bridge-conveyor, illuminator, liquid-source
      conveyor x1
      sorter x1
      bridge-conveyor x2
      illuminator x1
      liquid-source x1
    "#);
}

// ── Version 1 ─────────────────────────────────────────────────────────────────

#[test]
fn modern_logic() {
    assert_snapshot!(summary("modern_logic"), @r#"
    Header: msch v1 (modern), 3x2, 6 tiles
    Tags:
      name = "Switchboard"
    Blocks: switch, message, illuminator, power-node, memory-cell
    Tile 0: switch @ (0, 0) rot=0 config=bool true
    Tile 1: switch @ (1, 0) rot=0 config=bool false
    Tile 2: message @ (2, 0) rot=3 config=string "hello"
    Tile 3: illuminator @ (0, 1) rot=0 config=int -65281
    Tile 4: power-node @ (1, 1) rot=0 config=point (2, 1)
    Tile 5: memory-cell @ (2, 1) rot=0 config=none
    "#);
}

#[test]
fn modern_registry_with_registry() {
    let registry = MemoryContentRegistry::new()
        .with_item(1, "lead")
        .with_enum(EnumKind::Team, 1, "sharded");
    let schematic =
        SchematicDecoder::decode_with_registry(&golden("modern_registry"), &registry).unwrap();

    assert_snapshot!(render(&schematic, Some(&registry), TileView::All), @r#"
    Header: msch v1 (modern), 3x1, 3 tiles
    Tags:
      name = "Registry refs"
    Blocks: sorter, power-node, core-foundation
    Tile 0: sorter @ (0, 0) rot=0 config=item #1 (lead)
    Tile 1: power-node @ (1, 0) rot=0 config=points [(0, 0), (2, 0)]
    Tile 2: core-foundation @ (2, 0) rot=0 config=team 1 (sharded)
    "#);
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn modern_registry_without_registry() {
    let err = SchematicDecoder::decode(&golden("modern_registry")).unwrap_err();
    assert_debug_snapshot!(err, @r"
    UnsupportedConfigTag {
        tag: 5,
        offset: 73,
    }
    ");
}

#[test]
fn unknown_tag() {
    let err = SchematicDecoder::decode(&golden("unknown_tag")).unwrap_err();
    assert_debug_snapshot!(err, @r"
    UnknownConfigTag {
        tag: 99,
        offset: 23,
    }
    ");
}

#[test]
fn trailing_data() {
    let payload = golden("trailing_data");
    let lenient = SchematicDecoder::decode(&payload).unwrap();
    assert_eq!(lenient, SchematicDecoder::decode(&golden("core_shard")).unwrap());

    let strict = DecoderConfig {
        allow_trailing_data: false,
        ..DecoderConfig::default()
    };
    let err = SchematicDecoder::decode_with_config(&payload, &strict, None).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TrailingData {
            offset: 32,
            extra_bytes: 4
        }
    );
}

#[test]
fn golden_files_load_through_cli_loader() {
    let schematic = msch_cli::load_file(&golden_path("modern_logic")).unwrap();
    assert_eq!(schematic.name(), Some("Switchboard"));
    assert_eq!(schematic.tiles().len(), 6);
}

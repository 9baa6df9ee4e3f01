//! Golden fixture generator for the msch conformance test suite.
//!
//! Writes every fixture under `tests/golden/`. Run it after changing the
//! builder or adding a fixture; the conformance tests read the committed
//! files.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p msch-tests
//! ```
//!
//! # Generated fixtures
//!
//! | File                   | Contents                                         |
//! |------------------------|--------------------------------------------------|
//! | core_shard.msch        | Version 0, one core-shard tile, no tags          |
//! | legacy_logistics.msch  | Version 0, every built-in legacy config kind     |
//! | modern_logic.msch      | Version 1, base config tags only                 |
//! | modern_registry.msch   | Version 1, content / point array / team tags     |
//! | unknown_tag.msch       | Version 1, one tile with config tag 99           |
//! | trailing_data.msch     | core_shard body plus 4 bytes after the last tile |

#![allow(clippy::pedantic)]

use std::path::Path;

use msch_tests::{SchematicBuilder, packed, tagged};

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    for (name, builder) in fixtures() {
        write_file(&golden_dir.join(format!("{name}.msch")), &builder.build());
    }

    println!("All golden fixtures written to {}", golden_dir.display());
}

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

fn fixtures() -> Vec<(&'static str, SchematicBuilder)> {
    let core_shard = SchematicBuilder::legacy()
        .size(1, 1)
        .block("core-shard")
        .legacy_tile(0, 0, 0, 0, 0);

    let legacy_logistics = SchematicBuilder::legacy()
        .size(4, 2)
        .tag("name", "Sorter line")
        .tag("description", "copper to the core")
        .block("conveyor")
        .block("sorter")
        .block("bridge-conveyor")
        .block("illuminator")
        .block("liquid-source")
        .legacy_tile(0, 0, 0, 0, 0)
        .legacy_tile(1, 1, 0, 0, 0)
        .legacy_tile(2, 2, 0, packed(2, 1), 1)
        .legacy_tile(2, 2, 1, 0, 1)
        .legacy_tile(3, 3, 1, 0xFF88_00FF, 0)
        .legacy_tile(4, 0, 1, 1, 0);

    let modern_logic = SchematicBuilder::modern()
        .size(3, 2)
        .tag("name", "Switchboard")
        .block("switch")
        .block("message")
        .block("illuminator")
        .block("power-node")
        .block("memory-cell")
        .modern_tile(0, 0, 0, &tagged::boolean(true), 0)
        .modern_tile(0, 1, 0, &tagged::boolean(false), 0)
        .modern_tile(1, 2, 0, &tagged::string("hello"), 3)
        .modern_tile(2, 0, 1, &tagged::int(-65281), 0)
        .modern_tile(3, 1, 1, &tagged::point(2, 1), 0)
        .modern_tile(4, 2, 1, &tagged::null(), 0);

    let modern_registry = SchematicBuilder::modern()
        .size(3, 1)
        .tag("name", "Registry refs")
        .block("sorter")
        .block("power-node")
        .block("core-foundation")
        .modern_tile(0, 0, 0, &tagged::content(0, 1), 0)
        .modern_tile(1, 1, 0, &tagged::point_array(&[(0, 0), (2, 0)]), 0)
        .modern_tile(2, 2, 0, &tagged::team(1), 0);

    let unknown_tag = SchematicBuilder::modern()
        .size(1, 1)
        .block("switch")
        .modern_tile(0, 0, 0, &tagged::raw(99, &[]), 0);

    let trailing_data = core_shard.clone().trailing(&[0xDE, 0xAD, 0xBE, 0xEF]);

    vec![
        ("core_shard", core_shard),
        ("legacy_logistics", legacy_logistics),
        ("modern_logic", modern_logic),
        ("modern_registry", modern_registry),
        ("unknown_tag", unknown_tag),
        ("trailing_data", trailing_data),
    ]
}

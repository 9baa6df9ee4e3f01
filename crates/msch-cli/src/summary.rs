/// Human-readable text rendering of a decoded schematic.
///
/// # Output format
///
/// ```text
/// Header: msch v0 (legacy), 3x1, 3 tiles
/// Tags:
///   name = "bridge"
/// Blocks: conveyor, sorter, bridge-conveyor
/// Tile 0: conveyor @ (0, 0) rot=0 config=none
/// Tile 1: sorter @ (1, 0) rot=0 config=item #0 (copper)
/// Tile 2: bridge-conveyor @ (2, 0) rot=0 config=link (-2, +0)
/// ```
use std::fmt::Write as _;

use msch_types::{ConfigValue, ContentKind, ContentRegistry, EnumKind, FormatVersion, Schematic};

/// What to print below the header, tags, and block list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileView {
    /// One line per tile.
    #[default]
    All,
    /// Only the tile at this index.
    Single(usize),
    /// Tile counts per block name.
    Counts,
}

fn version_label(version: FormatVersion) -> &'static str {
    match version {
        FormatVersion::Legacy => "legacy",
        FormatVersion::Modern => "modern",
    }
}

fn content_label(kind: ContentKind) -> String {
    match kind {
        ContentKind::Item => "item".to_string(),
        ContentKind::Block => "block".to_string(),
        ContentKind::Liquid => "liquid".to_string(),
        ContentKind::Unit => "unit".to_string(),
        ContentKind::Other(id) => format!("content[{id}]"),
    }
}

fn enum_label(kind: EnumKind) -> &'static str {
    match kind {
        EnumKind::LogicAccess => "logic",
        EnumKind::Team => "team",
    }
}

/// One-line description of a config value. Content and enum references
/// get their registry name appended when one is known.
pub fn describe_config(config: &ConfigValue, registry: Option<&dyn ContentRegistry>) -> String {
    let mut out = match config {
        ConfigValue::None => "none".to_string(),
        ConfigValue::Int(v) => format!("int {v}"),
        ConfigValue::Long(v) => format!("long {v}"),
        ConfigValue::Float(v) => format!("float {v}"),
        ConfigValue::Bool(v) => format!("bool {v}"),
        ConfigValue::String(s) => format!("string {s:?}"),
        ConfigValue::PositionDelta { dx, dy } => format!("link ({dx:+}, {dy:+})"),
        ConfigValue::Point { x, y } => format!("point ({x}, {y})"),
        ConfigValue::ContentRef { kind, id } => format!("{} #{id}", content_label(*kind)),
        ConfigValue::IntArray(values) => format!("ints {values:?}"),
        ConfigValue::PointArray(points) => {
            let points: Vec<String> = points
                .iter()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            format!("points [{}]", points.join(", "))
        }
        ConfigValue::Bytes(bytes) => format!("bytes ({} bytes)", bytes.len()),
        ConfigValue::BoolArray(flags) => format!("bools {flags:?}"),
        ConfigValue::Enum { kind, ordinal } => format!("{} {ordinal}", enum_label(*kind)),
    };
    if let Some(name) = registry.and_then(|r| config.registry_name(r)) {
        let _ = write!(out, " ({name})");
    }
    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Render the full inspection report. The result has no trailing newline.
pub fn render(schematic: &Schematic, registry: Option<&dyn ContentRegistry>, view: TileView) -> String {
    let mut lines = Vec::new();
    let tiles = schematic.tiles();

    lines.push(format!(
        "Header: msch v{} ({}), {}x{}, {} tile{}",
        schematic.version().wire_id(),
        version_label(schematic.version()),
        schematic.width(),
        schematic.height(),
        tiles.len(),
        plural(tiles.len()),
    ));

    if schematic.tags().is_empty() {
        lines.push("Tags: (none)".to_string());
    } else {
        lines.push("Tags:".to_string());
        for (key, value) in schematic.tags() {
            lines.push(format!("  {key} = {value:?}"));
        }
    }

    if schematic.blocks().is_empty() {
        lines.push("Blocks: (none)".to_string());
    } else {
        lines.push(format!("Blocks: {}", schematic.blocks().join(", ")));
    }

    match view {
        TileView::All => {
            for (index, tile) in tiles.iter().enumerate() {
                lines.push(tile_line(index, tile, registry));
            }
        }
        TileView::Single(index) => match tiles.get(index) {
            Some(tile) => lines.push(tile_line(index, tile, registry)),
            None => lines.push(format!("Tile {index}: out of range")),
        },
        TileView::Counts => {
            for (block, count) in schematic.block_counts() {
                lines.push(format!("  {block} x{count}"));
            }
        }
    }

    lines.join("\n")
}

fn tile_line(index: usize, tile: &msch_types::Tile, registry: Option<&dyn ContentRegistry>) -> String {
    format!(
        "Tile {index}: {} @ ({}, {}) rot={} config={}",
        tile.block,
        tile.position.x,
        tile.position.y,
        tile.rotation,
        describe_config(&tile.config, registry),
    )
}

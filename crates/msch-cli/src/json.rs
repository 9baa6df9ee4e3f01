/// JSON view of a decoded schematic.
///
/// The domain types stay free of serde; these borrowed view structs
/// define the JSON shape instead:
///
/// ```json
/// {
///   "version": 0,
///   "width": 3,
///   "height": 1,
///   "tags": { "name": "bridge" },
///   "blocks": ["conveyor", "sorter"],
///   "tiles": [
///     { "block": "sorter", "x": 1, "y": 0, "rotation": 0, "direction": 0,
///       "config": { "type": "content", "kind": "item", "id": 0, "name": "copper" } }
///   ]
/// }
/// ```
use indexmap::IndexMap;
use msch_types::{ConfigValue, ContentKind, ContentRegistry, EnumKind, Schematic, Tile};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SchematicView<'a> {
    pub version: u8,
    pub width: u16,
    pub height: u16,
    pub tags: &'a IndexMap<String, String>,
    pub blocks: &'a [String],
    pub tiles: Vec<TileView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct TileView<'a> {
    pub block: &'a str,
    pub x: i32,
    pub y: i32,
    /// Raw rotation byte, as stored.
    pub rotation: u8,
    /// `rotation` reduced to a quarter turn, `0..=3`.
    pub direction: u8,
    pub config: ConfigView<'a>,
}

/// Tagged by `"type"`, which matches [`ConfigValue::kind_label`].
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfigView<'a> {
    None,
    Int {
        value: i32,
    },
    Long {
        value: i64,
    },
    Float {
        value: f32,
    },
    Bool {
        value: bool,
    },
    String {
        value: &'a str,
    },
    PositionDelta {
        dx: i32,
        dy: i32,
    },
    Point {
        x: i32,
        y: i32,
    },
    Content {
        kind: String,
        id: i32,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<&'a str>,
    },
    IntArray {
        values: &'a [i32],
    },
    PointArray {
        points: Vec<[i32; 2]>,
    },
    Bytes {
        values: &'a [u8],
    },
    BoolArray {
        values: &'a [bool],
    },
    Enum {
        kind: &'static str,
        ordinal: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<&'a str>,
    },
}

fn content_kind_name(kind: ContentKind) -> String {
    match kind {
        ContentKind::Item => "item".to_string(),
        ContentKind::Block => "block".to_string(),
        ContentKind::Liquid => "liquid".to_string(),
        ContentKind::Unit => "unit".to_string(),
        ContentKind::Other(id) => format!("other_{id}"),
    }
}

impl<'a> ConfigView<'a> {
    pub fn new(config: &'a ConfigValue, registry: Option<&'a dyn ContentRegistry>) -> Self {
        let name = registry.and_then(|r| config.registry_name(r));
        match config {
            ConfigValue::None => Self::None,
            ConfigValue::Int(value) => Self::Int { value: *value },
            ConfigValue::Long(value) => Self::Long { value: *value },
            ConfigValue::Float(value) => Self::Float { value: *value },
            ConfigValue::Bool(value) => Self::Bool { value: *value },
            ConfigValue::String(value) => Self::String { value },
            ConfigValue::PositionDelta { dx, dy } => Self::PositionDelta { dx: *dx, dy: *dy },
            ConfigValue::Point { x, y } => Self::Point { x: *x, y: *y },
            ConfigValue::ContentRef { kind, id } => Self::Content {
                kind: content_kind_name(*kind),
                id: *id,
                name,
            },
            ConfigValue::IntArray(values) => Self::IntArray { values },
            ConfigValue::PointArray(points) => Self::PointArray {
                points: points.iter().map(|p| [p.x, p.y]).collect(),
            },
            ConfigValue::Bytes(values) => Self::Bytes { values },
            ConfigValue::BoolArray(values) => Self::BoolArray { values },
            ConfigValue::Enum { kind, ordinal } => Self::Enum {
                kind: match kind {
                    EnumKind::LogicAccess => "logic_access",
                    EnumKind::Team => "team",
                },
                ordinal: *ordinal,
                name,
            },
        }
    }
}

impl<'a> TileView<'a> {
    pub fn new(tile: &'a Tile, registry: Option<&'a dyn ContentRegistry>) -> Self {
        Self {
            block: &tile.block,
            x: tile.position.x,
            y: tile.position.y,
            rotation: tile.rotation,
            direction: tile.direction(),
            config: ConfigView::new(&tile.config, registry),
        }
    }
}

impl<'a> SchematicView<'a> {
    pub fn new(schematic: &'a Schematic, registry: Option<&'a dyn ContentRegistry>) -> Self {
        Self {
            version: schematic.version().wire_id(),
            width: schematic.width(),
            height: schematic.height(),
            tags: schematic.tags(),
            blocks: schematic.blocks(),
            tiles: schematic
                .tiles()
                .iter()
                .map(|tile| TileView::new(tile, registry))
                .collect(),
        }
    }
}

/// Serialize a schematic to JSON text.
///
/// # Errors
///
/// Only if serde_json fails, which the view types don't trigger in
/// practice.
pub fn to_json(
    schematic: &Schematic,
    registry: Option<&dyn ContentRegistry>,
    pretty: bool,
) -> serde_json::Result<String> {
    let view = SchematicView::new(schematic, registry);
    if pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    }
}

#[cfg(test)]
mod tests {
    use msch_types::{FormatVersion, MemoryContentRegistry, Position};
    use serde_json::json;

    use super::*;

    fn sample() -> Schematic {
        let mut tags = IndexMap::new();
        tags.insert("name".to_string(), "pair".to_string());
        Schematic::from_parts(
            FormatVersion::Modern,
            2,
            1,
            tags,
            vec!["sorter".to_string(), "switch".to_string()],
            vec![
                Tile {
                    block: "sorter".to_string(),
                    position: Position::new(0, 0),
                    config: ConfigValue::ContentRef {
                        kind: ContentKind::Item,
                        id: 1,
                    },
                    rotation: 2,
                },
                Tile {
                    block: "switch".to_string(),
                    position: Position::new(1, 0),
                    config: ConfigValue::Bool(true),
                    rotation: 0,
                },
            ],
        )
    }

    #[test]
    fn json_shape() {
        let registry = MemoryContentRegistry::new().with_item(1, "lead");
        let text = to_json(&sample(), Some(&registry), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "version": 1,
                "width": 2,
                "height": 1,
                "tags": { "name": "pair" },
                "blocks": ["sorter", "switch"],
                "tiles": [
                    {
                        "block": "sorter", "x": 0, "y": 0, "rotation": 2, "direction": 2,
                        "config": { "type": "content", "kind": "item", "id": 1, "name": "lead" }
                    },
                    {
                        "block": "switch", "x": 1, "y": 0, "rotation": 0, "direction": 0,
                        "config": { "type": "bool", "value": true }
                    }
                ]
            })
        );
    }

    #[test]
    fn direction_drops_high_rotation_bits() {
        let tile = Tile {
            block: "conveyor".to_string(),
            position: Position::ORIGIN,
            config: ConfigValue::None,
            rotation: 0b0000_0111,
        };
        let value = serde_json::to_value(TileView::new(&tile, None)).unwrap();
        assert_eq!(value["rotation"], 7);
        assert_eq!(value["direction"], 3);
    }

    #[test]
    fn name_omitted_without_registry() {
        let text = to_json(&sample(), None, false).unwrap();
        assert!(text.contains(r#"{"type":"content","kind":"item","id":1}"#));
    }

    #[test]
    fn config_type_matches_kind_label() {
        let configs = [
            ConfigValue::None,
            ConfigValue::PositionDelta { dx: 1, dy: 0 },
            ConfigValue::PointArray(vec![Position::ORIGIN]),
            ConfigValue::Enum {
                kind: EnumKind::LogicAccess,
                ordinal: 0,
            },
        ];
        for config in &configs {
            let value = serde_json::to_value(ConfigView::new(config, None)).unwrap();
            assert_eq!(value["type"], config.kind_label());
        }
    }
}

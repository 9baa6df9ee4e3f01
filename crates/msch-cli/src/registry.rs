/// Loading a content registry from a JSON file.
///
/// The file maps ids to names per content kind. Every section is
/// optional:
///
/// ```json
/// {
///   "items":   { "0": "copper", "1": "lead" },
///   "liquids": { "0": "water" },
///   "blocks":  { "1": "conveyor" },
///   "units":   { "0": "dagger" },
///   "logic":   { "0": "totalItems" },
///   "teams":   { "1": "sharded" }
/// }
/// ```
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use msch_types::{ContentKind, EnumKind, MemoryContentRegistry};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RegistryFile {
    items: BTreeMap<i32, String>,
    liquids: BTreeMap<i32, String>,
    blocks: BTreeMap<i32, String>,
    units: BTreeMap<i32, String>,
    logic: BTreeMap<u16, String>,
    teams: BTreeMap<u16, String>,
}

impl RegistryFile {
    fn into_registry(self) -> MemoryContentRegistry {
        let content = [
            (ContentKind::Item, self.items),
            (ContentKind::Liquid, self.liquids),
            (ContentKind::Block, self.blocks),
            (ContentKind::Unit, self.units),
        ];
        let enums = [(EnumKind::LogicAccess, self.logic), (EnumKind::Team, self.teams)];

        let mut registry = MemoryContentRegistry::new();
        for (kind, names) in content {
            for (id, name) in names {
                registry = registry.with_content(kind, id, name);
            }
        }
        for (kind, names) in enums {
            for (ordinal, name) in names {
                registry = registry.with_enum(kind, ordinal, name);
            }
        }
        registry
    }
}

/// Parse a registry from its JSON text.
pub fn parse_registry(json: &str) -> Result<MemoryContentRegistry> {
    let file: RegistryFile = serde_json::from_str(json).context("invalid registry JSON")?;
    Ok(file.into_registry())
}

/// Read and parse a registry file.
pub fn load_registry(path: &Path) -> Result<MemoryContentRegistry> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read registry {}", path.display()))?;
    parse_registry(&json).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use msch_types::ContentRegistry;

    use super::*;

    #[test]
    fn parses_all_sections() {
        let registry = parse_registry(
            r#"{
                "items": { "0": "copper" },
                "liquids": { "0": "water" },
                "teams": { "1": "sharded" }
            }"#,
        )
        .unwrap();

        assert_eq!(registry.lookup_item(0), Some("copper"));
        assert_eq!(registry.lookup_liquid(0), Some("water"));
        assert_eq!(registry.lookup_enum(EnumKind::Team, 1), Some("sharded"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn empty_object_is_empty_registry() {
        assert!(parse_registry("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(parse_registry(r#"{ "fluids": {} }"#).is_err());
    }
}

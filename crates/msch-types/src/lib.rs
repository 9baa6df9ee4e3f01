#![warn(clippy::pedantic)]

pub mod config;
pub mod config_tag;
pub mod content_registry;
pub mod schematic;
pub mod tile;

pub use config::{ConfigValue, ContentKind, EnumKind};
pub use config_tag::{ConfigTag, TagSupport};
pub use content_registry::{ContentRegistry, MemoryContentRegistry};
pub use msch_wire::{FormatVersion, Position};
pub use schematic::Schematic;
pub use tile::Tile;

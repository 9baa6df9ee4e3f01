use std::collections::HashMap;

use crate::config::{ContentKind, EnumKind};

/// Name lookup for game content referenced by config values.
///
/// The schematic format only stores numeric ids; which id means
/// `"copper"` or `"water"` is owned by the game, not by this crate. A
/// registry is the seam where the caller supplies that knowledge.
///
/// ```text
/// legacy path:  raw u32 ──▶ ContentRef{Item, id} ──▶ lookup_item(id)
/// modern path:  tag 5   ──▶ ContentRef{kind, id} ──▶ lookup_content(kind, id)
///               tag 13/20 ──▶ Enum{kind, ordinal} ──▶ lookup_enum(kind, ordinal)
/// ```
///
/// Only `lookup_item` and `lookup_liquid` are required. The defaults for
/// the other two route items and liquids through them and know nothing
/// else.
///
/// Implementations must be `Send + Sync` so one registry can be shared by
/// decoders running on different threads.
pub trait ContentRegistry: Send + Sync {
    /// Name of the item with the given id.
    fn lookup_item(&self, id: i32) -> Option<&str>;

    /// Name of the liquid with the given id.
    fn lookup_liquid(&self, id: i32) -> Option<&str>;

    /// Name of any content by kind and id.
    fn lookup_content(&self, kind: ContentKind, id: i32) -> Option<&str> {
        match kind {
            ContentKind::Item => self.lookup_item(id),
            ContentKind::Liquid => self.lookup_liquid(id),
            _ => None,
        }
    }

    /// Name of an enum constant by ordinal.
    fn lookup_enum(&self, _kind: EnumKind, _ordinal: u16) -> Option<&str> {
        None
    }
}

/// In-memory registry backed by `HashMap`s.
///
/// Meant for tests and tooling; real callers usually adapt whatever
/// content database they already have.
///
/// # Example
///
/// ```rust
/// use msch_types::{ContentKind, ContentRegistry, MemoryContentRegistry};
///
/// let registry = MemoryContentRegistry::new()
///     .with_item(0, "copper")
///     .with_liquid(0, "water");
///
/// assert_eq!(registry.lookup_item(0), Some("copper"));
/// assert_eq!(registry.lookup_content(ContentKind::Liquid, 0), Some("water"));
/// assert_eq!(registry.lookup_item(1), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryContentRegistry {
    content: HashMap<(ContentKind, i32), String>,
    enums: HashMap<(EnumKind, u16), String>,
}

impl MemoryContentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(self, id: i32, name: impl Into<String>) -> Self {
        self.with_content(ContentKind::Item, id, name)
    }

    #[must_use]
    pub fn with_liquid(self, id: i32, name: impl Into<String>) -> Self {
        self.with_content(ContentKind::Liquid, id, name)
    }

    #[must_use]
    pub fn with_content(mut self, kind: ContentKind, id: i32, name: impl Into<String>) -> Self {
        self.content.insert((kind, id), name.into());
        self
    }

    #[must_use]
    pub fn with_enum(mut self, kind: EnumKind, ordinal: u16, name: impl Into<String>) -> Self {
        self.enums.insert((kind, ordinal), name.into());
        self
    }

    /// Total number of registered names, content and enums together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len() + self.enums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentRegistry for MemoryContentRegistry {
    fn lookup_item(&self, id: i32) -> Option<&str> {
        self.lookup_content(ContentKind::Item, id)
    }

    fn lookup_liquid(&self, id: i32) -> Option<&str> {
        self.lookup_content(ContentKind::Liquid, id)
    }

    fn lookup_content(&self, kind: ContentKind, id: i32) -> Option<&str> {
        self.content.get(&(kind, id)).map(String::as_str)
    }

    fn lookup_enum(&self, kind: EnumKind, ordinal: u16) -> Option<&str> {
        self.enums.get(&(kind, ordinal)).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ItemsOnly;

    impl ContentRegistry for ItemsOnly {
        fn lookup_item(&self, id: i32) -> Option<&str> {
            (id == 7).then_some("silicon")
        }

        fn lookup_liquid(&self, _id: i32) -> Option<&str> {
            None
        }
    }

    #[test]
    fn default_lookup_content_routes_items_and_liquids() {
        let registry = ItemsOnly;
        assert_eq!(registry.lookup_content(ContentKind::Item, 7), Some("silicon"));
        assert_eq!(registry.lookup_content(ContentKind::Liquid, 7), None);
        assert_eq!(registry.lookup_content(ContentKind::Block, 7), None);
        assert_eq!(registry.lookup_enum(EnumKind::Team, 0), None);
    }

    #[test]
    fn memory_registry_keys_by_kind() {
        let registry = MemoryContentRegistry::new()
            .with_item(1, "lead")
            .with_content(ContentKind::Block, 1, "conveyor")
            .with_enum(EnumKind::LogicAccess, 3, "totalItems");

        assert_eq!(registry.lookup_item(1), Some("lead"));
        assert_eq!(registry.lookup_content(ContentKind::Block, 1), Some("conveyor"));
        assert_eq!(registry.lookup_liquid(1), None);
        assert_eq!(
            registry.lookup_enum(EnumKind::LogicAccess, 3),
            Some("totalItems")
        );
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}

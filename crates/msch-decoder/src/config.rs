use crate::config_resolver::LegacyConfigTable;

/// Default cap on the inflated body: 64 MiB.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 64 * 1024 * 1024;

/// Configuration for a schematic decode.
///
/// ```text
/// ┌────────────────────────┬───────────────────────────────────────────┐
/// │ Field                  │ Purpose                                   │
/// ├────────────────────────┼───────────────────────────────────────────┤
/// │ max_decompressed_size  │ Upper bound on the inflated body          │
/// │ allow_trailing_data    │ Tolerate bytes after the last tile or     │
/// │                        │ after the zlib stream                     │
/// │ legacy_table           │ Block name → version 0 config resolver    │
/// └────────────────────────┴───────────────────────────────────────────┘
/// ```
///
/// The defaults decode every file the game itself writes: a generous size
/// cap, trailing bytes ignored (with a warning), and the built-in legacy
/// table.
///
/// ```rust
/// use msch_decoder::DecoderConfig;
///
/// let config = DecoderConfig {
///     allow_trailing_data: false,
///     ..DecoderConfig::default()
/// };
/// assert!(config.legacy_table.get("sorter").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct DecoderConfig {
    /// Largest inflated body the decoder will accept, in bytes. Larger
    /// bodies fail with `DecompressionBomb` before they are fully
    /// inflated.
    pub max_decompressed_size: usize,

    /// When `false`, bytes left in the body after the last tile record
    /// fail the decode with `TrailingData`, and raw bytes after the end of
    /// the zlib stream fail it with `TrailingInput`. When `true` both are
    /// logged and ignored.
    pub allow_trailing_data: bool,

    /// Resolvers for version 0 configs, keyed by block name.
    pub legacy_table: LegacyConfigTable,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            allow_trailing_data: true,
            legacy_table: LegacyConfigTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.max_decompressed_size, 64 * 1024 * 1024);
        assert!(config.allow_trailing_data);
        assert!(config.legacy_table.get("mass-driver").is_some());
        assert!(config.legacy_table.get("conveyor").is_none());
    }
}

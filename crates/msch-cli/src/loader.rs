/// Reading `.msch` files from disk.
///
/// A [`Loader`] bundles the decoder configuration and optional content
/// registry chosen on the command line, so every sub-command decodes
/// files the same way.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;
use msch_decoder::{DecoderConfig, SchematicDecoder};
use msch_types::{ContentRegistry, MemoryContentRegistry, Schematic};

/// File extension every schematic must carry.
pub const EXTENSION: &str = "msch";

#[derive(Debug, Default)]
pub struct Loader {
    config: DecoderConfig,
    registry: Option<MemoryContentRegistry>,
}

impl Loader {
    pub fn new(config: DecoderConfig, registry: Option<MemoryContentRegistry>) -> Self {
        Self { config, registry }
    }

    /// Build a loader from the global command-line options.
    pub fn from_options(registry: Option<&Path>, strict: bool) -> Result<Self> {
        let registry = registry.map(crate::registry::load_registry).transpose()?;
        if let Some(registry) = &registry {
            debug!(names = registry.len(), "loaded content registry");
        }
        let config = DecoderConfig {
            allow_trailing_data: !strict,
            ..DecoderConfig::default()
        };
        Ok(Self::new(config, registry))
    }

    pub fn registry(&self) -> Option<&dyn ContentRegistry> {
        self.registry.as_ref().map(|r| r as &dyn ContentRegistry)
    }

    /// Check, read, and decode the schematic at `path`.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not exist, does not end in `.msch`, cannot be
    /// read, or does not decode. Decode failures keep the
    /// [`DecodeError`](msch_decoder::DecodeError) as the root cause so
    /// callers can downcast to it.
    pub fn load(&self, path: &Path) -> Result<Schematic> {
        let bytes = read_schematic_bytes(path)?;
        SchematicDecoder::decode_with_config(&bytes, &self.config, self.registry())
            .with_context(|| format!("failed to decode {}", path.display()))
    }
}

/// Load a schematic with the default configuration and no registry.
pub fn load_file(path: &Path) -> Result<Schematic> {
    Loader::default().load(path)
}

/// Validate the path and read the file's bytes.
pub fn read_schematic_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!("{} does not exist", path.display());
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
        bail!("{} is not a .{EXTENSION} file", path.display());
    }
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    debug!(path = %path.display(), len = bytes.len(), "read schematic file");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use msch_decoder::DecodeError;

    use super::*;

    /// Smallest valid schematic: empty 0x0 grid, version 0.
    const MINIMAL: &[u8] = &[
        b'm', b's', b'c', b'h', 0x00, 0x78, 0x9C, 0x63, 0x60, 0x80, 0x01, 0x00, 0x00, 0x0A, 0x00,
        0x01,
    ];

    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, contents: &[u8]) -> Self {
            let dir = std::env::temp_dir().join(format!("msch-cli-{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            let path = dir.join(name);
            fs::File::create(&path).unwrap().write_all(contents).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn missing_file() {
        let err = load_file(Path::new("/definitely/not/here.msch")).unwrap_err();
        assert!(err.to_string().contains("does not exist"), "{err}");
    }

    #[test]
    fn wrong_extension() {
        let file = TempFile::new("minimal.bin", MINIMAL);
        let err = load_file(&file.0).unwrap_err();
        assert!(err.to_string().contains("is not a .msch file"), "{err}");
    }

    #[test]
    fn loads_minimal_schematic() {
        let file = TempFile::new("minimal.msch", MINIMAL);
        let schematic = load_file(&file.0).unwrap();
        assert_eq!((schematic.width(), schematic.height()), (0, 0));
        assert!(schematic.tiles().is_empty());
    }

    #[test]
    fn decode_error_is_root_cause() {
        let file = TempFile::new("broken.msch", b"nope!");
        let err = load_file(&file.0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DecodeError>(),
            Some(DecodeError::BadSignature { .. })
        ));
    }
}

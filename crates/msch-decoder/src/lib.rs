#![warn(clippy::pedantic)]

pub mod config;
pub mod config_resolver;
pub mod decoder;
pub mod error;
pub mod sections;
pub mod streaming;

mod decompression;

pub use config::{DEFAULT_MAX_DECOMPRESSED_SIZE, DecoderConfig};
pub use config_resolver::{ConfigStrategy, LegacyConfigTable, LegacyResolver, ModernTagTable};
pub use decoder::SchematicDecoder;
pub use error::DecodeError;
pub use sections::Dimensions;
pub use streaming::{DecoderEvent, StreamingDecoder};

//! Library half of the `msch` tool: file loading, registry files, and the
//! text and JSON renderings used by the sub-commands.

#![warn(clippy::pedantic)]

pub mod json;
pub mod loader;
pub mod registry;
pub mod summary;

pub use loader::{Loader, load_file};

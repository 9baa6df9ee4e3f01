#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod header;
pub mod position;

pub use cursor::Cursor;
pub use error::WireError;
pub use header::{FormatVersion, HEADER_SIZE, MSCH_MAGIC, MschHeader};
pub use position::{OVERFLOW, Position, pack, unpack};

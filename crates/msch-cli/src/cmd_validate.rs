/// Implementation of `msch validate`.
///
/// Attempts a full decode and reports either a series of success
/// checkmarks (`✓`) or a diagnostic failure line (`✗`).
///
/// # Success output
///
/// ```text
/// ✓ Header: valid (version 1, modern)
/// ✓ Body: 3x1 grid, 2 tags, 3 block names
/// ✓ Tiles: 3 tiles decoded
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error at body offset 27: unknown config tag 99
/// ```
use anyhow::{Result, anyhow};
use msch_cli::Loader;
use msch_decoder::DecodeError;

use crate::ValidateArgs;

/// Run the `msch validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it fails to decode.
pub fn run(args: &ValidateArgs, loader: &Loader) -> Result<()> {
    match loader.load(&args.file) {
        Ok(schematic) => {
            let version = schematic.version();
            println!(
                "✓ Header: valid (version {}, {})",
                version.wire_id(),
                if version.wire_id() == 0 { "legacy" } else { "modern" }
            );
            println!(
                "✓ Body: {}x{} grid, {} tags, {} block names",
                schematic.width(),
                schematic.height(),
                schematic.tags().len(),
                schematic.blocks().len()
            );
            println!("✓ Tiles: {} tiles decoded", schematic.tiles().len());
            Ok(())
        }
        Err(e) => match e.downcast_ref::<DecodeError>() {
            Some(decode) => {
                println!("✗ Error {}", diagnostic(decode));
                Err(anyhow!("validation failed"))
            }
            None => Err(e),
        },
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Prefix the error with where it happened.
///
/// ```text
/// ┌──────────────────────────────────┬─────────────────────────┐
/// │ DecodeError variant              │ Location                │
/// ├──────────────────────────────────┼─────────────────────────┤
/// │ BadSignature, UnsupportedVersion │ "in header"             │
/// │ TruncatedHeader                  │ "in header"             │
/// │ Decompression, DecompressionBomb │ "in compressed body"    │
/// │ TrailingInput                    │ "after compressed body" │
/// │ everything else                  │ "at body offset N"      │
/// └──────────────────────────────────┴─────────────────────────┘
/// ```
fn diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::BadSignature { .. }
        | DecodeError::UnsupportedVersion { .. }
        | DecodeError::TruncatedHeader { .. } => format!("in header: {e}"),
        DecodeError::Decompression { reason, .. } => {
            format!("in compressed body: {reason}")
        }
        DecodeError::DecompressionBomb { limit, .. } => {
            format!("in compressed body: inflates past {limit} bytes")
        }
        DecodeError::TrailingInput { offset, extra_bytes } => {
            format!("after compressed body: {extra_bytes} unexpected bytes at offset {offset}")
        }
        other => format!("at body offset {}: {other}", other.offset()),
    }
}

#[cfg(test)]
mod tests {
    use msch_decoder::SchematicDecoder;

    use super::*;

    #[test]
    fn short_file_is_reported_in_header() {
        let err = SchematicDecoder::decode(b"ms").unwrap_err();
        assert_eq!(
            diagnostic(&err),
            "in header: truncated header at offset 0: need 4 bytes, 2 available"
        );
    }

    #[test]
    fn body_errors_carry_body_offset() {
        let err = DecodeError::UnknownConfigTag { tag: 99, offset: 23 };
        assert_eq!(
            diagnostic(&err),
            "at body offset 23: unknown config tag 99 at offset 23"
        );
    }

    #[test]
    fn leftover_input_is_reported_after_body() {
        let err = DecodeError::TrailingInput {
            offset: 40,
            extra_bytes: 8,
        };
        assert_eq!(
            diagnostic(&err),
            "after compressed body: 8 unexpected bytes at offset 40"
        );
    }
}

/// Implementation of `msch decode`.
///
/// Decodes a schematic and writes it as JSON to stdout or `-o <file>`.
/// See [`msch_cli::json`] for the document shape.
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use msch_cli::{Loader, json};

use crate::DecodeArgs;

/// Run the `msch decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or decoded, or the
/// output cannot be written.
pub fn run(args: &DecodeArgs, loader: &Loader) -> Result<()> {
    let schematic = loader.load(&args.file)?;
    let mut text = json::to_json(&schematic, loader.registry(), args.pretty)
        .context("failed to serialize schematic")?;
    text.push('\n');

    match &args.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => io::stdout()
            .write_all(text.as_bytes())
            .context("cannot write to stdout")?,
    }
    Ok(())
}

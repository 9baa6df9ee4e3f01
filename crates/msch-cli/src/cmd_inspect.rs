/// Implementation of `msch inspect`.
///
/// Decodes a schematic and prints a structured summary to stdout. See
/// [`msch_cli::summary`] for the output format.
use anyhow::{Result, bail};
use msch_cli::Loader;
use msch_cli::summary::{self, TileView};

use crate::InspectArgs;

/// Run the `msch inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or decoded, or if
/// `--tile` names an index past the last tile.
pub fn run(args: &InspectArgs, loader: &Loader) -> Result<()> {
    let schematic = loader.load(&args.file)?;

    let view = match (args.tile, args.counts) {
        (Some(_), true) => bail!("--tile and --counts cannot be combined"),
        (Some(index), false) => {
            if index >= schematic.tiles().len() {
                bail!(
                    "tile index {index} out of range ({} tiles)",
                    schematic.tiles().len()
                );
            }
            TileView::Single(index)
        }
        (None, true) => TileView::Counts,
        (None, false) => TileView::All,
    };

    println!("{}", summary::render(&schematic, loader.registry(), view));
    Ok(())
}

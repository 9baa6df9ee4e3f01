/// msch command-line tool: inspect, validate, and decode `.msch`
/// schematic files.
///
/// # Command overview
///
/// ```text
/// msch <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Print a human-readable summary of a schematic
///   validate   Check a schematic for structural correctness
///   decode     Write a schematic as JSON
///   help       Print help information
///
/// Global options:
///   -v, --verbose          Raise log verbosity (-v debug, -vv trace)
///   --registry <FILE>      JSON file naming content ids
///   --strict               Reject bytes after the last tile or zlib stream
///   -h, --help             Print help
///   -V, --version          Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// Logs and error details go to stderr so stdout can be piped cleanly.
/// `RUST_LOG` overrides the level chosen by `-v`.
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use msch_cli::Loader;
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Schematic (`.msch`) inspection tool.
#[derive(Parser)]
#[command(name = "msch", version, about = "Schematic file inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity. Repeat for more detail.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// JSON file mapping content ids to names. Enables content checks and
    /// the registry-only config tags.
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Fail on bytes left after the last tile, or after the end of the
    /// compressed body, instead of ignoring them.
    #[arg(long, global = true)]
    strict: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable summary of a schematic.
    Inspect(InspectArgs),
    /// Check a schematic for structural correctness.
    Validate(ValidateArgs),
    /// Write a schematic as JSON.
    Decode(DecodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `msch inspect`.
///
/// ```text
/// ┌──────────┬─────────────────────────────────────────┐
/// │ Flag     │ Effect                                  │
/// ├──────────┼─────────────────────────────────────────┤
/// │ --tile N │ Show only the tile at index N           │
/// │ --counts │ Show tile counts per block name         │
/// └──────────┴─────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the `.msch` file to inspect.
    pub file: PathBuf,

    /// Inspect only the tile at this zero-based index.
    #[arg(long)]
    pub tile: Option<usize>,

    /// Print tile counts per block name instead of one line per tile.
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for `msch validate`.
///
/// Attempts a full decode and reports either a set of success checkmarks
/// or a diagnostic error. Exits with code 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.msch` file to validate.
    pub file: PathBuf,
}

/// Arguments for `msch decode`.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the `.msch` file to decode.
    pub file: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = Loader::from_options(cli.registry.as_deref(), cli.strict).and_then(
        |loader| match cli.command {
            Commands::Inspect(args) => cmd_inspect::run(&args, &loader),
            Commands::Validate(args) => cmd_validate::run(&args, &loader),
            Commands::Decode(args) => cmd_decode::run(&args, &loader),
        },
    );

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

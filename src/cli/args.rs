//! Command-line argument parsing for `unmoz`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args_os()`) and
//! [`parse_args_from`] (takes an explicit iterator, suitable for
//! unit-testing).  Both return a [`ParsedArgs`] value holding the operation
//! mode, the input and output paths, the file preferences and the display
//! level.
//!
//! Usage errors are returned as `clap::Error` wrapped in `anyhow::Error`, so
//! the binary can let clap print and exit with its usual status.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

use crate::cli::constants::{PROGRAM_DESCRIPTION, PROGRAM_NAME};
use crate::cli::op_mode::OpMode;
use crate::config::DISPLAY_LEVEL_DEFAULT;
use crate::io::prefs::Prefs;

// ── clap surface ───────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, version, about = PROGRAM_DESCRIPTION)]
struct Args {
    /// INPUT [OUTPUT] when decoding; one or more INPUTs with --test or --list
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Decode and verify only; write nothing
    #[arg(short, long, conflicts_with = "list")]
    test: bool,

    /// Print container header information without decoding
    #[arg(short, long)]
    list: bool,

    /// Refuse to replace an existing OUTPUT
    #[arg(short = 'n', long)]
    no_clobber: bool,

    /// Largest accepted input file, in bytes
    #[arg(long, value_name = "BYTES")]
    max_size: Option<u64>,

    /// More messages (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Fewer messages (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,
}

// ── Public output type ─────────────────────────────────────────────────────────

/// Options and filenames produced by argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub op_mode: OpMode,
    /// Inputs in command-line order; exactly one in decompress mode.
    pub inputs: Vec<PathBuf>,
    /// Explicit OUTPUT (decompress mode only).
    pub output: Option<PathBuf>,
    pub prefs: Prefs,
    /// Display level after applying `-v` / `-q`.
    pub display_level: u32,
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parse the process arguments.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    parse_args_from(std::env::args_os())
}

/// Parse an explicit argument list; the first item is the program name.
pub fn parse_args_from<I, T>(argv: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv)?;

    let op_mode = if args.list {
        OpMode::List
    } else if args.test {
        OpMode::Test
    } else {
        OpMode::Decompress
    };

    let mut inputs = args.files;
    let output = match op_mode {
        OpMode::Decompress => {
            if inputs.len() > 2 {
                return Err(usage_error(
                    ErrorKind::TooManyValues,
                    "decoding takes one INPUT and at most one OUTPUT",
                ));
            }
            if inputs.len() == 2 {
                inputs.pop()
            } else {
                None
            }
        }
        OpMode::Test | OpMode::List => None,
    };

    let mut prefs = Prefs::new();
    prefs.set_overwrite(!args.no_clobber);
    if let Some(bytes) = args.max_size {
        prefs.set_max_input_size(bytes);
    }

    let display_level = (DISPLAY_LEVEL_DEFAULT + u32::from(args.verbose))
        .saturating_sub(u32::from(args.quiet));

    Ok(ParsedArgs {
        op_mode,
        inputs,
        output,
        prefs,
        display_level,
    })
}

fn usage_error(kind: ErrorKind, message: &str) -> anyhow::Error {
    Args::command().error(kind, message).into()
}

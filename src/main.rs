//! Binary entry point for the `unmoz` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value;
//!    usage errors are printed by clap, which exits with status 2.
//! 2. The display level is applied.
//! 3. [`run`] dispatches to the selected operation and returns an exit code.

use std::path::Path;

use unmoz::cli::args::{parse_args, ParsedArgs};
use unmoz::cli::constants::{set_display_level, PROGRAM_NAME};
use unmoz::cli::op_mode::{resolve_output, OpMode};
use unmoz::error::{UnmozError, EXIT_USAGE};
use unmoz::io::{decompress_filename, display_containers_info, test_filename};
use unmoz::{display, displaylevel};

fn report(e: &UnmozError) -> i32 {
    displaylevel!(1, "{}: {}\n", PROGRAM_NAME, e);
    e.exit_code()
}

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, non-zero = error).
fn run(args: ParsedArgs) -> i32 {
    displaylevel!(
        4,
        "*** {} v{} ***\n",
        PROGRAM_NAME,
        unmoz::VERSION_STRING
    );

    match args.op_mode {
        OpMode::Decompress => {
            let Some(input) = args.inputs.first() else {
                return EXIT_USAGE;
            };
            let output = match resolve_output(input, args.output.as_deref()) {
                Ok(p) => p,
                Err(e) => return report(&e),
            };
            displaylevel!(3, "Decoding {} -> {}\n", input.display(), output.display());
            match decompress_filename(input, &output, &args.prefs) {
                Ok(_) => 0,
                Err(e) => report(&e),
            }
        }
        OpMode::Test => {
            // Every input is checked; the first failure decides the exit code.
            let mut status = 0;
            for input in &args.inputs {
                if let Err(e) = test_filename(input, &args.prefs) {
                    let code = report(&e);
                    if status == 0 {
                        status = code;
                    }
                }
            }
            status
        }
        OpMode::List => {
            let paths: Vec<&Path> = args.inputs.iter().map(|p| p.as_path()).collect();
            match display_containers_info(&paths) {
                Ok(()) => 0,
                Err(e) => e.exit_code(),
            }
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(clap_err) => clap_err.exit(),
            Err(other) => {
                display!("{}: {}\n", PROGRAM_NAME, other);
                std::process::exit(EXIT_USAGE);
            }
        },
    };
    set_display_level(args.display_level);
    std::process::exit(run(args));
}

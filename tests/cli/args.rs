// Integration tests for src/cli/args.rs: clap surface to ParsedArgs.
//
// Coverage:
//   - decompress with and without OUTPUT
//   - --test / --list accept several inputs
//   - -n, --max-size, -v, -q land in Prefs / display level
//   - usage errors surface as clap errors

use std::path::PathBuf;

use clap::error::ErrorKind;
use unmoz::cli::args::{parse_args_from, ParsedArgs};
use unmoz::cli::op_mode::OpMode;

fn parse(args: &[&str]) -> anyhow::Result<ParsedArgs> {
    let mut argv = vec!["unmoz"];
    argv.extend_from_slice(args);
    parse_args_from(argv)
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn single_input_has_no_explicit_output() {
    let a = parse(&["sessionstore.jsonlz4"]).unwrap();
    assert_eq!(a.op_mode, OpMode::Decompress);
    assert_eq!(a.inputs, paths(&["sessionstore.jsonlz4"]));
    assert_eq!(a.output, None);
}

#[test]
fn test_mode_takes_many_inputs() {
    let a = parse(&["--test", "a.jsonlz4", "b.mozlz4", "c.baklz4"]).unwrap();
    assert_eq!(a.op_mode, OpMode::Test);
    assert_eq!(a.inputs.len(), 3);
    assert_eq!(a.output, None);
}

#[test]
fn list_mode_takes_many_inputs() {
    let a = parse(&["-l", "a.jsonlz4", "b.jsonlz4"]).unwrap();
    assert_eq!(a.op_mode, OpMode::List);
    assert_eq!(a.inputs, paths(&["a.jsonlz4", "b.jsonlz4"]));
}

#[test]
fn no_clobber_and_max_size() {
    let a = parse(&["-n", "--max-size", "4096", "in", "out"]).unwrap();
    assert!(!a.prefs.overwrite);
    assert_eq!(a.prefs.max_input_size, 4096);
    assert_eq!(a.output, Some(PathBuf::from("out")));
}

#[test]
fn options_after_positionals() {
    let a = parse(&["in.jsonlz4", "out.json", "--no-clobber", "-v"]).unwrap();
    assert!(!a.prefs.overwrite);
    assert_eq!(a.display_level, 3);
}

#[test]
fn quiet_and_verbose_combine() {
    assert_eq!(parse(&["-q", "in"]).unwrap().display_level, 1);
    assert_eq!(parse(&["-v", "-q", "in"]).unwrap().display_level, 2);
    assert_eq!(parse(&["-vvv", "in"]).unwrap().display_level, 5);
}

#[test]
fn non_numeric_max_size_is_rejected() {
    let err = parse(&["--max-size", "lots", "in"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<clap::Error>().map(|e| e.kind()),
        Some(ErrorKind::ValueValidation)
    );
}

#[test]
fn unknown_flag_is_rejected() {
    let err = parse(&["--force", "in"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<clap::Error>().map(|e| e.kind()),
        Some(ErrorKind::UnknownArgument)
    );
}

#[test]
fn help_and_version_are_clap_errors_with_their_kinds() {
    let help = parse(&["--help"]).unwrap_err();
    assert_eq!(
        help.downcast_ref::<clap::Error>().map(|e| e.kind()),
        Some(ErrorKind::DisplayHelp)
    );
    let version = parse(&["--version"]).unwrap_err();
    assert_eq!(
        version.downcast_ref::<clap::Error>().map(|e| e.kind()),
        Some(ErrorKind::DisplayVersion)
    );
}

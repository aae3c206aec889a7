// Integration tests for src/cli/op_mode.rs: output-name derivation.

use std::path::{Path, PathBuf};

use unmoz::cli::op_mode::{derive_output_name, resolve_output};
use unmoz::error::{UnmozError, EXIT_USAGE};

#[test]
fn firefox_profile_files() {
    let cases = [
        ("sessionstore.jsonlz4", "sessionstore.json"),
        ("recovery.baklz4", "recovery.bak"),
        ("addonStartup.json.lz4", "addonStartup.json"),
        ("search.json.mozlz4", "search.json.moz"),
        ("profile/bookmarkbackups/b.jsonlz4", "profile/bookmarkbackups/b.json"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            derive_output_name(Path::new(input)),
            Some(PathBuf::from(expected)),
            "{input}"
        );
    }
}

#[test]
fn names_without_lz4_suffix() {
    for input in ["places.sqlite", "lz4", "archive.lz4x", "README"] {
        assert_eq!(derive_output_name(Path::new(input)), None, "{input}");
    }
}

#[test]
fn unresolvable_output_is_usage_error() {
    let err = resolve_output(Path::new("places.sqlite"), None).unwrap_err();
    assert!(matches!(err, UnmozError::NoOutputName { .. }));
    assert_eq!(err.exit_code(), EXIT_USAGE);
    assert!(err.to_string().contains("cannot determine an output filename"));
}

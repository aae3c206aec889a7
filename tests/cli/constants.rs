// Integration tests for src/cli/constants.rs.

use unmoz::cli::constants::{
    display_level, set_display_level, MOZLZ4_SUFFIX, PROGRAM_NAME,
};
use unmoz::config::DISPLAY_LEVEL_DEFAULT;

#[test]
fn identity() {
    assert_eq!(PROGRAM_NAME, "unmoz");
    assert_eq!(MOZLZ4_SUFFIX, "lz4");
}

#[test]
fn display_level_is_settable() {
    set_display_level(0);
    assert_eq!(display_level(), 0);
    // Silent level suppresses leveled output without panicking.
    unmoz::displaylevel!(1, "not shown\n");
    set_display_level(DISPLAY_LEVEL_DEFAULT);
    assert_eq!(display_level(), DISPLAY_LEVEL_DEFAULT);
}

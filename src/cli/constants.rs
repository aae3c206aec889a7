// cli/constants.rs: Program identity, display level, and display macros.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "unmoz";
pub const PROGRAM_DESCRIPTION: &str = "Mozilla mozLz40 (jsonlz4 / mozlz4 / baklz4) decompressor";

/// Suffix shared by the Mozilla container extensions (`.jsonlz4`, `.mozlz4`,
/// `.baklz4`).  Stripping it yields the name of the decoded file.
pub const MOZLZ4_SUFFIX: &str = "lz4";

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal results; 3 = progress; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout, unconditional (results a user asked for)
//   display!(...)         → stderr, unconditional
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

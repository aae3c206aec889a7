//! Command-line interface for the `unmoz` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the shared `DISPLAY_LEVEL` atomic and the display macros. |
//! | [`op_mode`]   | `OpMode` enum and output-name derivation. |
//! | [`args`]      | `ParsedArgs`: clap parsing turned into runtime options. |
//!
//! Typical call sequence: `parse_args` → `set_display_level` → dispatch to the I/O layer.

pub mod constants;
pub mod op_mode;
pub mod args;

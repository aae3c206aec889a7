// config.rs: Compile-time configuration constants.
//
// The input ceiling is a policy bound against hostile or corrupt inputs
// forcing huge allocations.  The container format itself does not cap the
// payload; the ceiling can be overridden at runtime with `--max-size`.

pub const MB: u64 = 1 << 20;

// Default maximum size of an input container, in bytes (128 MiB).
pub const MAX_INPUT_SIZE_DEFAULT: u64 = 128 * MB;

// Default display level.
// 0 = silent; 1 = errors only; 2 = normal results; 3 = progress; 4 = verbose.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

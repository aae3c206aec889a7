//! Operation mode selection and output-name derivation for the CLI.
//!
//! - [`OpMode`] describes what the CLI should do with its inputs.
//! - [`derive_output_name`] turns `places.jsonlz4` into `places.json`.
//! - [`resolve_output`] picks the explicit OUTPUT or falls back to the
//!   derived name.

use std::path::{Path, PathBuf};

use crate::cli::constants::MOZLZ4_SUFFIX;
use crate::error::UnmozError;

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decode INPUT and write the result to OUTPUT.
    Decompress,
    /// Decode and verify every input without writing output.
    Test,
    /// Print header information for every input.
    List,
}

/// Derive the decoded file name from a Mozilla container name.
///
/// The trailing `lz4` of the extension is removed: `.jsonlz4` becomes
/// `.json`, `.mozlz4` becomes `.moz`, `.baklz4` becomes `.bak`, and a bare
/// `.lz4` extension is dropped entirely.  Returns `None` when the extension
/// does not end in `lz4`.
pub fn derive_output_name(input: &Path) -> Option<PathBuf> {
    let ext = input.extension()?.to_str()?;
    let kept = ext.strip_suffix(MOZLZ4_SUFFIX)?;
    Some(input.with_extension(kept))
}

/// The explicit `output`, or the name derived from `input`.
pub fn resolve_output(input: &Path, output: Option<&Path>) -> Result<PathBuf, UnmozError> {
    match output {
        Some(p) => Ok(p.to_path_buf()),
        None => derive_output_name(input).ok_or_else(|| UnmozError::NoOutputName {
            path: input.to_path_buf(),
        }),
    }
}

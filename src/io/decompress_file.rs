//! File-level decode entry points.
//!
//! - [`decompress_filename`] decodes one container and writes the result to a
//!   destination file.
//! - [`test_filename`] decodes and verifies one container, writing nothing.
//!
//! Both read the source in full, run the in-memory pipeline from
//! [`crate::decode`] and report the figures of the run.  The destination is
//! only created after the pipeline has verified the result, so any decode
//! failure leaves the filesystem untouched.

use std::path::Path;

use crate::block::FastDecoder;
use crate::decode::{decode_with, Decoded, DecodeReport};
use crate::displaylevel;
use crate::error::UnmozError;
use crate::io::file_io::{ensure_distinct, read_input, write_output};
use crate::io::prefs::Prefs;

/// Figures for one processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressStats {
    /// Container bytes read from the source.
    pub container_bytes: u64,
    /// Decoded bytes (written to the destination unless testing).
    pub decompressed_bytes: u64,
}

impl From<DecodeReport> for DecompressStats {
    fn from(r: DecodeReport) -> Self {
        DecompressStats {
            container_bytes: r.container_len() as u64,
            decompressed_bytes: u64::from(r.declared_size),
        }
    }
}

// ---------------------------------------------------------------------------
// decode_src_file
// ---------------------------------------------------------------------------

/// Reads `src` and runs the full decode pipeline on it.
fn decode_src_file(src: &Path, prefs: &Prefs) -> Result<Decoded, UnmozError> {
    let bytes = read_input(src, prefs.max_input_size)?;
    displaylevel!(3, "{}: read {} container bytes\n", src.display(), bytes.len());
    decode_with(&bytes, &prefs.limits(), &FastDecoder).map_err(|e| UnmozError::decode(src, e))
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Decodes the container at `src` and writes the decoded bytes to `dst`.
///
/// `dst` is replaced when it exists and `prefs.overwrite` is set; otherwise an
/// existing `dst` is an error.  A `dst` naming the same file as `src` is always
/// refused.
pub fn decompress_filename(
    src: &Path,
    dst: &Path,
    prefs: &Prefs,
) -> Result<DecompressStats, UnmozError> {
    ensure_distinct(src, dst)?;
    if !prefs.overwrite && dst.exists() {
        return Err(UnmozError::OutputExists {
            path: dst.to_path_buf(),
        });
    }

    let decoded = decode_src_file(src, prefs)?;
    write_output(dst, decoded.output.as_slice(), prefs.overwrite)?;

    let stats = DecompressStats::from(decoded.report);
    displaylevel!(
        2,
        "{}: decoded {} bytes from {} -> {}\n",
        src.display(),
        stats.decompressed_bytes,
        stats.container_bytes,
        dst.display()
    );
    Ok(stats)
}

/// Decodes and verifies the container at `src` without writing anything.
pub fn test_filename(src: &Path, prefs: &Prefs) -> Result<DecompressStats, UnmozError> {
    let decoded = decode_src_file(src, prefs)?;
    let stats = DecompressStats::from(decoded.report);
    displaylevel!(
        2,
        "{}: OK ({} bytes from {})\n",
        src.display(),
        stats.decompressed_bytes,
        stats.container_bytes
    );
    Ok(stats)
}

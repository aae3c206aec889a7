//! File I/O primitives: whole-file read and whole-file write.
//!
//! - [`read_input`] stats the source, enforces the container size bounds
//!   before allocating, then reads the complete file into one buffer.
//! - [`write_output`] writes a complete buffer to a temporary file next to
//!   the destination and renames it into place once every byte is on disk,
//!   so a failed run never leaves a truncated destination behind.
//!
//! Verbosity-gated diagnostics are emitted via the `displaylevel!` macro.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::container::{check_input_size, ParseError};
use crate::displaylevel;
use crate::error::UnmozError;

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Returns the size in bytes of the regular file at `path`.
///
/// Directories and other non-regular files are rejected.
pub fn get_file_size(path: &Path) -> Result<u64, UnmozError> {
    let meta = fs::metadata(path).map_err(|e| UnmozError::io("stat", path, e))?;
    if !meta.is_file() {
        return Err(UnmozError::io(
            "read",
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    Ok(meta.len())
}

/// Reads the whole container at `path` into memory.
///
/// The file size is checked against the 12-byte header minimum and
/// `max_input_size` before any buffer is allocated.  A file that changes size
/// while being read is reported as an I/O error.
pub fn read_input(path: &Path, max_input_size: u64) -> Result<Vec<u8>, UnmozError> {
    let size = get_file_size(path)?;
    check_input_size(size, max_input_size).map_err(|e| UnmozError::decode(path, e))?;
    let capacity = usize::try_from(size).map_err(|_| {
        UnmozError::decode(
            path,
            ParseError::TooLarge {
                actual: size,
                limit: usize::MAX as u64,
            },
        )
    })?;

    let file = File::open(path).map_err(|e| UnmozError::io("open", path, e))?;
    displaylevel!(4, "Reading {} bytes from {}\n", size, path.display());

    let mut buf = Vec::with_capacity(capacity);
    // One byte of slack detects a file that grew after the stat.
    file.take(size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| UnmozError::io("read", path, e))?;

    if buf.len() as u64 != size {
        return Err(UnmozError::io(
            "read",
            path,
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "expected {size} bytes, got {}: file changed while reading",
                    buf.len()
                ),
            ),
        ));
    }
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// Refuses a destination that is the same file as the source.
///
/// Only meaningful when the destination already exists; a missing destination
/// cannot alias anything.
pub fn ensure_distinct(src: &Path, dst: &Path) -> Result<(), UnmozError> {
    if !dst.exists() {
        return Ok(());
    }
    let src_canon = fs::canonicalize(src).map_err(|e| UnmozError::io("stat", src, e))?;
    let dst_canon = fs::canonicalize(dst).map_err(|e| UnmozError::io("stat", dst, e))?;
    if src_canon == dst_canon {
        return Err(UnmozError::SameFile {
            path: dst.to_path_buf(),
        });
    }
    Ok(())
}

/// Writes `data` to `path` in full.
///
/// The bytes go to a temporary sibling file which is synced and then renamed
/// over `path`.  On any failure the temporary file is removed and `path` is
/// left as it was.  When `overwrite` is false an existing `path` is an error.
pub fn write_output(path: &Path, data: &[u8], overwrite: bool) -> Result<(), UnmozError> {
    let existing = fs::metadata(path).ok();
    if !overwrite && existing.is_some() {
        return Err(UnmozError::OutputExists {
            path: path.to_path_buf(),
        });
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| UnmozError::io("create", path, e))?;
    displaylevel!(4, "Writing {} bytes via {}\n", data.len(), tmp.path().display());

    tmp.write_all(data)
        .map_err(|e| UnmozError::io("write", path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| UnmozError::io("write", path, e))?;

    // Temporary files are created owner-only; give the result the
    // permissions of the file it replaces, or a regular file's defaults.
    let permissions = match existing {
        Some(meta) => Some(meta.permissions()),
        None => default_permissions(),
    };
    if let Some(perms) = permissions {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| UnmozError::io("create", path, e))?;
    }

    if overwrite {
        tmp.persist(path)
            .map_err(|e| UnmozError::io("rename", path, e.error))?;
    } else {
        tmp.persist_noclobber(path).map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                UnmozError::OutputExists {
                    path: path.to_path_buf(),
                }
            } else {
                UnmozError::io("rename", path, e.error)
            }
        })?;
    }
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

// ─── Tests ────────────────────────────────────────────────────────────────────

//! Container information display for the `--list` flag.
//!
//! Reads only the 12-byte header of each file and prints a summary table:
//! container size, declared decoded size, payload size and ratio.  Nothing is
//! decompressed, so a listed file may still fail to decode.
//!
//! Entry point: [`display_containers_info`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::container::{read_header, HEADER_SIZE};
use crate::error::UnmozError;
use crate::io::file_io::get_file_size;
use crate::{displaylevel, displayout};

// ---------------------------------------------------------------------------
// ContainerInfo
// ---------------------------------------------------------------------------

/// Header-level facts about one container file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Display name (final path component).
    pub file_name: String,
    /// Total file size in bytes.
    pub container_len: u64,
    /// Size recorded in the header.
    pub declared_size: u32,
    /// Bytes following the header.
    pub payload_len: u64,
}

impl ContainerInfo {
    /// Container size as a percentage of the declared size, if non-zero.
    pub fn ratio(&self) -> Option<f64> {
        (self.declared_size != 0)
            .then(|| self.container_len as f64 / f64::from(self.declared_size) * 100.0)
    }
}

/// Reads the header of the container at `path`.
///
/// Size limits are not applied; listing an oversized container is allowed.
pub fn get_container_info(path: &Path) -> Result<ContainerInfo, UnmozError> {
    let container_len = get_file_size(path)?;
    let mut file = File::open(path).map_err(|e| UnmozError::io("open", path, e))?;

    let mut header = [0u8; HEADER_SIZE];
    let available = container_len.min(HEADER_SIZE as u64) as usize;
    file.read_exact(&mut header[..available])
        .map_err(|e| UnmozError::io("read", path, e))?;
    let parsed = read_header(&header[..available]).map_err(|e| UnmozError::decode(path, e))?;

    Ok(ContainerInfo {
        file_name: base_name(path),
        container_len,
        declared_size: parsed.declared_size,
        payload_len: container_len - HEADER_SIZE as u64,
    })
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Formats a byte count with the largest fitting binary prefix, e.g. `"3.14M"`.
fn to_human(mut size: f64) -> String {
    const UNITS: &[&str] = &["", "K", "M", "G", "T"];
    let mut i = 0usize;
    while size >= 1024.0 && i + 1 < UNITS.len() {
        size /= 1024.0;
        i += 1;
    }
    format!("{:.2}{}", size, UNITS[i])
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// display_containers_info
// ---------------------------------------------------------------------------

/// Prints one table row per container in `paths`.
///
/// At display level 3 and above exact byte counts are printed instead of
/// human-readable sizes.  Every path is attempted; the first failure is
/// returned after the table is complete.
pub fn display_containers_info(paths: &[&Path]) -> Result<(), UnmozError> {
    let exact = crate::cli::constants::display_level() >= 3;
    displayout!(
        "{:>12} {:>12} {:>12} {:>8}   {}\n",
        "Container",
        "Declared",
        "Payload",
        "Ratio",
        "Filename"
    );

    let mut first_error = None;
    for &path in paths {
        let info = match get_container_info(path) {
            Ok(info) => info,
            Err(e) => {
                displaylevel!(1, "{}: {}\n", crate::cli::constants::PROGRAM_NAME, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
                continue;
            }
        };

        let size = |n: u64| {
            if exact {
                n.to_string()
            } else {
                to_human(n as f64)
            }
        };
        let ratio = info
            .ratio()
            .map(|r| format!("{r:.2}%"))
            .unwrap_or_else(|| "-".to_owned());
        displayout!(
            "{:>12} {:>12} {:>12} {:>8}   {}\n",
            size(info.container_len),
            size(u64::from(info.declared_size)),
            size(info.payload_len),
            ratio,
            info.file_name
        );
        displaylevel!(4, "{}: header ok\n", path.display());
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

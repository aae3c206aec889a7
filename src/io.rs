//! File-level operations used by the CLI.
//!
//! This module assembles the file sub-modules and re-exports the symbols
//! consumed by the CLI and library users.

pub mod decompress_file;
pub mod file_info;
pub mod file_io;
pub mod prefs;

pub use prefs::Prefs;

// ── Decoding ──────────────────────────────────────────────────────────────────
/// Decode one container file to a destination file.
pub use decompress_file::decompress_filename;

/// Decode and verify one container file without writing.
pub use decompress_file::test_filename;

pub use decompress_file::DecompressStats;

// ── File info / --list ────────────────────────────────────────────────────────
pub use file_info::{display_containers_info, get_container_info, ContainerInfo};

// Integration tests for src/io/decompress_file.rs.
//
// Coverage:
//   - decompress_filename: decoded bytes land in the destination; stats
//   - no destination file is created or touched when decoding fails
//   - test_filename: verifies without writing
//   - each failure kind maps to its exit code

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unmoz::error::{
    UnmozError, EXIT_DECOMPRESS, EXIT_INPUT_SIZE, EXIT_LENGTH_MISMATCH, EXIT_MAGIC_MISMATCH,
};
use unmoz::io::{decompress_filename, test_filename, DecompressStats, Prefs};
use unmoz::MAGIC;

fn mozlz4(data: &[u8]) -> Vec<u8> {
    let mut v = MAGIC.to_vec();
    v.extend_from_slice(&(data.len() as u32).to_le_bytes());
    v.extend_from_slice(&lz4_flex::block::compress(data));
    v
}

fn put(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, bytes).unwrap();
    p
}

#[test]
fn decodes_bookmark_backup() {
    let dir = TempDir::new().unwrap();
    let json = br#"{"guid":"root________","title":"","children":[]}"#.repeat(40);
    let container = mozlz4(&json);
    let src = put(dir.path(), "bookmarks-2026-10-18.jsonlz4", &container);
    let dst = dir.path().join("bookmarks.json");

    let stats = decompress_filename(&src, &dst, &Prefs::default()).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), json);
    assert_eq!(
        stats,
        DecompressStats {
            container_bytes: container.len() as u64,
            decompressed_bytes: json.len() as u64,
        }
    );
}

#[test]
fn existing_destination_is_replaced_by_default() {
    let dir = TempDir::new().unwrap();
    let src = put(dir.path(), "a.jsonlz4", &mozlz4(b"fresh"));
    let dst = put(dir.path(), "a.json", b"stale stale stale");
    decompress_filename(&src, &dst, &Prefs::default()).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"fresh");
}

#[test]
fn no_clobber_refuses_before_decoding() {
    let dir = TempDir::new().unwrap();
    // The source is not even a container; the clobber check comes first.
    let src = put(dir.path(), "a.jsonlz4", b"not a container at all");
    let dst = put(dir.path(), "a.json", b"keep");
    let mut prefs = Prefs::default();
    prefs.set_overwrite(false);
    let err = decompress_filename(&src, &dst, &prefs).unwrap_err();
    assert!(matches!(err, UnmozError::OutputExists { .. }));
    assert_eq!(fs::read(&dst).unwrap(), b"keep");
}

#[test]
fn failures_leave_existing_destination_untouched() {
    let dir = TempDir::new().unwrap();
    let dst = put(dir.path(), "out.json", b"previous");
    let mut bad = mozlz4(b"some content here");
    bad[0] = b'M';
    let src = put(dir.path(), "bad.jsonlz4", &bad);
    assert!(decompress_filename(&src, &dst, &Prefs::default()).is_err());
    assert_eq!(fs::read(&dst).unwrap(), b"previous");
}

#[test]
fn exit_codes_by_failure_kind() {
    let dir = TempDir::new().unwrap();
    let prefs = Prefs::default();

    let small = put(dir.path(), "small", b"mozLz40");
    assert_eq!(test_filename(&small, &prefs).unwrap_err().exit_code(), EXIT_INPUT_SIZE);

    let mut wrong = mozlz4(b"x");
    wrong[..8].copy_from_slice(b"mozLz4\0\0");
    let wrong = put(dir.path(), "wrong", &wrong);
    assert_eq!(
        test_filename(&wrong, &prefs).unwrap_err().exit_code(),
        EXIT_MAGIC_MISMATCH
    );

    let mut corrupt = MAGIC.to_vec();
    corrupt.extend_from_slice(&5u32.to_le_bytes());
    corrupt.extend_from_slice(b"\x50he");
    let corrupt = put(dir.path(), "corrupt", &corrupt);
    assert_eq!(
        test_filename(&corrupt, &prefs).unwrap_err().exit_code(),
        EXIT_DECOMPRESS
    );

    let mut trailing = mozlz4(b"hello");
    trailing.extend_from_slice(b"\0\0\0");
    let trailing = put(dir.path(), "trailing", &trailing);
    assert_eq!(
        test_filename(&trailing, &prefs).unwrap_err().exit_code(),
        EXIT_LENGTH_MISMATCH
    );
}

#[test]
fn max_input_size_is_honoured() {
    let dir = TempDir::new().unwrap();
    let container = mozlz4(&vec![b'a'; 10_000]);
    let src = put(dir.path(), "a.jsonlz4", &container);
    let mut prefs = Prefs::default();
    prefs.set_max_input_size(container.len() as u64 - 1);
    assert_eq!(test_filename(&src, &prefs).unwrap_err().exit_code(), EXIT_INPUT_SIZE);
    prefs.set_max_input_size(container.len() as u64);
    assert!(test_filename(&src, &prefs).is_ok());
}

#[test]
fn test_mode_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let src = put(dir.path(), "a.jsonlz4", &mozlz4(b"{}"));
    let stats = test_filename(&src, &Prefs::default()).unwrap();
    assert_eq!(stats.decompressed_bytes, 2);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

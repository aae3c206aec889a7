// e2e/error_handling.rs: exit codes and the no-partial-output guarantee.
//
// Every failure kind has its own exit code:
//   1 I/O, 2 usage, 3 input size, 4 magic, 5 decompress, 6 length mismatch.
// No failing run may create, truncate or leave behind any file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn unmoz(dir: &Path, args: &[&str]) -> Output {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_unmoz")))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run unmoz")
}

fn header(declared: u32) -> Vec<u8> {
    let mut v = b"mozLz40\0".to_vec();
    v.extend_from_slice(&declared.to_le_bytes());
    v
}

fn names(dir: &Path) -> Vec<String> {
    let mut v: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    v.sort();
    v
}

/// Runs `unmoz in.jsonlz4 out.json` on `container` and checks the exit code
/// and that `out.json` was never created.
fn expect_failure(container: &[u8], code: i32) -> String {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.jsonlz4"), container).unwrap();
    let out = unmoz(dir.path(), &["in.jsonlz4", "out.json"]);
    assert_eq!(
        out.status.code(),
        Some(code),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(names(dir.path()), vec!["in.jsonlz4".to_owned()]);
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn missing_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = unmoz(dir.path(), &["absent.jsonlz4", "out.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(names(dir.path()).is_empty());
}

#[test]
fn eleven_byte_input_exits_3() {
    let stderr = expect_failure(&header(0)[..11], 3);
    assert!(stderr.contains("11 bytes"), "{stderr}");
}

#[test]
fn input_above_max_size_exits_3() {
    let dir = TempDir::new().unwrap();
    let mut c = header(64);
    c.extend_from_slice(&[0u8; 64]);
    fs::write(dir.path().join("in.jsonlz4"), &c).unwrap();
    let out = unmoz(dir.path(), &["--max-size", "50", "in.jsonlz4", "out.json"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn wrong_magic_exits_4() {
    let mut c = b"mozLz4\0\0".to_vec();
    c.extend_from_slice(&[5, 0, 0, 0, 0x50]);
    c.extend_from_slice(b"hello");
    let stderr = expect_failure(&c, 4);
    assert!(stderr.contains("mozLz4"), "{stderr}");
}

#[test]
fn corrupt_block_exits_5() {
    let mut c = header(5);
    c.extend_from_slice(b"\x50he");
    expect_failure(&c, 5);
}

#[test]
fn hostile_declared_size_exits_5_without_allocating() {
    let mut c = header(u32::MAX);
    c.push(0x00);
    expect_failure(&c, 5);
}

#[test]
fn trailing_payload_exits_6() {
    let mut c = header(5);
    c.extend_from_slice(b"\x50hello\xFF\xFF");
    let stderr = expect_failure(&c, 6);
    assert!(stderr.contains("2 trailing bytes"), "{stderr}");
}

#[test]
fn failed_decode_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.jsonlz4"), b"definitely not a container").unwrap();
    fs::write(dir.path().join("out.json"), b"previous contents").unwrap();
    let out = unmoz(dir.path(), &["in.jsonlz4", "out.json"]);
    assert_eq!(out.status.code(), Some(4));
    assert_eq!(
        fs::read(dir.path().join("out.json")).unwrap(),
        b"previous contents"
    );
    assert_eq!(names(dir.path()), vec!["in.jsonlz4", "out.json"]);
}

#[test]
fn no_clobber_exits_1() {
    let dir = TempDir::new().unwrap();
    let mut c = header(5);
    c.extend_from_slice(b"\x50hello");
    fs::write(dir.path().join("in.jsonlz4"), &c).unwrap();
    fs::write(dir.path().join("out.json"), b"keep").unwrap();
    let out = unmoz(dir.path(), &["-n", "in.jsonlz4", "out.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(dir.path().join("out.json")).unwrap(), b"keep");
}

#[test]
fn same_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let mut c = header(5);
    c.extend_from_slice(b"\x50hello");
    fs::write(dir.path().join("in.jsonlz4"), &c).unwrap();
    let out = unmoz(dir.path(), &["in.jsonlz4", "./in.jsonlz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(dir.path().join("in.jsonlz4")).unwrap(), c);
}

#[test]
fn output_in_missing_directory_exits_1() {
    let dir = TempDir::new().unwrap();
    let mut c = header(5);
    c.extend_from_slice(b"\x50hello");
    fs::write(dir.path().join("in.jsonlz4"), &c).unwrap();
    let out = unmoz(dir.path(), &["in.jsonlz4", "nowhere/out.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(names(dir.path()), vec!["in.jsonlz4".to_owned()]);
}

#[test]
fn input_directory_exits_1() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub.jsonlz4")).unwrap();
    let out = unmoz(dir.path(), &["sub.jsonlz4", "out.json"]);
    assert_eq!(out.status.code(), Some(1));
}

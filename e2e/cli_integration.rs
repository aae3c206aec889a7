// e2e/cli_integration.rs: CLI integration tests
//
// Drives the `unmoz` binary as a black box with std::process::Command.
// Covers explicit and derived output names, test mode, list mode, verbosity
// and the usage-error paths.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn unmoz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_unmoz"))
}

fn unmoz(dir: &Path, args: &[&str]) -> Output {
    Command::new(unmoz_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run unmoz")
}

fn mozlz4(data: &[u8]) -> Vec<u8> {
    let mut v = b"mozLz40\0".to_vec();
    v.extend_from_slice(&(data.len() as u32).to_le_bytes());
    v.extend_from_slice(&lz4_flex::block::compress(data));
    v
}

fn session() -> Vec<u8> {
    br#"{"windows":[{"tabs":[{"entries":[{"url":"https://www.mozilla.org/"}]}]}],"session":{"lastUpdate":1}}"#
        .repeat(25)
}

// ── 1. Explicit INPUT OUTPUT ─────────────────────────────────────────────────

#[test]
fn decode_to_explicit_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sessionstore.jsonlz4"), mozlz4(&session())).unwrap();

    let out = unmoz(dir.path(), &["sessionstore.jsonlz4", "restored.json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("restored.json")).unwrap(), session());
}

// ── 2. Derived output name ───────────────────────────────────────────────────

#[test]
fn derived_output_name_strips_lz4() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("recovery.baklz4"), mozlz4(b"backup")).unwrap();

    let out = unmoz(dir.path(), &["recovery.baklz4"]);
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("recovery.bak")).unwrap(), b"backup");
}

#[test]
fn underivable_output_name_is_usage_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("places.sqlite"), mozlz4(b"x")).unwrap();

    let out = unmoz(dir.path(), &["places.sqlite"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot determine an output filename"), "{stderr}");
}

// ── 3. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.jsonlz4"), mozlz4(b"{}")).unwrap();
    fs::write(dir.path().join("b.jsonlz4"), mozlz4(&session())).unwrap();

    let out = unmoz(dir.path(), &["-t", "a.jsonlz4", "b.jsonlz4"]);
    assert!(out.status.success());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_mode_checks_every_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.jsonlz4"), b"garbage garbage garbage").unwrap();
    fs::write(dir.path().join("good.jsonlz4"), mozlz4(b"fine")).unwrap();

    let out = unmoz(dir.path(), &["--test", "bad.jsonlz4", "good.jsonlz4"]);
    assert_eq!(out.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("bad.jsonlz4"), "{stderr}");
    assert!(stderr.contains("good.jsonlz4: OK"), "{stderr}");
}

// ── 4. List mode ─────────────────────────────────────────────────────────────

#[test]
fn list_prints_header_table() {
    let dir = TempDir::new().unwrap();
    let data = session();
    fs::write(dir.path().join("s.jsonlz4"), mozlz4(&data)).unwrap();

    let out = unmoz(dir.path(), &["-l", "-v", "s.jsonlz4"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Declared"), "{stdout}");
    assert!(stdout.contains("s.jsonlz4"), "{stdout}");
    // -v switches to exact byte counts.
    assert!(stdout.contains(&data.len().to_string()), "{stdout}");
}

#[test]
fn list_rejects_foreign_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plain.json"), b"{\"plain\":true}").unwrap();

    let out = unmoz(dir.path(), &["--list", "plain.json"]);
    assert_eq!(out.status.code(), Some(4));
}

// ── 5. Verbosity ─────────────────────────────────────────────────────────────

#[test]
fn quiet_suppresses_messages() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.jsonlz4"), b"short").unwrap();

    let out = unmoz(dir.path(), &["-qq", "a.jsonlz4", "a.json"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stderr.is_empty());
}

#[test]
fn quiet_suppresses_list_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plain.json"), b"{\"plain\":true}").unwrap();

    let out = unmoz(dir.path(), &["-qq", "--list", "plain.json"]);
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stderr.is_empty());

    let out = unmoz(dir.path(), &["--list", "plain.json"]);
    assert!(String::from_utf8_lossy(&out.stderr).contains("plain.json"));
}

#[test]
fn verbose_reports_header_dump() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.jsonlz4"), mozlz4(b"hello")).unwrap();

    let out = unmoz(dir.path(), &["-vv", "a.jsonlz4", "a.json"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("declared size = 5 bytes"), "{stderr}");
}

// ── 6. Usage ─────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();
    assert_eq!(unmoz(dir.path(), &[]).status.code(), Some(2));
}

#[test]
fn too_many_files_is_usage_error() {
    let dir = TempDir::new().unwrap();
    assert_eq!(unmoz(dir.path(), &["a", "b", "c"]).status.code(), Some(2));
}

#[test]
fn version_flag_succeeds() {
    let dir = TempDir::new().unwrap();
    let out = unmoz(dir.path(), &["--version"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

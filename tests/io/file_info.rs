// Integration tests for src/io/file_info.rs: header-only inspection.

use std::fs;

use tempfile::TempDir;
use unmoz::error::{EXIT_INPUT_SIZE, EXIT_MAGIC_MISMATCH};
use unmoz::io::{display_containers_info, get_container_info, ContainerInfo};
use unmoz::MAGIC;

#[test]
fn reads_header_without_decoding() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("recovery.jsonlz4");
    // Declared size is huge and the payload is garbage; listing still works.
    let mut bytes = MAGIC.to_vec();
    bytes.extend_from_slice(&1_000_000u32.to_le_bytes());
    bytes.extend_from_slice(&[0xEE; 100]);
    fs::write(&p, &bytes).unwrap();

    assert_eq!(
        get_container_info(&p).unwrap(),
        ContainerInfo {
            file_name: "recovery.jsonlz4".to_owned(),
            container_len: 112,
            declared_size: 1_000_000,
            payload_len: 100,
        }
    );
}

#[test]
fn ratio_is_container_over_declared() {
    let info = ContainerInfo {
        file_name: "x".into(),
        container_len: 50,
        declared_size: 200,
        payload_len: 38,
    };
    assert_eq!(info.ratio(), Some(25.0));
}

#[test]
fn short_file_is_size_error() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("short");
    fs::write(&p, b"mozLz4").unwrap();
    assert_eq!(get_container_info(&p).unwrap_err().exit_code(), EXIT_INPUT_SIZE);
}

#[test]
fn foreign_file_is_magic_error() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("plain.json");
    fs::write(&p, b"{\"not\":\"compressed\"}").unwrap();
    assert_eq!(
        get_container_info(&p).unwrap_err().exit_code(),
        EXIT_MAGIC_MISMATCH
    );
}

#[test]
fn listing_reports_first_failure_after_all_files() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.jsonlz4");
    let mut bytes = MAGIC.to_vec();
    bytes.extend_from_slice(&0u32.to_le_bytes());
    fs::write(&good, &bytes).unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, b"0123456789abcdef").unwrap();

    assert!(display_containers_info(&[good.as_path()]).is_ok());
    let err = display_containers_info(&[bad.as_path(), good.as_path()]).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_MAGIC_MISMATCH);
}

// e2e/roundtrip.rs: compress with an independent LZ4 block encoder, wrap in
// a mozLz40 header, decode with the binary, compare.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn mozlz4(data: &[u8]) -> Vec<u8> {
    let mut v = b"mozLz40\0".to_vec();
    v.extend_from_slice(&(data.len() as u32).to_le_bytes());
    v.extend_from_slice(&lz4_flex::block::compress(data));
    v
}

fn roundtrip(name: &str, data: &[u8]) {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join(name);
    fs::write(&src, mozlz4(data)).unwrap();
    let dst = dir.path().join("decoded.bin");

    let status = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_unmoz")))
        .arg(&src)
        .arg(&dst)
        .status()
        .expect("failed to run unmoz");
    assert!(status.success(), "{name}");
    assert_eq!(fs::read(&dst).unwrap(), data, "{name}");
}

#[test]
fn hello() {
    roundtrip("hello.jsonlz4", b"hello");
}

#[test]
fn empty_payload() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("empty.jsonlz4");
    fs::write(&src, b"mozLz40\0\0\0\0\0").unwrap();
    let status = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_unmoz")))
        .arg(&src)
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::metadata(dir.path().join("empty.json")).unwrap().len(), 0);
}

#[test]
fn session_store() {
    let mut s = String::from("{\"windows\":[");
    for i in 0..2_000 {
        s.push_str(&format!(
            "{{\"url\":\"https://example.com/{i}\",\"title\":\"Tab {i}\",\"lastAccessed\":{}}},",
            1_700_000_000_000u64 + i
        ));
    }
    s.push_str("{}]}");
    roundtrip("sessionstore.jsonlz4", s.as_bytes());
}

#[test]
fn binary_noise() {
    let mut x: u32 = 0xDEAD_BEEF;
    let data: Vec<u8> = (0..50_000)
        .map(|_| {
            x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (x >> 24) as u8
        })
        .collect();
    roundtrip("noise.mozlz4", &data);
}

#[test]
fn megabyte_of_zeros() {
    roundtrip("zeros.baklz4", &vec![0u8; 1 << 20]);
}

#[test]
fn decoding_twice_gives_identical_files() {
    let dir = TempDir::new().unwrap();
    let data = b"idempotent ".repeat(1000);
    let src = dir.path().join("i.jsonlz4");
    fs::write(&src, mozlz4(&data)).unwrap();
    for out in ["one.json", "two.json"] {
        let status = Command::new(PathBuf::from(env!("CARGO_BIN_EXE_unmoz")))
            .arg(&src)
            .arg(dir.path().join(out))
            .status()
            .unwrap();
        assert!(status.success());
    }
    assert_eq!(
        fs::read(dir.path().join("one.json")).unwrap(),
        fs::read(dir.path().join("two.json")).unwrap()
    );
}

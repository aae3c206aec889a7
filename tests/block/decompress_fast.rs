// Integration tests for src/block/decompress_fast.rs.
//
// Coverage:
//   - blocks produced by an independent compressor (lz4_flex) decode to the
//     original bytes and report the full block as consumed
//   - extended literal and match lengths (length bytes of 255)
//   - malformed blocks return MalformedInput and never panic, including
//     every truncation of a valid block and byte-flipped variants

use unmoz::block::{decompress_fast, DecompressError};

fn compress(data: &[u8]) -> Vec<u8> {
    lz4_flex::block::compress(data)
}

fn roundtrip(data: &[u8]) {
    let block = compress(data);
    let mut dst = vec![0u8; data.len()];
    let consumed = decompress_fast(&block, &mut dst).unwrap();
    assert_eq!(consumed, block.len(), "len {}", data.len());
    assert_eq!(dst, data);
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-check against an independent compressor
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn text_round_trip() {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(300);
    roundtrip(text.as_bytes());
}

#[test]
fn long_run_uses_extended_match_length() {
    roundtrip(&vec![0u8; 100_000]);
}

#[test]
fn long_literal_run_uses_extended_literal_length() {
    let mut x: u64 = 0x9E37_79B9_7F4A_7C15;
    let data: Vec<u8> = (0..5_000)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (x >> 56) as u8
        })
        .collect();
    roundtrip(&data);
}

#[test]
fn mixed_structure_round_trip() {
    let mut data = Vec::new();
    for i in 0..2_000u32 {
        data.extend_from_slice(&i.to_le_bytes());
        data.extend_from_slice(b"{\"k\":");
        data.extend_from_slice(&(i % 17).to_string().into_bytes());
        data.push(b'}');
    }
    roundtrip(&data);
}

#[test]
fn every_small_length_round_trips() {
    let base = b"abcdefghabcdefghabcdefgh0123456789abcdefgh".repeat(2);
    for len in 1..base.len() {
        roundtrip(&base[..len]);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hand-built blocks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn literal_length_of_exactly_fifteen() {
    // Nibble 15 followed by a 0 continuation byte.
    let mut src = vec![0xF0, 0x00];
    src.extend_from_slice(b"0123456789ABCDE");
    let mut dst = [0u8; 15];
    assert_eq!(decompress_fast(&src, &mut dst), Ok(src.len()));
    assert_eq!(&dst, b"0123456789ABCDE");
}

#[test]
fn literal_length_spanning_two_extension_bytes() {
    // 15 + 255 + 10 = 280 literals.
    let mut src = vec![0xF0, 0xFF, 0x0A];
    src.extend(std::iter::repeat(b'q').take(280));
    let mut dst = vec![0u8; 280];
    assert_eq!(decompress_fast(&src, &mut dst), Ok(src.len()));
    assert!(dst.iter().all(|&b| b == b'q'));
}

#[test]
fn match_reaching_into_last_literals_is_rejected() {
    // 'a', match offset 1 length 18 would leave only 1 byte for literals.
    let src = [0x1E, b'a', 0x01, 0x00, 0x10, b'b'];
    let mut dst = [0u8; 20];
    assert!(decompress_fast(&src, &mut dst).is_err());
}

#[test]
fn output_too_large_for_block_is_rejected() {
    let src = [0x50, b'h', b'e', b'l', b'l', b'o'];
    let mut dst = [0u8; 6];
    assert!(matches!(
        decompress_fast(&src, &mut dst),
        Err(DecompressError::MalformedInput { .. })
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Robustness
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_truncation_fails_cleanly() {
    let data = "sessionstore sessionstore sessionstore windows tabs entries".repeat(20);
    let block = compress(data.as_bytes());
    let mut dst = vec![0u8; data.len()];
    for cut in 0..block.len() {
        assert!(
            decompress_fast(&block[..cut], &mut dst).is_err(),
            "truncated to {cut} bytes"
        );
    }
}

#[test]
fn flipped_bytes_never_panic() {
    let data = b"abcdabcdabcdabcd-efghefghefgh-0123012301230123".repeat(30);
    let block = compress(&data);
    let mut dst = vec![0u8; data.len()];
    for i in 0..block.len() {
        for flip in [0x01u8, 0x10, 0x80, 0xFF] {
            let mut bad = block.clone();
            bad[i] ^= flip;
            // Any outcome is acceptable except a panic.
            let _ = decompress_fast(&bad, &mut dst);
        }
    }
}

#[test]
fn error_position_is_within_input() {
    let src = [0xF0u8, 0xFF, 0xFF];
    let mut dst = [0u8; 600];
    match decompress_fast(&src, &mut dst) {
        Err(DecompressError::MalformedInput { position }) => assert!(position <= src.len()),
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

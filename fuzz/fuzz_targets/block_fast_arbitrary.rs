#![no_main]
use libfuzzer_sys::fuzz_target;
use unmoz::block::decompress_fast;

fuzz_target!(|data: &[u8]| {
    // Output sizes around the usual block sizes; the consumed count may never
    // exceed the input.
    for len in [0usize, 1, 15, 4096, data.len(), data.len().saturating_mul(255).min(1 << 20)] {
        let mut dst = vec![0u8; len];
        if let Ok(consumed) = decompress_fast(data, &mut dst) {
            assert!(consumed <= data.len());
        }
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a whole container, with and without a valid magic.
    // Errors are expected; panics and runaway allocations are not.
    let _ = unmoz::decode(data);

    let mut framed = unmoz::MAGIC.to_vec();
    framed.extend_from_slice(data);
    if let Ok(out) = unmoz::decode(&framed) {
        let declared = u32::from_le_bytes([framed[8], framed[9], framed[10], framed[11]]);
        assert_eq!(out.len(), declared as usize);
    }
});

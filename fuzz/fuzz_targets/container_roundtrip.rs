#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut container = unmoz::MAGIC.to_vec();
    container.extend_from_slice(&(data.len() as u32).to_le_bytes());
    container.extend_from_slice(&lz4_flex::block::compress(data));
    let out = unmoz::decode(&container).expect("well-formed container must decode");
    assert_eq!(out.as_slice(), data);
});

#![no_main]
use imohash_oracle::hashing::{encode_uvarint, Murmur3Hasher};
use libfuzzer_sys::fuzz_target;

/// Fuzz the fingerprint entry point.
///
/// Checks the length prefix on every input and that splitting the input
/// across two incremental updates never changes the Murmur3 result.
fuzz_target!(|data: &[u8]| {
    let fp = imohash_oracle::imohash(data);
    let (prefix, len) = encode_uvarint(data.len() as u64);
    assert_eq!(&fp.as_bytes()[..len], &prefix[..len]);

    let split = data.first().map_or(0, |&b| usize::from(b)).min(data.len());
    let mut hasher = Murmur3Hasher::new();
    hasher.update(&data[..split]);
    hasher.update(&data[split..]);
    assert_eq!(
        hasher.finish_128(),
        imohash_oracle::hashing::murmur3_x64_128(data, 0)
    );
});

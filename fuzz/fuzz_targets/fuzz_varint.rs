#![no_main]
use imohash_oracle::hashing::{decode_uvarint, encode_uvarint};
use libfuzzer_sys::fuzz_target;

/// Fuzz the varint decoder.
///
/// Any value the decoder accepts must re-encode to a prefix of the input
/// no longer than what was consumed.
fuzz_target!(|data: &[u8]| {
    if let Some((value, consumed)) = decode_uvarint(data) {
        let (buf, len) = encode_uvarint(value);
        assert!(len <= consumed);
        if len == consumed {
            assert_eq!(&buf[..len], &data[..len]);
        }
    }
});

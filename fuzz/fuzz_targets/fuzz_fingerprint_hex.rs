#![no_main]
use imohash_oracle::Fingerprint;
use libfuzzer_sys::fuzz_target;

/// Fuzz hex parsing of fingerprints.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(fp) = s.parse::<Fingerprint>() {
            assert_eq!(fp.to_hex(), s.to_ascii_lowercase());
        }
    }
});

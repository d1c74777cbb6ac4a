//! Property-based tests for fingerprint invariants.
//!
//! Covers output shape, the length prefix, determinism, sample coverage and
//! length sensitivity across arbitrary inputs.

use imohash_oracle::hashing::{
    decode_uvarint, encode_uvarint, murmur3_x64_128, uvarint_len, Murmur3Hasher, SampleLayout,
    SAMPLE_SIZE, SAMPLE_THRESHOLD,
};
use imohash_oracle::{imohash, Fingerprint};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn fingerprint_prefix_is_varint_of_len(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let fp = imohash(&data);
        let (prefix, prefix_len) = encode_uvarint(data.len() as u64);
        prop_assert_eq!(fp.as_bytes().len(), 16);
        prop_assert_eq!(&fp.as_bytes()[..prefix_len], &prefix[..prefix_len]);
        prop_assert_eq!(fp.encoded_len(), Some(data.len() as u64));
    }

    #[test]
    fn fingerprint_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(imohash(&data), imohash(&data.clone()));
    }

    #[test]
    fn appending_a_byte_changes_fingerprint(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        extra in any::<u8>(),
    ) {
        let mut longer = data.clone();
        longer.push(extra);
        prop_assert_ne!(imohash(&data), imohash(&longer));
    }

    #[test]
    fn incremental_murmur_matches_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..512),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        seed in any::<u32>(),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Murmur3Hasher::with_seed(seed);
        let mut start = 0;
        for p in points {
            hasher.update(&data[start..p]);
            start = p;
        }
        hasher.update(&data[start..]);
        prop_assert_eq!(hasher.finish_128(), murmur3_x64_128(&data, seed));
    }

    #[test]
    fn varint_roundtrip_and_length(value in any::<u64>()) {
        let (buf, len) = encode_uvarint(value);
        prop_assert_eq!(len, uvarint_len(value));
        prop_assert!((1..=10).contains(&len));
        prop_assert_eq!(decode_uvarint(&buf[..len]), Some((value, len)));
    }

    #[test]
    fn hex_roundtrip(bytes in any::<[u8; 16]>()) {
        let fp = Fingerprint::from_bytes(bytes);
        let parsed: Fingerprint = fp.to_hex().parse().unwrap();
        prop_assert_eq!(parsed, fp);
    }

    #[test]
    fn varint_decode_doesnt_panic(bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let _ = decode_uvarint(&bytes);
    }
}

proptest! {
    // Sampled inputs are large; fewer cases keep the suite fast.
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn sampled_fingerprint_ignores_gap_bytes(
        extra in 0usize..70_000,
        seed in any::<u8>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let len = SAMPLE_THRESHOLD + extra;
        let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect();
        let layout = SampleLayout::for_len(len);
        let ranges: Vec<_> = layout.ranges().collect();

        let gaps = [ranges[0].end..ranges[1].start, ranges[1].end..ranges[2].start];
        let gap_len: usize = gaps.iter().map(|g| g.len()).sum();
        let mut idx = pick.index(gap_len);
        let offset = gaps
            .iter()
            .find_map(|g| if idx < g.len() { Some(g.start + idx) } else { idx -= g.len(); None })
            .unwrap();

        let mut changed = data.clone();
        changed[offset] ^= 0x5a;
        prop_assert!(!layout.covers(offset));
        prop_assert_eq!(imohash(&changed), imohash(&data));
    }

    #[test]
    fn sampled_fingerprint_sees_window_bytes(
        extra in 0usize..70_000,
        window in 0usize..3,
        pos in 0usize..SAMPLE_SIZE,
    ) {
        let len = SAMPLE_THRESHOLD + extra;
        let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(13)).collect();
        let window_start = SampleLayout::for_len(len)
            .ranges()
            .nth(window)
            .map(|r| r.start)
            .unwrap();
        let offset = window_start + pos;

        let mut changed = data.clone();
        changed[offset] ^= 0x01;
        prop_assert_ne!(imohash(&changed), imohash(&data));
    }
}

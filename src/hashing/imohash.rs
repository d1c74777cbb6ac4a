//! imohash v1.0.2 over in-memory byte slices.
//!
//! Inputs shorter than [`SAMPLE_THRESHOLD`] are hashed whole. Longer inputs
//! are represented by three [`SAMPLE_SIZE`]-byte windows (head, middle, tail)
//! streamed into Murmur3, so hashing cost is bounded regardless of length.
//! The leading bytes of the Murmur3 digest are then overwritten with the
//! varint-encoded input length.

use super::fingerprint::{Fingerprint, FINGERPRINT_LEN};
use super::murmur3::Murmur3Hasher;
use super::varint::encode_uvarint;
use std::ops::Range;

/// Bytes taken from each of the three sample windows.
pub const SAMPLE_SIZE: usize = 16 * 1024;

/// Inputs at least this long are sampled instead of hashed whole.
pub const SAMPLE_THRESHOLD: usize = 128 * 1024;

/// Murmur3 seed.
pub const SEED: u32 = 0;

/// Which bytes of an input of a given length are hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLayout {
    /// The entire input.
    Full { len: usize },
    /// Head, middle and tail windows of [`SAMPLE_SIZE`] bytes.
    Sampled { len: usize, mid: usize },
}

impl SampleLayout {
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        if len < SAMPLE_THRESHOLD {
            Self::Full { len }
        } else {
            Self::Sampled {
                len,
                mid: len / 2 - SAMPLE_SIZE / 2,
            }
        }
    }

    /// Byte ranges of the input that are hashed, in hashing order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> {
        let windows = match *self {
            Self::Full { len } => [Some(0..len), None, None],
            Self::Sampled { len, mid } => [
                Some(0..SAMPLE_SIZE),
                Some(mid..mid + SAMPLE_SIZE),
                Some(len - SAMPLE_SIZE..len),
            ],
        };
        windows.into_iter().flatten()
    }

    /// Total bytes fed to Murmur3.
    #[must_use]
    pub fn sample_len(&self) -> usize {
        match *self {
            Self::Full { len } => len,
            Self::Sampled { .. } => 3 * SAMPLE_SIZE,
        }
    }

    #[must_use]
    pub fn is_sampled(&self) -> bool {
        matches!(self, Self::Sampled { .. })
    }

    /// Whether byte `offset` influences the fingerprint.
    #[must_use]
    pub fn covers(&self, offset: usize) -> bool {
        self.ranges().any(|r| r.contains(&offset))
    }
}

/// Fingerprint `data`.
///
/// Pure and total: the same input always yields the same 16 bytes, and the
/// empty slice maps to all zeros.
#[must_use]
pub fn imohash(data: &[u8]) -> Fingerprint {
    let layout = SampleLayout::for_len(data.len());

    let mut hasher = Murmur3Hasher::with_seed(SEED);
    for range in layout.ranges() {
        hasher.update(&data[range]);
    }
    let (h1, h2) = hasher.finish_128();

    // imohash serialises the Murmur3 words big-endian
    let mut out = [0u8; FINGERPRINT_LEN];
    out[..8].copy_from_slice(&h1.to_be_bytes());
    out[8..].copy_from_slice(&h2.to_be_bytes());

    let (prefix, prefix_len) = encode_uvarint(data.len() as u64);
    out[..prefix_len].copy_from_slice(&prefix[..prefix_len]);

    Fingerprint::from_bytes(out)
}

//! Fingerprinting primitives.
//!
//! - [`murmur3`]: MurmurHash3 x64 128-bit, one-shot and incremental.
//! - [`varint`]: LEB128 length prefix encoding.
//! - [`imohash`](mod@imohash): the sampled fingerprint built from the two.

mod fingerprint;
pub mod imohash;
pub mod murmur3;
pub mod varint;

pub use fingerprint::{Fingerprint, FingerprintParseError, FINGERPRINT_LEN};
pub use imohash::{imohash, SampleLayout, SAMPLE_SIZE, SAMPLE_THRESHOLD, SEED};
pub use murmur3::{digest_le, murmur3_x64_128, Murmur3Hasher};
pub use varint::{decode_uvarint, encode_uvarint, uvarint_len, MAX_VARINT_LEN};

//! Conformance driver.
//!
//! Fingerprints every prefix `b[0..l]` for `l` in `0..max_length` of the
//! deterministic buffer from [`generate_buffer`], feeds each fingerprint
//! into SHA-256, and compares the result with the digest published for the
//! imohash v1.0.2 reference implementation.

mod buffer;

pub use buffer::{buffer_byte, generate_buffer};

use crate::config::{ConformanceConfig, DEFAULT_MAX_LENGTH};
use crate::hashing::{imohash, SAMPLE_THRESHOLD};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// SHA-256 over all fingerprints for the default run of 200 000 prefixes.
pub const REFERENCE_DIGEST: &str =
    "30604df2f4e1cdb9cb2ce34bcb32840e3703ca41bd678f09155690455fdf1b85";

/// Exit codes for the driver binary
pub mod exit_codes {
    /// Digest computed and written
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Outcome of a conformance run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    pub max_length: usize,
    /// Lowercase hex SHA-256, 64 characters
    pub digest_hex: String,
    /// `None` when `max_length` differs from the reference run
    pub matches_reference: Option<bool>,
}

impl ConformanceReport {
    /// The exact line the driver prints, including the terminator.
    #[must_use]
    pub fn output_line(&self) -> String {
        format!("{}\n", self.digest_hex)
    }
}

/// SHA-256 over the fingerprints of every prefix of `buffer`, lengths `0..buffer.len()`.
#[must_use]
pub fn prefix_digest(buffer: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for len in 0..buffer.len() {
        if len == SAMPLE_THRESHOLD {
            tracing::debug!(len, "sampling path engaged");
        }
        hasher.update(imohash(&buffer[..len]).as_bytes());
    }
    hasher.finalize().into()
}

/// Digest for the driver buffer of `max_length` bytes.
#[must_use]
pub fn conformance_digest(max_length: usize) -> [u8; 32] {
    let buffer = generate_buffer(max_length);
    prefix_digest(&buffer)
}

/// Run the driver as configured.
#[must_use]
pub fn run(config: &ConformanceConfig) -> ConformanceReport {
    tracing::debug!(max_length = config.max_length, "generating conformance buffer");
    let digest = conformance_digest(config.max_length);
    let digest_hex = hex::encode(digest);

    let matches_reference = config
        .is_reference_run()
        .then(|| digest_hex == REFERENCE_DIGEST);
    match matches_reference {
        Some(true) => tracing::info!("digest matches imohash v1.0.2 reference"),
        Some(false) => tracing::warn!(
            expected = REFERENCE_DIGEST,
            actual = %digest_hex,
            "digest does not match imohash v1.0.2 reference"
        ),
        None => tracing::debug!(
            max_length = config.max_length,
            reference_length = DEFAULT_MAX_LENGTH,
            "non-reference run, skipping comparison"
        ),
    }

    ConformanceReport {
        max_length: config.max_length,
        digest_hex,
        matches_reference,
    }
}

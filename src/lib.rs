//! **Constant-time content fingerprints compatible with imohash v1.0.2.**
//!
//! `imohash-oracle` computes 16-byte fingerprints of byte slices the way the
//! imohash v1.0.2 reference library does, and ships a conformance driver that
//! reproduces the digest published for that library.
//!
//! A fingerprint is cheap for inputs of any size: below 128 KiB the whole
//! input is hashed, above it only three 16 KiB windows (head, middle, tail)
//! are. The input length is written into the front of the fingerprint as a
//! varint, so inputs of different lengths never share a fingerprint prefix.
//! Fingerprints are **not** cryptographic.
//!
//! ## Core Modules
//!
//! - **[`hashing`]**: MurmurHash3 x64 128-bit, the varint prefix, and
//!   [`imohash()`] itself.
//! - **[`conformance`]**: the reference driver that hashes every prefix of a
//!   deterministic 200 000-byte buffer into SHA-256.
//! - **[`config`]**: settings for the driver.
//!
//! ## Fingerprinting a Buffer
//!
//! ```
//! use imohash_oracle::imohash;
//!
//! let fp = imohash(&[0x00]);
//! assert_eq!(fp.to_hex(), "0110abe56eff5cb551622daa78f83583");
//! assert_eq!(fp.encoded_len(), Some(1));
//!
//! // the empty input maps to all zeros
//! assert_eq!(imohash(&[]).as_bytes(), &[0u8; 16]);
//! ```
//!
//! ## Running the Conformance Driver
//!
//! ```no_run
//! use imohash_oracle::conformance::{self, REFERENCE_DIGEST};
//! use imohash_oracle::ConformanceConfig;
//!
//! let report = conformance::run(&ConformanceConfig::default());
//! assert_eq!(report.digest_hex, REFERENCE_DIGEST);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Byte extraction from u64 words truncates on purpose
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc
)]

pub mod cli;
pub mod config;
pub mod conformance;
pub mod error;
pub mod hashing;

// Re-export main types for convenience
pub use config::{ConfigError, ConformanceConfig, Validatable};
pub use conformance::{conformance_digest, ConformanceReport, REFERENCE_DIGEST};
pub use error::{ErrorContext, OracleError, Result};
pub use hashing::{imohash, Fingerprint, Murmur3Hasher, SampleLayout};

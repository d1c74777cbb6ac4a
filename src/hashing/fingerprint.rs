//! The 16-byte fingerprint value type.

use super::varint::decode_uvarint;
use hex::{FromHex, FromHexError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of a fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 16;

/// A 16-byte imohash fingerprint.
///
/// The value is an opaque octet array: the leading bytes hold the varint
/// encoded input length and the rest carry Murmur3 output. It is not a
/// cryptographic digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

/// Errors from parsing a fingerprint out of its hex form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FingerprintParseError {
    #[error("expected {expected} hex digits, found {found} bytes")]
    InvalidLength { expected: usize, found: usize },

    #[error("invalid hex character {character:?} at byte {offset}")]
    InvalidCharacter { character: char, offset: usize },
}

impl Fingerprint {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    #[must_use]
    pub const fn into_bytes(self) -> [u8; FINGERPRINT_LEN] {
        self.0
    }

    /// Lowercase hex, 32 characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Input length recorded in the varint prefix.
    ///
    /// Always `Some` for values produced by [`imohash`](fn@super::imohash);
    /// hand-built fingerprints may carry a malformed prefix.
    #[must_use]
    pub fn encoded_len(&self) -> Option<u64> {
        decode_uvarint(&self.0).map(|(len, _)| len)
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Fingerprint> for [u8; FINGERPRINT_LEN] {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expected = FINGERPRINT_LEN * 2;
        <[u8; FINGERPRINT_LEN]>::from_hex(s)
            .map(Self)
            .map_err(|err| match err {
                FromHexError::InvalidHexCharacter { c, index } => {
                    FingerprintParseError::InvalidCharacter {
                        character: c,
                        offset: index,
                    }
                }
                _ => FingerprintParseError::InvalidLength {
                    expected,
                    found: s.len(),
                },
            })
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

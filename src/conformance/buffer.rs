//! Deterministic input buffer for the conformance run.

/// Byte at index `i`: `(i * i + 31) mod 256`, computed in 64-bit arithmetic.
#[inline]
#[must_use]
pub fn buffer_byte(i: u64) -> u8 {
    (i.wrapping_mul(i).wrapping_add(31) & 0xff) as u8
}

/// Build the `len`-byte conformance buffer.
#[must_use]
pub fn generate_buffer(len: usize) -> Vec<u8> {
    (0..len as u64).map(buffer_byte).collect()
}

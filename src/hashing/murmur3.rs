//! MurmurHash3 x64 128-bit.
//!
//! Both a one-shot function and an incremental [`Murmur3Hasher`] are provided.
//! The incremental form lets the sampler feed disjoint ranges of a buffer
//! without copying them into a contiguous workspace first.

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

const BLOCK_SIZE: usize = 16;

#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

#[inline]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Little-endian read of up to eight bytes, zero-padded on the high end.
#[inline]
fn read_le_partial(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Compute MurmurHash3 x64 128-bit of `data` with `seed`.
///
/// Returns `(h1, h2)`; the canonical byte form is
/// `h1.to_le_bytes() || h2.to_le_bytes()` (see [`digest_le`]).
pub fn murmur3_x64_128(data: &[u8], seed: u32) -> (u64, u64) {
    let mut hasher = Murmur3Hasher::with_seed(seed);
    hasher.update(data);
    hasher.finish_128()
}

/// Canonical 16-byte digest: `LE(h1) || LE(h2)`.
pub fn digest_le(data: &[u8], seed: u32) -> [u8; 16] {
    let (h1, h2) = murmur3_x64_128(data, seed);
    to_le_bytes(h1, h2)
}

pub(crate) fn to_le_bytes(h1: u64, h2: u64) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&h1.to_le_bytes());
    out[8..].copy_from_slice(&h2.to_le_bytes());
    out
}

/// Incremental MurmurHash3 x64 128-bit.
///
/// Feeding the input through any sequence of [`update`](Self::update) calls
/// yields the same result as [`murmur3_x64_128`] over the concatenation.
#[derive(Debug, Clone)]
pub struct Murmur3Hasher {
    seed: u32,
    h1: u64,
    h2: u64,
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    total_len: u64,
}

impl Murmur3Hasher {
    /// New hasher with seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            h1: u64::from(seed),
            h2: u64::from(seed),
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            total_len: 0,
        }
    }

    /// Reset to the initial state, keeping the seed.
    pub fn reset(&mut self) {
        *self = Self::with_seed(self.seed);
    }

    /// Number of bytes fed so far.
    #[must_use]
    pub fn bytes_hashed(&self) -> u64 {
        self.total_len
    }

    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.process_block(&block);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.process_block(block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    #[inline]
    fn process_block(&mut self, block: &[u8]) {
        let (lo, hi) = block.split_at(8);
        let k1 = read_le_partial(lo);
        let k2 = read_le_partial(hi);

        self.h1 ^= mix_k1(k1);
        self.h1 = self
            .h1
            .rotate_left(27)
            .wrapping_add(self.h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dc_e729);

        self.h2 ^= mix_k2(k2);
        self.h2 = self
            .h2
            .rotate_left(31)
            .wrapping_add(self.h1)
            .wrapping_mul(5)
            .wrapping_add(0x3849_5ab5);
    }

    /// Finalize without consuming the hasher, returning `(h1, h2)`.
    #[must_use]
    pub fn finish_128(&self) -> (u64, u64) {
        let mut h1 = self.h1;
        let mut h2 = self.h2;

        let tail = &self.buffer[..self.buffered];
        if tail.len() > 8 {
            h2 ^= mix_k2(read_le_partial(&tail[8..]));
        }
        if !tail.is_empty() {
            h1 ^= mix_k1(read_le_partial(&tail[..tail.len().min(8)]));
        }

        h1 ^= self.total_len;
        h2 ^= self.total_len;

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        h1 = fmix64(h1);
        h2 = fmix64(h2);

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        (h1, h2)
    }

    /// Canonical little-endian digest of everything fed so far.
    #[must_use]
    pub fn finalize(&self) -> [u8; 16] {
        let (h1, h2) = self.finish_128();
        to_le_bytes(h1, h2)
    }
}

impl Default for Murmur3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

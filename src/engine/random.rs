//! Deterministic pseudo-random numbers
//!
//! A string hash for seed derivation and a Park–Miller (Lehmer) generator.
//! Both must stay bit-identical to the sequences already published by the
//! dashboard: a given seed always produces the same floats.

/// Lehmer modulus (2^31 - 1)
const MODULUS: i64 = 2_147_483_647;

/// Lehmer multiplier
const MULTIPLIER: i64 = 16_807;

/// Fold `text` into a seed
///
/// Rolling `hash * 31 + unit` over the UTF-16 code units, truncated to a
/// signed 32-bit integer after every step, then the absolute value.
/// `i32::MIN` maps to `2147483648`, hence the `u32` result.
pub fn hash_seed(text: &str) -> u32 {
    let hash = text.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Park–Miller minimal standard generator
///
/// Holds its own state; build a fresh one per logical use so independent
/// computations never share a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: i64,
}

impl SeededRandom {
    /// Create a generator; zero and negative seeds are shifted into
    /// `[1, MODULUS - 1]`
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Create a generator seeded from [`hash_seed`] of `text`
    pub fn from_text(text: &str) -> Self {
        Self::new(i64::from(hash_seed(text)))
    }

    /// Advance and return a float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    pub fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

//! Seeds: turning vibe text into the one number every choice hangs off.
//!
//! The seed is a 31-multiplier polynomial hash over the code points of the
//! normalized text, with wrapping `u32` arithmetic. It is stable across runs,
//! platforms and process restarts, linear in the input length, and happy with
//! any Unicode.
//!
//! Table lookups index with `seed % len` or `(seed / k) % len`. Continuous
//! values (lightness, chroma jitter) come from a [`Xorshift32`] stream seeded
//! with the same number.

/// Normalize vibe text before hashing: trim, then lowercase.
///
/// `"  Neon Nights "` and `"neon nights"` must derive the same theme.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Hash normalized text into a seed.
///
/// The empty string hashes to `0`, which is the seed every blank vibe gets.
#[must_use]
pub fn seed_for(normalized: &str) -> u32 {
    normalized
        .chars()
        .fold(0u32, |hash, ch| hash.wrapping_mul(31).wrapping_add(u32::from(ch)))
}

/// Index into a table of `len` entries using `seed / divisor`.
///
/// Different divisors decorrelate the picks made from one seed.
#[must_use]
pub const fn pick_index(seed: u32, divisor: u32, len: usize) -> usize {
    (seed / divisor) as usize % len
}

// ---------------------------------------------------------------------------
// Xorshift32: a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. Zero is a fixed point of xorshift, so it maps to 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random f32 in [lo, hi].
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        let t = f64::from(self.next_u32()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t as f32, lo).clamp(lo, hi)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

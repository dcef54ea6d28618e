//! Deterministic pseudo-random numbers
//!
//! A 32-bit mulberry generator: tiny state, fast, and reproducible from a
//! seed on every platform. Not suitable for anything security related.

/// Seeded generator producing a repeatable sequence of floats in `[0, 1)`
///
/// Two instances built from the same seed yield identical sequences.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    const INCREMENT: u32 = 0x6D2B_79F5;

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);

        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform index in `0..len`
    ///
    /// # Panics
    /// Panics in debug mode if `len` is zero
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot draw from an empty range");
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

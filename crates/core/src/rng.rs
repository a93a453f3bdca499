//! RNG module - deterministic random source for color picking
//!
//! The same level and seed always produce the same colors.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 gets its own fixed state
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform index in `[0, len)`; `len` must be non-zero.
    ///
    /// Uses the high bits, which are far better distributed than the low
    /// bits of an LCG with a power-of-two modulus.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let high = u64::from(self.next_u32() >> 8);
        ((high * len as u64) >> 24) as usize
    }
}

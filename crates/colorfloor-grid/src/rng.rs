#![forbid(unsafe_code)]

//! Deterministic randomness for disco ticks.
//!
//! Color randomization uses a seedable xorshift32 generator instead of an OS
//! entropy source: the animation only needs cheap visual noise, and explicit
//! seeds keep every test reproducible.

use crate::cell::PackedRgb;

/// Replacement seed when a caller hands us zero (xorshift fixes at 0).
const SEED_FALLBACK: u32 = 0x9E37_79B9;

/// Deterministic xorshift32 PRNG (the 13/17/5 variant).
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from an explicit seed.
    ///
    /// A zero seed is remapped to a fixed nonzero constant, so the generator
    /// never sticks at zero.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { SEED_FALLBACK } else { seed };
        Self { state }
    }

    /// Create a generator seeded from the system clock.
    ///
    /// Intended for the frontend at startup; tests should prefer
    /// [`XorShift32::new`] with a fixed seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(SEED_FALLBACK);
        Self::new(seed)
    }

    /// Advance the generator and return the next value. Never returns 0.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Draw a random 24-bit color.
    #[inline]
    pub fn next_color(&mut self) -> PackedRgb {
        PackedRgb::from_raw(self.next_u32())
    }
}

//! Injectable simulation RNG.
//!
//! Every run draws its stoplight schedule from a `SimRng`.  Tests build one
//! from a fixed seed; production code uses [`SimRng::from_entropy`].  Batches
//! derive one child stream per run so runs never share RNG state:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG used to build stoplight schedules.
///
/// Draws take `&mut self`, so a single stream serialises its callers.  For
/// parallel runs, give each worker its own `SimRng` via
/// [`child`](Self::child) rather than sharing one behind a lock.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic RNG: the same seed always produces the same schedules.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset — used to seed
    /// independent per-run streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

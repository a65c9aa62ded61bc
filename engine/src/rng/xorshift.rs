//! xorshift64* random number generator and variates
//!
//! A fast, high-quality PRNG suitable for simulation purposes: it passes
//! TestU01's BigCrush statistical tests using 64-bit state and 64-bit
//! output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact simulation trace)
//! - Testing (verify convergence against closed-form expectations)
//! - Reproducible research results

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use mmn_simulator_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let interarrival = rng.exp_variate(0.7); // exponential delay, rate 0.7
/// assert!(interarrival > 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with the given seed
    ///
    /// A zero seed is mapped to 1 (xorshift requirement: state must be
    /// non-zero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value, advancing the internal state
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Take the top 53 bits; divide by 2^53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Draw an exponentially distributed variate with the given rate
    ///
    /// Inverse-transform sampling: `-ln(1 - u) / rate` with `u` uniform in
    /// [0, 1). Using `1 - u` keeps the logarithm's argument in (0, 1], so
    /// the result is always finite and non-negative.
    ///
    /// The rate is validated by the model configuration before any draw
    /// happens; this method assumes `rate > 0`.
    pub fn exp_variate(&mut self, rate: f64) -> f64 {
        let u = self.next_f64();
        -(1.0 - u).ln() / rate
    }

    /// Pick a uniform random index in [0, bound)
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.next() % bound as u64) as usize
    }

    /// Current RNG state (for checkpointing/replay)
    pub fn state(&self) -> u64 {
        self.state
    }
}

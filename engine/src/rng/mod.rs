//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. CRITICAL: all randomness in the simulator MUST go through
//! this module; same seed + same configuration = identical event trace.

mod xorshift;

pub use xorshift::RngManager;

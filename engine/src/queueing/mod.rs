//! Queueing model - the M/M/n state machine and its run loop
//!
//! See `mmn.rs` for the full implementation.

pub mod mmn;

// Re-export main types for convenience
pub use mmn::{ModelConfig, QueueingModel, RunSummary};

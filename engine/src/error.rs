//! Error taxonomy for the simulation engine
//!
//! Internal-consistency errors (`EmptyQueue`, `InvariantViolation`) abort
//! the run immediately: continuing after a scheduler/model desync would
//! produce statistically meaningless output. Configuration errors are
//! rejected eagerly, before the simulation starts. `NoCompletions` is the
//! one recoverable condition: the caller asked for statistics over a run
//! that completed zero jobs.

use thiserror::Error;

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration validation error (non-positive rates, n < 1,
    /// negative scheduling delay). Never silently clamped.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pop attempted on an empty event queue. Programming-contract
    /// violation: callers must check for pending events first.
    #[error("event queue is empty at t={time}")]
    EmptyQueue { time: f64 },

    /// A completion event fired for a server with no running job.
    /// Indicates scheduler/model desynchronization; fatal, never retried.
    #[error("completion for job {job_id} fired on idle server {server} at t={time}")]
    InvariantViolation { time: f64, job_id: u64, server: usize },

    /// Statistics requested with zero completed jobs (e.g. the horizon
    /// elapsed before any completion). Reported, not a crash.
    #[error("no jobs completed before the horizon; mean time in system is undefined")]
    NoCompletions,
}

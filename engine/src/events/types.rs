//! Event types for the queueing simulation
//!
//! An event encapsulates a state transition to apply when its scheduled
//! time arrives. The queueing model defines exactly two transitions:
//!
//! 1. **Arrival**: a job enters the system at a specific server
//! 2. **Completion**: the job in service at a specific server finishes
//!
//! # Design Principles
//!
//! 1. **Self-contained**: an event carries all data needed to process it
//! 2. **Immutable**: an event's scheduled time is fixed when it is pushed
//!    into the queue and never mutated afterwards
//! 3. **Deterministic**: processing an event may only push new events and
//!    mutate model state; no ambient randomness

use serde::{Deserialize, Serialize};

/// A pending state transition in the simulation
///
/// Each event is exclusively owned by the event queue until popped, then
/// consumed by the processing step, which may produce new events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A job arrives at the given server
    ///
    /// Processing records the arrival time, starts the job (or enqueues it
    /// behind the one in service) and schedules the next arrival.
    Arrival { job_id: u64, server: usize },

    /// The job in service at the given server completes
    ///
    /// Processing records the completion time of the running job and
    /// promotes the head of the waiting queue, if any.
    Completion { job_id: u64, server: usize },
}

impl Event {
    /// Job id carried by this event
    pub fn job_id(&self) -> u64 {
        match self {
            Event::Arrival { job_id, .. } | Event::Completion { job_id, .. } => *job_id,
        }
    }

    /// Server index this event targets
    pub fn server(&self) -> usize {
        match self {
            Event::Arrival { server, .. } | Event::Completion { server, .. } => *server,
        }
    }
}

//! Per-server state: the running-job slot and the FIFO waiting queue
//!
//! A server is `Idle` exactly when its running slot is empty. The model is
//! work-conserving: the waiting queue is non-empty only while a job is in
//! service, because an idle server immediately pulls from its queue.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// State of one server in the M/M/n system
///
/// # Example
/// ```
/// use mmn_simulator_core::ServerState;
///
/// let mut server = ServerState::new();
/// assert!(server.is_idle());
///
/// server.start(0);
/// server.enqueue(1);
/// assert_eq!(server.occupancy(), 2);
///
/// assert_eq!(server.take_running(), Some(0));
/// assert_eq!(server.pop_waiting(), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerState {
    /// Job currently in service, if any
    running: Option<u64>,
    /// Jobs awaiting service at this server, in arrival order
    waiting: VecDeque<u64>,
}

impl ServerState {
    /// Create an idle server with an empty waiting queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no job is in service
    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Job currently in service, if any
    pub fn running(&self) -> Option<u64> {
        self.running
    }

    /// Number of jobs awaiting service
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Put a job into service
    ///
    /// Callers only start a job on an idle server; starting over a running
    /// job would lose a completion.
    pub fn start(&mut self, job_id: u64) {
        debug_assert!(self.running.is_none(), "started job {job_id} on a busy server");
        self.running = Some(job_id);
    }

    /// Append a job to the waiting queue
    pub fn enqueue(&mut self, job_id: u64) {
        self.waiting.push_back(job_id);
    }

    /// Remove and return the job in service, leaving the server idle
    pub fn take_running(&mut self) -> Option<u64> {
        self.running.take()
    }

    /// Remove and return the head of the waiting queue
    pub fn pop_waiting(&mut self) -> Option<u64> {
        self.waiting.pop_front()
    }

    /// Jobs at this server: in service (0 or 1) plus waiting
    pub fn occupancy(&self) -> usize {
        usize::from(self.running.is_some()) + self.waiting.len()
    }

    /// Work-conservation check: jobs may wait only while one is in service
    pub fn is_work_conserving(&self) -> bool {
        self.running.is_some() || self.waiting.is_empty()
    }
}

//! Logical simulation clock
//!
//! The clock owns the current simulated time and the queue of pending
//! events. Time is purely logical: it advances only to the scheduled time
//! of the event being processed, never by wall-clock passage, and never
//! decreases.
//!
//! The run loop lives on the queueing model, which pops events from the
//! clock and applies their state transitions; the clock itself is a
//! passive owner of time and pending work.

use crate::error::SimulationError;
use crate::events::{Event, EventQueue};

/// Simulated time and pending events for one simulation run
///
/// # Example
/// ```
/// use mmn_simulator_core::{Event, SimulationClock};
///
/// let mut clock = SimulationClock::new();
/// clock.schedule(1.5, Event::Arrival { job_id: 0, server: 0 }).unwrap();
///
/// let (time, event) = clock.next_event().unwrap();
/// assert_eq!(time, 1.5);
/// clock.advance_to(time);
/// assert_eq!(clock.now(), 1.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    /// Current simulated time; monotonically non-decreasing
    current_time: f64,
    /// Events waiting to be processed, ordered by scheduled time
    pending: EventQueue,
}

impl SimulationClock {
    /// Create a clock at t = 0 with no pending events
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    pub fn now(&self) -> f64 {
        self.current_time
    }

    /// Schedule an event `delay` time units from now
    ///
    /// The event's absolute time is fixed here and never mutated after
    /// enqueue. A negative or non-finite delay is rejected.
    pub fn schedule(&mut self, delay: f64, event: Event) -> Result<(), SimulationError> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "scheduling delay must be finite and non-negative, got {delay}"
            )));
        }
        self.pending.push(self.current_time + delay, event);
        Ok(())
    }

    /// Pop the earliest pending event
    ///
    /// Popping an empty queue is a programming-contract violation; check
    /// [`has_pending`](Self::has_pending) first.
    pub fn next_event(&mut self) -> Result<(f64, Event), SimulationError> {
        self.pending.pop().ok_or(SimulationError::EmptyQueue {
            time: self.current_time,
        })
    }

    /// Scheduled time of the earliest pending event, if any
    pub fn peek_time(&self) -> Option<f64> {
        self.pending.peek_time()
    }

    /// Whether any events are pending
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of pending events
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock to the time of the event being processed
    ///
    /// Time never moves backwards: events pop in non-decreasing time
    /// order, so a backwards move indicates a corrupted queue.
    pub fn advance_to(&mut self, time: f64) {
        debug_assert!(
            time >= self.current_time,
            "clock moved backwards: {} -> {}",
            self.current_time,
            time
        );
        self.current_time = time;
    }
}

//! Min-priority event queue keyed by scheduled time
//!
//! Built on `std::collections::BinaryHeap` (a max-heap) with a reversed
//! ordering. Ties between events scheduled at the same time are broken by
//! insertion order (FIFO), which keeps simulation traces reproducible.
//!
//! # Complexity
//!
//! `push` and `pop` are O(log k) in the number of pending events;
//! `is_empty`, `len` and `peek_time` are O(1).

use crate::events::Event;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry pairing an event with its scheduled time and a sequence
/// number assigned at insertion.
#[derive(Debug, Clone)]
struct QueueEntry {
    time: f64,
    seq: u64,
    event: Event,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.time.total_cmp(&other.time) == Ordering::Equal && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we want the
        // earliest time out first and, on equal times, the lowest sequence
        // number (FIFO).
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Time-ordered queue of pending events
///
/// # Example
/// ```
/// use mmn_simulator_core::{Event, EventQueue};
///
/// let mut queue = EventQueue::new();
/// queue.push(2.0, Event::Arrival { job_id: 1, server: 0 });
/// queue.push(1.0, Event::Arrival { job_id: 0, server: 0 });
///
/// let (time, event) = queue.pop().unwrap();
/// assert_eq!(time, 1.0);
/// assert_eq!(event.job_id(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl EventQueue {
    /// Create an empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event at the given absolute time
    pub fn push(&mut self, time: f64, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(QueueEntry { time, seq, event });
    }

    /// Remove and return the earliest event, or `None` if the queue is
    /// empty. Events sharing a time pop in insertion order.
    pub fn pop(&mut self) -> Option<(f64, Event)> {
        self.heap.pop().map(|entry| (entry.time, entry.event))
    }

    /// Scheduled time of the earliest pending event, if any
    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.time)
    }

    /// Whether no events are pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

//! Simulation events and the time-ordered event queue
//!
//! CRITICAL: all state transitions in the simulation happen by processing
//! events popped from the `EventQueue` in non-decreasing time order.

pub mod queue;
pub mod types;

// Re-exports
pub use queue::EventQueue;
pub use types::Event;

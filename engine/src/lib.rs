//! M/M/n Queueing Simulator - Core Engine
//!
//! Discrete-event simulation engine with a multi-server FIFO queueing model
//! built on top of it. Jobs arrive according to a Poisson process and are
//! served with exponentially distributed service times across `n`
//! independent single-queue servers.
//!
//! # Architecture
//!
//! - **core**: Simulation clock (logical time + pending event queue)
//! - **events**: Event variants and the time-ordered priority queue
//! - **models**: Per-server state (running job slot + FIFO waiting queue)
//! - **queueing**: The M/M/n queueing model and its run loop
//! - **routing**: Pluggable job-to-server routing strategies
//! - **rng**: Deterministic random number generation and variates
//! - **stats**: Arrival/completion bookkeeping and derived metrics
//!
//! # Critical Invariants
//!
//! 1. Simulated time never decreases; it advances only to the time of the
//!    event being processed
//! 2. All randomness is deterministic (seeded RNG): same seed + same config
//!    = identical event trace
//! 3. Events with equal scheduled times are processed in insertion order

// Module declarations
pub mod core;
pub mod error;
pub mod events;
pub mod models;
pub mod queueing;
pub mod rng;
pub mod routing;
pub mod stats;

// Re-exports for convenience
pub use crate::core::clock::SimulationClock;
pub use error::SimulationError;
pub use events::{Event, EventQueue};
pub use models::server::ServerState;
pub use queueing::{ModelConfig, QueueingModel, RunSummary};
pub use rng::RngManager;
pub use routing::{FirstIdleRouting, RoundRobinRouting, RoutingConfig, RoutingPolicy};
pub use stats::{theoretical_mean_time, StatisticsCollector};

//! M/M/n queueing model
//!
//! The model owns the simulation clock, the per-server state, the seeded
//! RNG and the statistics collector, and implements the main event loop:
//!
//! ```text
//! while events pending:
//!   pop the earliest event
//!   if its time exceeds the horizon: stop (event discarded)
//!   advance the clock to the event's time
//!   apply the event's state transition, possibly scheduling new events
//! ```
//!
//! Single-threaded and strictly sequential: exactly one event is processed
//! to completion before the next is popped, so model state needs no
//! locking.
//!
//! # Per-server state machine
//!
//! States `{Idle, Busy}`. `Idle → Busy` on arrival at an idle server;
//! `Busy → Busy` on arrival at a busy server (job enqueued); `Busy → Idle`
//! on completion with an empty waiting queue; `Busy → Busy` on completion
//! with a non-empty waiting queue (head promoted).
//!
//! # Example
//!
//! ```
//! use mmn_simulator_core::{ModelConfig, QueueingModel};
//!
//! let config = ModelConfig { lambd: 0.5, mu: 1.0, n: 1, ..Default::default() };
//! let mut model = QueueingModel::new(config).unwrap();
//!
//! let summary = model.run(1000.0).unwrap();
//! assert!(summary.jobs_completed > 0);
//! ```

use crate::core::clock::SimulationClock;
use crate::error::SimulationError;
use crate::events::Event;
use crate::models::ServerState;
use crate::rng::RngManager;
use crate::routing::{RoutingConfig, RoutingPolicy};
use crate::stats::StatisticsCollector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete model configuration
///
/// Validated eagerly at construction; invalid values are rejected, never
/// silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// System-wide arrival rate (lambda), must be positive and finite
    pub lambd: f64,

    /// Per-unit service rate (mu), must be positive and finite
    pub mu: f64,

    /// Number of servers, at least 1
    pub n: usize,

    /// RNG seed for deterministic simulation
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Job-to-server routing strategy
    #[serde(default)]
    pub routing: RoutingConfig,
}

fn default_seed() -> u64 {
    42
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            lambd: 0.7,
            mu: 1.0,
            n: 1,
            seed: default_seed(),
            routing: RoutingConfig::default(),
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Total events processed (arrivals + completions)
    pub events_processed: u64,

    /// Jobs that entered the system
    pub jobs_arrived: usize,

    /// Jobs that finished service
    pub jobs_completed: usize,

    /// Simulated time when the run stopped
    pub final_time: f64,
}

// ============================================================================
// QueueingModel
// ============================================================================

/// The M/M/n FIFO queueing state machine
///
/// One instance per simulation run; mutated only by event processing and
/// read-only once the run loop ends.
pub struct QueueingModel {
    /// Logical time and pending events
    clock: SimulationClock,

    /// Per-server running slot and waiting queue
    servers: Vec<ServerState>,

    /// Arrival/completion timestamps and derived metrics
    stats: StatisticsCollector,

    /// Deterministic RNG; all random draws go through here
    rng: RngManager,

    /// Job placement strategy for scheduled arrivals
    routing: Box<dyn RoutingPolicy>,

    /// System-wide arrival rate (lambda)
    lambd: f64,

    /// Per-server arrival rate, lambda / n
    arrival_rate: f64,

    /// Per-server completion rate, mu / n
    completion_rate: f64,
}

impl QueueingModel {
    /// Create a new model from configuration
    ///
    /// Validates the configuration and seeds the clock with the arrival of
    /// job 0 after an exponential delay at rate lambda.
    ///
    /// # Example
    ///
    /// ```
    /// use mmn_simulator_core::{ModelConfig, QueueingModel};
    ///
    /// let model = QueueingModel::new(ModelConfig::default()).unwrap();
    /// assert_eq!(model.queue_len(), 0);
    /// ```
    pub fn new(config: ModelConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let mut model = Self {
            clock: SimulationClock::new(),
            servers: vec![ServerState::new(); config.n],
            stats: StatisticsCollector::new(),
            rng: RngManager::new(config.seed),
            routing: config.routing.build(),
            lambd: config.lambd,
            arrival_rate: config.lambd / config.n as f64,
            completion_rate: config.mu / config.n as f64,
        };

        // Seed the run: job 0 arrives after an exponential delay at the
        // system-wide rate.
        let delay = model.rng.exp_variate(model.lambd);
        let server = model.routing.assign(0, &model.servers, &mut model.rng);
        model
            .clock
            .schedule(delay, Event::Arrival { job_id: 0, server })?;

        Ok(model)
    }

    /// Validate configuration
    fn validate_config(config: &ModelConfig) -> Result<(), SimulationError> {
        if !config.lambd.is_finite() || config.lambd <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "lambd must be positive and finite, got {}",
                config.lambd
            )));
        }

        if !config.mu.is_finite() || config.mu <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "mu must be positive and finite, got {}",
                config.mu
            )));
        }

        if config.n < 1 {
            return Err(SimulationError::InvalidConfig(
                "n must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current simulated time
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// System-wide arrival rate (lambda)
    pub fn lambd(&self) -> f64 {
        self.lambd
    }

    /// Per-server state, indexed by server
    pub fn servers(&self) -> &[ServerState] {
        &self.servers
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &StatisticsCollector {
        &self.stats
    }

    /// Jobs currently in the system (running + waiting across all servers)
    ///
    /// Equals arrived-but-not-completed jobs at any simulated instant.
    pub fn queue_len(&self) -> usize {
        self.servers.iter().map(ServerState::occupancy).sum()
    }

    // ========================================================================
    // Run Loop
    // ========================================================================

    /// Run the simulation until the event queue empties or the next
    /// event's time exceeds `horizon`
    ///
    /// A popped event beyond the horizon is discarded without advancing
    /// time past the horizon. The model never "ends" by itself: only these
    /// two terminal conditions stop the loop.
    pub fn run(&mut self, horizon: f64) -> Result<RunSummary, SimulationError> {
        debug!(horizon, lambd = self.lambd, n = self.servers.len(), "starting run");

        let mut events_processed: u64 = 0;
        while self.clock.has_pending() {
            let (time, event) = self.clock.next_event()?;
            if time > horizon {
                break;
            }
            self.clock.advance_to(time);
            self.process(event)?;
            events_processed += 1;
        }

        let summary = RunSummary {
            events_processed,
            jobs_arrived: self.stats.arrival_count(),
            jobs_completed: self.stats.completion_count(),
            final_time: self.clock.now(),
        };
        debug!(
            events = summary.events_processed,
            arrived = summary.jobs_arrived,
            completed = summary.jobs_completed,
            final_time = summary.final_time,
            "run finished"
        );
        Ok(summary)
    }

    // ========================================================================
    // Event Processing
    // ========================================================================

    /// Apply one event's state transition
    fn process(&mut self, event: Event) -> Result<(), SimulationError> {
        match event {
            Event::Arrival { job_id, server } => self.process_arrival(job_id, server),
            Event::Completion { job_id, server } => self.process_completion(job_id, server),
        }
    }

    /// Arrival: record the timestamp, start or enqueue the job, schedule
    /// the next arrival
    fn process_arrival(&mut self, job_id: u64, server: usize) -> Result<(), SimulationError> {
        let now = self.clock.now();
        self.stats.record_arrival(job_id, now);

        if self.servers[server].is_idle() {
            self.servers[server].start(job_id);
            self.schedule_completion(job_id, server)?;
            trace!(t = now, job_id, server, "arrival, started service");
        } else {
            self.servers[server].enqueue(job_id);
            trace!(t = now, job_id, server, "arrival, queued");
        }

        self.schedule_arrival(job_id + 1)
    }

    /// Completion: record the running job's timestamp, promote the head of
    /// the waiting queue or go idle
    ///
    /// A completion on an idle server means the scheduler and the model
    /// have desynchronized; that run is aborted.
    fn process_completion(&mut self, job_id: u64, server: usize) -> Result<(), SimulationError> {
        let now = self.clock.now();
        let finished = self.servers[server].take_running().ok_or(
            SimulationError::InvariantViolation {
                time: now,
                job_id,
                server,
            },
        )?;
        self.stats.record_completion(finished, now);
        trace!(t = now, job_id = finished, server, "completion");

        if let Some(next_job) = self.servers[server].pop_waiting() {
            self.servers[server].start(next_job);
            self.schedule_completion(next_job, server)?;
            trace!(t = now, job_id = next_job, server, "promoted from queue");
        }

        Ok(())
    }

    /// Schedule the arrival of the given job after an exponential delay at
    /// the per-server arrival rate, on a routing-policy chosen server
    fn schedule_arrival(&mut self, job_id: u64) -> Result<(), SimulationError> {
        let delay = self.rng.exp_variate(self.arrival_rate);
        let server = self.routing.assign(job_id, &self.servers, &mut self.rng);
        self.clock.schedule(delay, Event::Arrival { job_id, server })
    }

    /// Schedule the completion of a job just started on the given server,
    /// after an exponential delay at the per-server completion rate
    fn schedule_completion(&mut self, job_id: u64, server: usize) -> Result<(), SimulationError> {
        let delay = self.rng.exp_variate(self.completion_rate);
        self.clock
            .schedule(delay, Event::Completion { job_id, server })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_lambd() {
        let config = ModelConfig { lambd: 0.0, ..Default::default() };
        assert!(matches!(
            QueueingModel::new(config),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_nan_mu() {
        let config = ModelConfig { mu: f64::NAN, ..Default::default() };
        assert!(matches!(
            QueueingModel::new(config),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_zero_servers() {
        let config = ModelConfig { n: 0, ..Default::default() };
        assert!(matches!(
            QueueingModel::new(config),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_new_model_starts_at_time_zero_and_empty() {
        let model = QueueingModel::new(ModelConfig::default()).unwrap();
        assert_eq!(model.now(), 0.0);
        assert_eq!(model.queue_len(), 0);
        assert_eq!(model.stats().arrival_count(), 0);
    }

    #[test]
    fn test_short_run_processes_events() {
        let config = ModelConfig { lambd: 0.5, mu: 1.0, n: 1, ..Default::default() };
        let mut model = QueueingModel::new(config).unwrap();

        let summary = model.run(100.0).unwrap();
        assert!(summary.events_processed > 0);
        assert!(summary.final_time <= 100.0);
        assert_eq!(
            summary.jobs_arrived - summary.jobs_completed,
            model.queue_len()
        );
    }
}

//! Arrival/completion bookkeeping and derived metrics
//!
//! The collector maps each job id to its arrival and completion times.
//! Both timestamps are set exactly once, during event processing; after
//! the run loop ends the collector is read-only, so recomputing a metric
//! always yields the identical value.

use crate::error::SimulationError;
use std::collections::HashMap;

/// Theoretical mean time in system for a single-server M/M/1 queue with
/// unit service rate: `1 / (1 - rho)` with `rho = lambd`.
///
/// Valid only under those assumptions; for n > 1 it is an approximation
/// used as a reference point, not a general formula.
pub fn theoretical_mean_time(lambd: f64) -> f64 {
    1.0 / (1.0 - lambd)
}

/// Timestamp maps and derived statistics for one simulation run
///
/// # Example
/// ```
/// use mmn_simulator_core::StatisticsCollector;
///
/// let mut stats = StatisticsCollector::new();
/// stats.record_arrival(0, 1.0);
/// stats.record_completion(0, 3.5);
///
/// assert_eq!(stats.mean_time_in_system().unwrap(), 2.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatisticsCollector {
    /// job id → arrival time, set once at arrival processing
    arrivals: HashMap<u64, f64>,
    /// job id → completion time, set once at completion processing
    completions: HashMap<u64, f64>,
}

impl StatisticsCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the arrival time of a job
    pub fn record_arrival(&mut self, job_id: u64, time: f64) {
        let previous = self.arrivals.insert(job_id, time);
        debug_assert!(previous.is_none(), "job {job_id} arrived twice");
    }

    /// Record the completion time of a job
    pub fn record_completion(&mut self, job_id: u64, time: f64) {
        let previous = self.completions.insert(job_id, time);
        debug_assert!(previous.is_none(), "job {job_id} completed twice");
    }

    /// Number of arrivals recorded
    pub fn arrival_count(&self) -> usize {
        self.arrivals.len()
    }

    /// Number of completions recorded
    pub fn completion_count(&self) -> usize {
        self.completions.len()
    }

    /// Arrival time of a job, if recorded
    pub fn arrival_time(&self, job_id: u64) -> Option<f64> {
        self.arrivals.get(&job_id).copied()
    }

    /// Completion time of a job, if recorded
    pub fn completion_time(&self, job_id: u64) -> Option<f64> {
        self.completions.get(&job_id).copied()
    }

    /// Iterate over completed jobs as `(job_id, arrival, completion)`
    ///
    /// Restricted to job ids present in both maps; every completion made
    /// by the model corresponds to a dispatched (arrived) job.
    pub fn completed_jobs(&self) -> impl Iterator<Item = (u64, f64, f64)> + '_ {
        self.completions.iter().filter_map(|(&job_id, &done)| {
            self.arrivals
                .get(&job_id)
                .map(|&arrived| (job_id, arrived, done))
        })
    }

    /// Mean time spent in the system (W) over all completed jobs
    ///
    /// Fails with [`SimulationError::NoCompletions`] when no job completed
    /// before the horizon, rather than dividing by zero.
    pub fn mean_time_in_system(&self) -> Result<f64, SimulationError> {
        let mut total = 0.0;
        let mut count: usize = 0;

        for (_, arrived, done) in self.completed_jobs() {
            total += done - arrived;
            count += 1;
        }

        if count == 0 {
            return Err(SimulationError::NoCompletions);
        }
        Ok(total / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_over_multiple_jobs() {
        let mut stats = StatisticsCollector::new();
        stats.record_arrival(0, 0.0);
        stats.record_completion(0, 2.0);
        stats.record_arrival(1, 1.0);
        stats.record_completion(1, 5.0);

        // (2.0 + 4.0) / 2
        assert_eq!(stats.mean_time_in_system().unwrap(), 3.0);
    }

    #[test]
    fn test_in_flight_jobs_excluded() {
        let mut stats = StatisticsCollector::new();
        stats.record_arrival(0, 0.0);
        stats.record_completion(0, 1.0);
        stats.record_arrival(1, 0.5); // still in the system

        assert_eq!(stats.mean_time_in_system().unwrap(), 1.0);
        assert_eq!(stats.arrival_count(), 2);
        assert_eq!(stats.completion_count(), 1);
    }

    #[test]
    fn test_no_completions_is_reported() {
        let mut stats = StatisticsCollector::new();
        stats.record_arrival(0, 0.0);

        assert_eq!(
            stats.mean_time_in_system(),
            Err(SimulationError::NoCompletions)
        );
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut stats = StatisticsCollector::new();
        stats.record_arrival(0, 0.25);
        stats.record_completion(0, 1.75);

        let first = stats.mean_time_in_system().unwrap();
        let second = stats.mean_time_in_system().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_theoretical_mm1() {
        assert_eq!(theoretical_mean_time(0.5), 2.0);
    }
}

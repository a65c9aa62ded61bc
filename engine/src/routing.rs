//! Job-to-server routing strategies
//!
//! The server an arriving job targets is decided when the arrival is
//! scheduled, by a pluggable strategy. Two strategies are provided:
//!
//! 1. **RoundRobin** (default): `job_id % n`. Fully deterministic given
//!    the job id, independent of server load.
//! 2. **FirstIdle**: the lowest-indexed idle server; if every server is
//!    busy, a uniform random pick.
//!
//! Strategies may keep internal state and may draw from the simulation's
//! RNG, so routing stays inside the deterministic seeded stream.

use crate::models::ServerState;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Routing strategy trait
///
/// Implement this to define custom job placement. `servers` exposes the
/// current per-server state so load-aware strategies can inspect it.
pub trait RoutingPolicy: Send + Sync {
    /// Pick the server index (in `0..servers.len()`) for the given job
    fn assign(&mut self, job_id: u64, servers: &[ServerState], rng: &mut RngManager) -> usize;
}

/// Routing strategy selection, used in the model configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingConfig {
    /// Deterministic round-robin by job id (default)
    #[default]
    RoundRobin,

    /// First idle server, uniform random fallback when all are busy
    FirstIdle,
}

impl RoutingConfig {
    /// Build the strategy this configuration selects
    pub fn build(self) -> Box<dyn RoutingPolicy> {
        match self {
            RoutingConfig::RoundRobin => Box::new(RoundRobinRouting),
            RoutingConfig::FirstIdle => Box::new(FirstIdleRouting),
        }
    }
}

/// Round-robin routing: `job_id % n`
pub struct RoundRobinRouting;

impl RoutingPolicy for RoundRobinRouting {
    fn assign(&mut self, job_id: u64, servers: &[ServerState], _rng: &mut RngManager) -> usize {
        (job_id % servers.len() as u64) as usize
    }
}

/// First-idle routing with a uniform random fallback
pub struct FirstIdleRouting;

impl RoutingPolicy for FirstIdleRouting {
    fn assign(&mut self, _job_id: u64, servers: &[ServerState], rng: &mut RngManager) -> usize {
        servers
            .iter()
            .position(ServerState::is_idle)
            .unwrap_or_else(|| rng.index(servers.len()))
    }
}

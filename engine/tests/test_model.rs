//! Integration tests for the M/M/n queueing model
//!
//! Covers configuration validation, the horizon edge cases, routing
//! determinism, and the run-level invariants (causality, work
//! conservation, queue-length accounting, determinism).

use mmn_simulator_core::{
    ModelConfig, QueueingModel, RngManager, RoundRobinRouting, RoutingConfig, RoutingPolicy,
    ServerState, SimulationError,
};

fn config(lambd: f64, mu: f64, n: usize, seed: u64) -> ModelConfig {
    ModelConfig {
        lambd,
        mu,
        n,
        seed,
        routing: RoutingConfig::RoundRobin,
    }
}

// ============================================================================
// Configuration Validation
// ============================================================================

#[test]
fn test_invalid_configs_rejected() {
    for bad in [
        config(0.0, 1.0, 1, 42),
        config(-0.5, 1.0, 1, 42),
        config(f64::NAN, 1.0, 1, 42),
        config(0.7, 0.0, 1, 42),
        config(0.7, -1.0, 1, 42),
        config(0.7, f64::INFINITY, 1, 42),
        config(0.7, 1.0, 0, 42),
    ] {
        assert!(
            matches!(
                QueueingModel::new(bad),
                Err(SimulationError::InvalidConfig(_))
            ),
            "config {:?} should be rejected",
            bad
        );
    }
}

// ============================================================================
// Horizon Edge Cases
// ============================================================================

#[test]
fn test_zero_horizon_yields_no_completions() {
    // The initial arrival is scheduled after a strictly positive
    // exponential delay, so a zero horizon processes no events and the
    // statistics report NoCompletions instead of dividing by zero.
    let mut model = QueueingModel::new(config(0.5, 1.0, 1, 42)).unwrap();
    let summary = model.run(0.0).unwrap();

    assert_eq!(summary.jobs_completed, 0);
    assert_eq!(model.now(), 0.0);
    assert_eq!(
        model.stats().mean_time_in_system(),
        Err(SimulationError::NoCompletions)
    );
}

#[test]
fn test_horizon_truncates_without_advancing_time() {
    let mut model = QueueingModel::new(config(0.5, 1.0, 1, 42)).unwrap();
    let horizon = 50.0;
    let summary = model.run(horizon).unwrap();

    assert!(summary.final_time <= horizon);
    assert_eq!(summary.final_time, model.now());
}

// ============================================================================
// Routing (Scenario D)
// ============================================================================

#[test]
fn test_round_robin_parity_determines_server() {
    let servers = vec![ServerState::new(); 2];
    let mut rng = RngManager::new(42);
    let mut policy = RoundRobinRouting;

    let server_for_4 = policy.assign(4, &servers, &mut rng);
    let server_for_6 = policy.assign(6, &servers, &mut rng);

    assert_eq!(server_for_4, server_for_6);
    assert_ne!(server_for_4, policy.assign(5, &servers, &mut rng));
}

#[test]
fn test_first_idle_routing_runs_to_completion() {
    let cfg = ModelConfig {
        lambd: 1.5,
        mu: 2.0,
        n: 2,
        seed: 7,
        routing: RoutingConfig::FirstIdle,
    };
    let mut model = QueueingModel::new(cfg).unwrap();
    let summary = model.run(1000.0).unwrap();

    assert!(summary.jobs_completed > 0);
    for server in model.servers() {
        assert!(server.is_work_conserving());
    }
}

// ============================================================================
// Run-Level Invariants
// ============================================================================

#[test]
fn test_causality_completions_after_arrivals() {
    let mut model = QueueingModel::new(config(2.4, 3.0, 3, 1234)).unwrap();
    model.run(500.0).unwrap();

    let stats = model.stats();
    assert!(stats.completion_count() > 0);
    for (job_id, arrived, done) in stats.completed_jobs() {
        assert!(
            done >= arrived,
            "job {} completed at {} before arriving at {}",
            job_id,
            done,
            arrived
        );
    }
}

#[test]
fn test_work_conservation_after_run() {
    let mut model = QueueingModel::new(config(1.8, 2.0, 2, 99)).unwrap();
    model.run(2000.0).unwrap();

    for (idx, server) in model.servers().iter().enumerate() {
        assert!(
            server.is_work_conserving(),
            "server {} idle with jobs waiting",
            idx
        );
    }
}

#[test]
fn test_queue_len_accounts_for_in_flight_jobs() {
    let mut model = QueueingModel::new(config(0.9, 1.0, 1, 5)).unwrap();
    let summary = model.run(300.0).unwrap();

    assert_eq!(
        model.queue_len(),
        summary.jobs_arrived - summary.jobs_completed
    );
}

#[test]
fn test_identical_configs_produce_identical_runs() {
    let mut model1 = QueueingModel::new(config(0.7, 1.0, 2, 42)).unwrap();
    let mut model2 = QueueingModel::new(config(0.7, 1.0, 2, 42)).unwrap();

    let summary1 = model1.run(1000.0).unwrap();
    let summary2 = model2.run(1000.0).unwrap();

    assert_eq!(summary1, summary2);
    assert_eq!(
        model1.stats().mean_time_in_system(),
        model2.stats().mean_time_in_system()
    );
}

#[test]
fn test_different_seeds_produce_different_traces() {
    let mut model1 = QueueingModel::new(config(0.7, 1.0, 1, 1)).unwrap();
    let mut model2 = QueueingModel::new(config(0.7, 1.0, 1, 2)).unwrap();

    let summary1 = model1.run(1000.0).unwrap();
    let summary2 = model2.run(1000.0).unwrap();

    assert_ne!(summary1, summary2);
}

#[test]
fn test_statistics_idempotent_after_run() {
    let mut model = QueueingModel::new(config(0.5, 1.0, 1, 42)).unwrap();
    model.run(500.0).unwrap();

    let first = model.stats().mean_time_in_system().unwrap();
    let second = model.stats().mean_time_in_system().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_config_deserializes_from_json() {
    // Configs arrive from external callers as JSON; unknown routing
    // strategies must not silently map to a default.
    let cfg: ModelConfig = serde_json::from_str(
        r#"{"lambd": 0.7, "mu": 1.0, "n": 2, "seed": 7, "routing": "first_idle"}"#,
    )
    .unwrap();

    assert_eq!(cfg.routing, RoutingConfig::FirstIdle);
    assert_eq!(cfg.n, 2);

    let defaulted: ModelConfig =
        serde_json::from_str(r#"{"lambd": 0.7, "mu": 1.0, "n": 1}"#).unwrap();
    assert_eq!(defaulted.seed, 42);
    assert_eq!(defaulted.routing, RoutingConfig::RoundRobin);
}

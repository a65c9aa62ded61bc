//! Command-line front end for the M/M/n queueing simulator
//!
//! Parses the simulation parameters, runs the model to the horizon,
//! reports the mean time in system against the theoretical expectation
//! and optionally appends the result row to a CSV file.

use clap::{Parser, ValueEnum};
use mmn_simulator_core::{
    theoretical_mean_time, ModelConfig, QueueingModel, RoutingConfig, SimulationError,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mmn-sim", about = "Discrete-event M/M/n queueing simulator")]
struct Args {
    /// System-wide arrival rate (lambda)
    #[arg(long, default_value_t = 0.7)]
    lambd: f64,

    /// Per-unit service rate (mu)
    #[arg(long, default_value_t = 1.0)]
    mu: f64,

    /// Number of servers
    #[arg(long, default_value_t = 1)]
    n: usize,

    /// Simulation horizon in simulated time units
    #[arg(long = "max-t", default_value_t = 1_000_000.0)]
    max_t: f64,

    /// RNG seed (same seed reproduces the run exactly)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Job-to-server routing strategy
    #[arg(long, value_enum, default_value_t = RoutingArg::RoundRobin)]
    routing: RoutingArg,

    /// CSV file in which to append results (created if absent)
    #[arg(long)]
    csv: Option<PathBuf>,
}

/// CLI-facing routing selection, mapped onto the engine's `RoutingConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RoutingArg {
    RoundRobin,
    FirstIdle,
}

impl From<RoutingArg> for RoutingConfig {
    fn from(arg: RoutingArg) -> Self {
        match arg {
            RoutingArg::RoundRobin => RoutingConfig::RoundRobin,
            RoutingArg::FirstIdle => RoutingConfig::FirstIdle,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let w = match simulate(&args) {
        Ok(w) => w,
        Err(SimulationError::NoCompletions) => {
            // Report the condition distinctly rather than emit a malformed
            // numeric result.
            eprintln!(
                "no jobs completed before t = {}; mean time in system is undefined",
                args.max_t
            );
            return ExitCode::from(2);
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Average time spent in the system: {w}");
    println!(
        "Theoretical expectation for random server choice: {}",
        theoretical_mean_time(args.lambd)
    );

    if let Some(path) = &args.csv {
        if let Err(err) = append_result(path, &args, w) {
            eprintln!("failed to append results to {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Build the model, run it to the horizon and return the measured W
fn simulate(args: &Args) -> Result<f64, SimulationError> {
    let config = ModelConfig {
        lambd: args.lambd,
        mu: args.mu,
        n: args.n,
        seed: args.seed,
        routing: args.routing.into(),
    };

    let mut model = QueueingModel::new(config)?;
    let summary = model.run(args.max_t)?;
    tracing::info!(
        events = summary.events_processed,
        arrived = summary.jobs_arrived,
        completed = summary.jobs_completed,
        final_time = summary.final_time,
        "simulation finished"
    );

    model.stats().mean_time_in_system()
}

/// Append a `[lambd, mu, max_t, W]` row; the file is created if absent and
/// never truncated.
fn append_result(path: &Path, args: &Args, w: f64) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(&[
        args.lambd.to_string(),
        args.mu.to_string(),
        args.max_t.to_string(),
        w.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

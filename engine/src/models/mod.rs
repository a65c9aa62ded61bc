//! Domain models for the queueing simulator

pub mod server;

// Re-exports
pub use server::ServerState;

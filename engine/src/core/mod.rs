//! Simulation clock: logical time plus the pending event queue

pub mod clock;

pub use clock::SimulationClock;

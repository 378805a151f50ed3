//! df-sim: transient reservoir drain simulation.
//!
//! Provides:
//! - explicit time-marching of reservoir height on top of the flow solver
//! - trajectory recording with decimation
//! - the parallel sweep over candidate tube lengths with argmin selection

pub mod drain;
pub mod error;
pub mod sweep;

pub use drain::{DrainOutcome, DrainSpec, SimOptions, StepPolicy, Trajectory, simulate_drain};
pub use error::{SimError, SimResult};
pub use sweep::{SweepEntry, optimal_entry, sweep_tube_lengths};

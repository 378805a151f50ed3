//! Error types for drain simulation.

use thiserror::Error;

/// Errors encountered while marching a drain run forward in time.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(
        "Drain did not complete for tube length {tube_length_m} m: \
         height {height_m} m after {steps} steps"
    )]
    DrainIncomplete {
        tube_length_m: f64,
        height_m: f64,
        steps: usize,
    },

    #[error("Flow solver error: {0}")]
    Solver(#[from] df_solver::SolverError),
}

pub type SimResult<T> = Result<T, SimError>;

//! Error types for the flow solver.

use df_core::DfError;
use thiserror::Error;

/// Errors from the friction-velocity fixed point.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error(
        "Friction factor did not converge at height {height_m} m \
         (last f = {last_friction_factor}, {iterations} iterations)"
    )]
    ConvergenceFailed {
        height_m: f64,
        last_friction_factor: f64,
        iterations: usize,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<DfError> for SolverError {
    fn from(e: DfError) -> Self {
        match e {
            DfError::NonFinite { what, value } => SolverError::NonFinite { what, value },
            DfError::InvalidArg { what } | DfError::Invariant { what } => {
                SolverError::InvalidArg { what }
            }
        }
    }
}

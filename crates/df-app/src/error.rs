//! Error types for the df-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scenario file: {0}")]
    ScenarioParse(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Run not found: {0}")]
    RunNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for df-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::ScenarioParse(err.to_string())
    }
}

impl From<df_project::ValidationError> for AppError {
    fn from(err: df_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<df_solver::SolverError> for AppError {
    fn from(err: df_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<df_sim::SimError> for AppError {
    fn from(err: df_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<df_results::ResultsError> for AppError {
    fn from(err: df_results::ResultsError) -> Self {
        match err {
            df_results::ResultsError::RunNotFound { run_id } => AppError::RunNotFound(run_id),
            other => AppError::Results(other.to_string()),
        }
    }
}

//! df-results: run persistence for drainflow.
//!
//! Provides:
//! - result record types (manifests, samples, sweep summaries)
//! - content-based run IDs
//! - on-disk run storage under `.drainflow/runs`

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_run_id;
pub use store::RunStore;
pub use types::{
    RunId, RunManifest, RunType, SampleRecord, SweepEntryRecord, SweepSummary,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Run not found: {run_id}")]
    RunNotFound { run_id: String },
}

pub type ResultsResult<T> = Result<T, ResultsError>;

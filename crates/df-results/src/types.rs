//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub scenario_name: String,
    pub timestamp: String,
    pub run_type: RunType,
    pub solver_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RunType {
    Drain {
        tube_length_m: f64,
        dt_s: f64,
    },
    Sweep {
        lengths_m: Vec<f64>,
        dt_s: f64,
    },
}

/// One recorded integration step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub time_s: f64,
    pub height_m: f64,
    pub velocity_m_s: f64,
    pub friction_factor: f64,
    pub reynolds: f64,
}

/// Per-length summary row of a sweep run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepEntryRecord {
    pub tube_length_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSummary {
    pub entries: Vec<SweepEntryRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_tube_length_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_total_time_s: Option<f64>,
}

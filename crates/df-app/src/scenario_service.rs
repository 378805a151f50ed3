//! Scenario loading and validation services.

use crate::error::{AppError, AppResult};
use df_project::{Scenario, validate_scenario as validate};
use std::path::Path;

/// Load a scenario from a YAML file.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = serde_yaml::from_str(&text)?;
    Ok(scenario)
}

/// Validate a loaded scenario.
pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    validate(scenario)?;
    Ok(())
}

/// Brief description of a scenario for listing output.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    pub name: String,
    pub tube_diameter_m: f64,
    pub initial_height_m: f64,
    pub final_height_m: f64,
    pub sweep_length_count: usize,
}

pub fn scenario_summary(scenario: &Scenario) -> ScenarioSummary {
    ScenarioSummary {
        name: scenario.name.clone(),
        tube_diameter_m: scenario.tube.diameter_m,
        initial_height_m: scenario.drain.initial_height_m,
        final_height_m: scenario.drain.final_height_m,
        sweep_length_count: scenario.sweep.lengths_m.len(),
    }
}

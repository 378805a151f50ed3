//! Run execution and caching service.

use std::path::Path;

use df_results::{
    RunManifest, RunStore, RunType, SampleRecord, SweepEntryRecord, SweepSummary, compute_run_id,
};
use df_sim::{optimal_entry, simulate_drain, sweep_tube_lengths, DrainOutcome};

use crate::compile::compile_scenario;
use crate::error::{AppError, AppResult};
use crate::scenario_service::load_scenario;

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: "0.1.0".to_string(),
        }
    }
}

/// Response from an ensure-run call.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub loaded_from_cache: bool,
}

fn samples_from_outcome(outcome: &DrainOutcome) -> Vec<SampleRecord> {
    outcome
        .trajectory
        .samples()
        .zip(&outcome.flows)
        .map(|((time_s, height_m), flow)| SampleRecord {
            time_s,
            height_m,
            velocity_m_s: flow.velocity_m_s,
            friction_factor: flow.friction_factor,
            reynolds: flow.reynolds,
        })
        .collect()
}

/// Execute (or reuse) a single drain run for one tube length.
pub fn ensure_drain_run(
    scenario_path: &Path,
    tube_length_m: f64,
    options: &RunOptions,
) -> AppResult<RunResponse> {
    let scenario = load_scenario(scenario_path)?;
    let runtime = compile_scenario(&scenario)?;

    let run_type = RunType::Drain {
        tube_length_m,
        dt_s: runtime.drain.dt_s,
    };
    let run_id = compute_run_id(&scenario, &run_type, &options.solver_version);
    let store = RunStore::for_scenario(scenario_path)?;

    if options.use_cache && store.has_run(&run_id) {
        tracing::debug!(%run_id, "drain run loaded from cache");
        return Ok(RunResponse {
            run_id,
            loaded_from_cache: true,
        });
    }

    let outcome = simulate_drain(
        tube_length_m,
        &runtime.geometry,
        &runtime.constants,
        &runtime.drain,
        &runtime.solver,
        &runtime.options,
    )?;

    let manifest = RunManifest {
        run_id: run_id.clone(),
        scenario_name: scenario.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        run_type,
        solver_version: options.solver_version.clone(),
    };
    store.save_run(&manifest, &samples_from_outcome(&outcome), None)?;

    Ok(RunResponse {
        run_id,
        loaded_from_cache: false,
    })
}

/// Execute (or reuse) a sweep over the scenario's candidate tube lengths.
pub fn ensure_sweep_run(scenario_path: &Path, options: &RunOptions) -> AppResult<RunResponse> {
    let scenario = load_scenario(scenario_path)?;
    let runtime = compile_scenario(&scenario)?;

    if runtime.sweep_lengths_m.is_empty() {
        return Err(AppError::InvalidInput(
            "scenario defines no sweep lengths".to_string(),
        ));
    }

    let run_type = RunType::Sweep {
        lengths_m: runtime.sweep_lengths_m.clone(),
        dt_s: runtime.drain.dt_s,
    };
    let run_id = compute_run_id(&scenario, &run_type, &options.solver_version);
    let store = RunStore::for_scenario(scenario_path)?;

    if options.use_cache && store.has_run(&run_id) {
        tracing::debug!(%run_id, "sweep run loaded from cache");
        return Ok(RunResponse {
            run_id,
            loaded_from_cache: true,
        });
    }

    let entries = sweep_tube_lengths(
        &runtime.sweep_lengths_m,
        &runtime.geometry,
        &runtime.constants,
        &runtime.drain,
        &runtime.solver,
        &runtime.options,
    );

    let optimal = optimal_entry(&entries);
    let summary = SweepSummary {
        optimal_tube_length_m: optimal.map(|e| e.tube_length_m),
        optimal_total_time_s: optimal.and_then(|e| {
            e.outcome.as_ref().ok().map(|outcome| outcome.total_time_s)
        }),
        entries: entries
            .iter()
            .map(|entry| match &entry.outcome {
                Ok(outcome) => SweepEntryRecord {
                    tube_length_m: entry.tube_length_m,
                    total_time_s: Some(outcome.total_time_s),
                    steps: Some(outcome.steps),
                    error: None,
                },
                Err(err) => SweepEntryRecord {
                    tube_length_m: entry.tube_length_m,
                    total_time_s: None,
                    steps: None,
                    error: Some(err.to_string()),
                },
            })
            .collect(),
    };

    let manifest = RunManifest {
        run_id: run_id.clone(),
        scenario_name: scenario.name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        run_type,
        solver_version: options.solver_version.clone(),
    };
    store.save_run(&manifest, &[], Some(&summary))?;

    Ok(RunResponse {
        run_id,
        loaded_from_cache: false,
    })
}

/// Load a stored run by ID.
pub fn load_run(
    scenario_path: &Path,
    run_id: &str,
) -> AppResult<(RunManifest, Vec<SampleRecord>, Option<SweepSummary>)> {
    let store = RunStore::for_scenario(scenario_path)?;
    Ok(store.load_run(run_id)?)
}

/// List stored runs for a scenario, newest first.
pub fn list_runs(scenario_path: &Path) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_scenario(scenario_path)?;
    Ok(store.list_runs()?)
}

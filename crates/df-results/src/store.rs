//! Run storage API.

use crate::types::{RunManifest, SampleRecord, SweepSummary};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted next to the scenario file, under `.drainflow/runs`.
    pub fn for_scenario(scenario_path: &Path) -> ResultsResult<Self> {
        let scenario_dir = scenario_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "scenario path has no parent directory".to_string(),
            })?;
        let runs_dir = scenario_dir.join(".drainflow").join("runs");
        Self::new(runs_dir)
    }

    fn run_dir(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_dir(run_id).join("manifest.json").exists()
    }

    pub fn save_run(
        &self,
        manifest: &RunManifest,
        samples: &[SampleRecord],
        sweep: Option<&SweepSummary>,
    ) -> ResultsResult<()> {
        let run_dir = self.run_dir(&manifest.run_id);
        fs::create_dir_all(&run_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(run_dir.join("manifest.json"), manifest_json)?;

        let mut samples_content = String::new();
        for sample in samples {
            let line = serde_json::to_string(sample)?;
            samples_content.push_str(&line);
            samples_content.push('\n');
        }
        fs::write(run_dir.join("samples.jsonl"), samples_content)?;

        if let Some(summary) = sweep {
            let summary_json = serde_json::to_string_pretty(summary)?;
            fs::write(run_dir.join("sweep.json"), summary_json)?;
        }

        Ok(())
    }

    pub fn load_run(
        &self,
        run_id: &str,
    ) -> ResultsResult<(RunManifest, Vec<SampleRecord>, Option<SweepSummary>)> {
        let run_dir = self.run_dir(run_id);
        let manifest_path = run_dir.join("manifest.json");
        if !manifest_path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }

        let manifest: RunManifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;

        let mut samples = Vec::new();
        let samples_path = run_dir.join("samples.jsonl");
        if samples_path.exists() {
            for line in fs::read_to_string(samples_path)?.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                samples.push(serde_json::from_str(line)?);
            }
        }

        let sweep_path = run_dir.join("sweep.json");
        let sweep = if sweep_path.exists() {
            Some(serde_json::from_str(&fs::read_to_string(sweep_path)?)?)
        } else {
            None
        };

        Ok((manifest, samples, sweep))
    }

    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();
        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            let manifest_path = entry.path().join("manifest.json");
            if !manifest_path.exists() {
                continue;
            }
            let manifest: RunManifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;
            runs.push(manifest);
        }
        // Most recent first
        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RunType, SweepEntryRecord};

    fn temp_store(tag: &str) -> RunStore {
        let dir = std::env::temp_dir()
            .join("drainflow-store-tests")
            .join(format!("{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        RunStore::new(dir).unwrap()
    }

    fn manifest(run_id: &str, timestamp: &str) -> RunManifest {
        RunManifest {
            run_id: run_id.to_string(),
            scenario_name: "bench".to_string(),
            timestamp: timestamp.to_string(),
            run_type: RunType::Drain {
                tube_length_m: 0.3,
                dt_s: 0.01,
            },
            solver_version: "0.1.0".to_string(),
        }
    }

    fn sample(time_s: f64, height_m: f64) -> SampleRecord {
        SampleRecord {
            time_s,
            height_m,
            velocity_m_s: 0.8,
            friction_factor: 0.03,
            reynolds: 6000.0,
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = temp_store("round-trip");
        let samples = vec![sample(0.01, 0.0995), sample(0.02, 0.0990)];
        store.save_run(&manifest("run-a", "t0"), &samples, None).unwrap();

        assert!(store.has_run("run-a"));
        let (loaded_manifest, loaded_samples, sweep) = store.load_run("run-a").unwrap();
        assert_eq!(loaded_manifest.run_id, "run-a");
        assert_eq!(loaded_samples.len(), 2);
        assert_eq!(loaded_samples[1].height_m, 0.0990);
        assert!(sweep.is_none());
    }

    #[test]
    fn sweep_summary_round_trip() {
        let store = temp_store("sweep");
        let summary = SweepSummary {
            entries: vec![SweepEntryRecord {
                tube_length_m: 0.4,
                total_time_s: Some(266.0),
                steps: Some(26600),
                error: None,
            }],
            optimal_tube_length_m: Some(0.4),
            optimal_total_time_s: Some(266.0),
        };
        store
            .save_run(&manifest("run-s", "t0"), &[], Some(&summary))
            .unwrap();

        let (_, samples, sweep) = store.load_run("run-s").unwrap();
        assert!(samples.is_empty());
        let sweep = sweep.unwrap();
        assert_eq!(sweep.optimal_tube_length_m, Some(0.4));
        assert_eq!(sweep.entries.len(), 1);
    }

    #[test]
    fn missing_run_is_reported() {
        let store = temp_store("missing");
        let err = store.load_run("nope").unwrap_err();
        assert!(matches!(err, ResultsError::RunNotFound { .. }));
    }

    #[test]
    fn list_runs_newest_first() {
        let store = temp_store("list");
        store.save_run(&manifest("old", "2026-01-01T00:00:00Z"), &[], None).unwrap();
        store.save_run(&manifest("new", "2026-02-01T00:00:00Z"), &[], None).unwrap();

        let runs = store.list_runs().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].run_id, "new");
        assert_eq!(runs[1].run_id, "old");
    }
}

//! Content-based hashing for run IDs.

use crate::types::RunType;
use df_project::Scenario;
use sha2::{Digest, Sha256};

/// Deterministic run ID from scenario content, run type, and solver version.
/// Re-running the same request reuses the cached run directory.
pub fn compute_run_id(scenario: &Scenario, run_type: &RunType, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());

    let run_type_json = serde_json::to_string(run_type).unwrap_or_default();
    hasher.update(run_type_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_project::schema::{DrainDef, Scenario, TankDef, TubeDef};

    fn scenario(name: &str) -> Scenario {
        Scenario {
            version: 1,
            name: name.to_string(),
            fluid: Default::default(),
            gravity_m_s2: 9.81,
            tube: TubeDef {
                diameter_m: 0.00794,
                roughness_m: 1.5e-6,
                k_entrance: 0.45,
                k_exit: 0.0,
            },
            tank: TankDef::Area { area_m2: 0.0832 },
            drain: DrainDef {
                initial_height_m: 0.10,
                final_height_m: 0.02,
                dt_s: 0.01,
            },
            sweep: Default::default(),
            solver: Default::default(),
        }
    }

    #[test]
    fn hash_stability() {
        let run_type = RunType::Drain {
            tube_length_m: 0.3,
            dt_s: 0.01,
        };
        let hash1 = compute_run_id(&scenario("bench"), &run_type, "v1");
        let hash2 = compute_run_id(&scenario("bench"), &run_type, "v1");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let run_type = RunType::Drain {
            tube_length_m: 0.3,
            dt_s: 0.01,
        };
        let other_type = RunType::Drain {
            tube_length_m: 0.4,
            dt_s: 0.01,
        };

        let base = compute_run_id(&scenario("bench"), &run_type, "v1");
        assert_ne!(base, compute_run_id(&scenario("other"), &run_type, "v1"));
        assert_ne!(base, compute_run_id(&scenario("bench"), &other_type, "v1"));
        assert_ne!(base, compute_run_id(&scenario("bench"), &run_type, "v2"));
    }
}

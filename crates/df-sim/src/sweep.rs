//! Sweep over candidate tube lengths.

use crate::drain::{DrainOutcome, DrainSpec, SimOptions, simulate_drain};
use crate::error::SimResult;
use df_solver::{FrictionConfig, Geometry, PhysicalConstants};
use rayon::prelude::*;

/// One sweep entry: a candidate tube length and its run outcome.
#[derive(Debug)]
pub struct SweepEntry {
    pub tube_length_m: f64,
    pub outcome: SimResult<DrainOutcome>,
}

/// Run the drain simulation for every candidate length.
///
/// Entries share only read-only configuration and each owns its trajectory,
/// so they run on the rayon pool, one worker per length. Input order is
/// preserved; a failed entry carries its error instead of aborting the rest.
pub fn sweep_tube_lengths(
    lengths_m: &[f64],
    geometry: &Geometry,
    constants: &PhysicalConstants,
    drain: &DrainSpec,
    solver: &FrictionConfig,
    options: &SimOptions,
) -> Vec<SweepEntry> {
    tracing::debug!(count = lengths_m.len(), "sweeping tube lengths");
    lengths_m
        .par_iter()
        .map(|&tube_length_m| SweepEntry {
            tube_length_m,
            outcome: simulate_drain(tube_length_m, geometry, constants, drain, solver, options),
        })
        .collect()
}

/// Successful entry with the minimal total drain time.
pub fn optimal_entry(entries: &[SweepEntry]) -> Option<&SweepEntry> {
    entries
        .iter()
        .filter_map(|entry| {
            entry
                .outcome
                .as_ref()
                .ok()
                .map(|outcome| (entry, outcome.total_time_s))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(entry, _)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drain::Trajectory;
    use crate::error::SimError;

    fn entry(tube_length_m: f64, total_time_s: f64) -> SweepEntry {
        SweepEntry {
            tube_length_m,
            outcome: Ok(DrainOutcome {
                total_time_s,
                steps: (total_time_s / 0.01) as usize,
                trajectory: Trajectory::default(),
                flows: Vec::new(),
            }),
        }
    }

    #[test]
    fn argmin_picks_shortest_drain_time() {
        let entries = vec![
            entry(0.2, 319.0),
            entry(0.3, 334.0),
            entry(0.4, 266.0),
            entry(0.6, 288.0),
        ];

        let best = optimal_entry(&entries).unwrap();
        assert_eq!(best.tube_length_m, 0.4);
    }

    #[test]
    fn failed_entries_are_skipped() {
        let entries = vec![
            SweepEntry {
                tube_length_m: 0.2,
                outcome: Err(SimError::DrainIncomplete {
                    tube_length_m: 0.2,
                    height_m: 0.05,
                    steps: 10,
                }),
            },
            entry(0.3, 334.0),
        ];

        let best = optimal_entry(&entries).unwrap();
        assert_eq!(best.tube_length_m, 0.3);
    }

    #[test]
    fn all_failed_yields_none() {
        let entries = vec![SweepEntry {
            tube_length_m: 0.2,
            outcome: Err(SimError::InvalidArg { what: "test" }),
        }];
        assert!(optimal_entry(&entries).is_none());
    }
}

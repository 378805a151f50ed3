//! Explicit time-marching of reservoir height.

use crate::error::{SimError, SimResult};
use df_core::units::m;
use df_solver::{FlowState, FrictionConfig, Geometry, PhysicalConstants, solve_flow};

/// Physical drain parameters for one run.
#[derive(Debug, Clone)]
pub struct DrainSpec {
    /// Starting column height (m)
    pub initial_height_m: f64,
    /// Stop height (m)
    pub final_height_m: f64,
    /// Fixed time step (s)
    pub dt_s: f64,
}

/// Final-step handling near the stop height.
///
/// The height decrement of the last step rarely lands exactly on the stop
/// height. `FullStep` applies the full decrement anyway and may overshoot
/// below the stop height; `ClampFinal` lands exactly on it and advances time
/// by the matching fraction of the step. Total drain times from the two
/// policies differ by at most one time step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepPolicy {
    /// Apply the full decrement on every step.
    #[default]
    FullStep,
    /// Clamp the final step to land exactly on the stop height.
    ClampFinal,
}

/// Options for drain runs.
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Hard cap on time steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    /// Final-step policy
    pub step_policy: StepPolicy,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            max_steps: 1_000_000,
            record_every: 1,
            step_policy: StepPolicy::default(),
        }
    }
}

/// Height/time samples from one run. Append-only while the run is active,
/// owned by the caller afterwards.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// Column heights (meters)
    pub h: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn last_height(&self) -> Option<f64> {
        self.h.last().copied()
    }

    pub fn last_time(&self) -> Option<f64> {
        self.t.last().copied()
    }

    /// Iterate `(time, height)` pairs in recording order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.h.iter().copied())
    }

    fn push(&mut self, t: f64, h: f64) {
        self.t.push(t);
        self.h.push(h);
    }
}

/// Outcome of a completed drain run.
///
/// `flows` is aligned with the trajectory: entry i is the flow state that
/// advanced the column to the height recorded in sample i.
#[derive(Clone, Debug)]
pub struct DrainOutcome {
    /// Total drain time (s)
    pub total_time_s: f64,
    /// Number of integration steps taken
    pub steps: usize,
    /// Recorded height/time samples
    pub trajectory: Trajectory,
    /// Flow states paired with the recorded samples
    pub flows: Vec<FlowState>,
}

/// March the reservoir height from the initial to the final height with
/// forward Euler, solving the friction-velocity fixed point at every step.
///
/// Continuity sets the decrement per step:
///
/// ```text
/// dh = (A_tube / A_tank) * v * dt
/// ```
///
/// The loop fails with [`SimError::DrainIncomplete`] once `max_steps` is
/// exceeded, so pathological geometry cannot hang the caller.
pub fn simulate_drain(
    tube_length_m: f64,
    geometry: &Geometry,
    constants: &PhysicalConstants,
    drain: &DrainSpec,
    solver: &FrictionConfig,
    options: &SimOptions,
) -> SimResult<DrainOutcome> {
    if !(drain.dt_s > 0.0 && drain.dt_s.is_finite()) {
        return Err(SimError::InvalidArg {
            what: "dt must be positive and finite",
        });
    }
    if !(drain.final_height_m >= 0.0 && drain.initial_height_m > drain.final_height_m) {
        return Err(SimError::InvalidArg {
            what: "initial height must exceed a non-negative final height",
        });
    }
    if !(tube_length_m >= 0.0 && tube_length_m.is_finite()) {
        return Err(SimError::InvalidArg {
            what: "tube length must be non-negative and finite",
        });
    }
    if options.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if options.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let geometry = geometry.with_tube_length(m(tube_length_m));
    let area_ratio = geometry.area_ratio();

    let mut height = drain.initial_height_m;
    let mut time = 0.0;
    let mut steps = 0usize;
    let mut trajectory = Trajectory::default();
    let mut flows = Vec::new();

    while height > drain.final_height_m {
        if steps >= options.max_steps {
            return Err(SimError::DrainIncomplete {
                tube_length_m,
                height_m: height,
                steps,
            });
        }

        let flow = solve_flow(height, &geometry, constants, solver)?;
        let dh = area_ratio * flow.velocity_m_s * drain.dt_s;
        let remaining = height - drain.final_height_m;

        if options.step_policy == StepPolicy::ClampFinal && dh >= remaining && dh > 0.0 {
            time += drain.dt_s * (remaining / dh);
            height = drain.final_height_m;
        } else {
            time += drain.dt_s;
            height -= dh;
        }
        steps += 1;

        if steps % options.record_every == 0 {
            trajectory.push(time, height);
            flows.push(flow);
        } else if height <= drain.final_height_m {
            // Terminal state is always recorded.
            trajectory.push(time, height);
            flows.push(flow);
        }
    }

    tracing::debug!(tube_length_m, total_time_s = time, steps, "drain complete");
    Ok(DrainOutcome {
        total_time_s: time,
        steps,
        trajectory,
        flows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_core::units::{m, m2};

    fn bench_geometry() -> Geometry {
        Geometry::new(m(0.00794), m(0.0), m2(0.32 * 0.26), 0.45, 0.0)
    }

    fn bench_drain() -> DrainSpec {
        DrainSpec {
            initial_height_m: 0.10,
            final_height_m: 0.02,
            dt_s: 0.01,
        }
    }

    #[test]
    fn bench_scenario_terminates_below_stop_height() {
        let outcome = simulate_drain(
            0.3,
            &bench_geometry(),
            &PhysicalConstants::water(),
            &bench_drain(),
            &FrictionConfig::default(),
            &SimOptions::default(),
        )
        .unwrap();

        assert!(outcome.total_time_s > 0.0);
        assert!(outcome.steps > 0);
        assert!(outcome.trajectory.last_height().unwrap() <= 0.02);
        assert_eq!(outcome.trajectory.len(), outcome.flows.len());
    }

    #[test]
    fn heights_never_increase() {
        let outcome = simulate_drain(
            0.3,
            &bench_geometry(),
            &PhysicalConstants::water(),
            &bench_drain(),
            &FrictionConfig::default(),
            &SimOptions::default(),
        )
        .unwrap();

        for pair in outcome.trajectory.h.windows(2) {
            assert!(pair[1] <= pair[0], "height rose: {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn clamp_final_lands_exactly_on_stop_height() {
        let options = SimOptions {
            step_policy: StepPolicy::ClampFinal,
            ..SimOptions::default()
        };
        let outcome = simulate_drain(
            0.3,
            &bench_geometry(),
            &PhysicalConstants::water(),
            &bench_drain(),
            &FrictionConfig::default(),
            &options,
        )
        .unwrap();

        assert_eq!(outcome.trajectory.last_height().unwrap(), 0.02);
    }

    #[test]
    fn policies_agree_within_one_step() {
        let constants = PhysicalConstants::water();
        let full = simulate_drain(
            0.3,
            &bench_geometry(),
            &constants,
            &bench_drain(),
            &FrictionConfig::default(),
            &SimOptions::default(),
        )
        .unwrap();
        let clamped = simulate_drain(
            0.3,
            &bench_geometry(),
            &constants,
            &bench_drain(),
            &FrictionConfig::default(),
            &SimOptions {
                step_policy: StepPolicy::ClampFinal,
                ..SimOptions::default()
            },
        )
        .unwrap();

        assert!((full.total_time_s - clamped.total_time_s).abs() <= 0.01 + 1e-9);
    }

    #[test]
    fn step_cap_fails_instead_of_hanging() {
        let options = SimOptions {
            max_steps: 10,
            ..SimOptions::default()
        };
        let err = simulate_drain(
            0.3,
            &bench_geometry(),
            &PhysicalConstants::water(),
            &bench_drain(),
            &FrictionConfig::default(),
            &options,
        )
        .unwrap_err();

        match err {
            SimError::DrainIncomplete { steps, height_m, .. } => {
                assert_eq!(steps, 10);
                assert!(height_m > 0.02);
            }
            other => panic!("expected DrainIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn decimated_recording_still_keeps_terminal_sample() {
        let options = SimOptions {
            record_every: 1000,
            ..SimOptions::default()
        };
        let outcome = simulate_drain(
            0.3,
            &bench_geometry(),
            &PhysicalConstants::water(),
            &bench_drain(),
            &FrictionConfig::default(),
            &options,
        )
        .unwrap();

        assert!(outcome.trajectory.len() < outcome.steps);
        assert!(outcome.trajectory.last_height().unwrap() <= 0.02);
        assert_eq!(outcome.trajectory.last_time().unwrap(), outcome.total_time_s);
    }

    #[test]
    fn inverted_heights_are_rejected() {
        let drain = DrainSpec {
            initial_height_m: 0.02,
            final_height_m: 0.10,
            dt_s: 0.01,
        };
        let err = simulate_drain(
            0.3,
            &bench_geometry(),
            &PhysicalConstants::water(),
            &drain,
            &FrictionConfig::default(),
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }
}

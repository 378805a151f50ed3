//! Scenario-to-domain compilation.

use crate::error::AppResult;
use df_core::units::{kgpm3, m, m2, mps2, pas};
use df_project::{CorrelationDef, Scenario};
use df_sim::{DrainSpec, SimOptions};
use df_solver::{FrictionConfig, FrictionModel, Geometry, PhysicalConstants};

/// Domain objects compiled from one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRuntime {
    pub constants: PhysicalConstants,
    /// Base geometry; tube length is overridden per run.
    pub geometry: Geometry,
    pub drain: DrainSpec,
    pub solver: FrictionConfig,
    pub options: SimOptions,
    pub sweep_lengths_m: Vec<f64>,
}

/// Build runtime configuration from a validated scenario.
pub fn compile_scenario(scenario: &Scenario) -> AppResult<ScenarioRuntime> {
    df_project::validate_scenario(scenario)?;

    let constants = PhysicalConstants::new(
        mps2(scenario.gravity_m_s2),
        kgpm3(scenario.fluid.density_kg_m3),
        pas(scenario.fluid.viscosity_pa_s),
        m(scenario.tube.roughness_m),
    );

    let geometry = Geometry::new(
        m(scenario.tube.diameter_m),
        m(0.0),
        m2(scenario.tank.area_m2()),
        scenario.tube.k_entrance,
        scenario.tube.k_exit,
    );

    let drain = DrainSpec {
        initial_height_m: scenario.drain.initial_height_m,
        final_height_m: scenario.drain.final_height_m,
        dt_s: scenario.drain.dt_s,
    };

    let model = match scenario.solver.correlation {
        CorrelationDef::ColebrookWhite => FrictionModel::ColebrookWhite,
        CorrelationDef::Haaland => FrictionModel::Haaland,
        CorrelationDef::PowerLaw => FrictionModel::PowerLaw,
    };
    // The power-law family carries the transitional band, so its laminar
    // limit sits at the band's lower edge.
    let laminar_default = match model {
        FrictionModel::PowerLaw => 2000.0,
        _ => 2300.0,
    };
    let solver = FrictionConfig {
        tolerance: scenario.solver.tolerance,
        max_iterations: scenario.solver.max_iterations,
        seed_friction: scenario.solver.seed_friction,
        laminar_limit: scenario.solver.laminar_limit.unwrap_or(laminar_default),
        transitional_limit: scenario.solver.transitional_limit.unwrap_or(4000.0),
        model,
    };

    Ok(ScenarioRuntime {
        constants,
        geometry,
        drain,
        solver,
        options: SimOptions::default(),
        sweep_lengths_m: scenario.sweep.lengths_m.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_project::schema::{DrainDef, SweepDef, TankDef, TubeDef};

    fn bench_scenario() -> Scenario {
        Scenario {
            version: 1,
            name: "Bench drain".to_string(),
            fluid: Default::default(),
            gravity_m_s2: 9.81,
            tube: TubeDef {
                diameter_m: 0.00794,
                roughness_m: 1.5e-6,
                k_entrance: 0.45,
                k_exit: 0.0,
            },
            tank: TankDef::Rectangle {
                length_m: 0.32,
                width_m: 0.26,
            },
            drain: DrainDef {
                initial_height_m: 0.10,
                final_height_m: 0.02,
                dt_s: 0.01,
            },
            sweep: SweepDef {
                lengths_m: vec![0.2, 0.3, 0.4, 0.6],
            },
            solver: Default::default(),
        }
    }

    #[test]
    fn bench_scenario_compiles() {
        let runtime = compile_scenario(&bench_scenario()).unwrap();
        assert_eq!(runtime.constants.density.value, 1000.0);
        assert_eq!(runtime.geometry.diameter.value, 0.00794);
        assert_eq!(runtime.solver.laminar_limit, 2300.0);
        assert_eq!(runtime.sweep_lengths_m.len(), 4);
    }

    #[test]
    fn power_law_gets_lower_laminar_limit() {
        let mut scenario = bench_scenario();
        scenario.solver.correlation = CorrelationDef::PowerLaw;
        let runtime = compile_scenario(&scenario).unwrap();
        assert_eq!(runtime.solver.laminar_limit, 2000.0);
        assert_eq!(runtime.solver.transitional_limit, 4000.0);
    }

    #[test]
    fn invalid_scenario_fails_compilation() {
        let mut scenario = bench_scenario();
        scenario.tube.diameter_m = -1.0;
        assert!(compile_scenario(&scenario).is_err());
    }
}

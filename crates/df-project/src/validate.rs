//! Scenario validation logic.

use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Scenario name must not be empty")]
    EmptyName,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive and finite",
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be non-negative and finite",
        })
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    require_positive("fluid.density_kg_m3", scenario.fluid.density_kg_m3)?;
    require_positive("fluid.viscosity_pa_s", scenario.fluid.viscosity_pa_s)?;
    require_positive("gravity_m_s2", scenario.gravity_m_s2)?;

    require_positive("tube.diameter_m", scenario.tube.diameter_m)?;
    require_non_negative("tube.roughness_m", scenario.tube.roughness_m)?;
    require_non_negative("tube.k_entrance", scenario.tube.k_entrance)?;
    require_non_negative("tube.k_exit", scenario.tube.k_exit)?;

    require_positive("tank area", scenario.tank.area_m2())?;

    require_positive("drain.initial_height_m", scenario.drain.initial_height_m)?;
    require_non_negative("drain.final_height_m", scenario.drain.final_height_m)?;
    if scenario.drain.final_height_m >= scenario.drain.initial_height_m {
        return Err(ValidationError::InvalidValue {
            field: "drain.final_height_m",
            value: scenario.drain.final_height_m,
            reason: "must be below the initial height",
        });
    }
    require_positive("drain.dt_s", scenario.drain.dt_s)?;

    for &length in &scenario.sweep.lengths_m {
        require_positive("sweep.lengths_m entry", length)?;
    }

    require_positive("solver.tolerance", scenario.solver.tolerance)?;
    require_positive("solver.seed_friction", scenario.solver.seed_friction)?;
    if scenario.solver.max_iterations == 0 {
        return Err(ValidationError::InvalidValue {
            field: "solver.max_iterations",
            value: 0.0,
            reason: "must be at least 1",
        });
    }
    if let Some(laminar) = scenario.solver.laminar_limit {
        require_positive("solver.laminar_limit", laminar)?;
        if let Some(transitional) = scenario.solver.transitional_limit {
            if transitional < laminar {
                return Err(ValidationError::InvalidValue {
                    field: "solver.transitional_limit",
                    value: transitional,
                    reason: "must not be below the laminar limit",
                });
            }
        }
    }
    if let Some(transitional) = scenario.solver.transitional_limit {
        require_positive("solver.transitional_limit", transitional)?;
    }

    Ok(())
}

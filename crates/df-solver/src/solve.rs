//! Fixed-point solver coupling velocity, Reynolds number, and friction.
//!
//! Friction factor and velocity are mutually dependent (f enters the head
//! loss that sets v, v sets Re, Re sets f), so the turbulent regime has no
//! closed form. The solver repeats the substitution cycle until successive
//! friction factors stabilize, and reports non-convergence instead of
//! returning a silently wrong state.

use crate::error::{SolverError, SolverResult};
use crate::flow::{FlowState, Geometry, PhysicalConstants};
use crate::friction::{FrictionModel, RE_FLOOR, friction_factor};
use df_core::numeric::ensure_finite;

/// Fixed-point solver configuration.
#[derive(Debug, Clone)]
pub struct FrictionConfig {
    /// Convergence tolerance on successive friction factors
    pub tolerance: f64,
    /// Maximum fixed-point iterations
    pub max_iterations: usize,
    /// Seed friction factor for the first velocity evaluation
    pub seed_friction: f64,
    /// Laminar/turbulent threshold Reynolds number
    pub laminar_limit: f64,
    /// Upper edge of the transitional band (PowerLaw family only)
    pub transitional_limit: f64,
    /// Turbulent correlation family
    pub model: FrictionModel,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
            seed_friction: 0.02,
            laminar_limit: 2300.0,
            transitional_limit: 4000.0,
            model: FrictionModel::default(),
        }
    }
}

/// Solve the coupled velocity / friction / Reynolds system at one height.
///
/// Governing equation (energy balance with major and minor losses):
///
/// ```text
/// v = sqrt(2 g h / (1 + f L/D + K_entrance + K_exit))
/// ```
///
/// Returns a [`FlowState`] whose triple satisfies the balance within the
/// configured tolerance, or [`SolverError::ConvergenceFailed`] when
/// `max_iterations` is exhausted.
pub fn solve_flow(
    height_m: f64,
    geometry: &Geometry,
    constants: &PhysicalConstants,
    config: &FrictionConfig,
) -> SolverResult<FlowState> {
    ensure_finite(height_m, "height")?;
    if height_m < 0.0 {
        return Err(SolverError::InvalidArg {
            what: "height must be non-negative",
        });
    }
    if geometry.diameter.value <= 0.0 || geometry.tube_length.value < 0.0 {
        return Err(SolverError::InvalidArg {
            what: "tube diameter must be positive and length non-negative",
        });
    }
    if config.tolerance <= 0.0 || config.seed_friction <= 0.0 {
        return Err(SolverError::InvalidArg {
            what: "tolerance and seed friction must be positive",
        });
    }

    let g = constants.gravity.value;
    let rho = constants.density.value;
    let mu = constants.viscosity.value;
    let d = geometry.diameter.value;
    let l = geometry.tube_length.value;
    let k_minor = geometry.k_minor();
    let relative_roughness = constants.roughness.value / d;

    let velocity = |f: f64| (2.0 * g * height_m / (1.0 + f * l / d + k_minor)).sqrt();
    let reynolds = |v: f64| (rho * v * d / mu).max(RE_FLOOR);

    let mut f = config.seed_friction;
    for iteration in 0..config.max_iterations {
        let v = velocity(f);
        let re = reynolds(v);
        let f_next = friction_factor(
            re,
            relative_roughness,
            f,
            config.model,
            config.laminar_limit,
            config.transitional_limit,
        );

        if (f_next - f).abs() < config.tolerance {
            // Re-evaluate the kinematics from the accepted friction factor so
            // the returned triple satisfies the energy balance.
            let v = velocity(f_next);
            let re = reynolds(v);
            tracing::debug!(height_m, friction = f_next, iterations = iteration + 1, "converged");
            return Ok(FlowState {
                height_m,
                velocity_m_s: v,
                friction_factor: f_next,
                reynolds: re,
            });
        }

        f = f_next;
    }

    Err(SolverError::ConvergenceFailed {
        height_m,
        last_friction_factor: f,
        iterations: config.max_iterations,
    })
}

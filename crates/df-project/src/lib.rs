//! df-project: scenario definition and validation for drainflow.
//!
//! Provides:
//! - the YAML scenario schema (fluid, geometry, drain, solver, sweep)
//! - validation with typed errors

pub mod schema;
pub mod validate;

pub use schema::{
    CorrelationDef, DrainDef, FluidDef, Scenario, SolverDef, SweepDef, TankDef, TubeDef,
};
pub use validate::{ValidationError, validate_scenario};

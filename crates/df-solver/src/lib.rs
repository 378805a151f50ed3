//! df-solver: friction-velocity fixed point for tube drainage.
//!
//! Provides:
//! - physical configuration (PhysicalConstants, Geometry)
//! - flow-regime dependent Darcy friction correlations
//! - the fixed-point solver coupling velocity, Reynolds number, and friction

pub mod error;
pub mod flow;
pub mod friction;
pub mod solve;

pub use error::{SolverError, SolverResult};
pub use flow::{FlowState, Geometry, PhysicalConstants};
pub use friction::{FrictionModel, RE_FLOOR, friction_factor};
pub use solve::{FrictionConfig, solve_flow};

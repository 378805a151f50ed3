//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub fluid: FluidDef,
    #[serde(default = "default_gravity")]
    pub gravity_m_s2: f64,
    pub tube: TubeDef,
    pub tank: TankDef,
    pub drain: DrainDef,
    #[serde(default)]
    pub sweep: SweepDef,
    #[serde(default)]
    pub solver: SolverDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
}

impl Default for FluidDef {
    fn default() -> Self {
        // Room-temperature water
        Self {
            density_kg_m3: 1000.0,
            viscosity_pa_s: 1e-3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TubeDef {
    pub diameter_m: f64,
    #[serde(default = "default_roughness")]
    pub roughness_m: f64,
    #[serde(default = "default_k_entrance")]
    pub k_entrance: f64,
    #[serde(default)]
    pub k_exit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TankDef {
    Area { area_m2: f64 },
    Rectangle { length_m: f64, width_m: f64 },
}

impl TankDef {
    /// Tank cross-sectional area in m^2.
    pub fn area_m2(&self) -> f64 {
        match self {
            TankDef::Area { area_m2 } => *area_m2,
            TankDef::Rectangle { length_m, width_m } => length_m * width_m,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrainDef {
    pub initial_height_m: f64,
    pub final_height_m: f64,
    #[serde(default = "default_dt")]
    pub dt_s: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SweepDef {
    #[serde(default)]
    pub lengths_m: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_seed_friction")]
    pub seed_friction: f64,
    #[serde(default)]
    pub correlation: CorrelationDef,
    /// Laminar/turbulent threshold; the correlation family picks a default
    /// when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laminar_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitional_limit: Option<f64>,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed_friction: default_seed_friction(),
            correlation: CorrelationDef::default(),
            laminar_limit: None,
            transitional_limit: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationDef {
    #[default]
    ColebrookWhite,
    Haaland,
    PowerLaw,
}

fn default_gravity() -> f64 {
    9.81
}

fn default_roughness() -> f64 {
    // PVC tubing
    1.5e-6
}

fn default_k_entrance() -> f64 {
    // Sharp-edged sidewall entrance
    0.45
}

fn default_dt() -> f64 {
    0.01
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    100
}

fn default_seed_friction() -> f64 {
    0.02
}

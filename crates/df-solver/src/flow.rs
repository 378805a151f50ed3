//! Physical configuration and solver state types.

use df_core::units::{Accel, Area, Density, DynVisc, Length, kgpm3, m, mps2, pas};

/// Process-wide physical constants. Set once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct PhysicalConstants {
    /// Gravitational acceleration
    pub gravity: Accel,
    /// Fluid density
    pub density: Density,
    /// Fluid dynamic viscosity
    pub viscosity: DynVisc,
    /// Tube absolute roughness
    pub roughness: Length,
}

impl PhysicalConstants {
    pub fn new(gravity: Accel, density: Density, viscosity: DynVisc, roughness: Length) -> Self {
        Self {
            gravity,
            density,
            viscosity,
            roughness,
        }
    }

    /// Room-temperature water through smooth PVC tubing, the bench apparatus
    /// defaults.
    pub fn water() -> Self {
        Self {
            gravity: mps2(9.81),
            density: kgpm3(1000.0),
            viscosity: pas(1e-3),
            roughness: m(1.5e-6),
        }
    }
}

/// Tank and outlet tube geometry for one apparatus.
///
/// Tube length is the only field that varies between simulation runs; use
/// [`Geometry::with_tube_length`] to derive the per-run variant.
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Tube inner diameter
    pub diameter: Length,
    /// Tube length
    pub tube_length: Length,
    /// Tank cross-sectional area
    pub tank_area: Area,
    /// Entrance loss coefficient
    pub k_entrance: f64,
    /// Exit loss coefficient
    pub k_exit: f64,
}

impl Geometry {
    pub fn new(
        diameter: Length,
        tube_length: Length,
        tank_area: Area,
        k_entrance: f64,
        k_exit: f64,
    ) -> Self {
        Self {
            diameter,
            tube_length,
            tank_area,
            k_entrance,
            k_exit,
        }
    }

    /// Apparatus with a rectangular open tank.
    pub fn rectangular_tank(
        diameter: Length,
        tube_length: Length,
        tank_length: Length,
        tank_width: Length,
        k_entrance: f64,
        k_exit: f64,
    ) -> Self {
        Self::new(
            diameter,
            tube_length,
            tank_length * tank_width,
            k_entrance,
            k_exit,
        )
    }

    /// Derived tube cross-sectional area, pi * (D/2)^2.
    pub fn tube_area(&self) -> Area {
        self.diameter * self.diameter * (std::f64::consts::PI / 4.0)
    }

    /// Tube-to-tank cross-section ratio, the continuity factor that maps
    /// outlet velocity onto the rate of fall of the free surface.
    pub fn area_ratio(&self) -> f64 {
        self.tube_area().value / self.tank_area.value
    }

    /// Same apparatus with a different outlet tube fitted.
    pub fn with_tube_length(&self, tube_length: Length) -> Self {
        Self {
            tube_length,
            ..self.clone()
        }
    }

    /// Sum of the minor loss coefficients.
    pub fn k_minor(&self) -> f64 {
        self.k_entrance + self.k_exit
    }
}

/// Self-consistent solver output: the (velocity, friction factor, Reynolds)
/// triple at the height it was solved for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    /// Column height the state was solved at (m)
    pub height_m: f64,
    /// Outlet velocity (m/s)
    pub velocity_m_s: f64,
    /// Darcy friction factor
    pub friction_factor: f64,
    /// Reynolds number
    pub reynolds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_core::numeric::{Tolerances, nearly_equal};
    use df_core::units::m2;

    #[test]
    fn tube_area_matches_hand_calc() {
        let geometry = Geometry::new(m(0.00794), m(0.3), m2(0.0832), 0.45, 0.0);
        let expected = std::f64::consts::PI * (0.00794f64 / 2.0).powi(2);
        let tol = Tolerances::default();
        assert!(nearly_equal(geometry.tube_area().value, expected, tol));
    }

    #[test]
    fn rectangular_tank_area() {
        let geometry =
            Geometry::rectangular_tank(m(0.00794), m(0.3), m(0.32), m(0.26), 0.45, 0.0);
        let tol = Tolerances::default();
        assert!(nearly_equal(geometry.tank_area.value, 0.32 * 0.26, tol));
    }

    #[test]
    fn with_tube_length_only_changes_length() {
        let base = Geometry::new(m(0.00794), m(0.2), m2(0.0832), 0.45, 0.0);
        let longer = base.with_tube_length(m(0.6));
        assert_eq!(longer.tube_length.value, 0.6);
        assert_eq!(longer.diameter.value, base.diameter.value);
        assert_eq!(longer.tank_area.value, base.tank_area.value);
    }
}

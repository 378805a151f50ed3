//! Flow-regime dependent Darcy friction factor correlations.

/// Reynolds number floor. Heights near zero drive velocity (and hence Re) to
/// zero; drainage treats that as a terminal condition, so Re is clamped to
/// keep the laminar closed form evaluable instead of failing on division.
pub const RE_FLOOR: f64 = 1e-6;

/// Correlation family for the turbulent branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrictionModel {
    /// Colebrook-White, evaluated explicitly by substituting the previous
    /// iterate's friction factor inside the implicit log term.
    #[default]
    ColebrookWhite,
    /// Haaland explicit approximation.
    Haaland,
    /// Blasius power law on the transitional band, 0.184 * Re^-0.2 above it.
    PowerLaw,
}

/// One friction-factor update, branched on flow regime.
///
/// `previous` is the prior iterate; only the Colebrook-White branch reads it.
/// Below `laminar_limit` every family reduces to the laminar closed form
/// f = 64/Re. The transitional band `[laminar_limit, transitional_limit)`
/// exists only for [`FrictionModel::PowerLaw`].
pub fn friction_factor(
    reynolds: f64,
    relative_roughness: f64,
    previous: f64,
    model: FrictionModel,
    laminar_limit: f64,
    transitional_limit: f64,
) -> f64 {
    if reynolds < laminar_limit {
        return 64.0 / reynolds;
    }

    match model {
        FrictionModel::ColebrookWhite => {
            let arg = relative_roughness / 3.7 + 2.51 / (reynolds * previous.sqrt());
            (-2.0 * arg.log10()).powi(-2)
        }
        FrictionModel::Haaland => {
            let arg = relative_roughness / 3.7 + 6.9 / reynolds;
            (-1.8 * arg.log10()).powi(-2)
        }
        FrictionModel::PowerLaw => {
            if reynolds < transitional_limit {
                0.3164 * reynolds.powf(-0.25)
            } else {
                0.184 * reynolds.powf(-0.2)
            }
        }
    }
}

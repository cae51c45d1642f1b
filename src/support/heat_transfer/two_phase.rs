//! Two-phase in-tube convection.
//!
//! [`condensation`] implements Shah's 2009 correlation for horizontal tubes.
//! Shear-dominated flow (regime I) uses
//!
//! ```text
//! h_I = h_LO·(μ_l / 14μ_v)ⁿ·[(1-x)^0.8 + 3.8·x^0.76·(1-x)^0.04 / p_r^0.38]
//! ```
//!
//! with `n = 0.0058 + 0.557·p_r` and the Dittus-Boelter liquid-only `h_LO`.
//! Gravity-dominated flow (regime III) uses the Nusselt-type film term
//!
//! ```text
//! h_Nu = 1.32·Re_LS^(-1/3)·[ρ_l(ρ_l - ρ_v)·g·k_l³ / μ_l²]^(1/3)
//! ```
//!
//! The regimes are separated by the dimensionless vapor velocity `J_v`
//! against `Z = (1/x - 1)^0.8·p_r^0.4`. Between them (regime II) the two
//! terms are added.
//!
//! [`evaporation`] is the convective part of Chen's correlation: the liquid
//! coefficient at `Re_l = G(1-x)D/μ_l` enhanced by the factor
//! `F = 2.35·(1/X_tt + 0.213)^0.736` (or `F = 1` when `1/X_tt ≤ 0.1`).
//!
//! Both results are floored at the single-phase coefficient the whole flow
//! would have as vapor.

use uom::si::{
    dynamic_viscosity::pascal_second, f64::HeatTransfer,
    heat_transfer::watt_per_square_meter_kelvin, mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    thermo::capability::{BulkProperties, SaturationProperties},
};

use super::{
    error::{CorrelationError, positive},
    flow::{TubeFlow, reynolds},
    single_phase,
};

/// Qualities are kept this far from 0 and 1 to avoid singular terms.
pub const QUALITY_GUARD: f64 = 1e-6;

/// Standard gravity, m/s².
const GRAVITY: f64 = 9.80665;

/// Returns the in-tube condensation coefficient.
///
/// # Errors
///
/// Returns [`CorrelationError`] if the flow, geometry, or reduced pressure
/// is not positive.
pub fn condensation(
    flow: &TubeFlow,
    quality: Constrained<f64, UnitInterval>,
    sat: &SaturationProperties,
) -> Result<HeatTransfer, CorrelationError> {
    let g = flow.mass_flux()?;
    let d = flow.diameter()?;
    let p_r = positive("reduced_pressure", sat.reduced_pressure())?;
    let x = guarded(quality);
    let liq = Fluid::from(&sat.liquid);
    let vap = Fluid::from(&sat.vapor);

    let re_lo = reynolds(g, d, liq.mu);
    let h_lo = dittus_boelter(re_lo, liq.pr) * liq.k / d;
    let n = 0.0058 + 0.557 * p_r;
    let h_shear = h_lo * (liq.mu / (14.0 * vap.mu)).powf(n) * shah_factor(x, p_r);

    let j_v = x * g / (GRAVITY * d * vap.rho * (liq.rho - vap.rho)).sqrt();
    let z = (1.0 / x - 1.0).powf(0.8) * p_r.powf(0.4);

    let re_ls = reynolds(g * (1.0 - x), d, liq.mu);
    let film = liq.rho * (liq.rho - vap.rho) * GRAVITY * liq.k.powi(3) / (liq.mu * liq.mu);
    let h_film = 1.32 * re_ls.powf(-1.0 / 3.0) * film.cbrt();

    let h = if j_v >= 0.98 * (z + 0.263).powf(-0.62) {
        h_shear
    } else if j_v <= 0.95 / (1.254 + 2.27 * z.powf(1.249)) {
        h_film
    } else {
        h_shear + h_film
    };

    vapor_floor(h, flow, sat)
}

/// Returns the in-tube convective evaporation coefficient.
///
/// # Errors
///
/// Returns [`CorrelationError`] if the flow or geometry is not positive.
pub fn evaporation(
    flow: &TubeFlow,
    quality: Constrained<f64, UnitInterval>,
    sat: &SaturationProperties,
) -> Result<HeatTransfer, CorrelationError> {
    let g = flow.mass_flux()?;
    let d = flow.diameter()?;
    let x = guarded(quality);
    let liq = Fluid::from(&sat.liquid);
    let vap = Fluid::from(&sat.vapor);

    let re_l = reynolds(g * (1.0 - x), d, liq.mu);
    let nu_l = dittus_boelter(re_l, liq.pr).max(single_phase::LAMINAR_NUSSELT);
    let h_l = nu_l * liq.k / d;

    let x_tt = ((1.0 - x) / x).powf(0.9) * (vap.rho / liq.rho).sqrt() * (liq.mu / vap.mu).powf(0.1);
    let h = h_l * enhancement(x_tt);

    vapor_floor(h, flow, sat)
}

/// Chen's convective enhancement factor.
#[must_use]
pub fn enhancement(x_tt: f64) -> f64 {
    let inv = 1.0 / x_tt;
    if inv <= 0.1 {
        1.0
    } else {
        2.35 * (inv + 0.213).powf(0.736)
    }
}

/// Shah's two-phase multiplier on the liquid-only coefficient.
#[must_use]
pub fn shah_factor(quality: f64, reduced_pressure: f64) -> f64 {
    let x = quality.clamp(QUALITY_GUARD, 1.0 - QUALITY_GUARD);
    (1.0 - x).powf(0.8) + 3.8 * x.powf(0.76) * (1.0 - x).powf(0.04) / reduced_pressure.powf(0.38)
}

fn guarded(quality: Constrained<f64, UnitInterval>) -> f64 {
    quality
        .into_inner()
        .clamp(QUALITY_GUARD, 1.0 - QUALITY_GUARD)
}

fn dittus_boelter(re: f64, pr: f64) -> f64 {
    0.023 * re.powf(0.8) * pr.powf(0.4)
}

fn vapor_floor(
    h: f64,
    flow: &TubeFlow,
    sat: &SaturationProperties,
) -> Result<HeatTransfer, CorrelationError> {
    let h_vapor = single_phase::coefficient(flow, &sat.vapor)?;
    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(h).max(h_vapor))
}

/// Bulk properties as SI `f64`.
struct Fluid {
    rho: f64,
    mu: f64,
    k: f64,
    pr: f64,
}

impl From<&BulkProperties> for Fluid {
    fn from(props: &BulkProperties) -> Self {
        Self {
            rho: props.density.get::<kilogram_per_cubic_meter>(),
            mu: props.viscosity.get::<pascal_second>(),
            k: props.conductivity.get::<watt_per_meter_kelvin>(),
            pr: props.prandtl(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassRate, ThermodynamicTemperature},
        length::millimeter,
        mass_rate::kilogram_per_second,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::{
        capability::RefrigerantProperties, fluid::Refrigerant, model::Tabulated,
    };

    fn r134a_at_45() -> SaturationProperties {
        Tabulated
            .saturated(
                Refrigerant::R134a,
                ThermodynamicTemperature::new::<degree_celsius>(45.0),
            )
            .unwrap()
    }

    fn r410a_at_5() -> SaturationProperties {
        Tabulated
            .saturated(
                Refrigerant::R410A,
                ThermodynamicTemperature::new::<degree_celsius>(5.0),
            )
            .unwrap()
    }

    fn flow(m_dot: f64, tubes: usize) -> TubeFlow {
        TubeFlow {
            mass_rate: MassRate::new::<kilogram_per_second>(m_dot),
            inner_diameter: Length::new::<millimeter>(7.75),
            parallel_tubes: tubes,
        }
    }

    fn x(value: f64) -> Constrained<f64, UnitInterval> {
        UnitInterval::new(value).unwrap()
    }

    fn w(h: HeatTransfer) -> f64 {
        h.get::<watt_per_square_meter_kelvin>()
    }

    #[test]
    fn shah_factor_grows_with_quality() {
        let p_r = 0.29;
        assert_relative_eq!(shah_factor(0.1, p_r), 1.975, epsilon = 0.01);
        assert_relative_eq!(shah_factor(0.9, p_r), 5.27, epsilon = 0.02);
        assert!(shah_factor(0.5, p_r) > shah_factor(0.3, p_r));
    }

    #[test]
    fn condensation_exceeds_vapor_only_coefficient() {
        let sat = r134a_at_45();
        let flow = flow(0.221, 25);
        let h_vapor = w(single_phase::coefficient(&flow, &sat.vapor).unwrap());
        for quality in [0.0, 0.05, 0.3, 0.6, 0.95, 1.0] {
            assert!(w(condensation(&flow, x(quality), &sat).unwrap()) >= h_vapor);
        }
    }

    #[test]
    fn shear_controlled_condensation_rises_with_quality() {
        let sat = r134a_at_45();
        let flow = flow(0.5, 10);
        let h: Vec<f64> = [0.3, 0.5, 0.7]
            .into_iter()
            .map(|q| w(condensation(&flow, x(q), &sat).unwrap()))
            .collect();
        assert!(h[0] < h[1] && h[1] < h[2]);
    }

    #[test]
    fn shear_controlled_condensation_scales_with_shah_factor() {
        let sat = r134a_at_45();
        let p_r = sat.reduced_pressure();
        let flow = flow(0.5, 10);
        let h = |q: f64| w(condensation(&flow, x(q), &sat).unwrap());

        // Only the two-phase multiplier depends on quality in regime I.
        for (low, high) in [(0.2, 0.5), (0.3, 0.7)] {
            assert_relative_eq!(
                h(high) / h(low),
                shah_factor(high, p_r) / shah_factor(low, p_r),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn gravity_controlled_condensation_uses_film_term() {
        let sat = r134a_at_45();
        let flow = flow(0.221, 200);
        let h = w(condensation(&flow, x(0.5), &sat).unwrap());
        // Nusselt-type film condensation at very low mass flux.
        assert!(h > 500.0 && h < 2000.0, "h = {h}");
    }

    #[test]
    fn enhancement_factor_limits() {
        assert_relative_eq!(enhancement(20.0), 1.0);
        assert_relative_eq!(enhancement(1.0), 2.35 * 1.213_f64.powf(0.736), epsilon = 1e-12);
    }

    #[test]
    fn evaporation_rises_with_quality() {
        let sat = r410a_at_5();
        let flow = flow(0.2, 20);
        let low = w(evaporation(&flow, x(0.2), &sat).unwrap());
        let high = w(evaporation(&flow, x(0.8), &sat).unwrap());
        assert!(high > low);
    }

    #[test]
    fn non_positive_flow_is_rejected() {
        let sat = r134a_at_45();
        assert!(matches!(
            condensation(&flow(0.0, 10), x(0.5), &sat),
            Err(CorrelationError::NonPositive {
                name: "mass_rate",
                ..
            })
        ));
    }
}

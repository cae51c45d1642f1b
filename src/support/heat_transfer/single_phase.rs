//! Single-phase in-tube convection.
//!
//! Turbulent and transitional flow (`Re ≥ 2300`) uses the Gnielinski
//! correlation with the Petukhov friction factor:
//!
//! ```text
//! f  = (0.79·ln Re - 1.64)⁻²
//! Nu = (f/8)(Re - 1000)·Pr / (1 + 12.7·√(f/8)·(Pr^(2/3) - 1))
//! ```
//!
//! Below the laminar threshold the fully developed constant-wall-temperature
//! value `Nu = 3.66` is used instead of extrapolating the turbulent fit.

use uom::si::{
    dynamic_viscosity::pascal_second, f64::HeatTransfer,
    heat_transfer::watt_per_square_meter_kelvin, thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::thermo::capability::BulkProperties;

use super::{
    error::CorrelationError,
    flow::{TubeFlow, reynolds},
};

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_REYNOLDS: f64 = 2300.0;

/// Fully developed laminar Nusselt number for a constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

/// Returns the in-tube single-phase heat transfer coefficient.
///
/// # Errors
///
/// Returns [`CorrelationError`] if the flow or geometry is not positive.
pub fn coefficient(
    flow: &TubeFlow,
    props: &BulkProperties,
) -> Result<HeatTransfer, CorrelationError> {
    let g = flow.mass_flux()?;
    let d = flow.diameter()?;
    let re = reynolds(g, d, props.viscosity.get::<pascal_second>());
    let nu = nusselt(re, props.prandtl());
    let k = props.conductivity.get::<watt_per_meter_kelvin>();
    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(nu * k / d))
}

/// Gnielinski Nusselt number with the laminar fallback.
#[must_use]
pub fn nusselt(re: f64, pr: f64) -> f64 {
    if re < LAMINAR_REYNOLDS {
        return LAMINAR_NUSSELT;
    }
    let f = (0.79 * re.ln() - 1.64).powi(-2);
    let f8 = f / 8.0;
    f8 * (re - 1000.0) * pr / (1.0 + 12.7 * f8.sqrt() * (pr.powf(2.0 / 3.0) - 1.0))
}

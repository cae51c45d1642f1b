use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, P3, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Area-specific thermal resistance, m²·K/W in SI.
///
/// This is the reciprocal of a heat transfer coefficient and is the unit
/// fouling resistances are tabulated in.
pub type ThermalInsulance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalInsulance`] from a value in m²·K/W.
#[must_use]
pub fn square_meter_kelvin_per_watt(value: f64) -> ThermalInsulance {
    ThermalInsulance {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

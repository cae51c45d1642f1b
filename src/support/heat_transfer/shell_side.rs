//! Shell-side crossflow over the active tube bank.
//!
//! The secondary liquid crosses a bank whose flow area shrinks as fewer tubes
//! are active:
//!
//! ```text
//! A_cross = B·(p - D_o)·√n_active
//! ```
//!
//! where `B` is the baffle spacing and `p` the tube pitch. The coefficient
//! comes from Zukauskas' in-line bank correlation `Nu = C·Re^m·Pr^0.36`
//! with the Reynolds number based on the outer diameter.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{HeatTransfer, Length, MassRate},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::thermo::capability::BulkProperties;

use super::error::{CorrelationError, positive};

/// Zukauskas constants `(Re_upper, C, m)`, checked in order.
const TIERS: [(f64, f64, f64); 4] = [
    (1.0e2, 0.80, 0.40),
    (1.0e3, 0.51, 0.50),
    (2.0e5, 0.27, 0.63),
    (f64::INFINITY, 0.021, 0.84),
];

/// Shell-side geometry and flow for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossflowBank {
    pub mass_rate: MassRate,
    pub outer_diameter: Length,
    pub pitch: Length,
    pub baffle_spacing: Length,
    pub active_tubes: usize,
}

impl CrossflowBank {
    /// Returns the crossflow area in m².
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::NonPositive`] if the pitch does not exceed
    /// the outer diameter, or if the spacing or tube count is not positive.
    pub fn flow_area(&self) -> Result<f64, CorrelationError> {
        let gap = positive(
            "pitch_clearance",
            self.pitch.get::<meter>() - self.outer_diameter.get::<meter>(),
        )?;
        let spacing = positive("baffle_spacing", self.baffle_spacing.get::<meter>())?;
        #[allow(clippy::cast_precision_loss)]
        let tubes = positive("active_tubes", self.active_tubes as f64)?;
        Ok(spacing * gap * tubes.sqrt())
    }
}

/// Returns the shell-side coefficient for crossflow over the bank.
///
/// # Errors
///
/// Returns [`CorrelationError`] if the flow or geometry is not positive.
pub fn crossflow(
    bank: &CrossflowBank,
    props: &BulkProperties,
) -> Result<HeatTransfer, CorrelationError> {
    let m_dot = positive("secondary_mass_rate", bank.mass_rate.get::<kilogram_per_second>())?;
    let d = positive("outer_diameter", bank.outer_diameter.get::<meter>())?;
    let area = bank.flow_area()?;

    let re = m_dot * d / (area * props.viscosity.get::<pascal_second>());
    let nu = nusselt(re, props.prandtl());
    let k = props.conductivity.get::<watt_per_meter_kelvin>();
    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(nu * k / d))
}

/// Zukauskas bank Nusselt number.
#[must_use]
pub fn nusselt(re: f64, pr: f64) -> f64 {
    let (_, c, m) = TIERS
        .iter()
        .copied()
        .find(|&(upper, _, _)| re < upper)
        .unwrap_or(TIERS[TIERS.len() - 1]);
    c * re.powf(m) * pr.powf(0.36)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, length::millimeter,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::{
        capability::LiquidProperties, fluid::SecondaryFluid, model::IncompressibleLiquid,
    };

    fn water() -> BulkProperties {
        IncompressibleLiquid
            .liquid(
                SecondaryFluid::Water,
                ThermodynamicTemperature::new::<degree_celsius>(35.0),
            )
            .unwrap()
    }

    fn bank(active_tubes: usize) -> CrossflowBank {
        CrossflowBank {
            mass_rate: MassRate::new::<kilogram_per_second>(6.86),
            outer_diameter: Length::new::<millimeter>(9.53),
            pitch: Length::new::<millimeter>(12.7),
            baffle_spacing: Length::new::<millimeter>(200.0),
            active_tubes,
        }
    }

    #[test]
    fn tier_selection() {
        assert_relative_eq!(nusselt(50.0, 1.0), 0.80 * 50.0_f64.powf(0.40));
        assert_relative_eq!(nusselt(500.0, 1.0), 0.51 * 500.0_f64.powf(0.50));
        assert_relative_eq!(nusselt(1e4, 1.0), 0.27 * 1e4_f64.powf(0.63));
        assert_relative_eq!(nusselt(1e6, 1.0), 0.021 * 1e6_f64.powf(0.84));
    }

    #[test]
    fn fewer_active_tubes_concentrate_the_flow() {
        let props = water();
        let all = crossflow(&bank(200), &props).unwrap();
        let half = crossflow(&bank(100), &props).unwrap();
        assert!(half > all);
    }

    #[test]
    fn cooling_water_coefficient_is_plausible() {
        let h = crossflow(&bank(200), &water())
            .unwrap()
            .get::<watt_per_square_meter_kelvin>();
        assert!(h > 5_000.0 && h < 20_000.0, "h = {h}");
    }

    #[test]
    fn pitch_must_exceed_diameter() {
        let mut tight = bank(200);
        tight.pitch = tight.outer_diameter;
        assert!(matches!(
            crossflow(&tight, &water()),
            Err(CorrelationError::NonPositive {
                name: "pitch_clearance",
                ..
            })
        ));
    }
}

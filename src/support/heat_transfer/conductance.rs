use uom::si::{
    f64::{HeatTransfer, Length, ThermalConductivity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::ThermalInsulance;

use super::error::{CorrelationError, non_negative, positive};

/// Inputs to the series-resistance conductance model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductanceInputs {
    pub tube_side: HeatTransfer,
    pub shell_side: HeatTransfer,
    pub outer_diameter: Length,
    pub inner_diameter: Length,
    pub wall_conductivity: ThermalConductivity,
    pub tube_fouling: ThermalInsulance,
    pub shell_fouling: ThermalInsulance,
}

/// Returns the overall coefficient referenced to the tube outer area.
///
/// Five resistances act in series, each scaled to the outer area:
///
/// ```text
/// 1/U_o = 1/h_shell + R_f,shell + D_o·ln(D_o/D_i)/(2k)
///       + R_f,tube·(D_o/D_i) + (D_o/D_i)/h_tube
/// ```
///
/// # Errors
///
/// Returns [`CorrelationError`] if a coefficient, diameter, or conductivity
/// is not positive, a fouling resistance is negative, or `D_i ≥ D_o`.
pub fn overall_conductance(inputs: &ConductanceInputs) -> Result<HeatTransfer, CorrelationError> {
    let h_tube = positive("tube_side", inputs.tube_side.get::<watt_per_square_meter_kelvin>())?;
    let h_shell = positive("shell_side", inputs.shell_side.get::<watt_per_square_meter_kelvin>())?;
    let d_o = positive("outer_diameter", inputs.outer_diameter.get::<meter>())?;
    let d_i = positive("inner_diameter", inputs.inner_diameter.get::<meter>())?;
    let k = positive("wall_conductivity", inputs.wall_conductivity.get::<watt_per_meter_kelvin>())?;
    let r_tube = non_negative("tube_fouling", inputs.tube_fouling.value)?;
    let r_shell = non_negative("shell_fouling", inputs.shell_fouling.value)?;

    if d_i >= d_o {
        return Err(CorrelationError::DiameterOrder {
            inner: d_i,
            outer: d_o,
        });
    }

    let ratio = d_o / d_i;
    let wall = d_o * ratio.ln() / (2.0 * k);
    let resistance = 1.0 / h_shell + r_shell + wall + r_tube * ratio + ratio / h_tube;

    Ok(HeatTransfer::new::<watt_per_square_meter_kelvin>(resistance.recip()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use crate::support::units::square_meter_kelvin_per_watt;

    fn inputs() -> ConductanceInputs {
        ConductanceInputs {
            tube_side: HeatTransfer::new::<watt_per_square_meter_kelvin>(2000.0),
            shell_side: HeatTransfer::new::<watt_per_square_meter_kelvin>(8000.0),
            outer_diameter: Length::new::<millimeter>(20.0),
            inner_diameter: Length::new::<millimeter>(16.0),
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(390.0),
            tube_fouling: square_meter_kelvin_per_watt(0.0),
            shell_fouling: square_meter_kelvin_per_watt(0.0),
        }
    }

    fn u(inputs: &ConductanceInputs) -> f64 {
        overall_conductance(inputs)
            .unwrap()
            .get::<watt_per_square_meter_kelvin>()
    }

    #[test]
    fn clean_tube_series_sum() {
        let wall = 0.02 * (1.25_f64).ln() / 780.0;
        let expected = 1.0 / (1.0 / 8000.0 + wall + 1.25 / 2000.0);
        assert_relative_eq!(u(&inputs()), expected, max_relative = 1e-12);
    }

    #[test]
    fn tube_side_fouling_is_scaled_to_outer_area() {
        let mut fouled = inputs();
        fouled.tube_fouling = square_meter_kelvin_per_watt(1.76e-4);
        let added = 1.0 / u(&fouled) - 1.0 / u(&inputs());
        assert_relative_eq!(added, 1.76e-4 * 1.25, max_relative = 1e-9);

        let mut fouled = inputs();
        fouled.shell_fouling = square_meter_kelvin_per_watt(1.76e-4);
        let added = 1.0 / u(&fouled) - 1.0 / u(&inputs());
        assert_relative_eq!(added, 1.76e-4, max_relative = 1e-9);
    }

    #[test]
    fn invalid_inputs() {
        let mut bad = inputs();
        bad.tube_side = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);
        assert_eq!(overall_conductance(&bad).unwrap_err().field(), "tube_side");

        let mut bad = inputs();
        bad.inner_diameter = Length::new::<millimeter>(20.0);
        assert!(matches!(
            overall_conductance(&bad),
            Err(CorrelationError::DiameterOrder { .. })
        ));

        let mut bad = inputs();
        bad.shell_fouling = square_meter_kelvin_per_watt(-1e-5);
        assert_eq!(overall_conductance(&bad).unwrap_err().field(), "shell_fouling");
    }
}

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures that yields an interval.
///
/// In [`uom`], `ThermodynamicTemperature - ThermodynamicTemperature` is
/// another absolute temperature (see
/// [#380](https://github.com/iliekturtles/uom/issues/380)). Approaches,
/// subcooling, and superheat are all intervals, so the exchanger models go
/// through [`minus`](Self::minus) instead.
pub trait TemperatureDifference {
    /// Returns `self - other` as a [`TemperatureInterval`].
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        let difference = self.get::<abs_kelvin>() - other.get::<abs_kelvin>();
        TemperatureInterval::new::<delta_kelvin>(difference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn approach_between_saturation_and_water() {
        let t_sat = celsius(45.0);
        let t_water = celsius(42.5);

        assert_relative_eq!(t_sat.minus(t_water).get::<delta_kelvin>(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(t_water.minus(t_sat).get::<delta_kelvin>(), -2.5, epsilon = 1e-12);
    }

    #[test]
    fn superheat_of_compressor_discharge() {
        let superheat = celsius(95.0).minus(celsius(45.0));
        assert_relative_eq!(superheat.get::<delta_kelvin>(), 50.0, epsilon = 1e-12);
    }
}

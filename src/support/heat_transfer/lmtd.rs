use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

/// Returns the log-mean of two terminal temperature differences.
///
/// When the differences are within `tolerance` of each other the arithmetic
/// mean is returned instead, avoiding the `ln(1)` singularity. If either
/// difference is not positive the log-mean is undefined, and the arithmetic
/// mean floored at zero is returned. The result is never negative.
///
/// # Example
///
/// ```
/// use dx_exchanger_models::support::heat_transfer::log_mean;
/// use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};
///
/// let k = TemperatureInterval::new::<kelvin>;
/// let lmtd = log_mean(k(20.0), k(10.0), k(0.01));
/// assert!((lmtd.get::<kelvin>() - 14.427).abs() < 1e-3);
/// ```
#[must_use]
pub fn log_mean(
    dt1: TemperatureInterval,
    dt2: TemperatureInterval,
    tolerance: TemperatureInterval,
) -> TemperatureInterval {
    let (a, b) = (dt1.get::<kelvin>(), dt2.get::<kelvin>());
    let mean = if a <= 0.0 || b <= 0.0 || (a - b).abs() <= tolerance.get::<kelvin>() {
        0.5 * (a + b)
    } else {
        (a - b) / (a / b).ln()
    };
    TemperatureInterval::new::<kelvin>(mean.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn k(value: f64) -> TemperatureInterval {
        TemperatureInterval::new::<kelvin>(value)
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let tol = k(0.01);
        assert_relative_eq!(
            log_mean(k(30.0), k(5.0), tol).get::<kelvin>(),
            log_mean(k(5.0), k(30.0), tol).get::<kelvin>(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn near_equal_differences_use_arithmetic_mean() {
        let lmtd = log_mean(k(10.0), k(10.005), k(0.01));
        assert_relative_eq!(lmtd.get::<kelvin>(), 10.0025, epsilon = 1e-12);
    }

    #[test]
    fn crossed_profiles_never_go_negative() {
        assert_relative_eq!(log_mean(k(2.0), k(-1.0), k(0.01)).get::<kelvin>(), 0.5);
        assert_relative_eq!(log_mean(k(-3.0), k(1.0), k(0.01)).get::<kelvin>(), 0.0);
    }
}

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, TemperatureInterval},
    length::meter,
    temperature_interval::kelvin,
};

/// Solver configuration for tube-length sizing.
#[derive(Debug, Clone, Copy)]
pub struct SizingConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the tube length.
    pub length_tol: Length,

    /// Absolute tolerance on the terminal residual (achieved - target).
    pub delta_t_tol: TemperatureInterval,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            length_tol: Length::new::<meter>(1e-6),
            delta_t_tol: TemperatureInterval::new::<kelvin>(1e-6),
        }
    }
}

impl SizingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.length_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.delta_t_tol.get::<kelvin>(),
        }
    }
}

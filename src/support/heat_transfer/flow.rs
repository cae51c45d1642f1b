use std::f64::consts::PI;

use uom::si::{
    f64::{Length, MassRate},
    length::meter,
    mass_rate::kilogram_per_second,
};

use super::error::{CorrelationError, positive};

/// In-tube flow split evenly across parallel tubes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeFlow {
    /// Total mass flow through all parallel tubes.
    pub mass_rate: MassRate,
    pub inner_diameter: Length,
    /// Number of tubes sharing the flow.
    pub parallel_tubes: usize,
}

impl TubeFlow {
    /// Returns the per-tube mass flux `G = ṁ_tube / (π·D²/4)` in kg/m²·s.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::NonPositive`] if the flow, diameter, or
    /// tube count is not positive.
    pub fn mass_flux(&self) -> Result<f64, CorrelationError> {
        let m_dot = positive("mass_rate", self.mass_rate.get::<kilogram_per_second>())?;
        let d = self.diameter()?;
        #[allow(clippy::cast_precision_loss)]
        let tubes = positive("parallel_tubes", self.parallel_tubes as f64)?;
        Ok(m_dot / tubes / (PI * d * d / 4.0))
    }

    /// Returns the inner diameter in meters, checked positive.
    pub(super) fn diameter(&self) -> Result<f64, CorrelationError> {
        positive("inner_diameter", self.inner_diameter.get::<meter>())
    }
}

/// Reynolds number `G·D/μ`.
pub(super) fn reynolds(mass_flux: f64, diameter: f64, viscosity: f64) -> f64 {
    mass_flux * diameter / viscosity
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn flux_splits_across_tubes() {
        let flow = TubeFlow {
            mass_rate: MassRate::new::<kilogram_per_second>(0.2),
            inner_diameter: Length::new::<meter>(0.01),
            parallel_tubes: 4,
        };
        let area = PI * 0.01 * 0.01 / 4.0;
        assert_relative_eq!(flow.mass_flux().unwrap(), 0.05 / area, epsilon = 1e-9);
    }

    #[test]
    fn zero_tubes_is_rejected() {
        let flow = TubeFlow {
            mass_rate: MassRate::new::<kilogram_per_second>(0.2),
            inner_diameter: Length::new::<meter>(0.01),
            parallel_tubes: 0,
        };
        assert_eq!(
            flow.mass_flux(),
            Err(CorrelationError::NonPositive {
                name: "parallel_tubes",
                value: 0.0
            })
        );
    }
}

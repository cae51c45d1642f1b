//! Design inputs for one march.

mod fouling;
mod geometry;
mod primary;
mod secondary;

pub use fouling::{Fouling, FoulingService};
pub use geometry::{BwgGauge, TubeGeometry, TubeSize};
pub use primary::{PrimaryInlet, PrimaryStream};
pub use secondary::SecondaryStream;

use uom::si::f64::Length;

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

use super::{AssignedAllocator, ExchangerKind, MarchError};

/// Fewest segments a march may use.
pub const MIN_SEGMENTS: usize = 10;

/// Most segments a march may use.
pub const MAX_SEGMENTS: usize = 50;

/// Segment count used by [`DesignInput::new`].
pub const DEFAULT_SEGMENTS: usize = 20;

/// Complete configuration for one march.
///
/// Inputs are checked by [`DesignInput::validate`] when a run starts, so a
/// malformed design never reaches the segment loop.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignInput {
    pub kind: ExchangerKind,
    pub primary: PrimaryStream,
    pub secondary: SecondaryStream,
    pub geometry: TubeGeometry,
    pub fouling: Fouling,

    /// Number of equal-length segments along the tubes.
    pub segments: usize,

    /// Explicit zone membership, or `None` for a uniform bundle.
    pub allocation: Option<AssignedAllocator>,
}

impl DesignInput {
    /// Creates a clean, unzoned design with [`DEFAULT_SEGMENTS`] segments.
    #[must_use]
    pub fn new(
        kind: ExchangerKind,
        primary: PrimaryStream,
        secondary: SecondaryStream,
        geometry: TubeGeometry,
    ) -> Self {
        Self {
            kind,
            primary,
            secondary,
            geometry,
            fouling: Fouling::clean(),
            segments: DEFAULT_SEGMENTS,
            allocation: None,
        }
    }

    #[must_use]
    pub fn with_fouling(mut self, fouling: Fouling) -> Self {
        self.fouling = fouling;
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    #[must_use]
    pub fn with_allocation(mut self, allocation: AssignedAllocator) -> Self {
        self.allocation = Some(allocation);
        self
    }

    /// Returns the axial length of one segment.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn segment_length(&self) -> Length {
        self.geometry.length / self.segments.max(1) as f64
    }

    /// Checks every input the march relies on.
    ///
    /// # Errors
    ///
    /// Returns [`MarchError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), MarchError> {
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(MarchError::invalid(
                "segments",
                format!(
                    "{} is outside {MIN_SEGMENTS}..={MAX_SEGMENTS}",
                    self.segments
                ),
            ));
        }

        let primary = &self.primary;
        require::<StrictlyPositive, _>("primary.mass_rate", &primary.mass_rate)?;
        require::<NonNegative, _>("primary.terminal_target", &primary.terminal_target)?;
        match primary.inlet {
            PrimaryInlet::Superheated(t) if t < primary.saturation_temperature => {
                return Err(MarchError::invalid(
                    "primary.inlet",
                    "superheated inlet is below the saturation temperature",
                ));
            }
            PrimaryInlet::Subcooled(t) if t > primary.saturation_temperature => {
                return Err(MarchError::invalid(
                    "primary.inlet",
                    "subcooled inlet is above the saturation temperature",
                ));
            }
            _ => {}
        }

        require::<StrictlyPositive, _>("secondary.mass_rate", &self.secondary.mass_rate)?;

        let geometry = &self.geometry;
        require::<StrictlyPositive, _>("geometry.count", &geometry.count)?;
        require::<StrictlyPositive, _>("geometry.length", &geometry.length)?;
        require::<StrictlyPositive, _>("geometry.outer_diameter", &geometry.outer_diameter)?;
        require::<StrictlyPositive, _>("geometry.inner_diameter", &geometry.inner_diameter)?;
        if geometry.inner_diameter >= geometry.outer_diameter {
            return Err(MarchError::invalid(
                "geometry.inner_diameter",
                "must be less than the outer diameter",
            ));
        }
        require::<StrictlyPositive, _>("geometry.wall_conductivity", &geometry.wall_conductivity)?;
        if geometry.pitch <= geometry.outer_diameter {
            return Err(MarchError::invalid(
                "geometry.pitch",
                "must exceed the outer diameter",
            ));
        }
        require::<StrictlyPositive, _>("geometry.baffle_spacing", &geometry.baffle_spacing)?;
        if !(1..=geometry.count).contains(&geometry.passes) {
            return Err(MarchError::invalid(
                "geometry.passes",
                format!("{} is outside 1..={}", geometry.passes, geometry.count),
            ));
        }

        require::<NonNegative, _>("fouling.tube_side", &self.fouling.tube_side)?;
        require::<NonNegative, _>("fouling.shell_side", &self.fouling.shell_side)?;

        Ok(())
    }
}

fn require<C: Constraint<T>, T>(field: &'static str, value: &T) -> Result<(), MarchError> {
    C::check(value).map_err(|err| MarchError::invalid(field, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{MassRate, ThermodynamicTemperature},
        length::millimeter,
        mass_rate::kilogram_per_second,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        models::thermal::dx::core::test_support::condenser,
        support::units::square_meter_kelvin_per_watt,
    };

    fn field(input: &DesignInput) -> &'static str {
        match input.validate() {
            Err(MarchError::InvalidInput { field, .. }) => field,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn scenario_is_valid() {
        assert!(condenser(1.0).validate().is_ok());
    }

    #[test]
    fn segment_count_must_be_in_range() {
        assert_eq!(field(&condenser(1.0).with_segments(9)), "segments");
        assert_eq!(field(&condenser(1.0).with_segments(51)), "segments");
        assert!(condenser(1.0).with_segments(10).validate().is_ok());
        assert!(condenser(1.0).with_segments(50).validate().is_ok());
    }

    #[test]
    fn flows_must_be_positive() {
        let mut input = condenser(1.0);
        input.primary.mass_rate = MassRate::new::<kilogram_per_second>(0.0);
        assert_eq!(field(&input), "primary.mass_rate");

        let mut input = condenser(1.0);
        input.secondary.mass_rate = MassRate::new::<kilogram_per_second>(-1.0);
        assert_eq!(field(&input), "secondary.mass_rate");
    }

    #[test]
    fn diameters_must_be_ordered() {
        let mut input = condenser(1.0);
        input.geometry.inner_diameter = input.geometry.outer_diameter;
        assert_eq!(field(&input), "geometry.inner_diameter");

        let mut input = condenser(1.0);
        input.geometry.pitch = Length::new::<millimeter>(9.0);
        assert_eq!(field(&input), "geometry.pitch");
    }

    #[test]
    fn inlet_must_agree_with_saturation() {
        let mut input = condenser(1.0);
        input.primary.inlet =
            PrimaryInlet::Superheated(ThermodynamicTemperature::new::<degree_celsius>(40.0));
        assert_eq!(field(&input), "primary.inlet");
    }

    #[test]
    fn passes_and_fouling_are_checked() {
        let mut input = condenser(1.0);
        input.geometry.passes = 0;
        assert_eq!(field(&input), "geometry.passes");

        let input = condenser(1.0).with_fouling(Fouling {
            tube_side: square_meter_kelvin_per_watt(0.0),
            shell_side: square_meter_kelvin_per_watt(-1e-4),
        });
        assert_eq!(field(&input), "fouling.shell_side");
    }
}

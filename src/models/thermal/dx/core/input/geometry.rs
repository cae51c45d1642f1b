use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length, ThermalConductivity},
    length::{inch, millimeter},
    thermal_conductivity::watt_per_meter_kelvin,
};

/// Tube bundle geometry.
///
/// `count` is the number of physical tubes in the shell. Refrigerant is split
/// across `passes` tube passes, so each pass runs `count / passes` tubes in
/// parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    pub count: usize,
    pub length: Length,
    pub outer_diameter: Length,
    pub inner_diameter: Length,
    pub wall_conductivity: ThermalConductivity,
    /// Center-to-center tube spacing.
    pub pitch: Length,
    pub baffle_spacing: Length,
    pub passes: usize,
}

impl TubeGeometry {
    /// Copper tubes of a nominal size and gauge on a 1.25·OD pitch.
    ///
    /// Single pass with 200 mm baffle spacing.
    #[must_use]
    pub fn standard(count: usize, length: Length, size: TubeSize, gauge: BwgGauge) -> Self {
        let outer_diameter = size.outer_diameter();
        Self {
            count,
            length,
            outer_diameter,
            inner_diameter: outer_diameter - gauge.wall_thickness() * 2.0,
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(390.0),
            pitch: outer_diameter * 1.25,
            baffle_spacing: Length::new::<millimeter>(200.0),
            passes: 1,
        }
    }

    #[must_use]
    pub fn with_pitch(mut self, pitch: Length) -> Self {
        self.pitch = pitch;
        self
    }

    #[must_use]
    pub fn with_baffle_spacing(mut self, spacing: Length) -> Self {
        self.baffle_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    #[must_use]
    pub fn with_wall_conductivity(mut self, conductivity: ThermalConductivity) -> Self {
        self.wall_conductivity = conductivity;
        self
    }

    /// Returns `(OD - ID) / 2`.
    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        (self.outer_diameter - self.inner_diameter) * 0.5
    }

    /// Returns the outer surface area of the whole bundle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn outer_area(&self) -> Area {
        self.outer_diameter * self.length * (PI * self.count as f64)
    }

    /// Returns the number of tubes sharing the refrigerant flow when
    /// `active` tubes are in service.
    #[must_use]
    pub fn circuits(&self, active: usize) -> usize {
        (active / self.passes.max(1)).max(1)
    }
}

/// Nominal tube outer diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TubeSize {
    QuarterInch,
    ThreeEighthsInch,
    HalfInch,
    FiveEighthsInch,
    ThreeQuartersInch,
    OneInch,
}

impl TubeSize {
    #[must_use]
    pub fn outer_diameter(self) -> Length {
        Length::new::<inch>(match self {
            Self::QuarterInch => 0.25,
            Self::ThreeEighthsInch => 0.375,
            Self::HalfInch => 0.5,
            Self::FiveEighthsInch => 0.625,
            Self::ThreeQuartersInch => 0.75,
            Self::OneInch => 1.0,
        })
    }
}

/// Birmingham wire gauge wall thicknesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BwgGauge {
    Bwg14,
    Bwg16,
    Bwg18,
    Bwg20,
    Bwg22,
}

impl BwgGauge {
    #[must_use]
    pub fn wall_thickness(self) -> Length {
        Length::new::<millimeter>(match self {
            Self::Bwg14 => 2.108,
            Self::Bwg16 => 1.651,
            Self::Bwg18 => 1.245,
            Self::Bwg20 => 0.889,
            Self::Bwg22 => 0.711,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{area::square_meter, length::meter};

    #[test]
    fn standard_three_eighths_bwg20() {
        let geometry = TubeGeometry::standard(
            200,
            Length::new::<meter>(1.0),
            TubeSize::ThreeEighthsInch,
            BwgGauge::Bwg20,
        );
        assert_relative_eq!(geometry.outer_diameter.get::<millimeter>(), 9.525, epsilon = 1e-9);
        assert_relative_eq!(geometry.inner_diameter.get::<millimeter>(), 7.747, epsilon = 1e-9);
        assert_relative_eq!(geometry.wall_thickness().get::<millimeter>(), 0.889, epsilon = 1e-9);
        assert_relative_eq!(
            geometry.outer_area().get::<square_meter>(),
            PI * 9.525e-3 * 200.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn circuits_split_active_tubes_across_passes() {
        let geometry = TubeGeometry::standard(
            200,
            Length::new::<meter>(1.0),
            TubeSize::ThreeEighthsInch,
            BwgGauge::Bwg20,
        )
        .with_passes(8);
        assert_eq!(geometry.circuits(200), 25);
        assert_eq!(geometry.circuits(40), 5);
        assert_eq!(geometry.circuits(3), 1);
    }
}

use std::fmt;

use uom::si::{
    area::square_meter,
    f64::{Area, TemperatureInterval},
    temperature_interval::kelvin,
};

use crate::models::thermal::dx::core::Zone;

/// A problem found in the terminal zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// The refrigerant never reached the terminal phase.
    MissingTerminalZone { zone: Zone },

    /// The terminal phase was reached but no tubes are assigned to it.
    InactiveTerminalZone { zone: Zone },

    /// The terminal zone has less area than the target needs.
    InsufficientArea {
        actual: Area,
        required: Area,
        deficit_percent: f64,
    },

    /// Saturation and the secondary liquid are too close for effective
    /// heat transfer at the start of the terminal zone.
    ThermalPinch { approach: TemperatureInterval },
}

impl Warning {
    /// Returns `true` for warnings that make the design unworkable as drawn.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::MissingTerminalZone { .. } | Self::InactiveTerminalZone { .. }
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTerminalZone { zone } => write!(
                f,
                "CRITICAL: no {zone} zone; the refrigerant leaves before completing its phase change"
            ),
            Self::InactiveTerminalZone { zone } => {
                write!(f, "CRITICAL: the {zone} zone has no active tubes")
            }
            Self::InsufficientArea {
                actual,
                required,
                deficit_percent,
            } => write!(
                f,
                "terminal zone has {:.3} m² of {:.3} m² required ({deficit_percent:.1}% short)",
                actual.get::<square_meter>(),
                required.get::<square_meter>()
            ),
            Self::ThermalPinch { approach } => write!(
                f,
                "thermal pinch: {:.2} K between saturation and the secondary liquid",
                approach.get::<kelvin>()
            ),
        }
    }
}

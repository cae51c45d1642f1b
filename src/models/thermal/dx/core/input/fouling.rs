use crate::support::units::{ThermalInsulance, square_meter_kelvin_per_watt};

/// Fouling resistances on each side of the tube wall.
///
/// Both are specified per unit of their own surface; the tube-side value is
/// scaled to the outer area when the overall coefficient is formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fouling {
    pub tube_side: ThermalInsulance,
    pub shell_side: ThermalInsulance,
}

impl Fouling {
    /// Clean surfaces on both sides.
    #[must_use]
    pub fn clean() -> Self {
        Self {
            tube_side: square_meter_kelvin_per_watt(0.0),
            shell_side: square_meter_kelvin_per_watt(0.0),
        }
    }

    /// Design allowances for the given services.
    #[must_use]
    pub fn for_services(tube_side: FoulingService, shell_side: FoulingService) -> Self {
        Self {
            tube_side: tube_side.resistance(),
            shell_side: shell_side.resistance(),
        }
    }
}

impl Default for Fouling {
    fn default() -> Self {
        Self::clean()
    }
}

/// Fluid services with tabulated TEMA fouling allowances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoulingService {
    CoolingTowerWater,
    RefrigerantLiquid,
    RefrigerantVapor,
    GlycolBrine,
}

impl FoulingService {
    /// Returns the fouling resistance in m²·K/W.
    #[must_use]
    pub fn resistance(self) -> ThermalInsulance {
        square_meter_kelvin_per_watt(match self {
            Self::CoolingTowerWater | Self::RefrigerantLiquid => 0.000_176,
            Self::RefrigerantVapor | Self::GlycolBrine => 0.000_352,
        })
    }
}

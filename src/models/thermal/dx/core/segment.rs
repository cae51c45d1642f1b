use uom::si::f64::{
    Area, HeatTransfer, Length, Power, TemperatureInterval, ThermodynamicTemperature,
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    thermo::Phase,
    units::SpecificEnthalpy,
};

use super::Zone;

/// One finite-volume slice of the tube length.
///
/// Primary properties describe the refrigerant entering the slice, which
/// determines its phase, zone, and coefficients. Both ends of the secondary
/// stream are recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// One-based position in the march.
    pub index: usize,

    /// Axial midpoint measured from the refrigerant inlet.
    pub position: Length,
    pub length: Length,

    pub phase: Phase,
    pub zone: Zone,

    /// Vapor quality, present only for two-phase segments.
    pub quality: Option<Constrained<f64, UnitInterval>>,

    pub primary_temperature: ThermodynamicTemperature,
    pub primary_outlet_temperature: ThermodynamicTemperature,
    pub primary_inlet_enthalpy: SpecificEnthalpy,
    pub primary_outlet_enthalpy: SpecificEnthalpy,

    pub secondary_inlet_temperature: ThermodynamicTemperature,
    pub secondary_outlet_temperature: ThermodynamicTemperature,

    pub active_tubes: usize,

    pub tube_side: HeatTransfer,
    pub shell_side: HeatTransfer,
    /// Overall coefficient referenced to the outer area.
    pub conductance: HeatTransfer,
    pub lmtd: TemperatureInterval,
    pub area: Area,

    /// Heat moved between the streams in this segment, never negative.
    pub duty: Power,
    /// Duty of this and every earlier segment.
    pub cumulative_duty: Power,
}

impl Segment {
    /// Returns `true` if no tubes carried refrigerant in this segment.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.active_tubes == 0
    }
}

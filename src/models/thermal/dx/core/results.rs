//! Results of one march.

use uom::si::f64::{Area, Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{thermo::Phase, units::SpecificEnthalpy};

use super::{
    AdequacyAnalysis, ExchangerKind, Segment, Zone, ZoneBoundary, ZoneSummary,
    adequacy::ADEQUACY_RATIO,
};

/// The complete trace of a march and everything derived from it.
///
/// Segments are ordered from the refrigerant inlet. Boundaries and
/// summaries list only the zones the march visited, in flow order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarchResults {
    pub kind: ExchangerKind,
    pub segments: Vec<Segment>,
    pub zone_boundaries: Vec<ZoneBoundary>,
    pub zone_summaries: Vec<ZoneSummary>,
    pub totals: Totals,
    pub adequacy: AdequacyAnalysis,
}

/// Whole-exchanger totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub duty: Power,
    /// Heat transfer area of all active tubes.
    pub area: Area,

    pub primary_inlet_temperature: ThermodynamicTemperature,
    pub primary_outlet_temperature: ThermodynamicTemperature,
    pub primary_inlet_enthalpy: SpecificEnthalpy,
    pub primary_outlet_enthalpy: SpecificEnthalpy,
    pub primary_outlet_phase: Phase,

    pub secondary_inlet_temperature: ThermodynamicTemperature,
    pub secondary_outlet_temperature: ThermodynamicTemperature,

    /// Subcooling or superheat at the outlet.
    ///
    /// Negative when the refrigerant leaves on the wrong side of saturation,
    /// for example a condenser outlet that is still superheated.
    pub terminal_delta_t: TemperatureInterval,
    pub terminal_target: TemperatureInterval,
}

impl Totals {
    /// Returns `true` if the outlet reaches [`ADEQUACY_RATIO`] of the target.
    #[must_use]
    pub fn terminal_target_met(&self) -> bool {
        self.terminal_delta_t >= self.terminal_target * ADEQUACY_RATIO
    }
}

impl MarchResults {
    /// Returns the boundary of `zone`, if the march visited it.
    #[must_use]
    pub fn boundary(&self, zone: Zone) -> Option<&ZoneBoundary> {
        self.zone_boundaries.iter().find(|b| b.zone == zone)
    }

    /// Returns the summary of `zone`, if the march visited it.
    #[must_use]
    pub fn summary(&self, zone: Zone) -> Option<&ZoneSummary> {
        self.zone_summaries.iter().find(|s| s.zone == zone)
    }

    /// Returns the distinct phases of the trace in the order they occur.
    #[must_use]
    pub fn phase_sequence(&self) -> Vec<Phase> {
        let mut phases: Vec<Phase> = self.segments.iter().map(|s| s.phase).collect();
        phases.dedup();
        phases
    }
}

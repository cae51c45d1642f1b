//! Direct-expansion shell-and-tube condenser and evaporator models.
//!
//! This module provides [`twine_core::Model`] implementations for DX
//! exchangers. The computational core is in the internal [`core`] module.
//!
//! - [`DxExchanger`] marches a complete design and returns the full trace.
//! - [`DxTubeSizing`] searches for the tube length that meets the terminal
//!   subcooling or superheat target.

pub(crate) mod core;

pub use self::core::{
    ADEQUACY_RATIO, AdequacyAnalysis, AllocationError, AssignedAllocator, BwgGauge,
    DEFAULT_SEGMENTS, Deficit, DesignInput, ExchangerKind, Fouling, FoulingService,
    LENGTH_SAFETY_FACTOR, MAX_SEGMENTS, MIN_SEGMENTS, MODERATE_DEFICIT_PERCENT, MarchConfig,
    MarchError, MarchResults, PINCH_APPROACH_KELVIN, PrimaryInlet, PrimaryStream,
    Recommendation, SECTION_SAFETY_FACTOR, SEVERE_DEFICIT_PERCENT, SecondaryStream, Segment,
    SegmentMarcher, Severity, SizingConfig, SizingError, Span, Totals, TubeAllocator,
    TubeGeometry, TubeSize, UniformAllocator, Warning, Zone, ZoneBoundary, ZoneShare,
    ZoneSummary, analyze,
};

use twine_core::Model;
use uom::si::f64::Length;

use crate::support::thermo::capability::{LiquidProperties, RefrigerantProperties};

/// Marches a [`DesignInput`] through its segments.
///
/// The input's own allocation is used, or a uniform bundle if it has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct DxExchanger<R, S> {
    marcher: SegmentMarcher<R, S>,
}

impl<R, S> DxExchanger<R, S> {
    #[must_use]
    pub fn new(marcher: SegmentMarcher<R, S>) -> Self {
        Self { marcher }
    }
}

impl<R, S> Model for DxExchanger<R, S>
where
    R: RefrigerantProperties,
    S: LiquidProperties,
{
    type Input = DesignInput;
    type Output = MarchResults;
    type Error = MarchError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.marcher.run(input)
    }
}

/// Sizes the tube length of a [`DesignInput`] to its terminal target.
///
/// The geometry length on the input is ignored. The search runs between the
/// two lengths in `bracket`, which must straddle the solution.
#[derive(Debug, Clone, Copy)]
pub struct DxTubeSizing<R, S> {
    marcher: SegmentMarcher<R, S>,
    bracket: [Length; 2],
    config: SizingConfig,
}

impl<R, S> DxTubeSizing<R, S> {
    #[must_use]
    pub fn new(marcher: SegmentMarcher<R, S>, bracket: [Length; 2]) -> Self {
        Self {
            marcher,
            bracket,
            config: SizingConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: SizingConfig) -> Self {
        Self { config, ..self }
    }
}

impl<R, S> Model for DxTubeSizing<R, S>
where
    R: RefrigerantProperties,
    S: LiquidProperties,
{
    type Input = DesignInput;
    type Output = MarchResults;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.marcher
            .size_tube_length(input, self.bracket, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{MassRate, TemperatureInterval, ThermodynamicTemperature},
        length::meter,
        mass_rate::kilogram_per_second,
        temperature_interval::kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::{
        fluid::{Refrigerant, SecondaryFluid},
        model::{IncompressibleLiquid, Tabulated},
        Phase,
    };

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn meters(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn marcher() -> SegmentMarcher<Tabulated, IncompressibleLiquid> {
        SegmentMarcher::new(Tabulated, IncompressibleLiquid)
    }

    /// A small 60-tube R410A condenser on cooling-tower water.
    fn design(length: Length) -> DesignInput {
        let primary = PrimaryStream {
            refrigerant: Refrigerant::R410A,
            mass_rate: MassRate::new::<kilogram_per_second>(0.05),
            inlet: PrimaryInlet::Superheated(celsius(75.0)),
            saturation_temperature: celsius(40.0),
            terminal_target: TemperatureInterval::new::<kelvin>(3.0),
        };
        let secondary = SecondaryStream {
            fluid: SecondaryFluid::Water,
            mass_rate: MassRate::new::<kilogram_per_second>(0.8),
            inlet_temperature: celsius(30.0),
        };
        let geometry =
            TubeGeometry::standard(60, length, TubeSize::ThreeEighthsInch, BwgGauge::Bwg20)
                .with_passes(4);
        DesignInput::new(ExchangerKind::Condenser, primary, secondary, geometry)
            .with_fouling(Fouling::for_services(
                FoulingService::RefrigerantLiquid,
                FoulingService::CoolingTowerWater,
            ))
    }

    #[test]
    fn exchanger_model_condenses_the_refrigerant() {
        let model = DxExchanger::new(marcher());
        let results = model.call(&design(meters(2.0))).unwrap();

        assert_eq!(results.kind, ExchangerKind::Condenser);
        assert_eq!(results.segments.len(), DEFAULT_SEGMENTS);
        assert_eq!(results.segments[0].phase, Phase::SuperheatedVapor);
        assert!(results.totals.primary_outlet_temperature < celsius(75.0));
        assert!(results.totals.secondary_outlet_temperature > celsius(30.0));
    }

    #[test]
    fn exchanger_model_reports_invalid_designs() {
        let model = DxExchanger::new(marcher());
        let result = model.call(&design(meters(0.0)));
        assert!(matches!(
            result,
            Err(MarchError::InvalidInput {
                field: "geometry.length",
                ..
            })
        ));
    }

    #[test]
    fn sizing_model_rejects_an_empty_bracket() {
        let model = DxTubeSizing::new(marcher(), [meters(2.0), meters(2.0)]);
        let result = model.call(&design(meters(1.0)));
        assert!(matches!(result, Err(SizingError::InvalidBracket { .. })));
    }
}

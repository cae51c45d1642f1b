//! Segment-by-segment modeling of direct-expansion shell-and-tube exchangers.
//!
//! Refrigerant flows inside the tubes and a secondary liquid flows across
//! them on the shell side. The tube length is divided into equal segments
//! and marched in order from the refrigerant inlet. Each segment classifies
//! the refrigerant phase, picks the zone it belongs to, and applies
//! `Q = U·A·ΔT` using only the tubes the allocator assigns to that zone.
//!
//! Once the march is complete the per-segment trace is reduced into zone
//! boundaries and summaries, and the terminal zone (subcooling for a
//! condenser, superheating for an evaporator) is checked for adequacy.

mod adequacy;
mod allocator;
mod classify;
mod config;
mod error;
mod input;
mod march;
mod results;
mod segment;
mod sizing;
mod summary;
mod zone;

#[cfg(test)]
mod test_support;

pub use adequacy::{
    ADEQUACY_RATIO, AdequacyAnalysis, Deficit, LENGTH_SAFETY_FACTOR, MODERATE_DEFICIT_PERCENT,
    PINCH_APPROACH_KELVIN, Recommendation, SECTION_SAFETY_FACTOR, SEVERE_DEFICIT_PERCENT,
    Severity, Span, Warning, analyze,
};
pub use allocator::{
    AllocationError, AssignedAllocator, TubeAllocator, UniformAllocator, ZoneShare,
};
pub use config::MarchConfig;
pub use error::MarchError;
pub use input::{
    BwgGauge, DEFAULT_SEGMENTS, DesignInput, Fouling, FoulingService, MAX_SEGMENTS, MIN_SEGMENTS,
    PrimaryInlet, PrimaryStream, SecondaryStream, TubeGeometry, TubeSize,
};
pub use results::{MarchResults, Totals};
pub use segment::Segment;
pub use sizing::{SizingConfig, SizingError};
pub use summary::{ZoneBoundary, ZoneSummary};
pub use zone::{ExchangerKind, Zone};

use uom::si::f64::Length;

use crate::support::thermo::capability::{LiquidProperties, RefrigerantProperties};

use march::march;
use sizing::size_tube_length;

/// Entry point for marching a DX exchanger.
///
/// The marcher owns the property services and numerical settings but no
/// per-run state, so a single instance can serve any number of independent
/// runs, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentMarcher<R, S> {
    refrigerant: R,
    liquid: S,
    config: MarchConfig,
}

impl<R, S> SegmentMarcher<R, S> {
    /// Creates a marcher with the default [`MarchConfig`].
    pub fn new(refrigerant: R, liquid: S) -> Self {
        Self {
            refrigerant,
            liquid,
            config: MarchConfig::default(),
        }
    }

    /// Replaces the numerical settings.
    #[must_use]
    pub fn with_config(self, config: MarchConfig) -> Self {
        Self { config, ..self }
    }

    /// Returns the numerical settings.
    pub fn config(&self) -> &MarchConfig {
        &self.config
    }
}

impl<R, S> SegmentMarcher<R, S>
where
    R: RefrigerantProperties,
    S: LiquidProperties,
{
    /// Marches a design using its own tube allocation.
    ///
    /// Designs without an explicit [`AssignedAllocator`] make every tube
    /// active in every zone.
    ///
    /// # Errors
    ///
    /// Returns a [`MarchError`] if the input is invalid, the allocation does
    /// not fit the exchanger, or a property lookup fails.
    pub fn run(&self, input: &DesignInput) -> Result<MarchResults, MarchError> {
        match &input.allocation {
            Some(allocation) => self.run_with_allocator(input, allocation),
            None => self.run_with_allocator(input, &UniformAllocator::new(input.geometry.count)),
        }
    }

    /// Marches a design with an explicit allocator, ignoring any allocation
    /// stored on the input.
    ///
    /// # Errors
    ///
    /// Returns a [`MarchError`] if the input is invalid, the allocation does
    /// not fit the exchanger, or a property lookup fails.
    pub fn run_with_allocator(
        &self,
        input: &DesignInput,
        allocator: &impl TubeAllocator,
    ) -> Result<MarchResults, MarchError> {
        march(
            input,
            allocator,
            &self.refrigerant,
            &self.liquid,
            &self.config,
        )
    }

    /// Finds the tube length within `bracket` that meets the terminal target.
    ///
    /// Only the tube length varies. The returned trace is the march at the
    /// converged length.
    ///
    /// # Errors
    ///
    /// Returns a [`SizingError`] if the input is invalid, the bracket does
    /// not contain a solution, or the solver fails to converge.
    pub fn size_tube_length(
        &self,
        input: &DesignInput,
        bracket: [Length; 2],
        config: SizingConfig,
    ) -> Result<MarchResults, SizingError> {
        size_tube_length(self, input, bracket, config)
    }
}

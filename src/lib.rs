//! # DX Exchanger Models
//!
//! Segment-by-segment models of direct-expansion (DX) shell-and-tube
//! condensers and evaporators, built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! Refrigerant flows inside the tubes and a secondary liquid (water or a
//! glycol brine) flows across them. The tube length is marched one segment
//! at a time so the refrigerant can pass through desuperheating, condensing,
//! and subcooling zones (or evaporating and superheating zones), each with
//! its own heat transfer correlation and, optionally, its own subset of
//! tubes.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and their inputs and results.
//! - [`support`]: Correlations, property services, and units used by the models.
//!
//! ## Example
//!
//! ```
//! use dx_exchanger_models::{
//!     models::thermal::dx::{
//!         BwgGauge, DesignInput, ExchangerKind, PrimaryInlet, PrimaryStream, SecondaryStream,
//!         SegmentMarcher, TubeGeometry, TubeSize,
//!     },
//!     support::thermo::{
//!         fluid::{Refrigerant, SecondaryFluid},
//!         model::{IncompressibleLiquid, Tabulated},
//!     },
//! };
//! use uom::si::{
//!     f64::{Length, MassRate, TemperatureInterval, ThermodynamicTemperature},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     temperature_interval::kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//!
//! let primary = PrimaryStream {
//!     refrigerant: Refrigerant::R134a,
//!     mass_rate: MassRate::new::<kilogram_per_second>(0.221),
//!     inlet: PrimaryInlet::Superheated(celsius(95.0)),
//!     saturation_temperature: celsius(45.0),
//!     terminal_target: TemperatureInterval::new::<kelvin>(5.0),
//! };
//! let secondary = SecondaryStream {
//!     fluid: SecondaryFluid::Water,
//!     mass_rate: MassRate::new::<kilogram_per_second>(6.8),
//!     inlet_temperature: celsius(35.0),
//! };
//! let geometry = TubeGeometry::standard(
//!     200,
//!     Length::new::<meter>(1.0),
//!     TubeSize::ThreeEighthsInch,
//!     BwgGauge::Bwg20,
//! )
//! .with_passes(8);
//!
//! let input = DesignInput::new(ExchangerKind::Condenser, primary, secondary, geometry);
//! let results = SegmentMarcher::new(Tabulated, IncompressibleLiquid).run(&input)?;
//!
//! assert_eq!(results.segments.len(), 20);
//! assert!(results.totals.secondary_outlet_temperature > celsius(35.0));
//! # Ok::<(), dx_exchanger_models::models::thermal::dx::MarchError>(())
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain, it moves to a
//!    domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific and domain-specific utility code remains private.

pub mod models;
pub mod support;

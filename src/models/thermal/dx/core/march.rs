//! The segment-by-segment march.
//!
//! Each segment takes the refrigerant state left by the previous one, so the
//! loop is strictly sequential. Per segment the marcher:
//!
//! 1. Classifies the entering refrigerant and maps its phase to a zone.
//! 2. Asks the allocator how many tubes are active in that zone.
//! 3. Evaluates the tube-side, shell-side, and overall coefficients.
//! 4. Computes the driving temperature difference and `Q = U·A·ΔT`.
//! 5. Moves both streams by `Q`.
//!
//! The duty is capped at the enthalpy change that would bring the
//! refrigerant into equilibrium with the entering secondary liquid, so a
//! coarse segment can never drive the streams past each other.

use std::f64::consts::PI;

use tracing::{debug, trace, warn};
use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatTransfer, Power, TemperatureInterval, ThermodynamicTemperature},
        length::meter,
        power::watt,
        temperature_interval::kelvin,
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::{
    heat_transfer::{
        ConductanceInputs, TubeFlow, log_mean, overall_conductance,
        shell_side::{self, CrossflowBank},
        single_phase, two_phase,
    },
    thermo::{
        Phase,
        capability::{LiquidProperties, RefrigerantProperties, SaturationProperties},
    },
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{
    DesignInput, ExchangerKind, MarchConfig, MarchError, MarchResults, PrimaryInlet, Segment,
    Totals, TubeAllocator, adequacy,
    classify::{Regime, anchored_temperature, classify, equilibrium_enthalpy},
    summary,
};

/// Stream states between two segments.
#[derive(Debug, Clone, Copy)]
struct StreamState {
    enthalpy: SpecificEnthalpy,
    temperature: ThermodynamicTemperature,
    regime: Regime,
    secondary: ThermodynamicTemperature,
}

/// Marches `input` through its segments and reduces the trace.
pub(super) fn march<A, R, S>(
    input: &DesignInput,
    allocator: &A,
    refrigerant: &R,
    liquid: &S,
    config: &MarchConfig,
) -> Result<MarchResults, MarchError>
where
    A: TubeAllocator + ?Sized,
    R: RefrigerantProperties + ?Sized,
    S: LiquidProperties + ?Sized,
{
    input.validate()?;
    allocator.check(input.kind, input.geometry.count)?;

    let primary = &input.primary;
    let sat = refrigerant
        .saturated(primary.refrigerant, primary.saturation_temperature)
        .map_err(|err| {
            MarchError::property(
                None,
                format!(
                    "{} saturation at {:.2}°C",
                    primary.refrigerant,
                    primary.saturation_temperature.get::<degree_celsius>()
                ),
                err,
            )
        })?;
    let inlet = inlet_state(input, refrigerant, &sat, config)?;

    debug!(
        kind = %input.kind,
        refrigerant = %primary.refrigerant,
        inlet_phase = %inlet.regime.phase(),
        segments = input.segments,
        length_m = input.geometry.length.get::<meter>(),
        "starting march"
    );

    let stepper = Stepper {
        input,
        allocator,
        refrigerant,
        liquid,
        sat: &sat,
        config,
    };

    let mut state = inlet;
    let mut cumulative = Power::ZERO;
    let mut segments = Vec::with_capacity(input.segments);
    for index in 1..=input.segments {
        let (segment, next) = stepper.step(index, &state, cumulative)?;
        trace!(
            index,
            zone = %segment.zone,
            active = segment.active_tubes,
            t_primary_c = segment.primary_temperature.get::<degree_celsius>(),
            t_secondary_c = segment.secondary_inlet_temperature.get::<degree_celsius>(),
            lmtd_k = segment.lmtd.get::<kelvin>(),
            duty_w = segment.duty.get::<watt>(),
            "segment"
        );
        cumulative = segment.cumulative_duty;
        segments.push(segment);
        state = next;
    }

    let totals = Totals {
        duty: cumulative,
        area: segments
            .iter()
            .fold(Area::ZERO, |area, segment| area + segment.area),
        primary_inlet_temperature: inlet.temperature,
        primary_outlet_temperature: state.temperature,
        primary_inlet_enthalpy: inlet.enthalpy,
        primary_outlet_enthalpy: state.enthalpy,
        primary_outlet_phase: state.regime.phase(),
        secondary_inlet_temperature: inlet.secondary,
        secondary_outlet_temperature: state.secondary,
        terminal_delta_t: sat.temperature.minus(state.temperature) * input.kind.sign(),
        terminal_target: primary.terminal_target,
    };

    let zone_boundaries = summary::zone_boundaries(input.kind, &segments);
    let zone_summaries = summary::zone_summaries(input.kind, &segments);
    let adequacy = adequacy::analyze(&segments, &zone_boundaries, input, &sat);

    debug!(
        duty_w = totals.duty.get::<watt>(),
        terminal_k = totals.terminal_delta_t.get::<kelvin>(),
        adequate = adequacy.adequate,
        "march complete"
    );
    if !adequacy.adequate {
        warn!(
            zone = %adequacy.zone,
            severity = ?adequacy.severity,
            warnings = adequacy.warnings.len(),
            "terminal zone is undersized"
        );
    }

    Ok(MarchResults {
        kind: input.kind,
        segments,
        zone_boundaries,
        zone_summaries,
        totals,
        adequacy,
    })
}

/// Resolves the refrigerant and secondary states entering segment 1.
fn inlet_state<R>(
    input: &DesignInput,
    refrigerant: &R,
    sat: &SaturationProperties,
    config: &MarchConfig,
) -> Result<StreamState, MarchError>
where
    R: RefrigerantProperties + ?Sized,
{
    let primary = &input.primary;
    let lookup = |temperature: ThermodynamicTemperature, phase: Phase| {
        refrigerant
            .enthalpy(primary.refrigerant, temperature, sat.pressure, phase)
            .map_err(|err| {
                MarchError::property(None, format!("{} inlet enthalpy", primary.refrigerant), err)
            })
    };

    let (enthalpy, temperature) = match primary.inlet {
        PrimaryInlet::Superheated(t) => (lookup(t, Phase::SuperheatedVapor)?, t),
        PrimaryInlet::Subcooled(t) => (lookup(t, Phase::SubcooledLiquid)?, t),
        PrimaryInlet::TwoPhase(quality) => (
            sat.liquid_enthalpy + sat.latent_heat() * quality.into_inner(),
            sat.temperature,
        ),
    };

    let regime = classify(enthalpy, sat, config.phase_margin);
    let temperature = if regime.phase() == primary.inlet.phase() {
        temperature
    } else {
        anchored_temperature(regime, enthalpy, sat)
    };

    Ok(StreamState {
        enthalpy,
        temperature,
        regime,
        secondary: input.secondary.inlet_temperature,
    })
}

/// Everything a segment needs that does not change along the march.
struct Stepper<'a, A: ?Sized, R: ?Sized, S: ?Sized> {
    input: &'a DesignInput,
    allocator: &'a A,
    refrigerant: &'a R,
    liquid: &'a S,
    sat: &'a SaturationProperties,
    config: &'a MarchConfig,
}

impl<A, R, S> Stepper<'_, A, R, S>
where
    A: TubeAllocator + ?Sized,
    R: RefrigerantProperties + ?Sized,
    S: LiquidProperties + ?Sized,
{
    /// Evaluates segment `index` and returns it with the states leaving it.
    fn step(
        &self,
        index: usize,
        state: &StreamState,
        cumulative: Power,
    ) -> Result<(Segment, StreamState), MarchError> {
        let input = self.input;
        let kind = input.kind;
        let phase = state.regime.phase();
        let zone = kind.zone(phase);
        let active = self.allocator.active_tube_count(zone);
        let length = input.segment_length();

        #[allow(clippy::cast_precision_loss)]
        let mut segment = Segment {
            index,
            position: length * (index as f64 - 0.5),
            length,
            phase,
            zone,
            quality: state.regime.quality(),
            primary_temperature: state.temperature,
            primary_outlet_temperature: state.temperature,
            primary_inlet_enthalpy: state.enthalpy,
            primary_outlet_enthalpy: state.enthalpy,
            secondary_inlet_temperature: state.secondary,
            secondary_outlet_temperature: state.secondary,
            active_tubes: active,
            tube_side: HeatTransfer::ZERO,
            shell_side: HeatTransfer::ZERO,
            conductance: HeatTransfer::ZERO,
            lmtd: TemperatureInterval::ZERO,
            area: Area::ZERO,
            duty: Power::ZERO,
            cumulative_duty: cumulative,
        };

        if active == 0 {
            return Ok((segment, *state));
        }

        let primary = &input.primary;
        let secondary = &input.secondary;
        let geometry = &input.geometry;
        let sign = kind.sign();

        let liquid = self
            .liquid
            .liquid(secondary.fluid, state.secondary)
            .map_err(|err| {
                MarchError::property(
                    Some(index),
                    format!(
                        "{} at {:.2}°C",
                        secondary.fluid,
                        state.secondary.get::<degree_celsius>()
                    ),
                    err,
                )
            })?;

        let flow = TubeFlow {
            mass_rate: primary.mass_rate,
            inner_diameter: geometry.inner_diameter,
            parallel_tubes: geometry.circuits(active),
        };
        let (tube_side, primary_cp) = match state.regime {
            Regime::TwoPhase(quality) => {
                let h = match kind {
                    ExchangerKind::Condenser => two_phase::condensation(&flow, quality, self.sat),
                    ExchangerKind::Evaporator => two_phase::evaporation(&flow, quality, self.sat),
                };
                (h.map_err(|err| MarchError::correlation(index, err))?, None)
            }
            Regime::SuperheatedVapor | Regime::SubcooledLiquid => {
                let bulk = self
                    .refrigerant
                    .bulk(primary.refrigerant, state.temperature, self.sat.pressure, phase)
                    .map_err(|err| {
                        MarchError::property(
                            Some(index),
                            format!(
                                "{} {phase} at {:.2}°C",
                                primary.refrigerant,
                                state.temperature.get::<degree_celsius>()
                            ),
                            err,
                        )
                    })?;
                let h = single_phase::coefficient(&flow, &bulk)
                    .map_err(|err| MarchError::correlation(index, err))?;
                (h, Some(bulk.cp))
            }
        };

        let bank = CrossflowBank {
            mass_rate: secondary.mass_rate,
            outer_diameter: geometry.outer_diameter,
            pitch: geometry.pitch,
            baffle_spacing: geometry.baffle_spacing,
            active_tubes: active,
        };
        let shell_side = shell_side::crossflow(&bank, &liquid)
            .map_err(|err| MarchError::correlation(index, err))?;

        let conductance = overall_conductance(&ConductanceInputs {
            tube_side,
            shell_side,
            outer_diameter: geometry.outer_diameter,
            inner_diameter: geometry.inner_diameter,
            wall_conductivity: geometry.wall_conductivity,
            tube_fouling: input.fouling.tube_side,
            shell_fouling: input.fouling.shell_side,
        })
        .map_err(|err| MarchError::correlation(index, err))?;

        let lmtd = self.driving_force(state);

        #[allow(clippy::cast_precision_loss)]
        let area: Area = geometry.outer_diameter * length * (PI * active as f64);
        let transferable: Power = conductance * area * lmtd;

        let equilibrium = equilibrium_enthalpy(state.secondary, self.sat);
        let available: Power = ((state.enthalpy - equilibrium) * sign)
            .max(SpecificEnthalpy::ZERO)
            * primary.mass_rate;
        let duty = transferable.min(available);

        let enthalpy_change: SpecificEnthalpy = duty / primary.mass_rate;
        let enthalpy = state.enthalpy - enthalpy_change * sign;
        let secondary_change: TemperatureInterval = duty / (secondary.mass_rate * liquid.cp);
        let secondary_out = state.secondary + secondary_change * sign;

        let regime = classify(enthalpy, self.sat, self.config.phase_margin);
        let temperature = match primary_cp {
            _ if regime.phase() != phase => anchored_temperature(regime, enthalpy, self.sat),
            Some(cp) => {
                let change: TemperatureInterval = duty / (primary.mass_rate * cp);
                state.temperature + change * -sign
            }
            None => self.sat.temperature,
        };

        segment.tube_side = tube_side;
        segment.shell_side = shell_side;
        segment.conductance = conductance;
        segment.lmtd = lmtd;
        segment.area = area;
        segment.duty = duty;
        segment.cumulative_duty = cumulative + duty;
        segment.primary_outlet_temperature = temperature;
        segment.primary_outlet_enthalpy = enthalpy;
        segment.secondary_outlet_temperature = secondary_out;

        let next = StreamState {
            enthalpy,
            temperature,
            regime,
            secondary: secondary_out,
        };
        Ok((segment, next))
    }

    /// Returns the temperature difference driving heat into or out of the
    /// refrigerant, never negative.
    ///
    /// Two-phase segments see the difference between saturation and the
    /// entering secondary liquid. Single-phase segments use a counterflow
    /// log-mean built from the nominal temperature steps in [`MarchConfig`].
    fn driving_force(&self, state: &StreamState) -> TemperatureInterval {
        let sign = self.input.kind.sign();
        match state.regime {
            Regime::TwoPhase(_) => {
                (self.sat.temperature.minus(state.secondary) * sign).max(TemperatureInterval::ZERO)
            }
            Regime::SuperheatedVapor | Regime::SubcooledLiquid => {
                let secondary_out = state.secondary + self.config.secondary_step * sign;
                let primary_out = state.temperature + self.config.primary_step * -sign;
                log_mean(
                    state.temperature.minus(secondary_out) * sign,
                    primary_out.minus(state.secondary) * sign,
                    self.config.lmtd_tolerance,
                )
            }
        }
    }
}

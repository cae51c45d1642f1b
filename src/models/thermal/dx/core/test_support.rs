use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{
            Area, HeatTransfer, Length, MassRate, Power, TemperatureInterval,
            ThermodynamicTemperature, VolumeRate,
        },
        heat_transfer::watt_per_square_meter_kelvin,
        length::{meter, millimeter},
        mass_rate::kilogram_per_second,
        power::watt,
        temperature_interval::kelvin,
        thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_second,
    },
};

use crate::support::{
    constraint::UnitInterval,
    thermo::{
        Phase,
        capability::{RefrigerantProperties, SaturationProperties},
        fluid::{Refrigerant, SecondaryFluid},
        model::{IncompressibleLiquid, Tabulated},
    },
    units::SpecificEnthalpy,
};

use super::{
    BwgGauge, DesignInput, ExchangerKind, PrimaryInlet, PrimaryStream, Segment, SecondaryStream,
    SegmentMarcher, TubeGeometry, TubeSize, Zone,
};

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn marcher() -> SegmentMarcher<Tabulated, IncompressibleLiquid> {
    SegmentMarcher::new(Tabulated, IncompressibleLiquid)
}

/// R134a saturated at 45 °C.
pub(super) fn saturation() -> SaturationProperties {
    Tabulated
        .saturated(Refrigerant::R134a, celsius(45.0))
        .unwrap()
}

/// A 200-tube, 8-pass R134a water-cooled condenser.
///
/// Vapor enters at 95 °C and condenses at 45 °C against 24 851 L/h of
/// water entering at 35 °C, with a 5 K subcooling target.
pub(super) fn condenser(length_m: f64) -> DesignInput {
    let primary = PrimaryStream {
        refrigerant: Refrigerant::R134a,
        mass_rate: MassRate::new::<kilogram_per_second>(0.221),
        inlet: PrimaryInlet::Superheated(celsius(95.0)),
        saturation_temperature: celsius(45.0),
        terminal_target: TemperatureInterval::new::<kelvin>(5.0),
    };
    let secondary = SecondaryStream::from_volume_rate(
        SecondaryFluid::Water,
        VolumeRate::new::<cubic_meter_per_second>(24_851.0 / 3.6e6),
        celsius(35.0),
        &IncompressibleLiquid,
    )
    .unwrap();
    let geometry = TubeGeometry::standard(
        200,
        Length::new::<meter>(length_m),
        TubeSize::ThreeEighthsInch,
        BwgGauge::Bwg20,
    )
    .with_pitch(Length::new::<millimeter>(12.7))
    .with_baffle_spacing(Length::new::<meter>(0.2))
    .with_passes(8);

    DesignInput::new(ExchangerKind::Condenser, primary, secondary, geometry).with_segments(20)
}

/// A 100-tube, 4-pass R410A chiller barrel.
///
/// Refrigerant enters at 20 % quality and evaporates at 5 °C against
/// 2 kg/s of water entering at 12 °C, with a 5 K superheat target.
pub(super) fn evaporator() -> DesignInput {
    let primary = PrimaryStream {
        refrigerant: Refrigerant::R410A,
        mass_rate: MassRate::new::<kilogram_per_second>(0.1),
        inlet: PrimaryInlet::TwoPhase(UnitInterval::new(0.2).unwrap()),
        saturation_temperature: celsius(5.0),
        terminal_target: TemperatureInterval::new::<kelvin>(5.0),
    };
    let secondary = SecondaryStream {
        fluid: SecondaryFluid::Water,
        mass_rate: MassRate::new::<kilogram_per_second>(2.0),
        inlet_temperature: celsius(12.0),
    };
    let geometry = TubeGeometry::standard(
        100,
        Length::new::<meter>(2.0),
        TubeSize::ThreeEighthsInch,
        BwgGauge::Bwg20,
    )
    .with_pitch(Length::new::<millimeter>(12.7))
    .with_passes(4);

    DesignInput::new(ExchangerKind::Evaporator, primary, secondary, geometry)
}

/// A hand-built 0.1 m segment with 0.1 m² of area.
pub(super) fn segment(
    index: usize,
    zone: Zone,
    duty_w: f64,
    conductance_w_m2k: f64,
    lmtd_k: f64,
) -> Segment {
    #[allow(clippy::cast_precision_loss)]
    let position = 0.1 * (index as f64 - 0.5);
    let phase = zone.phase();
    let conductance = HeatTransfer::new::<watt_per_square_meter_kelvin>(conductance_w_m2k);
    let duty = Power::new::<watt>(duty_w);

    Segment {
        index,
        position: Length::new::<meter>(position),
        length: Length::new::<meter>(0.1),
        phase,
        zone,
        quality: (phase == Phase::TwoPhase).then(|| UnitInterval::new(0.5).unwrap()),
        primary_temperature: celsius(45.0),
        primary_outlet_temperature: celsius(45.0),
        primary_inlet_enthalpy: SpecificEnthalpy::ZERO,
        primary_outlet_enthalpy: SpecificEnthalpy::ZERO,
        secondary_inlet_temperature: celsius(35.0),
        secondary_outlet_temperature: celsius(35.0),
        active_tubes: 200,
        tube_side: conductance,
        shell_side: conductance,
        conductance,
        lmtd: TemperatureInterval::new::<kelvin>(lmtd_k),
        area: Area::new::<square_meter>(0.1),
        duty,
        cumulative_duty: duty,
    }
}

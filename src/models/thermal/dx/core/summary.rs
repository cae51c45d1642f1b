//! Zone boundaries and per-zone totals.

use uom::{
    ConstZero,
    si::f64::{Area, HeatTransfer, Length, Power, TemperatureInterval},
};

use crate::support::thermo::Phase;

use super::{ExchangerKind, Segment, Zone};

/// Where a zone sits along the tubes.
///
/// Positions are segment midpoints, matching [`Segment::position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBoundary {
    pub zone: Zone,
    pub phase: Phase,
    pub first_segment: usize,
    pub last_segment: usize,
    pub start_position: Length,
    pub end_position: Length,
    /// Combined length of the zone's segments.
    pub length: Length,
    pub segment_count: usize,
}

/// Totals and averages over the segments of one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneSummary {
    pub zone: Zone,
    pub duty: Power,
    pub area: Area,
    pub length: Length,
    pub mean_conductance: HeatTransfer,
    pub mean_tube_side: HeatTransfer,
    pub mean_lmtd: TemperatureInterval,
    pub segment_count: usize,
}

/// Returns a boundary for each zone the march visited, in flow order.
pub(super) fn zone_boundaries(kind: ExchangerKind, segments: &[Segment]) -> Vec<ZoneBoundary> {
    kind.zones()
        .into_iter()
        .filter_map(|zone| {
            let members: Vec<&Segment> = in_zone(segments, zone).collect();
            let (first, last) = (members.first()?, members.last()?);
            Some(ZoneBoundary {
                zone,
                phase: zone.phase(),
                first_segment: first.index,
                last_segment: last.index,
                start_position: first.position,
                end_position: last.position,
                length: members.iter().fold(Length::ZERO, |sum, s| sum + s.length),
                segment_count: members.len(),
            })
        })
        .collect()
}

/// Returns a summary for each zone the march visited, in flow order.
pub(super) fn zone_summaries(kind: ExchangerKind, segments: &[Segment]) -> Vec<ZoneSummary> {
    kind.zones()
        .into_iter()
        .filter_map(|zone| summarize(zone, segments))
        .collect()
}

/// Summarizes the segments of `zone`, or `None` if there are none.
#[allow(clippy::cast_precision_loss)]
pub(super) fn summarize(zone: Zone, segments: &[Segment]) -> Option<ZoneSummary> {
    let members: Vec<&Segment> = in_zone(segments, zone).collect();
    if members.is_empty() {
        return None;
    }
    let n = members.len() as f64;

    let mut summary = ZoneSummary {
        zone,
        duty: Power::ZERO,
        area: Area::ZERO,
        length: Length::ZERO,
        mean_conductance: HeatTransfer::ZERO,
        mean_tube_side: HeatTransfer::ZERO,
        mean_lmtd: TemperatureInterval::ZERO,
        segment_count: members.len(),
    };
    for segment in &members {
        summary.duty += segment.duty;
        summary.area += segment.area;
        summary.length += segment.length;
        summary.mean_conductance += segment.conductance;
        summary.mean_tube_side += segment.tube_side;
        summary.mean_lmtd += segment.lmtd;
    }
    summary.mean_conductance /= n;
    summary.mean_tube_side /= n;
    summary.mean_lmtd /= n;

    Some(summary)
}

fn in_zone(segments: &[Segment], zone: Zone) -> impl Iterator<Item = &Segment> {
    segments.iter().filter(move |segment| segment.zone == zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        heat_transfer::watt_per_square_meter_kelvin, length::meter, power::watt,
        temperature_interval::kelvin,
    };

    use crate::models::thermal::dx::core::test_support::segment;

    fn trace() -> Vec<Segment> {
        let mut segments = vec![
            segment(1, Zone::Desuperheat, 100.0, 400.0, 10.0),
            segment(2, Zone::Condense, 900.0, 800.0, 8.0),
            segment(3, Zone::Condense, 700.0, 600.0, 6.0),
            segment(4, Zone::Subcool, 300.0, 500.0, 4.0),
        ];
        let mut cumulative = Power::ZERO;
        for s in &mut segments {
            cumulative += s.duty;
            s.cumulative_duty = cumulative;
        }
        segments
    }

    #[test]
    fn boundaries_cover_each_visited_zone() {
        let boundaries = zone_boundaries(ExchangerKind::Condenser, &trace());
        assert_eq!(boundaries.len(), 3);

        let condense = boundaries[1];
        assert_eq!(condense.zone, Zone::Condense);
        assert_eq!((condense.first_segment, condense.last_segment), (2, 3));
        assert_eq!(condense.segment_count, 2);
        assert_relative_eq!(condense.start_position.get::<meter>(), 0.15, epsilon = 1e-12);
        assert_relative_eq!(condense.end_position.get::<meter>(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(condense.length.get::<meter>(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn missing_zones_are_skipped() {
        let trace: Vec<Segment> = trace().into_iter().take(3).collect();
        let boundaries = zone_boundaries(ExchangerKind::Condenser, &trace);
        assert!(boundaries.iter().all(|b| b.zone != Zone::Subcool));
        assert!(summarize(Zone::Subcool, &trace).is_none());
    }

    #[test]
    fn summaries_total_and_average() {
        let summaries = zone_summaries(ExchangerKind::Condenser, &trace());
        let condense = summaries[1];
        assert_relative_eq!(condense.duty.get::<watt>(), 1600.0);
        assert_relative_eq!(
            condense.mean_conductance.get::<watt_per_square_meter_kelvin>(),
            700.0
        );
        assert_relative_eq!(condense.mean_lmtd.get::<kelvin>(), 7.0);

        let total: f64 = summaries.iter().map(|s| s.duty.get::<watt>()).sum();
        assert_relative_eq!(total, 2000.0);
    }
}

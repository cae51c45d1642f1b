//! Terminal-zone adequacy.
//!
//! The terminal zone (subcool in a condenser, superheat in an evaporator) is
//! where the design target is earned. Its required area follows from the
//! zone's own average coefficient and driving force:
//!
//! ```text
//! A_req = ṁ·cp·ΔT_target / (U_avg·LMTD_avg)
//! ```
//!
//! with `cp` taken at saturation for the terminal phase. The zone is
//! adequate when its actual area reaches [`ADEQUACY_RATIO`] of `A_req`.

mod recommendation;
mod warning;

pub use recommendation::{Recommendation, Span};
pub use warning::Warning;

use std::fmt;

use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatTransfer, Power, TemperatureInterval},
        temperature_interval::kelvin,
    },
};

use crate::support::{
    thermo::{Phase, capability::SaturationProperties},
    units::TemperatureDifference,
};

use super::{DesignInput, Segment, Zone, ZoneBoundary, summary::summarize};

/// Fraction of the required area the terminal zone must provide.
pub const ADEQUACY_RATIO: f64 = 0.95;

/// Area deficits above this percentage are severe.
pub const SEVERE_DEFICIT_PERCENT: f64 = 50.0;

/// Area deficits above this percentage are moderate.
pub const MODERATE_DEFICIT_PERCENT: f64 = 20.0;

/// Multiplier applied to the deficit percentage when suggesting extra length.
pub const LENGTH_SAFETY_FACTOR: f64 = 1.1;

/// Multiplier applied to the deficit area when sizing a separate section.
pub const SECTION_SAFETY_FACTOR: f64 = 1.2;

/// Approach below which the start of the terminal zone is pinched, in K.
pub const PINCH_APPROACH_KELVIN: f64 = 3.0;

/// How far a design falls short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
    /// The terminal zone is missing or has no tubes.
    Critical,
}

impl Severity {
    fn from_deficit(percent: f64) -> Self {
        if percent > SEVERE_DEFICIT_PERCENT {
            Self::Severe
        } else if percent > MODERATE_DEFICIT_PERCENT {
            Self::Moderate
        } else {
            Self::Minor
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Critical => "critical",
        })
    }
}

/// Missing terminal area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deficit {
    pub area: Area,
    /// Deficit as a percentage of the required area.
    pub percent: f64,
}

/// Whether the terminal zone can deliver the target, and what to change if not.
#[derive(Debug, Clone, PartialEq)]
pub struct AdequacyAnalysis {
    pub zone: Zone,
    pub adequate: bool,
    pub actual_area: Area,

    /// Area the target needs, or `None` when the zone is missing or inactive.
    pub required_area: Option<Area>,

    /// `actual / required`, or `None` when nothing is required.
    pub ratio: Option<f64>,

    pub deficit: Option<Deficit>,

    /// `None` when adequate.
    pub severity: Option<Severity>,

    pub warnings: Vec<Warning>,

    /// Ranked from most to least effective.
    pub recommendations: Vec<Recommendation>,
}

impl AdequacyAnalysis {
    /// Returns `true` if any warning is critical.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.warnings.iter().any(Warning::is_critical)
    }

    fn unworkable(zone: Zone, warning: Warning) -> Self {
        Self {
            zone,
            adequate: false,
            actual_area: Area::ZERO,
            required_area: None,
            ratio: None,
            deficit: None,
            severity: Some(Severity::Critical),
            warnings: vec![warning],
            recommendations: structural(),
        }
    }
}

/// Analyzes the terminal zone of a completed trace.
///
/// `sat` must be the saturation state the trace was marched at.
#[must_use]
pub fn analyze(
    segments: &[Segment],
    boundaries: &[ZoneBoundary],
    input: &DesignInput,
    sat: &SaturationProperties,
) -> AdequacyAnalysis {
    let kind = input.kind;
    let zone = kind.terminal_zone();

    let Some(boundary) = boundaries.iter().find(|b| b.zone == zone) else {
        return AdequacyAnalysis::unworkable(zone, Warning::MissingTerminalZone { zone });
    };
    let Some(summary) = summarize(zone, segments) else {
        return AdequacyAnalysis::unworkable(zone, Warning::MissingTerminalZone { zone });
    };

    let mut analysis = if summary.mean_conductance > HeatTransfer::ZERO {
        let cp = match kind.terminal_phase() {
            Phase::SubcooledLiquid => sat.liquid.cp,
            _ => sat.vapor.cp,
        };
        let duty: Power = input.primary.mass_rate * cp * input.primary.terminal_target;
        let required = if summary.mean_lmtd > TemperatureInterval::ZERO {
            duty / (summary.mean_conductance * summary.mean_lmtd)
        } else {
            Area::ZERO
        };
        sized(zone, summary.area, required)
    } else {
        let mut inactive =
            AdequacyAnalysis::unworkable(zone, Warning::InactiveTerminalZone { zone });
        inactive.actual_area = summary.area;
        inactive
    };

    let first = segments.iter().find(|s| s.index == boundary.first_segment);
    if let Some(first) = first {
        let approach = sat.temperature.minus(first.secondary_outlet_temperature) * kind.sign();
        if approach < TemperatureInterval::new::<kelvin>(PINCH_APPROACH_KELVIN) {
            analysis.warnings.push(Warning::ThermalPinch { approach });
            if !analysis.recommendations.contains(&Recommendation::ZonedDesign) {
                analysis.recommendations.push(Recommendation::ZonedDesign);
            }
        }
    }

    analysis
}

/// Compares actual and required area for a zone with active tubes.
fn sized(zone: Zone, actual: Area, required: Area) -> AdequacyAnalysis {
    let adequate = actual >= required * ADEQUACY_RATIO;
    let ratio = (required > Area::ZERO).then(|| (actual / required).value);

    let mut analysis = AdequacyAnalysis {
        zone,
        adequate,
        actual_area: actual,
        required_area: Some(required),
        ratio,
        deficit: None,
        severity: None,
        warnings: Vec::new(),
        recommendations: Vec::new(),
    };
    if adequate {
        return analysis;
    }

    let area = required - actual;
    let percent = (area / required).value * 100.0;
    let severity = Severity::from_deficit(percent);
    let length = Recommendation::IncreaseLength {
        percent: Span::exact(percent * LENGTH_SAFETY_FACTOR),
    };
    let section = Recommendation::AddTerminalSection {
        area: Some(area * SECTION_SAFETY_FACTOR),
    };

    analysis.deficit = Some(Deficit { area, percent });
    analysis.severity = Some(severity);
    analysis.warnings.push(Warning::InsufficientArea {
        actual,
        required,
        deficit_percent: percent,
    });
    analysis.recommendations = match severity {
        Severity::Severe | Severity::Critical => {
            vec![section, length, Recommendation::ZonedDesign]
        }
        Severity::Moderate => vec![
            length,
            section,
            Recommendation::ShiftSecondaryInlet {
                kelvin: Some(Span::new(3.0, 5.0)),
            },
            Recommendation::IncreaseSecondaryFlow {
                percent: Some(Span::new(20.0, 30.0)),
            },
        ],
        Severity::Minor => vec![
            length,
            Recommendation::ShiftSecondaryInlet {
                kelvin: Some(Span::new(2.0, 3.0)),
            },
            Recommendation::IncreaseSecondaryFlow {
                percent: Some(Span::new(10.0, 15.0)),
            },
            Recommendation::AcceptReducedTarget,
        ],
    };
    analysis
}

/// Changes for a terminal zone that does not exist or cannot transfer heat.
fn structural() -> Vec<Recommendation> {
    vec![
        Recommendation::IncreaseLength {
            percent: Span::new(20.0, 30.0),
        },
        Recommendation::AddTerminalSection { area: None },
        Recommendation::ShiftSecondaryInlet { kelvin: None },
        Recommendation::IncreaseSecondaryFlow { percent: None },
    ]
}

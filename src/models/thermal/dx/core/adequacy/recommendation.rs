use std::fmt;

use uom::si::{area::square_meter, f64::Area};

/// A closed range of suggested values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub low: f64,
    pub high: f64,
}

impl Span {
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// A span holding a single value.
    #[must_use]
    pub fn exact(value: f64) -> Self {
        Self::new(value, value)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::float_cmp)]
        if self.low == self.high {
            write!(f, "{:.0}", self.low)
        } else {
            write!(f, "{:.0}-{:.0}", self.low, self.high)
        }
    }
}

/// A design change that would enlarge the terminal zone, ranked by the
/// order it appears in [`AdequacyAnalysis::recommendations`].
///
/// [`AdequacyAnalysis::recommendations`]: super::AdequacyAnalysis::recommendations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation {
    /// Lengthen the tubes by a percentage.
    IncreaseLength { percent: Span },

    /// Add a dedicated subcooler or superheater section.
    AddTerminalSection { area: Option<Area> },

    /// Partition the bundle so the terminal zone gets its own tubes.
    ZonedDesign,

    /// Move the secondary inlet temperature further from saturation, in K.
    ShiftSecondaryInlet { kelvin: Option<Span> },

    /// Raise the secondary flow by a percentage.
    IncreaseSecondaryFlow { percent: Option<Span> },

    /// Accept a slightly smaller terminal temperature difference.
    AcceptReducedTarget,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncreaseLength { percent } => write!(f, "increase tube length by {percent}%"),
            Self::AddTerminalSection { area: Some(area) } => write!(
                f,
                "add a dedicated terminal section of {:.3} m²",
                area.get::<square_meter>()
            ),
            Self::AddTerminalSection { area: None } => f.write_str("add a dedicated terminal section"),
            Self::ZonedDesign => f.write_str("dedicate tubes to the terminal zone in a zoned design"),
            Self::ShiftSecondaryInlet { kelvin: Some(span) } => write!(
                f,
                "move the secondary inlet temperature {span} K further from saturation"
            ),
            Self::ShiftSecondaryInlet { kelvin: None } => {
                f.write_str("move the secondary inlet temperature further from saturation")
            }
            Self::IncreaseSecondaryFlow { percent: Some(span) } => {
                write!(f, "increase secondary flow by {span}%")
            }
            Self::IncreaseSecondaryFlow { percent: None } => f.write_str("increase secondary flow"),
            Self::AcceptReducedTarget => {
                f.write_str("accept a slightly smaller terminal temperature difference")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_collapse_when_exact() {
        let length = Recommendation::IncreaseLength {
            percent: Span::exact(47.3),
        };
        assert_eq!(length.to_string(), "increase tube length by 47%");

        let flow = Recommendation::IncreaseSecondaryFlow {
            percent: Some(Span::new(20.0, 30.0)),
        };
        assert_eq!(flow.to_string(), "increase secondary flow by 20-30%");
    }
}

use std::fmt;

/// Thermodynamic phase of a refrigerant stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    SuperheatedVapor,
    TwoPhase,
    SubcooledLiquid,
}

impl Phase {
    /// Returns `true` for the single-phase regimes.
    #[must_use]
    pub fn is_single_phase(self) -> bool {
        !matches!(self, Phase::TwoPhase)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::SuperheatedVapor => "superheated vapor",
            Phase::TwoPhase => "two-phase",
            Phase::SubcooledLiquid => "subcooled liquid",
        })
    }
}

use std::fmt;

/// Single-phase liquids that may flow on the shell side.
///
/// Glycol brines are fixed 30 % (by mass) blends, the usual choice for
/// chillers that must survive freezing ambients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecondaryFluid {
    #[default]
    Water,
    EthyleneGlycol30,
    PropyleneGlycol30,
}

impl fmt::Display for SecondaryFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SecondaryFluid::Water => "water",
            SecondaryFluid::EthyleneGlycol30 => "ethylene glycol 30%",
            SecondaryFluid::PropyleneGlycol30 => "propylene glycol 30%",
        })
    }
}

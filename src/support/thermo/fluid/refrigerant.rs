use std::fmt;

/// Refrigerants that may flow on the tube side of a DX exchanger.
///
/// Only refrigerants with built-in property data are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refrigerant {
    R134a,
    R410A,
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Refrigerant::R134a => "R134a",
            Refrigerant::R410A => "R410A",
        })
    }
}

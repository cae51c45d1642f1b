//! Exchanger kinds and the thermal zones they march through.

use std::fmt;

use crate::support::thermo::Phase;

/// Whether the refrigerant rejects or absorbs heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangerKind {
    /// Refrigerant enters as vapor and is cooled by the secondary liquid.
    Condenser,
    /// Refrigerant enters as liquid or mixture and is heated by the secondary liquid.
    Evaporator,
}

impl ExchangerKind {
    /// Returns the phases the refrigerant passes through, in flow order.
    #[must_use]
    pub fn phase_order(self) -> [Phase; 3] {
        match self {
            Self::Condenser => [Phase::SuperheatedVapor, Phase::TwoPhase, Phase::SubcooledLiquid],
            Self::Evaporator => [Phase::SubcooledLiquid, Phase::TwoPhase, Phase::SuperheatedVapor],
        }
    }

    /// Returns the zones in flow order.
    #[must_use]
    pub fn zones(self) -> [Zone; 3] {
        self.phase_order().map(|phase| self.zone(phase))
    }

    /// Maps a refrigerant phase to the zone it occupies in this exchanger.
    #[must_use]
    pub fn zone(self, phase: Phase) -> Zone {
        match (self, phase) {
            (Self::Condenser, Phase::SuperheatedVapor) => Zone::Desuperheat,
            (Self::Condenser, Phase::TwoPhase) => Zone::Condense,
            (Self::Condenser, Phase::SubcooledLiquid) => Zone::Subcool,
            (Self::Evaporator, Phase::SubcooledLiquid) => Zone::Preheat,
            (Self::Evaporator, Phase::TwoPhase) => Zone::Evaporate,
            (Self::Evaporator, Phase::SuperheatedVapor) => Zone::Superheat,
        }
    }

    /// Returns the phase the refrigerant should leave in.
    #[must_use]
    pub fn terminal_phase(self) -> Phase {
        match self {
            Self::Condenser => Phase::SubcooledLiquid,
            Self::Evaporator => Phase::SuperheatedVapor,
        }
    }

    /// Returns the zone whose temperature difference is the design target:
    /// subcooling for a condenser, superheat for an evaporator.
    #[must_use]
    pub fn terminal_zone(self) -> Zone {
        self.zone(self.terminal_phase())
    }

    /// `+1` when the refrigerant rejects heat, `-1` when it absorbs it.
    pub(crate) fn sign(self) -> f64 {
        match self {
            Self::Condenser => 1.0,
            Self::Evaporator => -1.0,
        }
    }
}

impl fmt::Display for ExchangerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Condenser => "condenser",
            Self::Evaporator => "evaporator",
        })
    }
}

/// A region of the bundle named by the refrigerant phase within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Desuperheat,
    Condense,
    Subcool,
    Preheat,
    Evaporate,
    Superheat,
}

impl Zone {
    /// Returns the exchanger kind this zone belongs to.
    #[must_use]
    pub fn kind(self) -> ExchangerKind {
        match self {
            Self::Desuperheat | Self::Condense | Self::Subcool => ExchangerKind::Condenser,
            Self::Preheat | Self::Evaporate | Self::Superheat => ExchangerKind::Evaporator,
        }
    }

    /// Returns the refrigerant phase inside this zone.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            Self::Desuperheat | Self::Superheat => Phase::SuperheatedVapor,
            Self::Condense | Self::Evaporate => Phase::TwoPhase,
            Self::Subcool | Self::Preheat => Phase::SubcooledLiquid,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Desuperheat => "desuperheat",
            Self::Condense => "condense",
            Self::Subcool => "subcool",
            Self::Preheat => "preheat",
            Self::Evaporate => "evaporate",
            Self::Superheat => "superheat",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_follow_phase_order() {
        assert_eq!(
            ExchangerKind::Condenser.zones(),
            [Zone::Desuperheat, Zone::Condense, Zone::Subcool]
        );
        assert_eq!(
            ExchangerKind::Evaporator.zones(),
            [Zone::Preheat, Zone::Evaporate, Zone::Superheat]
        );
    }

    #[test]
    fn zone_round_trips_through_its_phase() {
        for kind in [ExchangerKind::Condenser, ExchangerKind::Evaporator] {
            for zone in kind.zones() {
                assert_eq!(zone.kind(), kind);
                assert_eq!(kind.zone(zone.phase()), zone);
            }
        }
    }

    #[test]
    fn terminal_zones() {
        assert_eq!(ExchangerKind::Condenser.terminal_zone(), Zone::Subcool);
        assert_eq!(ExchangerKind::Evaporator.terminal_zone(), Zone::Superheat);
        assert_eq!(Zone::Subcool.to_string(), "subcool");
    }
}

//! Zone and row allocation.
//!
//! An allocator answers one question for the marcher: how many tubes are
//! thermally active in a given zone. [`UniformAllocator`] models an unzoned
//! bundle where every zone sees every tube. [`AssignedAllocator`] models a
//! partitioned bundle where each physical tube belongs to at most one zone.

mod assigned;
mod error;
mod uniform;

pub use assigned::{AssignedAllocator, ZoneShare};
pub use error::AllocationError;
pub use uniform::UniformAllocator;

use super::{ExchangerKind, Zone};

/// Decides which tubes are active in each zone.
pub trait TubeAllocator {
    /// Returns the number of tubes carrying refrigerant in `zone`.
    fn active_tube_count(&self, zone: Zone) -> usize;

    /// Checks the allocation against the exchanger before marching.
    ///
    /// # Errors
    ///
    /// Returns an [`AllocationError`] if the allocation references more tubes
    /// than `total_tubes` or zones foreign to `kind`.
    fn check(&self, kind: ExchangerKind, total_tubes: usize) -> Result<(), AllocationError>;
}

impl<T: TubeAllocator + ?Sized> TubeAllocator for &T {
    fn active_tube_count(&self, zone: Zone) -> usize {
        (**self).active_tube_count(zone)
    }

    fn check(&self, kind: ExchangerKind, total_tubes: usize) -> Result<(), AllocationError> {
        (**self).check(kind, total_tubes)
    }
}

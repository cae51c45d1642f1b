use crate::models::thermal::dx::core::{ExchangerKind, Zone};

use super::{AllocationError, TubeAllocator};

/// Every zone uses the same tubes.
///
/// This is the default for an unzoned bundle, where the refrigerant passes
/// through all tubes and changes phase along their length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformAllocator {
    tubes: usize,
}

impl UniformAllocator {
    /// Creates an allocator that reports `tubes` active tubes in every zone.
    #[must_use]
    pub fn new(tubes: usize) -> Self {
        Self { tubes }
    }
}

impl TubeAllocator for UniformAllocator {
    fn active_tube_count(&self, _zone: Zone) -> usize {
        self.tubes
    }

    fn check(&self, _kind: ExchangerKind, total_tubes: usize) -> Result<(), AllocationError> {
        if self.tubes > total_tubes {
            return Err(AllocationError::ExceedsTotal {
                count: self.tubes,
                total: total_tubes,
            });
        }
        Ok(())
    }
}

use std::ops::Range;

use crate::models::thermal::dx::core::{ExchangerKind, Zone};

use super::{AllocationError, TubeAllocator};

/// Explicit zone membership for each physical tube.
///
/// Tubes are indexed from zero. A tube with no zone is inactive: it carries
/// no refrigerant and contributes no area to any segment.
///
/// # Example
///
/// ```
/// use dx_exchanger_models::models::thermal::dx::{AssignedAllocator, TubeAllocator, Zone};
///
/// let mut allocation = AssignedAllocator::new(200);
/// allocation.assign_rows(0..2, 20, Zone::Desuperheat).unwrap();
/// allocation.assign_range(40..160, Zone::Condense).unwrap();
/// allocation.assign_range(160..200, Zone::Subcool).unwrap();
///
/// assert_eq!(allocation.active_tube_count(Zone::Condense), 120);
/// assert_eq!(allocation.active_tube_count(Zone::Subcool), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedAllocator {
    tubes: Vec<Option<Zone>>,
}

/// One line of an allocation summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneShare {
    /// The zone, or `None` for inactive tubes.
    pub zone: Option<Zone>,
    pub count: usize,
    /// Share of the bundle in percent.
    pub percent: f64,
}

impl AssignedAllocator {
    /// Creates an allocation of `tubes` tubes, all inactive.
    #[must_use]
    pub fn new(tubes: usize) -> Self {
        Self {
            tubes: vec![None; tubes],
        }
    }

    /// Creates an allocation with every tube in `zone`.
    #[must_use]
    pub fn all(tubes: usize, zone: Zone) -> Self {
        Self {
            tubes: vec![Some(zone); tubes],
        }
    }

    /// Splits `tubes` into contiguous blocks by percentage, in the order given.
    ///
    /// Block edges are rounded from the cumulative percentage, so the counts
    /// always add up to the rounded total share. Shares summing to less than
    /// 100 % leave the remaining tubes inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::InvalidShare`] for a negative or non-finite
    /// share and [`AllocationError::SharesExceedTotal`] if the shares sum to
    /// more than 100 %.
    pub fn by_percentage(tubes: usize, shares: &[(Zone, f64)]) -> Result<Self, AllocationError> {
        let mut total = 0.0;
        for &(zone, percent) in shares {
            if !percent.is_finite() || percent < 0.0 {
                return Err(AllocationError::InvalidShare { zone, percent });
            }
            total += percent;
        }
        if total > 100.0 + 1e-9 {
            return Err(AllocationError::SharesExceedTotal { percent: total });
        }

        #[allow(clippy::cast_precision_loss)]
        let edge = |percent: f64| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = (percent.min(100.0) / 100.0 * tubes as f64).round() as usize;
            index.min(tubes)
        };

        let mut allocation = Self::new(tubes);
        let mut cumulative = 0.0;
        for &(zone, percent) in shares {
            let start = edge(cumulative);
            cumulative += percent;
            allocation.assign_range(start..edge(cumulative), zone)?;
        }
        Ok(allocation)
    }

    /// Assigns a single tube.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::TubeOutOfRange`] if `index` is not a tube.
    pub fn assign(&mut self, index: usize, zone: Zone) -> Result<(), AllocationError> {
        let end = index.checked_add(1).ok_or(AllocationError::TubeOutOfRange {
            index,
            total: self.tubes.len(),
        })?;
        self.assign_range(index..end, zone)
    }

    /// Assigns a contiguous range of tubes, replacing earlier assignments.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::ReversedRange`] if the range starts after it
    /// ends and [`AllocationError::TubeOutOfRange`] if it runs past the last
    /// tube.
    pub fn assign_range(&mut self, range: Range<usize>, zone: Zone) -> Result<(), AllocationError> {
        let total = self.tubes.len();
        if range.start > range.end {
            return Err(AllocationError::ReversedRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > total {
            return Err(AllocationError::TubeOutOfRange {
                index: range.end - 1,
                total,
            });
        }
        for tube in &mut self.tubes[range] {
            *tube = Some(zone);
        }
        Ok(())
    }

    /// Assigns whole tube rows, numbered from zero.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::EmptyRows`] if no tubes are named and
    /// [`AllocationError::TubeOutOfRange`] if the rows run past the bundle.
    /// Reversed rows are an [`AllocationError::EmptyRows`] too.
    pub fn assign_rows(
        &mut self,
        rows: Range<usize>,
        tubes_per_row: usize,
        zone: Zone,
    ) -> Result<(), AllocationError> {
        if tubes_per_row == 0 || rows.is_empty() {
            return Err(AllocationError::EmptyRows);
        }
        let total = self.tubes.len();
        let tube = |row: usize| {
            row.checked_mul(tubes_per_row)
                .ok_or(AllocationError::TubeOutOfRange {
                    index: usize::MAX,
                    total,
                })
        };
        self.assign_range(tube(rows.start)?..tube(rows.end)?, zone)
    }

    /// Marks a tube inactive.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::TubeOutOfRange`] if `index` is not a tube.
    pub fn deactivate(&mut self, index: usize) -> Result<(), AllocationError> {
        let total = self.tubes.len();
        let tube = self
            .tubes
            .get_mut(index)
            .ok_or(AllocationError::TubeOutOfRange { index, total })?;
        *tube = None;
        Ok(())
    }

    /// Returns the zone of each tube.
    #[must_use]
    pub fn tubes(&self) -> &[Option<Zone>] {
        &self.tubes
    }

    /// Returns tube counts per zone of `kind`, followed by the inactive tubes.
    #[must_use]
    pub fn summary(&self, kind: ExchangerKind) -> Vec<ZoneShare> {
        #[allow(clippy::cast_precision_loss)]
        let share = |zone: Option<Zone>| {
            let count = self.tubes.iter().filter(|&&tube| tube == zone).count();
            let percent = if self.tubes.is_empty() {
                0.0
            } else {
                100.0 * count as f64 / self.tubes.len() as f64
            };
            ZoneShare {
                zone,
                count,
                percent,
            }
        };

        kind.zones()
            .into_iter()
            .map(Some)
            .chain([None])
            .map(share)
            .collect()
    }
}

impl TubeAllocator for AssignedAllocator {
    fn active_tube_count(&self, zone: Zone) -> usize {
        self.tubes.iter().filter(|&&tube| tube == Some(zone)).count()
    }

    fn check(&self, kind: ExchangerKind, total_tubes: usize) -> Result<(), AllocationError> {
        for (index, tube) in self.tubes.iter().enumerate() {
            let Some(zone) = *tube else { continue };
            if zone.kind() != kind {
                return Err(AllocationError::ForeignZone { zone, kind });
            }
            if index >= total_tubes {
                return Err(AllocationError::TubeOutOfRange {
                    index,
                    total: total_tubes,
                });
            }
        }
        Ok(())
    }
}

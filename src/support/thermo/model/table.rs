//! Temperature-indexed property tables with linear interpolation.

/// Slack allowed at the table edges, in °C.
const EDGE: f64 = 1e-9;

/// A property table whose first column is temperature in °C.
///
/// Rows must be sorted by strictly increasing temperature.
#[derive(Debug)]
pub(super) struct Table<const C: usize> {
    rows: &'static [[f64; C]],
}

impl<const C: usize> Table<C> {
    pub(super) const fn new(rows: &'static [[f64; C]]) -> Self {
        Self { rows }
    }

    /// Returns the covered temperature range in °C.
    pub(super) fn range(&self) -> (f64, f64) {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => (first[0], last[0]),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// Returns the row linearly interpolated at `t` °C.
    ///
    /// Returns `None` outside the table or for `NaN`.
    pub(super) fn at(&self, t: f64) -> Option<[f64; C]> {
        let i = self
            .rows
            .windows(2)
            .position(|w| t >= w[0][0] - EDGE && t <= w[1][0] + EDGE)?;
        let (lo, hi) = (&self.rows[i], &self.rows[i + 1]);
        let w = ((t - lo[0]) / (hi[0] - lo[0])).clamp(0.0, 1.0);
        Some(std::array::from_fn(|c| lo[c] + w * (hi[c] - lo[c])))
    }

    /// Returns the temperature in °C at which `column` equals `value`.
    ///
    /// The column must increase monotonically with temperature.
    pub(super) fn temperature_where(&self, column: usize, value: f64) -> Option<f64> {
        let i = self
            .rows
            .windows(2)
            .position(|w| value >= w[0][column] && value <= w[1][column])?;
        let (lo, hi) = (&self.rows[i], &self.rows[i + 1]);
        let w = (value - lo[column]) / (hi[column] - lo[column]);
        Some(lo[0] + w * (hi[0] - lo[0]))
    }
}

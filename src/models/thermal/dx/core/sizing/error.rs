use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, TemperatureInterval};

use crate::models::thermal::dx::core::MarchError;

/// Errors that can occur while sizing the tube length.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The design failed validation or a march failed outright.
    #[error("march failed")]
    March(#[from] MarchError),

    /// The length bracket is empty or not positive.
    #[error("invalid length bracket: {low:?}..{high:?}")]
    InvalidBracket { low: Length, high: Length },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best terminal residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

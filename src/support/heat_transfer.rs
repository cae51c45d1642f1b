//! Heat transfer correlations and conductance arithmetic.
//!
//! Everything here is a pure function of its inputs:
//!
//! - [`single_phase`]: Gnielinski in-tube convection with a laminar fallback
//! - [`two_phase`]: Shah condensation and Chen-type convective evaporation
//! - [`shell_side`]: Crossflow over the active tube bank
//! - [`overall_conductance`]: Series resistances referenced to the outer area
//! - [`log_mean`]: Log-mean temperature difference with a near-equal fallback
//!
//! Correlations take [`uom`] quantities at the boundary and work in SI `f64`
//! internally.

mod conductance;
mod error;
mod flow;
mod lmtd;

pub mod shell_side;
pub mod single_phase;
pub mod two_phase;

pub use conductance::{ConductanceInputs, overall_conductance};
pub use error::CorrelationError;
pub use flow::TubeFlow;
pub use lmtd::log_mean;

//! Tube-length sizing.
//!
//! Finds the tube length at which the outlet subcooling (condenser) or
//! superheat (evaporator) matches the design target, by bisection on the
//! length with every other input held fixed.

mod config;
mod error;
mod problem;

pub use config::SizingConfig;
pub use error::SizingError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Length, TemperatureInterval},
        length::meter,
        temperature_interval::kelvin,
    },
};

use crate::support::thermo::capability::{LiquidProperties, RefrigerantProperties};

use super::{DesignInput, MarchResults, SegmentMarcher};

use problem::{SizingModel, SizingProblem};

/// Sizes the tube length within `bracket` to meet the terminal target.
///
/// # Errors
///
/// Returns [`SizingError`] if the design is invalid, the bracket does not
/// contain a solution, or the solver fails to converge.
pub(super) fn size_tube_length<R, S>(
    marcher: &SegmentMarcher<R, S>,
    input: &DesignInput,
    bracket: [Length; 2],
    config: SizingConfig,
) -> Result<MarchResults, SizingError>
where
    R: RefrigerantProperties,
    S: LiquidProperties,
{
    input.validate()?;

    let [low, high] = bracket;
    if !(low > Length::ZERO && high > low && high.is_finite()) {
        return Err(SizingError::InvalidBracket { low, high });
    }

    let model = SizingModel::new(marcher, input);
    let problem = SizingProblem::new(input.primary.terminal_target);

    let solution = bisection::solve(
        &model,
        &problem,
        [low.get::<meter>(), high.get::<meter>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A failed march is treated as overshooting the target, which
            // steers the search toward shorter tubes.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SizingError::MaxIters {
            residual: TemperatureInterval::new::<kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::dx::core::{
        MarchError,
        test_support::{condenser, marcher},
    };

    fn meters(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn finds_the_length_that_just_meets_the_subcooling_target() {
        let input = condenser(1.0);
        let results = size_tube_length(
            &marcher(),
            &input,
            [meters(0.3), meters(1.0)],
            SizingConfig::default(),
        )
        .expect("sizing should converge");

        let length = results
            .segments
            .iter()
            .fold(Length::ZERO, |total, segment| total + segment.length);
        assert!(length > meters(0.3) && length < meters(1.0));
        assert_relative_eq!(
            results.totals.terminal_delta_t.get::<kelvin>(),
            5.0,
            epsilon = 0.05
        );
    }

    #[test]
    fn bracket_without_a_crossing_is_reported() {
        let result = size_tube_length(
            &marcher(),
            &condenser(1.0),
            [meters(1.0), meters(2.0)],
            SizingConfig::default(),
        );
        assert!(matches!(result, Err(SizingError::Bisection(_))));
    }

    #[test]
    fn invalid_inputs_fail_before_iterating() {
        let result = size_tube_length(
            &marcher(),
            &condenser(1.0).with_segments(5),
            [meters(0.3), meters(1.0)],
            SizingConfig::default(),
        );
        assert!(matches!(
            result,
            Err(SizingError::March(MarchError::InvalidInput {
                field: "segments",
                ..
            }))
        ));

        let result = size_tube_length(
            &marcher(),
            &condenser(1.0),
            [meters(1.0), meters(0.3)],
            SizingConfig::default(),
        );
        assert!(matches!(result, Err(SizingError::InvalidBracket { .. })));
    }
}

//! Problem formulation for tube-length sizing.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, TemperatureInterval},
    length::meter,
    temperature_interval::kelvin,
};

use crate::{
    models::thermal::dx::core::{DesignInput, MarchError, MarchResults, SegmentMarcher},
    support::thermo::capability::{LiquidProperties, RefrigerantProperties},
};

/// Marches a fixed design with the tube length as the only input.
pub(super) struct SizingModel<'a, R, S> {
    marcher: &'a SegmentMarcher<R, S>,
    input: &'a DesignInput,
}

impl<'a, R, S> SizingModel<'a, R, S> {
    pub(super) fn new(marcher: &'a SegmentMarcher<R, S>, input: &'a DesignInput) -> Self {
        Self { marcher, input }
    }
}

impl<R, S> Model for SizingModel<'_, R, S>
where
    R: RefrigerantProperties,
    S: LiquidProperties,
{
    type Input = Length;
    type Output = MarchResults;
    type Error = MarchError;

    fn call(&self, length: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut input = self.input.clone();
        input.geometry.length = *length;
        self.marcher.run(&input)
    }
}

/// Computes the residual as `achieved - target` terminal temperature difference.
pub(super) struct SizingProblem {
    target: TemperatureInterval,
}

impl SizingProblem {
    pub(super) fn new(target: TemperatureInterval) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for SizingProblem {
    type Input = Length;
    type Output = MarchResults;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let achieved = output.totals.terminal_delta_t.get::<kelvin>();
        Ok([achieved - self.target.get::<kelvin>()])
    }
}

use crate::core::data::complex::Complex;
use std::error::Error;

/// Per-pixel computation run by the fractal generators.
///
/// `compute` receives the pixel's precomputed plane coordinate and must depend
/// on nothing else, so pixels can be evaluated in any order on any thread.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, point: Complex) -> Result<Self::Success, Self::Failure>;
}

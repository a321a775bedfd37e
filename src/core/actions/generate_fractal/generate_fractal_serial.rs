use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::plane_grid::PlaneGrid;

/// Single-threaded reference: computes every pixel in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    plane: &PlaneGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    plane
        .values()
        .iter()
        .map(|&point| algorithm.compute(point))
        .collect()
}

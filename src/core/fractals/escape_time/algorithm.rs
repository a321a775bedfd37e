use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::seed::Seed;
use crate::core::fractals::escape_time::smooth::smooth_value;

/// `|z|²` at or beyond which an orbit counts as escaped (radius 10).
pub const ESCAPE_RADIUS_SQUARED: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Escape {
    /// Iterations executed before escaping or reaching the cap.
    pub count: u32,
    pub smooth: f64,
}

/// Iterates `z = z² + c` for both fractal kinds; the seed decides `z₀` and `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    seed: Seed,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm {
    /// Callers validate `max_iterations`; see `FractalParams`.
    #[must_use]
    pub(crate) fn new(seed: Seed, max_iterations: u32) -> Self {
        Self {
            seed,
            max_iterations,
        }
    }

    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = Escape;
    type Failure = EscapeTimeError;

    fn compute(&self, point: Complex) -> Result<Self::Success, Self::Failure> {
        if !point.is_finite() {
            return Err(EscapeTimeError::NonFinitePoint { point });
        }

        let (mut z, c) = self.seed.orbit_start(point);
        let mut count = 0;

        while count < self.max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
            z = z.square() + c;
            count += 1;
        }

        Ok(Escape {
            count,
            smooth: smooth_value(count, z, self.max_iterations),
        })
    }
}

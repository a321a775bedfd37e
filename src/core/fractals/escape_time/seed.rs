use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Where the orbit of `z = z² + c` starts and which value plays `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seed {
    /// `z₀ = 0`, `c` is the pixel's plane coordinate.
    Mandelbrot,
    /// `z₀` is the pixel's plane coordinate, `c` is shared by every pixel.
    Julia { constant: Complex },
}

impl Seed {
    /// Returns `(z₀, c)` for the pixel at `point`.
    #[must_use]
    pub fn orbit_start(&self, point: Complex) -> (Complex, Complex) {
        match *self {
            Self::Mandelbrot => (Complex::ZERO, point),
            Self::Julia { constant } => (point, constant),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandelbrot_starts_at_zero() {
        let point = Complex::new(0.3, -0.2);

        assert_eq!(Seed::Mandelbrot.orbit_start(point), (Complex::ZERO, point));
    }

    #[test]
    fn test_julia_starts_at_point() {
        let point = Complex::new(0.3, -0.2);
        let constant = Complex::new(-0.4, 0.6);

        assert_eq!(
            Seed::Julia { constant }.orbit_start(point),
            (point, constant)
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Seed::Mandelbrot.kind(), FractalKinds::Mandelbrot);
        assert_eq!(
            Seed::Julia {
                constant: Complex::ZERO
            }
            .kind(),
            FractalKinds::Julia
        );
    }
}

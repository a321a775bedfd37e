use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::seed::Seed;
use crate::core::fractals::fractal_kinds::FractalKinds;
use std::{error::Error, fmt};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex {
    real: -0.4,
    imag: 0.6,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParamsError {
    ZeroMaxIterationsError,
    NonFiniteConstant { constant: Complex },
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonFiniteConstant { constant } => {
                write!(
                    f,
                    "Julia constant must be finite: ({}, {})",
                    constant.real, constant.imag
                )
            }
        }
    }
}

impl Error for FractalParamsError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParams {
    Mandelbrot {
        max_iterations: u32,
    },
    Julia {
        max_iterations: u32,
        constant: Complex,
    },
}

impl FractalParams {
    pub fn mandelbrot(max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterationsError);
        }

        Ok(Self::Mandelbrot { max_iterations })
    }

    pub fn julia(constant: Complex, max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterationsError);
        }

        if !constant.is_finite() {
            return Err(FractalParamsError::NonFiniteConstant { constant });
        }

        Ok(Self::Julia {
            max_iterations,
            constant,
        })
    }

    /// Default parameters for `kind`.
    #[must_use]
    pub fn default_for(kind: FractalKinds) -> Self {
        match kind {
            FractalKinds::Mandelbrot => Self::Mandelbrot {
                max_iterations: DEFAULT_MAX_ITERATIONS,
            },
            FractalKinds::Julia => Self::Julia {
                max_iterations: DEFAULT_MAX_ITERATIONS,
                constant: DEFAULT_JULIA_CONSTANT,
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot { .. } => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        match *self {
            Self::Mandelbrot { max_iterations } | Self::Julia { max_iterations, .. } => {
                max_iterations
            }
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> EscapeTimeAlgorithm {
        let seed = match *self {
            Self::Mandelbrot { .. } => Seed::Mandelbrot,
            Self::Julia { constant, .. } => Seed::Julia { constant },
        };

        EscapeTimeAlgorithm::new(seed, self.max_iterations())
    }
}

impl Default for FractalParams {
    fn default() -> Self {
        Self::default_for(FractalKinds::default())
    }
}

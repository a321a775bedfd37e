use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::algorithm::Escape;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeGridError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for EscapeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "escape grid expects {} results but was given {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for EscapeGridError {}

/// Iteration counts and smooth escape values of one completed run, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeGrid {
    size: PixelRect,
    max_iterations: u32,
    iteration_counts: Vec<u32>,
    smooth_values: Vec<f64>,
}

impl EscapeGrid {
    pub fn from_escapes(
        size: PixelRect,
        max_iterations: u32,
        escapes: Vec<Escape>,
    ) -> Result<Self, EscapeGridError> {
        if escapes.len() != size.size() {
            return Err(EscapeGridError::SizeMismatch {
                expected: size.size(),
                actual: escapes.len(),
            });
        }

        Ok(Self::from_parts(size, max_iterations, escapes))
    }

    pub(crate) fn from_parts(size: PixelRect, max_iterations: u32, escapes: Vec<Escape>) -> Self {
        debug_assert_eq!(escapes.len(), size.size());

        let (iteration_counts, smooth_values) = escapes
            .into_iter()
            .map(|escape| (escape.count, escape.smooth))
            .unzip();

        Self {
            size,
            max_iterations,
            iteration_counts,
            smooth_values,
        }
    }

    #[must_use]
    pub fn size(&self) -> PixelRect {
        self.size
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn iteration_count(&self, point: Point) -> Option<u32> {
        self.size
            .index_of(point)
            .map(|index| self.iteration_counts[index])
    }

    #[must_use]
    pub fn smooth_value(&self, point: Point) -> Option<f64> {
        self.size
            .index_of(point)
            .map(|index| self.smooth_values[index])
    }

    /// Whether the orbit at `point` escaped before the iteration cap.
    #[must_use]
    pub fn escaped(&self, point: Point) -> Option<bool> {
        self.iteration_count(point)
            .map(|count| count < self.max_iterations)
    }

    #[must_use]
    pub fn iteration_counts(&self) -> &[u32] {
        &self.iteration_counts
    }

    #[must_use]
    pub fn smooth_values(&self) -> &[f64] {
        &self.smooth_values
    }

    /// Fraction of pixels that reached the iteration cap.
    #[must_use]
    pub fn bounded_fraction(&self) -> f64 {
        let bounded = self
            .iteration_counts
            .iter()
            .filter(|&&count| count >= self.max_iterations)
            .count();

        bounded as f64 / self.iteration_counts.len() as f64
    }
}

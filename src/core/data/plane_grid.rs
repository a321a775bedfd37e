use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaneGridError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PlaneGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "plane grid expects {} values but was given {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PlaneGridError {}

/// Complex coordinate of every pixel in a grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGrid {
    size: PixelRect,
    values: Vec<Complex>,
}

impl PlaneGrid {
    pub fn from_values(size: PixelRect, values: Vec<Complex>) -> Result<Self, PlaneGridError> {
        if values.len() != size.size() {
            return Err(PlaneGridError::SizeMismatch {
                expected: size.size(),
                actual: values.len(),
            });
        }

        Ok(Self { size, values })
    }

    pub(crate) fn from_parts(size: PixelRect, values: Vec<Complex>) -> Self {
        debug_assert_eq!(values.len(), size.size());
        Self { size, values }
    }

    #[must_use]
    pub fn size(&self) -> PixelRect {
        self.size
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<Complex> {
        self.size.index_of(point).map(|index| self.values[index])
    }

    #[must_use]
    pub fn values(&self) -> &[Complex] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_rejects_wrong_length() {
        let size = PixelRect::with_size(3, 2).unwrap();
        let result = PlaneGrid::from_values(size, vec![Complex::ZERO; 5]);

        assert_eq!(
            result,
            Err(PlaneGridError::SizeMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_get_reads_row_major() {
        let size = PixelRect::with_size(3, 2).unwrap();
        let values = (0..6).map(|i| Complex::new(i as f64, 0.0)).collect();
        let grid = PlaneGrid::from_values(size, values).unwrap();

        assert_eq!(grid.get(Point { x: 2, y: 0 }), Some(Complex::new(2.0, 0.0)));
        assert_eq!(grid.get(Point { x: 0, y: 1 }), Some(Complex::new(3.0, 0.0)));
        assert_eq!(grid.get(Point { x: 3, y: 1 }), None);
        assert_eq!(grid.get(Point { x: 0, y: 2 }), None);
    }
}

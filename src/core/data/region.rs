use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    InvalidSize { width: f64, height: f64 },
    NonFinite,
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "region of interest size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite => write!(f, "region of interest bounds must be finite"),
        }
    }
}

impl Error for RegionError {}

/// Region of interest: the window of the complex plane that gets sampled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl Region {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, RegionError> {
        if ![real_min, real_max, imag_min, imag_max]
            .iter()
            .all(|bound| bound.is_finite())
        {
            return Err(RegionError::NonFinite);
        }

        let width = real_max - real_min;
        let height = imag_max - imag_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(RegionError::InvalidSize { width, height });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.real_min <= point.real
            && self.imag_min <= point.imag
            && self.real_max >= point.real
            && self.imag_max >= point.imag
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            real_min: -1.0,
            real_max: 1.0,
            imag_min: -1.0,
            imag_max: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_new_valid() {
        let region = Region::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(region.real_min(), -2.5);
        assert_eq!(region.real_max(), 1.0);
        assert_eq!(region.imag_min(), -1.0);
        assert_eq!(region.imag_max(), 1.0);
    }

    #[test]
    fn test_region_dimensions_must_be_positive() {
        assert_eq!(
            Region::new(0.0, 0.0, 0.0, 100.0),
            Err(RegionError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            Region::new(0.0, -100.0, 0.0, 10.0),
            Err(RegionError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            Region::new(0.0, 100.0, 0.0, 0.0),
            Err(RegionError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            Region::new(2.0, -2.0, 2.0, -2.0),
            Err(RegionError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_region_bounds_must_be_finite() {
        assert_eq!(
            Region::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(RegionError::NonFinite)
        );
        assert_eq!(
            Region::new(-1.0, f64::INFINITY, -1.0, 1.0),
            Err(RegionError::NonFinite)
        );
    }

    #[test]
    fn test_region_dimensions() {
        let region = Region::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(region.width(), 3.5);
        assert_eq!(region.height(), 2.0);
    }

    #[test]
    fn test_default_region_is_unit_square() {
        assert_eq!(Region::default(), Region::new(-1.0, 1.0, -1.0, 1.0).unwrap());
    }

    #[test]
    fn test_region_contains_point() {
        let region = Region::new(-10.0, 100.0, -5.0, 200.0).unwrap();

        assert!(region.contains_point(Complex::new(50.0, 50.0)));
        assert!(region.contains_point(Complex::new(-10.0, 0.0)));
        assert!(region.contains_point(Complex::new(100.0, 200.0)));
        assert!(!region.contains_point(Complex::new(101.0, 50.0)));
        assert!(!region.contains_point(Complex::new(50.0, -6.0)));
    }

    #[test]
    fn test_region_error_display() {
        let err = RegionError::InvalidSize {
            width: 0.0,
            height: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "region of interest size must be positive: 0x2"
        );
    }
}

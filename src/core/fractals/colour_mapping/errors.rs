use crate::core::data::point::Point;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    PixelOutsideGrid { pixel: Point },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideGrid { pixel } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the escape grid",
                    pixel.x, pixel.y
                )
            }
        }
    }
}

impl Error for ColourMapError {}

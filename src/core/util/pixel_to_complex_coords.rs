use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps grid pixels onto a region with the same scale on both axes.
///
/// The shorter side of the region sets the scale and the longer side is centred,
/// so non-square regions are cropped rather than stretched. Pixel row 0 is the
/// top of the region (largest imaginary part).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    size: PixelRect,
    region: Region,
    span: f64,
    real_offset: f64,
    imag_offset: f64,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(size: PixelRect, region: Region) -> Self {
        let span = region.width().min(region.height());

        Self {
            size,
            region,
            span,
            real_offset: (region.width() - span) / 2.0,
            imag_offset: (region.height() - span) / 2.0,
        }
    }

    #[must_use]
    pub fn size(&self) -> PixelRect {
        self.size
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Complex value sampled at pixel `(x, y)`. Does not check bounds.
    #[must_use]
    pub fn to_complex(&self, x: u32, y: u32) -> Complex {
        let width = self.size.width() as f64;
        let height = self.size.height() as f64;

        Complex {
            real: self.region.real_min() + x as f64 * self.span / width + self.real_offset,
            imag: self.region.imag_max() - y as f64 * self.span / height - self.imag_offset,
        }
    }

    /// Nearest pixel whose sample point is `value`, or `None` if it falls off the grid.
    #[must_use]
    pub fn to_pixel(&self, value: Complex) -> Option<Point> {
        let width = self.size.width() as f64;
        let height = self.size.height() as f64;

        let x = ((value.real - self.region.real_min() - self.real_offset) * width / self.span)
            .round();
        let y = ((self.region.imag_max() - self.imag_offset - value.imag) * height / self.span)
            .round();

        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 || x >= width || y >= height
        {
            return None;
        }

        Some(Point {
            x: x as u32,
            y: y as u32,
        })
    }
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    region: Region,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_x = pixel_position.x - pixel_rect.top_left().x;
    let relative_y = pixel_position.y - pixel_rect.top_left().y;

    Ok(PlaneMapping::new(pixel_rect, region).to_complex(relative_x, relative_y))
}

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

/// `(real, imag)` to four decimal places.
#[must_use]
pub fn format_position(value: Complex) -> String {
    format!("({:.4}, {:.4})", value.real, value.imag)
}

/// Label for the plane coordinate under `pixel`, or `None` off the grid.
#[must_use]
pub fn position_label(mapping: &PlaneMapping, pixel: Point) -> Option<String> {
    if !mapping.size().contains_point(pixel) {
        return None;
    }

    Some(format_position(mapping.to_complex(pixel.x, pixel.y)))
}

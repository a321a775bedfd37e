use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

pub const AXIS_COLOUR: Colour = Colour::RED;

/// Paints the real and imaginary axes over `buffer` where they cross the visible plane.
///
/// Returns how many axes were drawn.
pub fn draw_axes(buffer: &mut PixelBuffer, mapping: PlaneMapping) -> Result<u32, PixelBufferError> {
    let size = mapping.size();
    let centre = mapping.to_complex(size.width() / 2, size.height() / 2);
    let mut drawn = 0;

    if let Some(origin) = mapping.to_pixel(Complex::new(centre.real, 0.0)) {
        for x in 0..size.width() {
            buffer.set_pixel(Point { x, y: origin.y }, AXIS_COLOUR)?;
        }
        drawn += 1;
    }

    if let Some(origin) = mapping.to_pixel(Complex::new(0.0, centre.imag)) {
        for y in 0..size.height() {
            buffer.set_pixel(Point { x: origin.x, y }, AXIS_COLOUR)?;
        }
        drawn += 1;
    }

    Ok(drawn)
}

use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

/// Colours every pixel of a completed escape grid, one row per rayon task.
pub fn generate_pixel_buffer<CMap>(
    grid: &EscapeGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap + ?Sized,
{
    let size = grid.size();
    let mut buffer = PixelBuffer::new(size);
    let row_bytes = size.width() as usize * BYTES_PER_PIXEL;

    buffer
        .buffer_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<(), GeneratePixelBufferError> {
            for (x, bytes) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let pixel = Point {
                    x: size.top_left().x + x as u32,
                    y: size.top_left().y + y as u32,
                };
                let colour = mapper.map(grid, pixel)?;
                bytes.copy_from_slice(&[colour.r, colour.g, colour.b]);
            }
            Ok(())
        })?;

    Ok(buffer)
}

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::point::Point;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKinds;

const fn rgb(r: u8, g: u8, b: u8) -> Colour {
    Colour { r, g, b }
}

pub const PALETTE: [Colour; 16] = [
    rgb(66, 30, 15),
    rgb(25, 7, 26),
    rgb(9, 1, 47),
    rgb(4, 4, 73),
    rgb(0, 7, 100),
    rgb(12, 44, 138),
    rgb(24, 82, 177),
    rgb(57, 125, 209),
    rgb(134, 181, 229),
    rgb(211, 236, 248),
    rgb(241, 233, 191),
    rgb(248, 201, 95),
    rgb(255, 170, 0),
    rgb(204, 128, 0),
    rgb(153, 87, 0),
    rgb(106, 52, 3),
];

fn average(a: Colour, b: Colour) -> Colour {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;

    Colour {
        r: mid(a.r, b.r),
        g: mid(a.g, b.g),
        b: mid(a.b, b.b),
    }
}

/// Palette bands by iteration count, softened against the left and upper neighbours.
#[derive(Debug, Default)]
pub struct BandedGradient {}

impl BandedGradient {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn band(grid: &EscapeGrid, pixel: Point) -> Option<Colour> {
        grid.iteration_count(pixel)
            .map(|count| PALETTE[count as usize % PALETTE.len()])
    }
}

impl ColourMap for BandedGradient {
    fn map(&self, grid: &EscapeGrid, pixel: Point) -> Result<Colour, ColourMapError> {
        let count = grid
            .iteration_count(pixel)
            .ok_or(ColourMapError::PixelOutsideGrid { pixel })?;

        if count >= grid.max_iterations() {
            return Ok(Colour::BLACK);
        }

        let mut colour = PALETTE[count as usize % PALETTE.len()];

        if pixel.x > 0 {
            if let Some(left) = Self::band(grid, Point { x: pixel.x - 1, ..pixel }) {
                colour = average(left, colour);
            }
        }

        if pixel.y > 0 {
            if let Some(above) = Self::band(grid, Point { y: pixel.y - 1, ..pixel }) {
                colour = average(above, colour);
            }
        }

        Ok(colour)
    }

    fn kind(&self) -> ColourSchemeKinds {
        ColourSchemeKinds::BandedGradient
    }
}

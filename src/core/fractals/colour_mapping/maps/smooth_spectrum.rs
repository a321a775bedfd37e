use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::point::Point;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKinds;

/// Continuous colouring from the smooth escape value.
///
/// Values below 1 ramp up from black through blue, values from 1 to 2 fall
/// back down through yellow. Bounded pixels are black.
#[derive(Debug, Default)]
pub struct SmoothSpectrum {}

impl SmoothSpectrum {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn spectrum(smooth: f64) -> Colour {
        if smooth < 1.0 {
            Colour::from_unit(smooth.powi(4), smooth.powf(2.5), smooth)
        } else {
            let t = (2.0 - smooth).max(0.0);
            Colour::from_unit(t, t.powf(1.5), t.powi(3))
        }
    }
}

impl ColourMap for SmoothSpectrum {
    fn map(&self, grid: &EscapeGrid, pixel: Point) -> Result<Colour, ColourMapError> {
        let outside = ColourMapError::PixelOutsideGrid { pixel };
        let count = grid.iteration_count(pixel).ok_or(outside)?;

        if count >= grid.max_iterations() {
            return Ok(Colour::BLACK);
        }

        let smooth = grid.smooth_value(pixel).ok_or(outside)?;
        Ok(Self::spectrum(smooth))
    }

    fn kind(&self) -> ColourSchemeKinds {
        ColourSchemeKinds::SmoothSpectrum
    }
}

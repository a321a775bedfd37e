use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::point::Point;
use crate::core::fractals::colour_mapping::errors::ColourMapError;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKinds;

/// Colours one pixel of a completed escape grid.
///
/// Maps get the whole grid rather than a single value so that schemes can
/// blend with neighbouring pixels.
pub trait ColourMap: Send + Sync {
    fn map(&self, grid: &EscapeGrid, pixel: Point) -> Result<Colour, ColourMapError>;

    fn kind(&self) -> ColourSchemeKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

use std::num::NonZeroU32;
use std::time::Instant;

use log::{debug, info};

use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::generate_fractal_tiled::{
    GenerateFractalError, generate_fractal_tiled,
};
use crate::core::actions::map_plane::map_plane::map_plane;
use crate::core::data::complex::Complex;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_grid::PlaneGrid;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::fractals::escape_time::algorithm::Escape;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::session::session_config::{SessionConfig, SessionConfigError};
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

pub type ComputeError = GenerateFractalError<EscapeTimeError>;

/// Owns the plane grid of one view and computes escape grids from it.
///
/// Nothing is shared between sessions, so several can run side by side.
#[derive(Debug, Clone)]
pub struct FractalSession {
    tile_size: NonZeroU32,
    region: Region,
    params: FractalParams,
    plane: PlaneGrid,
}

impl FractalSession {
    #[must_use]
    pub fn new(size: PixelRect, tile_size: NonZeroU32, region: Region, params: FractalParams) -> Self {
        Self {
            tile_size,
            region,
            params,
            plane: map_plane(size, region),
        }
    }

    pub fn from_config(
        config: SessionConfig,
        region: Region,
        params: FractalParams,
    ) -> Result<Self, SessionConfigError> {
        Ok(Self::new(config.grid_size()?, config.tile_size()?, region, params))
    }

    #[must_use]
    pub fn size(&self) -> PixelRect {
        self.plane.size()
    }

    #[must_use]
    pub fn tile_size(&self) -> NonZeroU32 {
        self.tile_size
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn params(&self) -> FractalParams {
        self.params
    }

    #[must_use]
    pub fn plane(&self) -> &PlaneGrid {
        &self.plane
    }

    #[must_use]
    pub fn mapping(&self) -> PlaneMapping {
        PlaneMapping::new(self.size(), self.region)
    }

    /// Moves the view and rebuilds every plane coordinate.
    pub fn set_region(&mut self, region: Region) {
        debug!(
            "remapping plane to [{}, {}] x [{}, {}]",
            region.real_min(),
            region.real_max(),
            region.imag_min(),
            region.imag_max()
        );
        self.region = region;
        self.plane = map_plane(self.size(), region);
    }

    pub fn set_params(&mut self, params: FractalParams) {
        self.params = params;
    }

    /// Complex coordinate under `point`, if it is on the grid.
    #[must_use]
    pub fn plane_value(&self, point: Point) -> Option<Complex> {
        self.plane.get(point)
    }

    /// Computes the escape grid across tiles in parallel, returning once every tile is done.
    pub fn compute(&self) -> Result<EscapeGrid, ComputeError> {
        let start = Instant::now();
        let escapes =
            generate_fractal_tiled(&self.plane, &self.params.algorithm(), self.tile_size)?;
        let grid = self.assemble(escapes);

        info!(
            "{} {}x{} ({} iterations) computed in {:?}, {:.1}% bounded",
            self.params.kind(),
            self.size().width(),
            self.size().height(),
            self.params.max_iterations(),
            start.elapsed(),
            grid.bounded_fraction() * 100.0
        );

        Ok(grid)
    }

    /// Same result as [`compute`](Self::compute), on the calling thread only.
    pub fn compute_serial(&self) -> Result<EscapeGrid, EscapeTimeError> {
        let escapes = generate_fractal_serial(&self.plane, &self.params.algorithm())?;
        Ok(self.assemble(escapes))
    }

    fn assemble(&self, escapes: Vec<Escape>) -> EscapeGrid {
        EscapeGrid::from_parts(self.size(), self.params.max_iterations(), escapes)
    }
}

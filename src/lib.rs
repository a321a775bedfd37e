mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::{Cli, ColourSchemeArg, Command, ViewArgs};
pub use crate::controllers::cli::render_controller::RenderController;
pub use crate::controllers::cli::render_request::{RenderRequest, RenderRequestError};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::generate_fractal_tiled::{
    DEFAULT_TILE_SIZE, GenerateFractalError, generate_fractal_tiled,
};
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::draw_axes::{AXIS_COLOUR, draw_axes};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::map_plane::map_plane::map_plane;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::fractal_params::{
    DEFAULT_JULIA_CONSTANT, DEFAULT_MAX_ITERATIONS, FractalParams, FractalParamsError,
};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::plane_grid::{PlaneGrid, PlaneGridError};
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::fractals::colour_mapping::errors::ColourMapError;
pub use crate::core::fractals::colour_mapping::factory::colour_map_factory;
pub use crate::core::fractals::colour_mapping::kinds::ColourSchemeKinds;
pub use crate::core::fractals::colour_mapping::maps::banded_gradient::BandedGradient;
pub use crate::core::fractals::colour_mapping::maps::smooth_spectrum::SmoothSpectrum;
pub use crate::core::fractals::escape_time::algorithm::{
    ESCAPE_RADIUS_SQUARED, Escape, EscapeTimeAlgorithm,
};
pub use crate::core::fractals::escape_time::errors::EscapeTimeError;
pub use crate::core::fractals::escape_time::seed::Seed;
pub use crate::core::fractals::escape_time::smooth::{ESCAPED_FLOOR, smooth_value};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::session::fractal_session::{ComputeError, FractalSession};
pub use crate::core::session::session_config::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, SessionConfig, SessionConfigError,
};
pub use crate::core::util::calculate_tiles_in_pixel_rect::calculate_tiles_in_pixel_rect;
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, PlaneMapping, pixel_to_complex_coords,
};

pub use crate::presenters::file::image_file::ImageFilePresenter;
pub use crate::presenters::position_label::{format_position, position_label};

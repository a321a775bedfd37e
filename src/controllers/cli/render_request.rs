use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::controllers::cli::args::{Cli, Command, ViewArgs};
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{DEFAULT_JULIA_CONSTANT, FractalParams, FractalParamsError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::region::{Region, RegionError};
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::session::session_config::{SessionConfig, SessionConfigError};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequestError {
    Config(SessionConfigError),
    Region(RegionError),
    Params(FractalParamsError),
    WrongValueCount {
        flag: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for RenderRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid grid configuration: {}", err),
            Self::Region(err) => write!(f, "invalid region: {}", err),
            Self::Params(err) => write!(f, "invalid fractal parameters: {}", err),
            Self::WrongValueCount {
                flag,
                expected,
                actual,
            } => write!(f, "--{} takes {} values, got {}", flag, expected, actual),
        }
    }
}

impl Error for RenderRequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Region(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::WrongValueCount { .. } => None,
        }
    }
}

impl From<SessionConfigError> for RenderRequestError {
    fn from(err: SessionConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RegionError> for RenderRequestError {
    fn from(err: RegionError) -> Self {
        Self::Region(err)
    }
}

impl From<FractalParamsError> for RenderRequestError {
    fn from(err: FractalParamsError) -> Self {
        Self::Params(err)
    }
}

/// A fully validated render job. Building one does no computation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub size: PixelRect,
    pub tile_size: NonZeroU32,
    pub region: Region,
    pub params: FractalParams,
    pub colour_scheme: ColourSchemeKinds,
    pub axes: bool,
    pub probes: Vec<Point>,
    pub output: PathBuf,
}

fn region_from_args(view: &ViewArgs) -> Result<Region, RenderRequestError> {
    match view.region.as_deref() {
        None => Ok(Region::default()),
        Some(&[real_min, real_max, imag_min, imag_max]) => {
            Ok(Region::new(real_min, real_max, imag_min, imag_max)?)
        }
        Some(values) => Err(RenderRequestError::WrongValueCount {
            flag: "region",
            expected: 4,
            actual: values.len(),
        }),
    }
}

fn constant_from_args(constant: Option<&[f64]>) -> Result<Complex, RenderRequestError> {
    match constant {
        None => Ok(DEFAULT_JULIA_CONSTANT),
        Some(&[real, imag]) => Ok(Complex::new(real, imag)),
        Some(values) => Err(RenderRequestError::WrongValueCount {
            flag: "constant",
            expected: 2,
            actual: values.len(),
        }),
    }
}

impl TryFrom<Cli> for RenderRequest {
    type Error = RenderRequestError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = SessionConfig {
            width: cli.width,
            height: cli.height,
            tile_size: cli.tile_size,
        };

        let (region, params) = match &cli.command {
            Command::Mandelbrot { view } => (
                region_from_args(view)?,
                FractalParams::mandelbrot(view.max_iterations)?,
            ),
            Command::Julia { constant, view } => (
                region_from_args(view)?,
                FractalParams::julia(
                    constant_from_args(constant.as_deref())?,
                    view.max_iterations,
                )?,
            ),
        };

        Ok(Self {
            size: config.grid_size()?,
            tile_size: config.tile_size()?,
            region,
            params,
            colour_scheme: cli.colour_scheme.into(),
            axes: cli.axes,
            probes: cli.probe,
            output: cli.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn request(args: &[&str]) -> Result<RenderRequest, RenderRequestError> {
        let cli = Cli::try_parse_from(std::iter::once("fractal_plane").chain(args.iter().copied()))
            .unwrap();
        RenderRequest::try_from(cli)
    }

    #[test]
    fn test_default_mandelbrot_request() {
        let request = request(&["mandelbrot"]).unwrap();

        assert_eq!(request.size, PixelRect::with_size(800, 800).unwrap());
        assert_eq!(request.tile_size.get(), 100);
        assert_eq!(request.region, Region::default());
        assert_eq!(request.params, FractalParams::mandelbrot(1000).unwrap());
        assert_eq!(request.colour_scheme, ColourSchemeKinds::SmoothSpectrum);
    }

    #[test]
    fn test_default_julia_constant() {
        let request = request(&["julia", "--max-iterations", "200"]).unwrap();

        assert_eq!(
            request.params,
            FractalParams::julia(Complex::new(-0.4, 0.6), 200).unwrap()
        );
    }

    #[test]
    fn test_inverted_region_is_rejected() {
        let result = request(&["mandelbrot", "--region", "1", "-1", "-1", "1"]);

        assert!(matches!(
            result,
            Err(RenderRequestError::Region(RegionError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let result = request(&["julia", "--max-iterations", "0"]);

        assert_eq!(
            result,
            Err(RenderRequestError::Params(
                FractalParamsError::ZeroMaxIterationsError
            ))
        );
    }

    #[test]
    fn test_zero_tile_size_is_rejected() {
        let result = request(&["mandelbrot", "--tile-size", "0"]);

        assert_eq!(
            result,
            Err(RenderRequestError::Config(SessionConfigError::ZeroTileSize))
        );
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let result = request(&["mandelbrot", "--width", "0"]);

        assert!(matches!(result, Err(RenderRequestError::Config(_))));
    }

    #[test]
    fn test_wrong_value_count() {
        let view = ViewArgs {
            region: Some(vec![0.0, 1.0]),
            max_iterations: 10,
        };

        assert_eq!(
            region_from_args(&view),
            Err(RenderRequestError::WrongValueCount {
                flag: "region",
                expected: 4,
                actual: 2
            })
        );
    }
}

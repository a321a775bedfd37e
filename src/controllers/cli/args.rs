use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::actions::generate_fractal::generate_fractal_tiled::DEFAULT_TILE_SIZE;
use crate::core::data::fractal_params::DEFAULT_MAX_ITERATIONS;
use crate::core::data::point::Point;
use crate::core::fractals::colour_mapping::kinds::ColourSchemeKinds;
use crate::core::session::session_config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub const DEFAULT_OUTPUT: &str = "fractal.png";

/// Escape-time Mandelbrot and Julia renderer.
#[derive(Debug, Parser)]
#[command(name = "fractal_plane", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Grid width in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Grid height in pixels
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Edge length of the square tiles computed in parallel
    #[arg(long, global = true, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Image file to write; the extension picks the format
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = ColourSchemeArg::Smooth)]
    pub colour_scheme: ColourSchemeArg,

    /// Draw the real and imaginary axes
    #[arg(long, global = true)]
    pub axes: bool,

    /// Log the plane coordinate under pixel X,Y
    #[arg(long, global = true, value_name = "X,Y", value_parser = parse_probe)]
    pub probe: Vec<Point>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// z ← z² + c with z₀ = 0 and c taken from the pixel
    Mandelbrot {
        #[command(flatten)]
        view: ViewArgs,
    },
    /// z ← z² + c with z₀ taken from the pixel and a fixed c
    Julia {
        /// Fixed constant c
        #[arg(
            long,
            num_args = 2,
            value_names = ["C_REAL", "C_IMAG"],
            allow_negative_numbers = true
        )]
        constant: Option<Vec<f64>>,

        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Visible window of the complex plane
    #[arg(
        long,
        num_args = 4,
        value_names = ["REAL_MIN", "REAL_MAX", "IMAG_MIN", "IMAG_MAX"],
        allow_negative_numbers = true
    )]
    pub region: Option<Vec<f64>>,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourSchemeArg {
    Smooth,
    Banded,
}

impl From<ColourSchemeArg> for ColourSchemeKinds {
    fn from(arg: ColourSchemeArg) -> Self {
        match arg {
            ColourSchemeArg::Smooth => Self::SmoothSpectrum,
            ColourSchemeArg::Banded => Self::BandedGradient,
        }
    }
}

fn parse_probe(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{}`", value))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid pixel coordinate `{}`: {}", part, err))
    };

    Ok(Point {
        x: parse(x)?,
        y: parse(y)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fractal_plane", "mandelbrot"]).unwrap();

        assert_eq!(cli.width, 800);
        assert_eq!(cli.height, 800);
        assert_eq!(cli.tile_size, 100);
        assert_eq!(cli.output, PathBuf::from("fractal.png"));
        assert_eq!(cli.colour_scheme, ColourSchemeArg::Smooth);
        assert!(!cli.axes);
        assert!(cli.probe.is_empty());

        match cli.command {
            Command::Mandelbrot { view } => {
                assert_eq!(view.region, None);
                assert_eq!(view.max_iterations, 1000);
            }
            Command::Julia { .. } => panic!("expected mandelbrot"),
        }
    }

    #[test]
    fn test_negative_region_bounds() {
        let cli = Cli::try_parse_from([
            "fractal_plane",
            "mandelbrot",
            "--region",
            "-2.5",
            "1",
            "-1.25",
            "1.25",
        ])
        .unwrap();

        match cli.command {
            Command::Mandelbrot { view } => {
                assert_eq!(view.region, Some(vec![-2.5, 1.0, -1.25, 1.25]));
            }
            Command::Julia { .. } => panic!("expected mandelbrot"),
        }
    }

    #[test]
    fn test_julia_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fractal_plane",
            "julia",
            "--constant",
            "-0.8",
            "0.156",
            "--width",
            "320",
            "--colour-scheme",
            "banded",
            "--probe",
            "10,20",
            "--probe",
            "0,0",
        ])
        .unwrap();

        assert_eq!(cli.width, 320);
        assert_eq!(cli.colour_scheme, ColourSchemeArg::Banded);
        assert_eq!(cli.probe, vec![Point { x: 10, y: 20 }, Point { x: 0, y: 0 }]);
        match cli.command {
            Command::Julia { constant, .. } => assert_eq!(constant, Some(vec![-0.8, 0.156])),
            Command::Mandelbrot { .. } => panic!("expected julia"),
        }
    }

    #[test]
    fn test_region_needs_four_values() {
        let result = Cli::try_parse_from(["fractal_plane", "mandelbrot", "--region", "0", "1"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_probe() {
        assert_eq!(parse_probe("3, 4"), Ok(Point { x: 3, y: 4 }));
        assert!(parse_probe("3").is_err());
        assert!(parse_probe("-1,4").is_err());
    }

    #[test]
    fn test_colour_scheme_arg_maps_to_kind() {
        assert_eq!(
            ColourSchemeKinds::from(ColourSchemeArg::Banded),
            ColourSchemeKinds::BandedGradient
        );
    }
}

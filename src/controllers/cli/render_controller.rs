use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::controllers::cli::render_request::RenderRequest;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::draw_axes::draw_axes;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::colour_mapping::factory::colour_map_factory;
use crate::core::session::fractal_session::FractalSession;
use crate::presenters::position_label::position_label;

pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    request: RenderRequest,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P, request: RenderRequest) -> Self {
        Self {
            presenter,
            request,
            buffer: None,
        }
    }

    pub fn request(&self) -> &RenderRequest {
        &self.request
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Computes the escape grid and colours it into a pixel buffer.
    pub fn generate(&mut self) -> Result<()> {
        let request = &self.request;
        let session = FractalSession::new(
            request.size,
            request.tile_size,
            request.region,
            request.params,
        );
        let mapping = session.mapping();

        info!(
            "rendering {} at {}x{}, tile size {}, {} colouring",
            request.params.kind(),
            request.size.width(),
            request.size.height(),
            request.tile_size,
            request.colour_scheme
        );

        for &probe in &request.probes {
            match position_label(&mapping, probe) {
                Some(label) => info!("pixel ({}, {}) is at {}", probe.x, probe.y, label),
                None => warn!("probe ({}, {}) is outside the grid", probe.x, probe.y),
            }
        }

        let grid = session.compute().context("failed to compute escape grid")?;

        let colour_map = colour_map_factory(request.colour_scheme);
        let mut buffer = generate_pixel_buffer(&grid, colour_map.as_ref())
            .context("failed to colour escape grid")?;

        if request.axes {
            let drawn = draw_axes(&mut buffer, mapping).context("failed to draw axes")?;
            debug!("drew {} axes", drawn);
        }

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<()> {
        let filepath = filepath.as_ref();
        let buffer = self
            .buffer
            .as_ref()
            .context("nothing has been generated yet")?;

        self.presenter
            .present(buffer, filepath)
            .with_context(|| format!("failed to write {}", filepath.display()))?;

        info!("saved to {}", filepath.display());

        Ok(())
    }

    /// Generates the image and writes it to the requested output path.
    pub fn run(&mut self) -> Result<()> {
        self.generate()?;
        self.write(self.request.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::cli::args::Cli;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use clap::Parser;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct StubPresenterError {}

    impl std::fmt::Display for StubPresenterError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "stub presenter failure")
        }
    }

    impl std::error::Error for StubPresenterError {}

    #[derive(Default)]
    struct StubPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
        fail: bool,
    }

    impl FilePresenterPort for StubPresenter {
        type Error = StubPresenterError;

        fn present(
            &self,
            buffer: &PixelBuffer,
            filepath: impl AsRef<Path>,
        ) -> Result<(), StubPresenterError> {
            if self.fail {
                return Err(StubPresenterError {});
            }

            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn request(args: &[&str]) -> RenderRequest {
        let cli = Cli::try_parse_from(std::iter::once("fractal_plane").chain(args.iter().copied()))
            .unwrap();
        RenderRequest::try_from(cli).unwrap()
    }

    #[test]
    fn test_generate_then_write() {
        let mut controller = RenderController::new(
            StubPresenter::default(),
            request(&["mandelbrot", "--width", "40", "--height", "30", "--tile-size", "16"]),
        );

        controller.generate().unwrap();
        controller.write("out.png").unwrap();

        assert_eq!(
            *controller.presenter.written.borrow(),
            vec![(PathBuf::from("out.png"), 40 * 30 * 3)]
        );
    }

    #[test]
    fn test_write_before_generate_fails() {
        let controller = RenderController::new(StubPresenter::default(), request(&["mandelbrot"]));

        assert!(controller.write("out.png").is_err());
        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_presenter_failure_is_reported() {
        let presenter = StubPresenter {
            fail: true,
            ..StubPresenter::default()
        };
        let mut controller = RenderController::new(
            presenter,
            request(&["julia", "--width", "20", "--height", "20"]),
        );

        controller.generate().unwrap();
        let err = controller.write("out.png").unwrap_err();

        assert!(format!("{:#}", err).contains("stub presenter failure"));
    }

    #[test]
    fn test_origin_is_black_without_axes_and_red_with_axes() {
        let args = ["mandelbrot", "--width", "40", "--height", "40", "--max-iterations", "50"];
        let centre = Point { x: 20, y: 20 };

        let mut plain = RenderController::new(StubPresenter::default(), request(&args));
        plain.generate().unwrap();
        assert_eq!(
            plain.buffer().unwrap().get_pixel(centre),
            Ok(Colour::BLACK)
        );

        let with_axes: Vec<&str> = args.iter().copied().chain(["--axes"]).collect();
        let mut axes = RenderController::new(StubPresenter::default(), request(&with_axes));
        axes.generate().unwrap();
        assert_eq!(axes.buffer().unwrap().get_pixel(centre), Ok(Colour::RED));
    }

    #[test]
    fn test_run_writes_requested_output() {
        let mut controller = RenderController::new(
            StubPresenter::default(),
            request(&["julia", "--width", "16", "--height", "16", "-o", "julia.ppm"]),
        );

        controller.run().unwrap();

        assert_eq!(
            controller.presenter.written.borrow()[0].0,
            PathBuf::from("julia.ppm")
        );
    }
}

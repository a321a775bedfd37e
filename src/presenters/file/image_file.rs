use std::path::Path;

use image::{ColorType, ImageError, ImageFormat};
use log::debug;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Saves pixel buffers through the `image` crate.
///
/// The encoder is picked from the file extension. Paths without a recognised
/// extension are written as PNG.
#[derive(Debug, Default)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for ImageFilePresenter {
    type Error = ImageError;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), ImageError> {
        let filepath = filepath.as_ref();
        let format = ImageFormat::from_path(filepath).unwrap_or(ImageFormat::Png);
        let pixel_rect = buffer.pixel_rect();

        debug!("writing {:?} image to {}", format, filepath.display());

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            pixel_rect.width(),
            pixel_rect.height(),
            ColorType::Rgb8,
            format,
        )
    }
}

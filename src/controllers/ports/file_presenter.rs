use std::error::Error;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished pixel buffer somewhere on disk.
pub trait FilePresenterPort {
    type Error: Error + Send + Sync + 'static;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), Self::Error>;
}

use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use crate::core::actions::generate_fractal::generate_fractal_tiled::DEFAULT_TILE_SIZE;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionConfigError {
    Size(PixelRectError),
    ZeroTileSize,
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(err) => write!(f, "grid size error: {}", err),
            Self::ZeroTileSize => write!(f, "tile size must be greater than zero"),
        }
    }
}

impl Error for SessionConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Size(err) => Some(err),
            Self::ZeroTileSize => None,
        }
    }
}

impl From<PixelRectError> for SessionConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::Size(err)
    }
}

/// Grid dimensions and tile edge of a session, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl SessionConfig {
    pub fn grid_size(&self) -> Result<PixelRect, SessionConfigError> {
        Ok(PixelRect::with_size(self.width, self.height)?)
    }

    pub fn tile_size(&self) -> Result<NonZeroU32, SessionConfigError> {
        NonZeroU32::new(self.tile_size).ok_or(SessionConfigError::ZeroTileSize)
    }
}

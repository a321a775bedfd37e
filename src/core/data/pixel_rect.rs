use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(top_left: Point, width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    /// A rect anchored at the origin, as used for whole grids.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Self::new(Point::default(), width, height)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Inclusive bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.top_left.x.saturating_add(self.width - 1),
            y: self.top_left.y.saturating_add(self.height - 1),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let bottom_right = self.bottom_right();

        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && bottom_right.x >= point.x
            && bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major offset of `point` within this rect, if the point is inside it.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let dx = (point.x - self.top_left.x) as usize;
        let dy = (point.y - self.top_left.y) as usize;

        Some(dy * self.width as usize + dx)
    }

    /// Intersection with `bounds`, or `None` when they do not overlap.
    #[must_use]
    pub fn clip_to(&self, bounds: PixelRect) -> Option<PixelRect> {
        let left = self.top_left.x.max(bounds.top_left.x);
        let top = self.top_left.y.max(bounds.top_left.y);
        let right = self.bottom_right().x.min(bounds.bottom_right().x);
        let bottom = self.bottom_right().y.min(bounds.bottom_right().y);

        if left > right || top > bottom {
            return None;
        }

        PixelRect::new(Point { x: left, y: top }, right - left + 1, bottom - top + 1).ok()
    }
}

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::num::NonZeroU32;

/// Splits `pixel_rect` into square tiles of `tile_size`, row of tiles by row of tiles.
///
/// Tiles on the right and bottom edges are clipped to `pixel_rect`, so the
/// tiles never overlap and cover every pixel exactly once.
pub fn calculate_tiles_in_pixel_rect(pixel_rect: PixelRect, tile_size: NonZeroU32) -> Vec<PixelRect> {
    let edge = tile_size.get();
    let origin = pixel_rect.top_left();

    (0..pixel_rect.height())
        .step_by(edge as usize)
        .flat_map(|dy| {
            (0..pixel_rect.width())
                .step_by(edge as usize)
                .map(move |dx| Point {
                    x: origin.x + dx,
                    y: origin.y + dy,
                })
        })
        .filter_map(|top_left| {
            PixelRect::new(top_left, edge, edge)
                .ok()
                .and_then(|tile| tile.clip_to(pixel_rect))
        })
        .collect()
}

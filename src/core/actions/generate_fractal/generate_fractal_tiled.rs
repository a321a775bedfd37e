use std::num::NonZeroU32;

use log::debug;
use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_grid::PlaneGrid;
use crate::core::util::calculate_tiles_in_pixel_rect::calculate_tiles_in_pixel_rect;

/// Reference tile edge, in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 100;

/// Error type for tiled fractal generation.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    /// The fractal algorithm failed on a pixel inside `tile`; the run was abandoned.
    Algorithm { tile: PixelRect, source: E },
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Algorithm { tile, source } => write!(
                f,
                "algorithm error in tile at (x: {}, y: {}): {}",
                tile.top_left().x,
                tile.top_left().y,
                source
            ),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Algorithm { source, .. } => Some(source),
        }
    }
}

/// One unit of parallel work: a tile and the output row segments it owns.
struct Tile<'a, T> {
    rect: PixelRect,
    rows: Vec<&'a mut [T]>,
}

/// Hands each tile the `&mut` row segments of `buffer` that fall inside it.
///
/// `buffer` is row-major over `size`. Segments are carved with `chunks_mut`, so
/// no two tiles can alias an element.
fn split_into_tiles<T>(buffer: &mut [T], size: PixelRect, tile_size: NonZeroU32) -> Vec<Tile<'_, T>> {
    let width = size.width() as usize;
    let edge = tile_size.get() as usize;
    let mut rects = calculate_tiles_in_pixel_rect(size, tile_size).into_iter();
    let mut tiles = Vec::with_capacity(rects.len());

    for band in buffer.chunks_mut(width.saturating_mul(edge)) {
        let band_height = edge.min(band.len() / width);
        let mut band_rows: Vec<Vec<&mut [T]>> = Vec::new();

        for row in band.chunks_mut(width) {
            for (column, segment) in row.chunks_mut(edge).enumerate() {
                if column == band_rows.len() {
                    band_rows.push(Vec::with_capacity(band_height));
                }
                band_rows[column].push(segment);
            }
        }

        for rows in band_rows {
            if let Some(rect) = rects.next() {
                debug_assert_eq!(rows.len(), rect.height() as usize);
                tiles.push(Tile { rect, rows });
            }
        }
    }

    tiles
}

fn fill_tile<Alg>(
    tile: Tile<'_, Alg::Success>,
    plane: &PlaneGrid,
    algorithm: &Alg,
) -> Result<(), GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
{
    let Tile { rect, rows } = tile;
    let size = plane.size();
    let width = size.width() as usize;
    let left = (rect.top_left().x - size.top_left().x) as usize;
    let top = (rect.top_left().y - size.top_left().y) as usize;

    for (dy, row) in rows.into_iter().enumerate() {
        let start = (top + dy) * width + left;
        let points = &plane.values()[start..start + row.len()];

        for (slot, &point) in row.iter_mut().zip(points) {
            *slot = algorithm
                .compute(point)
                .map_err(|source| GenerateFractalError::Algorithm { tile: rect, source })?;
        }
    }

    Ok(())
}

/// Computes every pixel of `plane`, one rayon task per square tile.
///
/// Each task writes straight into its own tiles of the row-major result. The
/// call returns only once every tile has finished, and the first failure
/// stops the remaining tiles and is returned.
pub fn generate_fractal_tiled<Alg>(
    plane: &PlaneGrid,
    algorithm: &Alg,
    tile_size: NonZeroU32,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Clone + Default + Send,
    Alg::Failure: Send,
{
    let size = plane.size();
    let mut results = vec![Alg::Success::default(); size.size()];
    let tiles = split_into_tiles(&mut results, size, tile_size);

    debug!(
        "dispatching {} tiles of edge {} over {}x{} pixels",
        tiles.len(),
        tile_size,
        size.width(),
        size.height()
    );

    tiles
        .into_par_iter()
        .try_for_each(|tile| fill_tile(tile, plane, algorithm))?;

    Ok(results)
}

use rayon::prelude::*;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_grid::PlaneGrid;
use crate::core::data::region::Region;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

/// Builds the complex coordinate of every pixel in `size` for `region`.
///
/// Rows are mapped in parallel. The returned grid replaces any previous one
/// wholesale; there is no incremental update.
#[must_use]
pub fn map_plane(size: PixelRect, region: Region) -> PlaneGrid {
    let mapping = PlaneMapping::new(size, region);
    let width = size.width() as usize;
    let mut values = vec![Complex::ZERO; size.size()];

    values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = mapping.to_complex(x as u32, y as u32);
            }
        });

    PlaneGrid::from_parts(size, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

    #[test]
    fn test_map_plane_matches_single_pixel_mapping() {
        let size = PixelRect::with_size(37, 23).unwrap();
        let region = Region::new(-2.5, 1.0, -1.0, 1.0).unwrap();
        let plane = map_plane(size, region);

        for y in 0..23 {
            for x in 0..37 {
                let point = Point { x, y };
                assert_eq!(
                    plane.get(point),
                    pixel_to_complex_coords(point, size, region).ok()
                );
            }
        }
    }

    #[test]
    fn test_map_plane_origin_and_centre() {
        let size = PixelRect::with_size(800, 800).unwrap();
        let plane = map_plane(size, Region::default());

        assert_eq!(plane.get(Point { x: 0, y: 0 }), Some(Complex::new(-1.0, 1.0)));
        assert_eq!(plane.get(Point { x: 400, y: 400 }), Some(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_remapping_replaces_every_value() {
        let size = PixelRect::with_size(16, 16).unwrap();
        let before = map_plane(size, Region::default());
        let after = map_plane(size, Region::new(2.0, 3.0, 2.0, 3.0).unwrap());

        assert!(
            before
                .values()
                .iter()
                .zip(after.values())
                .all(|(a, b)| a != b)
        );
    }
}

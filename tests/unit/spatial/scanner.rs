//! Tests for corner detection and the tile count check

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use primetile::PuzzleError;
    use primetile::io::configuration::{COLOR_BACKGROUND, COLOR_TILE_FRAME};
    use primetile::spatial::raster::{Corner, Raster};
    use primetile::spatial::scanner::{find_corners, is_corner, scan_corners};
    use primetile::spatial::synthesis::frame_tiles;

    fn grid_raster(count: u8, columns: usize) -> Raster {
        let pieces: Vec<RgbaImage> = (0..count).map(|i| crate::patterned(3, 2, i)).collect();
        let image = frame_tiles(&pieces, &crate::palette(), columns, 1).unwrap();
        Raster::new(image, &crate::palette())
    }

    // Tests one corner per framed tile
    // Verified by dropping the diagonal neighbour check
    #[test]
    fn test_finds_one_corner_per_tile() {
        let raster = grid_raster(6, 3);
        assert_eq!(find_corners(&raster).len(), 6);
    }

    // Tests column-major discovery order
    // Verified by swapping the loop nesting
    #[test]
    fn test_column_major_order() {
        // Cells are 3 + 2 + 1 = 6 wide and 2 + 2 + 1 = 5 high
        let raster = grid_raster(4, 2);
        assert_eq!(
            find_corners(&raster),
            vec![
                Corner::new(1, 1),
                Corner::new(1, 6),
                Corner::new(7, 1),
                Corner::new(7, 6),
            ]
        );
    }

    // Tests that frame pixels on the first row or column are never corners
    // Verified by treating out-of-range reads as background
    #[test]
    fn test_edge_pixels_are_not_corners() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba(COLOR_BACKGROUND));
        image.put_pixel(0, 2, Rgba(COLOR_TILE_FRAME));
        image.put_pixel(2, 0, Rgba(COLOR_TILE_FRAME));
        image.put_pixel(0, 0, Rgba(COLOR_TILE_FRAME));
        let raster = Raster::new(image, &crate::palette());

        assert!(!is_corner(&raster, 0, 2));
        assert!(!is_corner(&raster, 2, 0));
        assert!(!is_corner(&raster, 0, 0));
        assert!(find_corners(&raster).is_empty());
    }

    // Tests that interior frame pixels do not match the pattern
    // Verified by checking only the left neighbour
    #[test]
    fn test_frame_edges_are_not_corners() {
        let raster = grid_raster(1, 1);
        assert!(is_corner(&raster, 1, 1));
        assert!(!is_corner(&raster, 2, 1));
        assert!(!is_corner(&raster, 1, 2));
        assert!(!is_corner(&raster, 5, 4));
    }

    // Tests that a missing tile is a fatal count mismatch
    // Verified by returning the corners without comparing counts
    #[test]
    fn test_count_mismatch() {
        let raster = grid_raster(4, 2);
        match scan_corners(&raster, 5) {
            Err(PuzzleError::CountMismatch { expected, found }) => {
                assert_eq!(expected, 5);
                assert_eq!(found, 4);
            }
            other => unreachable!("Expected CountMismatch, got {other:?}"),
        }
        assert_eq!(scan_corners(&raster, 4).unwrap().len(), 4);
    }
}

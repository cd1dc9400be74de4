//! Tests for the compile-time defaults

#[cfg(test)]
mod tests {
    use primetile::algorithm::rotation::Rotation;
    use primetile::io::configuration::{
        BASE_ROTATION_DEGREES, COLOR_BACKGROUND, COLOR_TILE_FRAME, DEFAULT_FRAME_GAP,
        NUMBER_OF_TILES, PUZZLE_INPUT, PUZZLE_OUTPUT, ROTATION_STEP_DEGREES,
    };

    // Tests the fixed puzzle colors
    // Verified by making the colors equal
    #[test]
    fn test_colors() {
        assert_eq!(COLOR_BACKGROUND, [30, 30, 30, 255]);
        assert_eq!(COLOR_TILE_FRAME, [255, 255, 255, 255]);
        assert_ne!(COLOR_BACKGROUND, COLOR_TILE_FRAME);
    }

    // Tests that both policy angles are quarter-turn multiples
    // Verified by setting the step to 45 degrees
    #[test]
    fn test_rotation_angles() {
        assert_eq!(
            Rotation::from_degrees(BASE_ROTATION_DEGREES),
            Some(Rotation::Half)
        );
        assert_eq!(
            Rotation::from_degrees(BASE_ROTATION_DEGREES - ROTATION_STEP_DEGREES),
            Some(Rotation::Quarter)
        );
    }

    // Tests the remaining defaults
    // Verified by changing the tile count
    #[test]
    fn test_defaults() {
        assert_eq!(NUMBER_OF_TILES, 675);
        assert_eq!(PUZZLE_INPUT, "puzzle2023.png");
        assert_eq!(PUZZLE_OUTPUT, "result.png");
        assert!(DEFAULT_FRAME_GAP >= 1);
    }
}

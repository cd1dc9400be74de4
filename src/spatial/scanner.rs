//! Tile corner detection by direct raster sweep
//!
//! A corner is a frame pixel whose left, upper-left and upper neighbours are
//! all background. The sweep visits every pixel column by column, so corners
//! come out ordered by x, then by y.

use log::debug;

use crate::io::error::{PuzzleError, Result};
use crate::spatial::raster::{Corner, PixelClass, Raster};

/// Neighbour offsets that must be background for a frame pixel to be a corner
const BACKGROUND_NEIGHBORS: [(i32, i32); 3] = [(-1, 0), (-1, -1), (0, -1)];

/// Whether `(x, y)` is the top-left pixel of a tile frame
///
/// Neighbours outside the raster never match, so pixels on the first row or
/// column are never corners.
pub fn is_corner(raster: &Raster, x: u32, y: u32) -> bool {
    raster.is(x, y, PixelClass::Frame)
        && BACKGROUND_NEIGHBORS
            .iter()
            .all(|&(dx, dy)| raster.neighbor(x, y, dx, dy) == Some(PixelClass::Background))
}

/// Find all tile corners in column-major order
pub fn find_corners(raster: &Raster) -> Vec<Corner> {
    let mut corners = Vec::new();
    for x in 0..raster.width() {
        for y in 0..raster.height() {
            if is_corner(raster, x, y) {
                debug!("corner at ({x}, {y})");
                corners.push(Corner::new(x, y));
            }
        }
    }
    corners
}

/// Find all tile corners and check their number
///
/// # Errors
///
/// Returns [`PuzzleError::CountMismatch`] if the number of corners differs
/// from `expected`.
pub fn scan_corners(raster: &Raster, expected: usize) -> Result<Vec<Corner>> {
    let corners = find_corners(raster);
    if corners.len() != expected {
        return Err(PuzzleError::CountMismatch {
            expected,
            found: corners.len(),
        });
    }
    Ok(corners)
}

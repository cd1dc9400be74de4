//! Stitching grouped rows into the final image

use image::{RgbaImage, imageops};

use crate::algorithm::grouping::Grouping;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::tiles::{Dimensions, RotatedTile};

/// Width and height of the assembled canvas
///
/// The width is the width of the first row, the height the sum of all row
/// heights.
///
/// # Errors
///
/// Returns an error if:
/// - The grouping has no rows ([`PuzzleError::EmptyLayout`])
/// - Some row is wider or narrower than the first ([`PuzzleError::LayoutInconsistency`])
/// - The canvas does not fit into `u32` dimensions ([`PuzzleError::CanvasOverflow`])
pub fn canvas_dimensions<T: Dimensions>(grouping: &Grouping<T>) -> Result<(u32, u32)> {
    let first = grouping.rows().first().ok_or(PuzzleError::EmptyLayout)?;
    let width = first.width();

    if let Some(row) = grouping.rows().iter().find(|row| row.width() != width) {
        return Err(PuzzleError::LayoutInconsistency {
            row_height: row.height,
            row_width: row.width(),
            expected_width: width,
        });
    }

    let height: u64 = grouping.rows().iter().map(|row| u64::from(row.height)).sum();

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(PuzzleError::CanvasOverflow { width, height }),
    }
}

/// Paste every tile into its row and column slot on a transparent canvas
///
/// Rows are stacked top to bottom, each starting at the left edge. Tile
/// pixels replace the canvas pixels, alpha included.
///
/// # Errors
///
/// Propagates the layout checks of [`canvas_dimensions`].
pub fn compose(grouping: &Grouping<RotatedTile>) -> Result<RgbaImage> {
    let (width, height) = canvas_dimensions(grouping)?;
    let mut canvas = RgbaImage::new(width, height);

    let mut y = 0_i64;
    for row in grouping.rows() {
        let mut x = 0_i64;
        for tile in &row.tiles {
            imageops::replace(&mut canvas, tile.pixels(), x, y);
            x += i64::from(tile.width());
        }
        y += i64::from(row.height);
    }

    Ok(canvas)
}

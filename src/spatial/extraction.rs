//! Cropping tiles out of the puzzle image
//!
//! The extent of a tile is measured by walking its top and left frame edges
//! from the corner. The crop drops exactly one frame pixel on every side;
//! thicker or broken frames are not supported.

use image::imageops;

use crate::io::error::{PuzzleError, Result};
use crate::spatial::raster::{Axis, Corner, PixelClass, Raster};
use crate::spatial::tiles::Tile;

/// Exclusive end of the frame edge starting at `corner` along `axis`
///
/// # Errors
///
/// Returns [`PuzzleError::MalformedFrame`] if the edge reaches the border of
/// the raster without ending.
pub fn frame_end(raster: &Raster, corner: Corner, axis: Axis) -> Result<u32> {
    let limit = match axis {
        Axis::Horizontal => raster.width(),
        Axis::Vertical => raster.height(),
    };

    (axis.coordinate(corner)..limit)
        .find(|&position| {
            let (x, y) = axis.point(corner, position);
            !raster.is(x, y, PixelClass::Frame)
        })
        .ok_or(PuzzleError::MalformedFrame { corner, axis })
}

/// Extract the framed tile whose top-left frame pixel is `corner`
///
/// The returned tile owns a copy of its pixels.
///
/// # Errors
///
/// Returns an error if:
/// - A frame edge runs off the raster ([`PuzzleError::MalformedFrame`])
/// - The frame encloses no pixels ([`PuzzleError::DegenerateTile`])
pub fn extract_tile(raster: &Raster, corner: Corner) -> Result<Tile> {
    let right = frame_end(raster, corner, Axis::Horizontal)?;
    let bottom = frame_end(raster, corner, Axis::Vertical)?;

    let frame_width = right - corner.x;
    let frame_height = bottom - corner.y;
    if frame_width < 3 || frame_height < 3 {
        return Err(PuzzleError::DegenerateTile {
            corner,
            frame_width,
            frame_height,
        });
    }

    let pixels = imageops::crop_imm(
        raster.image(),
        corner.x + 1,
        corner.y + 1,
        frame_width - 2,
        frame_height - 2,
    )
    .to_image();

    Ok(Tile::new(corner, pixels))
}

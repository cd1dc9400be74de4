//! Building framed puzzle images from finished tiles
//!
//! This is the inverse of the reconstruction pipeline: each tile is turned
//! into a piece that the rotation policy turns back, the pieces are shuffled
//! and laid out on a background with a one-pixel frame around each.

use image::{Rgba, RgbaImage, imageops};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::io::error::{Result, invalid_parameter};
use crate::math::primes::is_prime;
use crate::spatial::raster::Palette;

/// Turn a finished tile into a puzzle piece
///
/// A 180 degree turn always maps back onto `tile`. When the tile's height
/// is not prime a 90 degree clockwise turn also does, and is picked half of
/// the time.
pub fn scramble_tile<R: Rng>(tile: &RgbaImage, rng: &mut R) -> RgbaImage {
    if !is_prime(tile.height()) && rng.random_bool(0.5) {
        imageops::rotate90(tile)
    } else {
        imageops::rotate180(tile)
    }
}

/// Lay out pieces in a grid with a frame around each
///
/// Pieces fill lines of `columns` from left to right. Every cell is as large
/// as the biggest piece plus its frame, and cells are separated from each
/// other and from the border by `gap` background pixels.
///
/// # Errors
///
/// Returns [`crate::PuzzleError::InvalidParameter`] if `columns` or `gap` is
/// zero, or if the resulting image would be too large.
pub fn frame_tiles(
    pieces: &[RgbaImage],
    palette: &Palette,
    columns: usize,
    gap: u32,
) -> Result<RgbaImage> {
    if columns == 0 {
        return Err(invalid_parameter("columns", &columns, &"must be positive"));
    }
    if gap == 0 {
        return Err(invalid_parameter(
            "gap",
            &gap,
            &"frames need background between them",
        ));
    }

    let cell_width = pieces.iter().map(RgbaImage::width).max().unwrap_or(0) + 2 + gap;
    let cell_height = pieces.iter().map(RgbaImage::height).max().unwrap_or(0) + 2 + gap;
    let lines = pieces.len().div_ceil(columns);
    let used_columns = columns.min(pieces.len());

    let width = u32::try_from(used_columns)
        .ok()
        .and_then(|c| c.checked_mul(cell_width))
        .and_then(|w| w.checked_add(gap));
    let height = u32::try_from(lines)
        .ok()
        .and_then(|l| l.checked_mul(cell_height))
        .and_then(|h| h.checked_add(gap));
    let (Some(width), Some(height)) = (width, height) else {
        return Err(invalid_parameter(
            "pieces",
            &pieces.len(),
            &"puzzle image would be too large",
        ));
    };

    let mut canvas = RgbaImage::from_pixel(width, height, palette.background);
    let (mut column, mut x, mut y) = (0, gap, gap);
    for piece in pieces {
        draw_frame(&mut canvas, x, y, piece.width() + 2, piece.height() + 2, palette.frame);
        imageops::replace(&mut canvas, piece, i64::from(x + 1), i64::from(y + 1));

        column += 1;
        x += cell_width;
        if column == columns {
            column = 0;
            x = gap;
            y += cell_height;
        }
    }

    Ok(canvas)
}

fn draw_frame(canvas: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    for dx in 0..width {
        canvas.put_pixel(x + dx, y, color);
        canvas.put_pixel(x + dx, y + height - 1, color);
    }
    for dy in 0..height {
        canvas.put_pixel(x, y + dy, color);
        canvas.put_pixel(x + width - 1, y + dy, color);
    }
}

/// Shuffle, scramble and frame a set of finished tiles
///
/// The same `seed` always produces the same puzzle image.
///
/// # Errors
///
/// Propagates the parameter checks of [`frame_tiles`].
pub fn scramble(
    tiles: &[RgbaImage],
    palette: &Palette,
    columns: usize,
    gap: u32,
    seed: u64,
) -> Result<RgbaImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pieces: Vec<RgbaImage> = tiles
        .iter()
        .map(|tile| scramble_tile(tile, &mut rng))
        .collect();
    pieces.shuffle(&mut rng);
    frame_tiles(&pieces, palette, columns, gap)
}

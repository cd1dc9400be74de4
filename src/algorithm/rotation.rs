//! Prime-width rotation policy
//!
//! Every tile is turned 180 degrees, minus 90 when its width is not prime.
//! The puzzle is built so that the result always has a prime width; a tile
//! that breaks this is rejected rather than corrected.

use std::fmt;

use image::{RgbaImage, imageops};
use log::debug;

use crate::io::configuration::{BASE_ROTATION_DEGREES, ROTATION_STEP_DEGREES};
use crate::io::error::Result;
use crate::math::primes::is_prime;
use crate::spatial::tiles::{Dimensions, RotatedTile, Tile};

/// Counter-clockwise rotation by a multiple of 90 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation
    None,
    /// 90 degrees counter-clockwise, width and height swap
    Quarter,
    /// 180 degrees
    Half,
    /// 270 degrees counter-clockwise, width and height swap
    ThreeQuarter,
}

impl Rotation {
    /// Rotation for an angle in counter-clockwise degrees
    ///
    /// Returns `None` for angles that are not a multiple of 90.
    pub const fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Self::None),
            90 => Some(Self::Quarter),
            180 => Some(Self::Half),
            270 => Some(Self::ThreeQuarter),
            _ => None,
        }
    }

    /// Angle in counter-clockwise degrees
    pub const fn degrees(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    /// Whether the rotation swaps width and height
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Quarter | Self::ThreeQuarter)
    }

    /// Rotate `image`, growing the canvas to fit
    pub fn apply(self, image: &RgbaImage) -> RgbaImage {
        // imageops rotates clockwise
        match self {
            Self::None => image.clone(),
            Self::Quarter => imageops::rotate270(image),
            Self::Half => imageops::rotate180(image),
            Self::ThreeQuarter => imageops::rotate90(image),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Rotation the policy applies to a tile of the given width
pub fn rotation_for_width(width: u32) -> Rotation {
    let mut degrees = BASE_ROTATION_DEGREES;
    if !is_prime(width) {
        degrees -= ROTATION_STEP_DEGREES;
    }
    Rotation::from_degrees(degrees).unwrap_or(Rotation::Half)
}

/// Rotate a single tile according to the policy
///
/// # Errors
///
/// Returns [`crate::PuzzleError::RotationInvariant`] if the rotated tile
/// does not have a prime width.
pub fn rotate_tile(tile: &Tile) -> Result<RotatedTile> {
    let rotation = rotation_for_width(tile.width());
    debug!(
        "tile at {} ({}x{}) rotated by {rotation}",
        tile.origin(),
        tile.width(),
        tile.height()
    );
    RotatedTile::new(tile.origin(), rotation, rotation.apply(tile.pixels()))
}

/// Rotate all tiles, keeping their order
///
/// # Errors
///
/// Stops at the first tile that fails [`rotate_tile`].
pub fn rotate_tiles(tiles: &[Tile]) -> Result<Vec<RotatedTile>> {
    tiles.iter().map(rotate_tile).collect()
}

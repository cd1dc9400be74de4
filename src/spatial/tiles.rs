//! Tile values flowing through the pipeline

use image::RgbaImage;

use crate::algorithm::rotation::Rotation;
use crate::io::error::{PuzzleError, Result};
use crate::math::primes::is_prime;
use crate::spatial::raster::Corner;

/// Anything with a pixel size
pub trait Dimensions {
    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;
}

/// Tile content cropped out of the puzzle image, frame excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    origin: Corner,
    pixels: RgbaImage,
}

impl Tile {
    /// Wrap cropped pixels found at `origin`
    pub const fn new(origin: Corner, pixels: RgbaImage) -> Self {
        Self { origin, pixels }
    }

    /// Frame corner the tile was found at
    pub const fn origin(&self) -> Corner {
        self.origin
    }

    /// Tile content
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl Dimensions for Tile {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Tile after rotation; its width is always prime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatedTile {
    origin: Corner,
    rotation: Rotation,
    pixels: RgbaImage,
}

impl RotatedTile {
    /// Wrap rotated pixels, enforcing a prime width
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::RotationInvariant`] if the width of `pixels`
    /// is not prime.
    pub fn new(origin: Corner, rotation: Rotation, pixels: RgbaImage) -> Result<Self> {
        if !is_prime(pixels.width()) {
            return Err(PuzzleError::RotationInvariant {
                corner: origin,
                rotation,
                width: pixels.width(),
                height: pixels.height(),
            });
        }

        Ok(Self {
            origin,
            rotation,
            pixels,
        })
    }

    /// Frame corner the tile was found at
    pub const fn origin(&self) -> Corner {
        self.origin
    }

    /// Rotation that produced this tile
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Rotated content
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl Dimensions for RotatedTile {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }
}

//! Read-only pixel grid with frame/background classification
//!
//! The puzzle image is classified once against a [`Palette`] so that corner
//! detection and frame following only compare small enum values. Lookups
//! outside the image never fail: they report `None`, which matches no class.

use std::fmt;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Role of a single pixel in the puzzle image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// Space between framed tiles
    Background,
    /// Part of a one-pixel tile frame
    Frame,
    /// Anything else, usually tile content
    Other,
}

/// The two colors that structure a puzzle image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color surrounding the framed tiles
    pub background: Rgba<u8>,
    /// Color of the tile frames
    pub frame: Rgba<u8>,
}

impl Palette {
    /// Create a palette from raw RGBA values
    pub const fn new(background: [u8; 4], frame: [u8; 4]) -> Self {
        Self {
            background: Rgba(background),
            frame: Rgba(frame),
        }
    }

    /// Classify a pixel by exact color match
    pub fn classify(&self, pixel: &Rgba<u8>) -> PixelClass {
        if *pixel == self.frame {
            PixelClass::Frame
        } else if *pixel == self.background {
            PixelClass::Background
        } else {
            PixelClass::Other
        }
    }
}

/// Top-left pixel of a tile frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    /// Column, growing rightwards
    pub x: u32,
    /// Row, growing downwards
    pub y: u32,
}

impl Corner {
    /// Create a corner at the given pixel
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction in which a frame edge is followed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along the top edge, x increasing
    Horizontal,
    /// Along the left edge, y increasing
    Vertical,
}

impl Axis {
    /// Coordinate of `corner` along this axis
    pub const fn coordinate(self, corner: Corner) -> u32 {
        match self {
            Self::Horizontal => corner.x,
            Self::Vertical => corner.y,
        }
    }

    /// Pixel reached by moving `corner` to `position` along this axis
    pub const fn point(self, corner: Corner, position: u32) -> (u32, u32) {
        match self {
            Self::Horizontal => (position, corner.y),
            Self::Vertical => (corner.x, position),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Decoded puzzle image together with its per-pixel classes
#[derive(Debug, Clone)]
pub struct Raster {
    image: RgbaImage,
    /// Pixel classes indexed by `(y, x)`
    classes: Array2<PixelClass>,
}

impl Raster {
    /// Classify every pixel of `image` against `palette`
    pub fn new(image: RgbaImage, palette: &Palette) -> Self {
        let (width, height) = image.dimensions();
        let classes = Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
            image
                .get_pixel_checked(x as u32, y as u32)
                .map_or(PixelClass::Other, |pixel| palette.classify(pixel))
        });

        Self { image, classes }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Underlying pixel data
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Class of the pixel at `(x, y)`, `None` outside the raster
    pub fn class_at(&self, x: u32, y: u32) -> Option<PixelClass> {
        self.classes.get((y as usize, x as usize)).copied()
    }

    /// Class of the pixel offset by `(dx, dy)` from `(x, y)`
    ///
    /// Offsets that leave the raster, including negative coordinates,
    /// yield `None`.
    pub fn neighbor(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<PixelClass> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.class_at(nx, ny)
    }

    /// Whether the pixel at `(x, y)` exists and has the given class
    pub fn is(&self, x: u32, y: u32, class: PixelClass) -> bool {
        self.class_at(x, y) == Some(class)
    }
}

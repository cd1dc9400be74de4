//! Pixel-level structures: the raster, its tiles and how they are found
//!
//! This module contains:
//! - Raster classification and neighbour lookup
//! - Corner scanning and tile extraction
//! - Tile types
//! - Synthesis of framed puzzle images

/// Tile cropping from a detected corner
pub mod extraction;
/// Classified pixel grid
pub mod raster;
/// Corner detection
pub mod scanner;
/// Building puzzle images from tiles
pub mod synthesis;
/// Tile types and the `Dimensions` trait
pub mod tiles;

pub use raster::{Corner, Palette, Raster};
pub use tiles::{Dimensions, RotatedTile, Tile};

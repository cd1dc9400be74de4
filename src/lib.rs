//! Reassembles a picture that was cut into framed, rotated and shuffled tiles
//!
//! Tiles are located by their one-pixel frames, turned so that their width is
//! prime, grouped into rows by height and stitched back together in serpentine
//! order.

#![forbid(unsafe_code)]

/// Tile rotation, grouping and composition
pub mod algorithm;
/// Command line, configuration, errors and file access
pub mod io;
/// Numeric helpers
pub mod math;
/// Raster, tiles, corner scanning and extraction
pub mod spatial;

pub use io::error::{PuzzleError, Result};

//! Scan, extract, rotate, group and compose in one pass
//!
//! Each stage consumes the output of the previous one and the first failure
//! aborts the whole run, so a returned [`Solution`] is always complete.

use image::RgbaImage;
use log::{debug, info};

use crate::algorithm::composition::compose;
use crate::algorithm::grouping::group_and_sort;
use crate::algorithm::rotation::rotate_tile;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::spatial::extraction::extract_tile;
use crate::spatial::raster::Raster;
use crate::spatial::scanner::scan_corners;

/// Counts collected while solving a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveSummary {
    /// Number of tiles found and placed
    pub tiles: usize,
    /// Tiles whose width was not prime and took the 90 degree path
    pub quarter_turns: usize,
    /// Number of rows in the output
    pub rows: usize,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// Assembled image together with its summary
#[derive(Debug, Clone)]
pub struct Solution {
    /// Reconstructed picture
    pub canvas: RgbaImage,
    /// What it took to build it
    pub summary: SolveSummary,
}

/// Tile reconstruction pipeline for puzzles with a known tile count
pub struct Pipeline {
    expected_tiles: usize,
    progress: ProgressManager,
}

impl Pipeline {
    /// Create a pipeline that reports no progress
    pub fn new(expected_tiles: usize) -> Self {
        Self::with_progress(expected_tiles, ProgressManager::hidden())
    }

    /// Create a pipeline reporting through `progress`
    pub const fn with_progress(expected_tiles: usize, progress: ProgressManager) -> Self {
        Self {
            expected_tiles,
            progress,
        }
    }

    /// Number of tiles the scan must find
    pub const fn expected_tiles(&self) -> usize {
        self.expected_tiles
    }

    /// Reassemble the tiles found in `raster`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The scan finds a different number of corners than expected
    /// - A tile frame is malformed or encloses no pixels
    /// - A rotated tile does not have a prime width
    /// - The rows do not form a rectangle
    pub fn solve(&self, raster: &Raster) -> Result<Solution> {
        info!(
            "scanning {}x{} image for {} tiles",
            raster.width(),
            raster.height(),
            self.expected_tiles
        );
        let corners = scan_corners(raster, self.expected_tiles)?;

        self.progress.start_stage("extract", corners.len());
        let mut tiles = Vec::with_capacity(corners.len());
        for corner in corners {
            let tile = extract_tile(raster, corner)?;
            tiles.push(tile);
            self.progress.advance();
        }
        info!("extracted {} tiles", tiles.len());

        self.progress.start_stage("rotate", tiles.len());
        let mut rotated = Vec::with_capacity(tiles.len());
        for tile in &tiles {
            rotated.push(rotate_tile(tile)?);
            self.progress.advance();
        }
        let quarter_turns = rotated
            .iter()
            .filter(|tile| tile.rotation().swaps_axes())
            .count();
        info!(
            "rotated {} tiles, {quarter_turns} by a quarter turn",
            rotated.len()
        );

        let grouping = group_and_sort(rotated);
        debug!("row heights: {:?}", grouping.heights());
        info!("grouped tiles into {} rows", grouping.len());

        let canvas = compose(&grouping)?;
        self.progress.finish();
        info!("composed {}x{} image", canvas.width(), canvas.height());

        Ok(Solution {
            summary: SolveSummary {
                tiles: grouping.tile_count(),
                quarter_turns,
                rows: grouping.len(),
                width: canvas.width(),
                height: canvas.height(),
            },
            canvas,
        })
    }
}

//! Command-line interface for reassembling a puzzle image

use crate::algorithm::pipeline::{Pipeline, SolveSummary};
use crate::io::configuration::{
    COLOR_BACKGROUND, COLOR_TILE_FRAME, NUMBER_OF_TILES, PUZZLE_INPUT, PUZZLE_OUTPUT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_raster, save_canvas};
use crate::io::progress::ProgressManager;
use crate::spatial::raster::Palette;
use clap::Parser;
use log::info;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "primetile")]
#[command(
    version,
    about = "Reassemble a picture from framed, rotated and shuffled tiles"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle image to read
    #[arg(value_name = "INPUT", default_value = PUZZLE_INPUT)]
    pub input: PathBuf,

    /// Where to write the assembled image
    #[arg(short, long, default_value = PUZZLE_OUTPUT)]
    pub output: PathBuf,

    /// Number of tiles the puzzle contains
    #[arg(short = 'n', long, default_value_t = NUMBER_OF_TILES)]
    pub tiles: usize,

    /// Background color as R,G,B,A
    #[arg(long, default_value_t = ColorArg(COLOR_BACKGROUND))]
    pub background: ColorArg,

    /// Tile frame color as R,G,B,A
    #[arg(long, default_value_t = ColorArg(COLOR_TILE_FRAME))]
    pub frame: ColorArg,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Colors the puzzle is drawn with
    pub const fn palette(&self) -> Palette {
        Palette::new(self.background.0, self.frame.0)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// RGBA color written as four comma-separated channel values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorArg(pub [u8; 4]);

impl FromStr for ColorArg {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let channels = value
            .split(',')
            .map(|channel| {
                channel
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| format!("invalid channel '{channel}': {e}"))
            })
            .collect::<std::result::Result<Vec<u8>, String>>()?;

        <[u8; 4]>::try_from(channels)
            .map(Self)
            .map_err(|channels| format!("expected 4 channels, got {}", channels.len()))
    }
}

impl fmt::Display for ColorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{r},{g},{b},{a}")
    }
}

/// Runs the pipeline for one puzzle image
pub struct PuzzleProcessor {
    cli: Cli,
}

impl PuzzleProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the puzzle, solve it and save the result
    ///
    /// Nothing is written unless every stage succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the input cannot be
    /// read, any pipeline stage fails, or the output cannot be written.
    pub fn process(&self) -> Result<SolveSummary> {
        let start_time = Instant::now();

        if self.cli.tiles == 0 {
            return Err(invalid_parameter(
                "tiles",
                &self.cli.tiles,
                &"a puzzle needs at least one tile",
            ));
        }

        let raster = load_raster(&self.cli.input, &self.cli.palette())?;

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };
        let pipeline = Pipeline::with_progress(self.cli.tiles, progress);
        let solution = pipeline.solve(&raster)?;

        save_canvas(&solution.canvas, &self.cli.output)?;
        info!(
            "wrote '{}' in {:.2?}",
            self.cli.output.display(),
            start_time.elapsed()
        );

        Ok(solution.summary)
    }
}

//! Puzzle constants and runtime configuration defaults

// Input and output
/// Puzzle image read when no input is given
pub const PUZZLE_INPUT: &str = "puzzle2023.png";
/// Assembled image written when no output is given
pub const PUZZLE_OUTPUT: &str = "result.png";

/// Number of tiles the puzzle image contains
pub const NUMBER_OF_TILES: usize = 675;

// Colors are RGBA
/// Color surrounding the framed tiles
pub const COLOR_BACKGROUND: [u8; 4] = [30, 30, 30, 255];
/// Color of the one-pixel frame around each tile
pub const COLOR_TILE_FRAME: [u8; 4] = [255, 255, 255, 255];

// Rotation policy, counter-clockwise degrees
/// Rotation every tile starts from
pub const BASE_ROTATION_DEGREES: u32 = 180;
/// Taken off the base rotation when the tile width is not prime
pub const ROTATION_STEP_DEGREES: u32 = 90;

// Synthesis defaults
/// Fixed seed for reproducible puzzle synthesis
pub const DEFAULT_SEED: u64 = 42;
/// Background pixels between neighbouring frames
pub const DEFAULT_FRAME_GAP: u32 = 2;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used with `--quiet` when `RUST_LOG` is not set
pub const QUIET_LOG_FILTER: &str = "warn";

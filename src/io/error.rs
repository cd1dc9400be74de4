//! Error types for every stage of the reconstruction pipeline

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::rotation::Rotation;
use crate::spatial::raster::{Axis, Corner};

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to load the puzzle image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the assembled image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The scan found a different number of tile corners than expected
    CountMismatch {
        /// Number of tiles the puzzle is supposed to contain
        expected: usize,
        /// Number of corners the scan actually found
        found: usize,
    },

    /// Following a frame edge ran off the raster before the frame ended
    MalformedFrame {
        /// Top-left frame pixel the walk started from
        corner: Corner,
        /// Direction of the walk
        axis: Axis,
    },

    /// The frame is too short to enclose any pixel
    DegenerateTile {
        /// Top-left frame pixel of the tile
        corner: Corner,
        /// Frame extent along x, including both frame columns
        frame_width: u32,
        /// Frame extent along y, including both frame rows
        frame_height: u32,
    },

    /// A rotated tile does not have a prime width
    RotationInvariant {
        /// Frame corner the tile was extracted from
        corner: Corner,
        /// Rotation that was applied
        rotation: Rotation,
        /// Width after rotation
        width: u32,
        /// Height after rotation
        height: u32,
    },

    /// Rows of the layout have different total widths
    LayoutInconsistency {
        /// Height key of the offending row
        row_height: u32,
        /// Total width of the offending row
        row_width: u64,
        /// Total width of the first row
        expected_width: u64,
    },

    /// There are no tiles to assemble
    EmptyLayout,

    /// The assembled canvas would not fit into image dimensions
    CanvasOverflow {
        /// Requested canvas width
        width: u64,
        /// Requested canvas height
        height: u64,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CountMismatch { expected, found } => {
                write!(f, "Expected {expected} tiles but found {found}")
            }
            Self::MalformedFrame { corner, axis } => {
                write!(
                    f,
                    "Malformed frame at {corner}: {axis} edge runs off the image"
                )
            }
            Self::DegenerateTile {
                corner,
                frame_width,
                frame_height,
            } => {
                write!(
                    f,
                    "Frame at {corner} ({frame_width}x{frame_height}) encloses no pixels"
                )
            }
            Self::RotationInvariant {
                corner,
                rotation,
                width,
                height,
            } => {
                write!(
                    f,
                    "Tile from {corner} has non-prime width {width} (size {width}x{height}) after {rotation} rotation"
                )
            }
            Self::LayoutInconsistency {
                row_height,
                row_width,
                expected_width,
            } => {
                write!(
                    f,
                    "Row of height {row_height} is {row_width} pixels wide, expected {expected_width}"
                )
            }
            Self::EmptyLayout => write!(f, "No tiles to assemble"),
            Self::CanvasOverflow { width, height } => {
                write!(f, "Canvas of {width}x{height} exceeds the maximum image size")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

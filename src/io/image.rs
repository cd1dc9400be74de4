//! Loading the puzzle image and saving the assembled result

use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::io::error::{PuzzleError, Result};
use crate::spatial::raster::{Palette, Raster};

/// Load an image from disk and classify it against `palette`
///
/// Any format the `image` crate can decode is accepted; pixels are converted
/// to 8-bit RGBA.
///
/// # Errors
///
/// Returns [`PuzzleError::ImageLoad`] if the file cannot be opened or decoded.
pub fn load_raster(path: &Path, palette: &Palette) -> Result<Raster> {
    let image = image::open(path).map_err(|e| PuzzleError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba = image.to_rgba8();
    debug!(
        "loaded '{}' ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(Raster::new(rgba, palette))
}

/// Save the assembled image, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn save_canvas(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas.save(path).map_err(|e| PuzzleError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

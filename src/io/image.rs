//! Sheet loading and per-tile PNG export

use crate::io::error::{Result, SplitError};
use image::DynamicImage;
use std::path::Path;

/// Load the input sheet and normalize it to RGBA
///
/// # Errors
///
/// Returns `SplitError::ImageLoad` if the file cannot be read or decoded.
pub fn load_sheet(path: &Path) -> Result<DynamicImage> {
    let sheet = image::open(path).map_err(|e| SplitError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(DynamicImage::ImageRgba8(sheet.to_rgba8()))
}

/// Create the output directory for a run
///
/// Idempotent; existing directories are left untouched.
///
/// # Errors
///
/// Returns `SplitError::FileSystem` if the directory cannot be created.
pub fn create_output_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| SplitError::FileSystem {
        path: path.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}

/// Write one extracted tile
///
/// An existing file at the target path is silently overwritten; collisions
/// against output of earlier runs are deliberately not detected.
///
/// # Errors
///
/// Returns `SplitError::ImageExport` if the tile cannot be encoded or saved.
pub fn save_tile(tile: &DynamicImage, path: &Path) -> Result<()> {
    tile.save(path).map_err(|e| SplitError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

//! PNG output for rendered assets.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::{AssetError, Result};

/// Write an image to a PNG file, creating parent directories as needed.
///
/// Existing files are overwritten.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AssetError::io(parent, "Failed to create directory", e))?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| AssetError::io(path, "Failed to write PNG", e))
}

/// Read the pixel dimensions of an existing image file.
pub fn png_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| AssetError::io(path, "Failed to read image", e))
}

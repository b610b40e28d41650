//! PNG decode, encode and passthrough copy

use crate::io::error::{PackError, Result, file_system};
use image::RgbaImage;
use std::path::Path;

/// Decode an image file into an RGBA buffer
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| PackError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Read the pixel size of an image without decoding its pixels
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is invalid
pub fn image_size(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| PackError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode a sheet to disk, creating the parent directory if needed
///
/// The format follows the file extension. Existing files are overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_sheet(sheet: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;

    sheet.save(output_path).map_err(|e| PackError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Copy an existing sheet byte for byte, returning the number of bytes copied
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the copy fails
pub fn copy_sheet(source: &Path, output_path: &Path) -> Result<u64> {
    ensure_parent(output_path)?;

    std::fs::copy(source, output_path).map_err(file_system(source, "copy"))
}

/// Write text to disk, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the write fails
pub fn write_text(text: &str, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;

    std::fs::write(output_path, text).map_err(file_system(output_path, "write"))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
        }
    }
    Ok(())
}

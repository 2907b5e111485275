//! Image loading glue for the analysis core
//!
//! The core consumes any [`crate::PixelSource`]; this module is the thin
//! adapter that turns an image file on disk into a [`PixelGrid`]. Format
//! parsing is fully delegated to the `image` crate; nothing here touches
//! bytes beyond repacking decoded RGBA into the ARGB layout the scan
//! expects.

use crate::error::{AnalysisError, Result};
use crate::pixel::PixelGrid;
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Load an image file into a packed-ARGB pixel grid.
///
/// # Errors
///
/// Returns `DecoderUnavailable` when the extension names no supported
/// format, and `ImageLoad` when the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    if ImageFormat::from_extension(path).is_none() {
        return Err(AnalysisError::DecoderUnavailable {
            path: path.display().to_string(),
        });
    }

    let decoded = image::open(path)
        .map_err(|e| AnalysisError::image_load(path.display().to_string(), e))?;
    let rgba = decoded.to_rgba8();

    let (width, height) = rgba.dimensions();
    let pixels: Vec<u32> = rgba
        .pixels()
        .map(|image::Rgba([r, g, b, a])| PixelGrid::pack_argb(*a, *r, *g, *b))
        .collect();

    log::debug!("decoded {} ({}x{})", path.display(), width, height);
    PixelGrid::new(width, height, pixels)
}

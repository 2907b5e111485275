//! Pixel-source abstraction over decoded images
//!
//! The analysis core never parses image files; it consumes anything that
//! exposes dimensions and a packed-ARGB accessor. [`PixelGrid`] is the
//! in-memory implementation the loader produces, and `image::RgbaImage`
//! is supported directly for callers already holding a decoded buffer.

use crate::error::{AnalysisError, Result};

/// A decoded pixel grid the analysis can scan.
///
/// Pixels are packed 32-bit ARGB: alpha in bits 24-31, red 16-23,
/// green 8-15, blue 0-7. Coordinates are `(x, y)` with `(0, 0)` top-left.
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Packed ARGB value at `(x, y)`.
    ///
    /// Out-of-range coordinates are a programming error and panic.
    fn argb(&self, x: u32, y: u32) -> u32;
}

/// Row-major packed-ARGB pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelGrid {
    /// Create a grid from a row-major packed-ARGB buffer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the buffer length does not equal
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(AnalysisError::invalid_parameter(
                "pixels.len()",
                format!("{} (expected {})", pixels.len(), expected),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pack four channels into the ARGB layout the scan expects
    pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn argb(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "pixel out of range");
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

impl PixelSource for image::RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn argb(&self, x: u32, y: u32) -> u32 {
        let image::Rgba([r, g, b, a]) = *self.get_pixel(x, y);
        PixelGrid::pack_argb(a, r, g, b)
    }
}

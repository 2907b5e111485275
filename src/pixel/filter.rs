//! Alpha-threshold pixel scan
//!
//! Iterates the pixel grid in row-major order, drops pixels whose alpha
//! falls at or below the threshold, and materializes the surviving RGB
//! triplets into a flat array. Dropped pixels never participate in any
//! downstream computation. The scan also tracks an average-alpha
//! diagnostic for the retained set.

use crate::color::Rgb;
use crate::error::{AnalysisError, Result};
use crate::pixel::PixelSource;

/// Unpack a 32-bit ARGB value into `(alpha, red, green, blue)`
pub const fn unpack_argb(pixel: u32) -> (u8, u8, u8, u8) {
    (
        ((pixel >> 24) & 0xff) as u8,
        ((pixel >> 16) & 0xff) as u8,
        ((pixel >> 8) & 0xff) as u8,
        (pixel & 0xff) as u8,
    )
}

/// Outcome of the alpha-threshold scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedPixels {
    /// RGB triplets of every retained pixel, in scan order
    pub colors: Vec<Rgb>,

    /// Average alpha over retained pixels (integer division), clamped to
    /// 255 when within the threshold of fully opaque. Diagnostic only.
    pub average_alpha: u8,

    /// Total pixels scanned, retained or not
    pub scanned: u64,
}

impl RetainedPixels {
    /// Number of retained pixels
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

/// Scan a pixel source and retain pixels with `alpha > alpha_threshold`.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when no pixel passes the
/// threshold; the average-alpha division (and everything downstream)
/// would be meaningless.
pub fn filter_pixels<S: PixelSource>(source: &S, alpha_threshold: u8) -> Result<RetainedPixels> {
    let width = source.width();
    let height = source.height();

    let mut colors = Vec::with_capacity(width as usize * height as usize);
    let mut alpha_sum: u64 = 0;

    for y in 0..height {
        for x in 0..width {
            let (alpha, r, g, b) = unpack_argb(source.argb(x, y));
            if alpha <= alpha_threshold {
                continue;
            }
            alpha_sum += alpha as u64;
            colors.push(Rgb::new(r, g, b));
        }
    }

    if colors.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let mut average_alpha = (alpha_sum / colors.len() as u64) as u8;
    if average_alpha >= 255 - alpha_threshold {
        average_alpha = 255;
    }

    log::debug!(
        "retained {} of {} pixels (average alpha {})",
        colors.len(),
        width as u64 * height as u64,
        average_alpha
    );

    Ok(RetainedPixels {
        colors,
        average_alpha,
        scanned: width as u64 * height as u64,
    })
}

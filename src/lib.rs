//! # Color Dominance
//!
//! A Rust crate for computing the dominant color of a bitmap from the
//! distribution of its distinct colors in RGB space.
//!
//! Every distinct color among the opaque pixels is scored by the sum of
//! its Euclidean RGB distances to all retained pixels. Colors with small
//! aggregate distance sit near the center of mass of the image's color
//! cloud; the dominant color is the inverse-distance weighted average of
//! the top-ranked slice. Moment statistics (mean, variance, skewness,
//! kurtosis) over the distance distribution are reported as diagnostics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use color_dominance::{analyze_image, AnalysisResult};
//! use std::path::Path;
//!
//! let result = analyze_image(Path::new("photo.jpg"))?;
//! println!("Color code is #{}", result.hex);
//! # Ok::<(), color_dominance::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod distance;
pub mod error;
pub mod image_loader;
pub mod pixel;
pub mod stats;

pub use color::Rgb;
pub use config::{AnalysisConfig, StatsInput};
pub use distance::Thresholds;
pub use error::{AnalysisError, Result};
pub use pixel::{PixelGrid, PixelSource};
pub use stats::Distribution;

use color::dominant_color;
use distance::{aggregate_distances, RankedDistances};
use pixel::filter_pixels;

/// Complete dominant-color analysis result.
///
/// Immutable once assembled; every field is a pure function of the pixel
/// source and the configuration, so repeated runs on the same input are
/// bit-identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The dominant color
    pub dominant: Rgb,
    /// Dominant color as a lowercase 6-digit hex string, e.g. `"ff0080"`
    pub hex: String,
    /// Number of distinct colors among retained pixels
    pub distinct_colors: usize,
    /// Number of pixels that passed the alpha threshold
    pub retained_pixels: usize,
    /// Total pixels scanned, retained or not
    pub scanned_pixels: u64,
    /// Average alpha over retained pixels (diagnostic, see
    /// [`pixel::RetainedPixels::average_alpha`])
    pub average_alpha: u8,
    /// Sizes of the top and trimmed ranked subsets
    pub thresholds: Thresholds,
    /// Which values fed the statistics bundles
    pub stats_input: StatsInput,
    /// Statistics over the full ranked distance list
    pub full: Distribution,
    /// Statistics over the leading 80% of the ranking
    pub trimmed: Distribution,
    /// Statistics over the top slice used for weighting
    pub top: Distribution,
}

/// Analyze a pixel source with the default configuration.
///
/// This is the main entry point. See [`analyze_colors_with`] for the
/// configurable variant.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when no pixel passes the alpha
/// threshold.
pub fn analyze_colors<S: PixelSource>(source: &S) -> Result<AnalysisResult> {
    analyze_colors_with(source, &AnalysisConfig::default())
}

/// Analyze a pixel source with an explicit configuration.
///
/// Pipeline: alpha filter -> per-color aggregate distances -> ranking ->
/// inverse-distance weighting -> moment statistics -> result assembly.
/// The whole call is synchronous; only the distance aggregation may fan
/// out across rayon workers for large inputs.
///
/// # Errors
///
/// Returns `InvalidParameter` for an out-of-range configuration and
/// `EmptyInput` when no pixel passes the alpha threshold.
pub fn analyze_colors_with<S: PixelSource>(
    source: &S,
    config: &AnalysisConfig,
) -> Result<AnalysisResult> {
    config.validate()?;

    let retained = filter_pixels(source, config.alpha_threshold)?;
    let map = aggregate_distances(&retained.colors, config.parallel);
    let ranked = RankedDistances::rank(map);

    let thresholds = ranked.thresholds(config.top_fraction, config.trimmed_fraction);
    log::info!(
        "including {} out of {} ranked colors",
        thresholds.top,
        ranked.len()
    );
    if ranked.len() < 2 {
        log::warn!("fewer than 2 distinct colors; shape statistics are degenerate");
    }

    let dominant = dominant_color(ranked.top_set(thresholds), config.weight_distance_floor);

    let stat_values = |entries: &[(Rgb, f64)]| -> Vec<f64> {
        match config.stats_input {
            StatsInput::RawDistance => entries.iter().map(|e| e.1).collect(),
            StatsInput::InverseWeight => entries
                .iter()
                .map(|e| color::dominant::weight_for(e.1, config.weight_distance_floor))
                .collect(),
        }
    };

    let full = stats::describe(&stat_values(ranked.full_set()));
    let trimmed = stats::describe(&stat_values(ranked.trimmed_set(thresholds)));
    let top = stats::describe(&stat_values(ranked.top_set(thresholds)));

    Ok(AnalysisResult {
        dominant,
        hex: dominant.hex(),
        distinct_colors: ranked.len(),
        retained_pixels: retained.len(),
        scanned_pixels: retained.scanned,
        average_alpha: retained.average_alpha,
        thresholds,
        stats_input: config.stats_input,
        full,
        trimmed,
        top,
    })
}

/// Load an image file and analyze it with the default configuration.
///
/// # Errors
///
/// Returns `DecoderUnavailable` or `ImageLoad` when the file cannot be
/// decoded, plus everything [`analyze_colors`] can return.
pub fn analyze_image(path: &Path) -> Result<AnalysisResult> {
    log::info!("starting color analysis of {}", path.display());
    let grid = image_loader::load_image(path)?;
    analyze_colors(&grid)
}

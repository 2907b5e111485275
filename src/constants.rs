//! Default thresholds and limits for dominant-color analysis
//!
//! This module contains compile-time constants for the analysis pipeline.
//! All of them can be overridden at runtime through [`crate::AnalysisConfig`].

/// Pixel retention and ranking thresholds
pub mod thresholds {
    /// Minimum alpha value (exclusive) for a pixel to be retained.
    ///
    /// Pixels with `alpha <= ALPHA_THRESHOLD` are dropped from all
    /// downstream computation.
    pub const ALPHA_THRESHOLD: u8 = 10;

    /// Fraction of ranked colors (smallest aggregate distance first) used
    /// for the inverse-distance weighted dominant color.
    pub const TOP_FRACTION: f64 = 0.02;

    /// Fraction of ranked colors kept for the outlier-trimmed statistics
    /// bundle.
    pub const TRIMMED_FRACTION: f64 = 0.80;

    /// Aggregate distances below this floor are clamped before inversion,
    /// so weights never exceed `1.0 / WEIGHT_DISTANCE_FLOOR`.
    pub const WEIGHT_DISTANCE_FLOOR: f64 = 1.0;
}

/// Performance tuning parameters
pub mod performance {
    /// Minimum `distinct_colors * retained_pixels` product before the
    /// aggregator shards distinct colors across rayon workers. Below this
    /// the sequential loop wins on thread-pool overhead.
    pub const PARALLEL_MIN_WORK: u64 = 1 << 22;
}

/// Statistical analysis parameters
pub mod statistics {
    /// Minimum sample size for a defined bias-adjusted skewness
    pub const MIN_SKEWNESS_SAMPLES: usize = 3;

    /// Minimum sample size for a defined excess kurtosis
    pub const MIN_KURTOSIS_SAMPLES: usize = 4;
}

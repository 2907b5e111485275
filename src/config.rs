//! Configuration for the dominant-color analysis pipeline.
//!
//! This module defines all tunable parameters for the analysis,
//! with defaults matching the constants in [`crate::constants`].
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_dominance::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::thresholds;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Input convention for the distance-distribution statistics.
///
/// The analysis historically existed in two variants: one computed the
/// moment statistics over the raw aggregate distances, the other over the
/// inverse-distance weights derived from them. `RawDistance` is the
/// canonical convention; the chosen mode is recorded in
/// [`crate::AnalysisResult::stats_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatsInput {
    /// Statistics over raw aggregate distances (canonical)
    #[default]
    RawDistance,
    /// Statistics over `1.0 / max(floor, distance)` weights
    InverseWeight,
}

/// Complete configuration for a dominant-color analysis call.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum alpha (exclusive) for a pixel to be retained
    pub alpha_threshold: u8,

    /// Fraction of ranked colors used for the weighted dominant color (0.0-1.0]
    pub top_fraction: f64,

    /// Fraction of ranked colors kept for trimmed statistics (0.0-1.0]
    pub trimmed_fraction: f64,

    /// Distance clamp floor applied before inversion into a weight
    pub weight_distance_floor: f64,

    /// Which values feed the statistics bundles
    #[serde(default)]
    pub stats_input: StatsInput,

    /// Allow sharding the distance aggregation across rayon workers for
    /// large inputs
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: thresholds::ALPHA_THRESHOLD,
            top_fraction: thresholds::TOP_FRACTION,
            trimmed_fraction: thresholds::TRIMMED_FRACTION,
            weight_distance_floor: thresholds::WEIGHT_DISTANCE_FLOOR,
            stats_input: StatsInput::RawDistance,
            parallel: true,
        }
    }
}

impl AnalysisConfig {
    /// Validate all parameters, returning the first violation found
    pub fn validate(&self) -> Result<()> {
        if !(self.top_fraction > 0.0 && self.top_fraction <= 1.0) {
            return Err(AnalysisError::invalid_parameter(
                "top_fraction",
                self.top_fraction,
            ));
        }
        if !(self.trimmed_fraction > 0.0 && self.trimmed_fraction <= 1.0) {
            return Err(AnalysisError::invalid_parameter(
                "trimmed_fraction",
                self.trimmed_fraction,
            ));
        }
        if !(self.weight_distance_floor > 0.0 && self.weight_distance_floor.is_finite()) {
            return Err(AnalysisError::invalid_parameter(
                "weight_distance_floor",
                self.weight_distance_floor,
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

//! Color value types and dominant-color computation
//!
//! This module defines the RGB value type used throughout the pipeline
//! and the inverse-distance weighting that turns the top-ranked colors
//! into a single dominant color.

pub mod dominant;
pub mod rgb;

pub use dominant::dominant_color;
pub use rgb::Rgb;

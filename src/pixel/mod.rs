//! Pixel access and alpha filtering
//!
//! This module defines the pixel-source abstraction the analysis consumes
//! and the alpha-threshold scan that turns a pixel grid into the flat
//! retained-color array every later stage operates on.

pub mod filter;
pub mod source;

pub use filter::{filter_pixels, RetainedPixels};
pub use source::{PixelGrid, PixelSource};

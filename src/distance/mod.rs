//! Aggregate color distances and their ranking
//!
//! The heart of the analysis: each distinct retained color is scored by
//! the sum of its Euclidean RGB distances to every retained pixel, then
//! the scores are ranked ascending to find the most central colors.

pub mod aggregator;
pub mod ranking;

pub use aggregator::{aggregate_distances, ColorDistanceMap};
pub use ranking::{RankedDistances, Thresholds};

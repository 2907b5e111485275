//! Per-color aggregate distance computation
//!
//! For every distinct color among the retained pixels, sums the Euclidean
//! RGB distance from that color to every retained pixel's color. Pixels
//! sharing the color contribute zero-distance self-terms, so the score is
//! a pure function of the retained color multiset and independent of scan
//! order.
//!
//! Cost is O(distinct_colors * retained_pixels), the dominant cost of the
//! whole analysis. Each distinct color's reduction is independent, so
//! large inputs shard distinct colors across rayon workers against the
//! shared read-only color array.

use crate::color::Rgb;
use crate::constants::performance::PARALLEL_MIN_WORK;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mapping from distinct color to its aggregate distance
pub type ColorDistanceMap = HashMap<Rgb, f64>;

/// Compute the aggregate distance for every distinct color in `colors`.
///
/// `parallel` permits sharding across the rayon pool; the sequential loop
/// is kept for small inputs where pool overhead dominates.
pub fn aggregate_distances(colors: &[Rgb], parallel: bool) -> ColorDistanceMap {
    let distinct: Vec<Rgb> = {
        let mut seen = HashSet::with_capacity(colors.len().min(1 << 16));
        colors.iter().copied().filter(|c| seen.insert(*c)).collect()
    };

    let work = distinct.len() as u64 * colors.len() as u64;
    log::debug!(
        "aggregating distances for {} distinct colors over {} pixels",
        distinct.len(),
        colors.len()
    );

    if parallel && work >= PARALLEL_MIN_WORK {
        distinct
            .par_iter()
            .map(|&color| (color, aggregate_for(color, colors)))
            .collect()
    } else {
        distinct
            .iter()
            .map(|&color| (color, aggregate_for(color, colors)))
            .collect()
    }
}

/// Sum of Euclidean distances from `color` to every retained pixel
fn aggregate_for(color: Rgb, colors: &[Rgb]) -> f64 {
    colors.iter().map(|&other| color.distance(other)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_color_has_zero_distance() {
        let colors = vec![Rgb::new(10, 20, 30); 5];
        let map = aggregate_distances(&colors, false);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&Rgb::new(10, 20, 30)], 0.0);
    }

    #[test]
    fn test_two_color_symmetry() {
        // Scenario from the red/blue 2x2 bitmap: each color sees two
        // zero self-terms plus two crossings of sqrt(2 * 255^2).
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let colors = vec![red, red, blue, blue];
        let map = aggregate_distances(&colors, false);

        let expected = 2.0 * (2.0f64 * 255.0 * 255.0).sqrt();
        assert!((map[&red] - expected).abs() < 1e-9);
        assert!((map[&blue] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_score_independent_of_scan_order() {
        let a = Rgb::new(1, 2, 3);
        let b = Rgb::new(200, 100, 50);
        let c = Rgb::new(40, 40, 40);
        let forward = aggregate_distances(&[a, b, c, a, b], false);
        let backward = aggregate_distances(&[b, a, c, b, a], false);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_outlier_scores_higher_than_central() {
        // A cluster near black plus one far outlier; the outlier's
        // aggregate distance must exceed every cluster member's.
        let mut colors = vec![
            Rgb::new(10, 10, 10),
            Rgb::new(12, 10, 10),
            Rgb::new(10, 14, 10),
            Rgb::new(11, 11, 11),
        ];
        let outlier = Rgb::new(250, 250, 250);
        colors.push(outlier);

        let map = aggregate_distances(&colors, false);
        let outlier_score = map[&outlier];
        for (&color, &score) in &map {
            if color != outlier {
                assert!(score < outlier_score);
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential_below_threshold() {
        let colors: Vec<Rgb> = (0u32..64)
            .map(|i| Rgb::new((i * 3) as u8, (i * 5) as u8, (i * 7) as u8))
            .collect();
        let sequential = aggregate_distances(&colors, false);
        for (&color, &score) in &sequential {
            assert_eq!(score, aggregate_for(color, &colors));
        }
    }

    #[test]
    fn test_parallel_matches_sequential_above_threshold() {
        // 2048 distinct colors over 2048 pixels puts the work product at
        // exactly 1 << 22, so parallel=true takes the rayon path. Each
        // per-color reduction iterates the color slice in the same order
        // either way, so the maps must match bitwise.
        let colors: Vec<Rgb> = (0u32..2048)
            .map(|i| Rgb::new((i % 256) as u8, (i / 256) as u8, 0))
            .collect();
        assert!(colors.len() as u64 * colors.len() as u64 >= PARALLEL_MIN_WORK);

        let sequential = aggregate_distances(&colors, false);
        let parallel = aggregate_distances(&colors, true);
        assert_eq!(parallel, sequential);
    }
}

//! Ranking and threshold derivation
//!
//! Sorts the `(color, distance)` pairs ascending by aggregate distance.
//! A small aggregate distance means the color sits near the center of
//! mass of the image's color cloud, so the front of the ranking holds the
//! most representative colors (a medoid-style heuristic, not clustering).
//!
//! Ties order by the color's packed 24-bit RGB value ascending, so the
//! ranking is a pure deterministic function of the distance map.

use crate::color::Rgb;
use crate::distance::ColorDistanceMap;
use serde::{Deserialize, Serialize};

/// `(color, distance)` pairs sorted ascending by distance
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDistances {
    entries: Vec<(Rgb, f64)>,
}

/// Entry counts for the ranked subsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Leading entries used for dominant-color weighting
    pub top: usize,
    /// Leading entries kept for trimmed statistics
    pub trimmed: usize,
}

impl RankedDistances {
    /// Build the ranking from a distance map
    pub fn rank(map: ColorDistanceMap) -> Self {
        let mut entries: Vec<(Rgb, f64)> = map.into_iter().collect();
        entries.sort_by(|a, b| {
            a.1.total_cmp(&b.1)
                .then_with(|| a.0.packed().cmp(&b.0.packed()))
        });
        Self { entries }
    }

    /// Number of distinct colors in the ranking
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the ranking holds no colors
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ascending by distance
    pub fn full_set(&self) -> &[(Rgb, f64)] {
        &self.entries
    }

    /// First `thresholds.top` entries
    pub fn top_set(&self, thresholds: Thresholds) -> &[(Rgb, f64)] {
        &self.entries[..thresholds.top]
    }

    /// First `thresholds.trimmed` entries
    pub fn trimmed_set(&self, thresholds: Thresholds) -> &[(Rgb, f64)] {
        &self.entries[..thresholds.trimmed]
    }

    /// Derive subset sizes from the configured fractions.
    ///
    /// Each count is `max(1, ceil(fraction * len))`, capped at `len`, so
    /// neither set is ever empty even for a single distinct color.
    pub fn thresholds(&self, top_fraction: f64, trimmed_fraction: f64) -> Thresholds {
        Thresholds {
            top: fraction_count(self.entries.len(), top_fraction),
            trimmed: fraction_count(self.entries.len(), trimmed_fraction),
        }
    }
}

fn fraction_count(len: usize, fraction: f64) -> usize {
    ((len as f64 * fraction).ceil() as usize).clamp(1, len.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ranked(pairs: &[(Rgb, f64)]) -> RankedDistances {
        let map: HashMap<Rgb, f64> = pairs.iter().copied().collect();
        RankedDistances::rank(map)
    }

    #[test]
    fn test_sorts_ascending_by_distance() {
        let r = ranked(&[
            (Rgb::new(1, 1, 1), 30.0),
            (Rgb::new(2, 2, 2), 10.0),
            (Rgb::new(3, 3, 3), 20.0),
        ]);
        let distances: Vec<f64> = r.full_set().iter().map(|e| e.1).collect();
        assert_eq!(distances, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_ties_break_by_packed_value() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let r = ranked(&[(red, 50.0), (blue, 50.0)]);
        // blue packs to 0x0000ff, red to 0xff0000
        assert_eq!(r.full_set()[0].0, blue);
        assert_eq!(r.full_set()[1].0, red);
    }

    #[test]
    fn test_thresholds_floor_at_one() {
        let r = ranked(&[(Rgb::new(0, 0, 0), 0.0)]);
        let t = r.thresholds(0.02, 0.80);
        assert_eq!(t.top, 1);
        assert_eq!(t.trimmed, 1);
    }

    #[test]
    fn test_thresholds_use_ceil() {
        let pairs: Vec<(Rgb, f64)> = (0u8..100)
            .map(|i| (Rgb::new(i, 0, 0), i as f64))
            .collect();
        let r = ranked(&pairs);
        let t = r.thresholds(0.02, 0.80);
        assert_eq!(t.top, 2);
        assert_eq!(t.trimmed, 80);

        // 101 colors: ceil(2.02) = 3
        let pairs: Vec<(Rgb, f64)> = (0u8..101)
            .map(|i| (Rgb::new(i, 1, 0), i as f64))
            .collect();
        let t = ranked(&pairs).thresholds(0.02, 0.80);
        assert_eq!(t.top, 3);
        assert_eq!(t.trimmed, 81);
    }

    #[test]
    fn test_thresholds_capped_at_len() {
        let r = ranked(&[(Rgb::new(0, 0, 0), 0.0), (Rgb::new(1, 1, 1), 1.0)]);
        let t = r.thresholds(1.0, 1.0);
        assert_eq!(t.top, 2);
        assert_eq!(t.trimmed, 2);
    }

    #[test]
    fn test_subsets_are_prefixes() {
        let pairs: Vec<(Rgb, f64)> = (0u8..10)
            .map(|i| (Rgb::new(i, 0, 0), i as f64))
            .collect();
        let r = ranked(&pairs);
        let t = r.thresholds(0.2, 0.5);
        assert_eq!(r.top_set(t).len(), 2);
        assert_eq!(r.trimmed_set(t).len(), 5);
        assert_eq!(r.top_set(t), &r.full_set()[..2]);
    }
}

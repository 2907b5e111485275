//! Inverse-distance weighting of the top-ranked colors
//!
//! A color's aggregate distance measures how far it sits from the rest of
//! the image's color cloud; inverting it rewards central colors. The
//! dominant color is the weight-normalized channel average over the top
//! ranked slice, one shared weight per color across all three channels.

use crate::color::Rgb;

/// Convert an aggregate distance into a weight.
///
/// Distances below `floor` are clamped before inversion so near-zero
/// aggregate distances cannot blow the weight up.
pub fn weight_for(distance: f64, floor: f64) -> f64 {
    1.0 / distance.max(floor)
}

/// Compute the dominant color over the top-ranked `(color, distance)` slice.
///
/// Each channel is `round(sum(channel * weight) / sum(weight))`. With valid
/// 0-255 inputs and positive weights the average stays in range, so no
/// further clamping is applied.
///
/// # Panics
///
/// Panics if `top` is empty; ranking guarantees at least one entry
/// (the threshold floor is 1).
pub fn dominant_color(top: &[(Rgb, f64)], floor: f64) -> Rgb {
    assert!(!top.is_empty(), "ranking must yield at least one top color");

    let mut sum_weight = 0.0f64;
    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;

    for &(color, distance) in top {
        let weight = weight_for(distance, floor);
        sum_r += color.r as f64 * weight;
        sum_g += color.g as f64 * weight;
        sum_b += color.b as f64 * weight;
        sum_weight += weight;
    }

    Rgb::new(
        (sum_r / sum_weight).round() as u8,
        (sum_g / sum_weight).round() as u8,
        (sum_b / sum_weight).round() as u8,
    )
}

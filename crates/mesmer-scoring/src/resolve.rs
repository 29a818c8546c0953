//! Chart resolution for arbitrary score pairs.
//!
//! Legitimate scores from the weighted scorer are always multiples of 5
//! inside the chart domain, so the rounded direct lookup hits on every
//! normal input. Clamping and the bilinear fallback handle degenerate
//! inputs; resolution must always produce a percentage, never an error.

use crate::chart;

/// Map a (q1, combined) score pair to a physical-suggestibility percentage.
///
/// Out-of-range inputs are clamped to the chart domain rather than
/// rejected. The result is always in `[0, 100]`.
pub fn physical_percentage(q1: i32, combined: i32) -> u8 {
    let q1 = q1.clamp(0, 100);
    let combined = combined.clamp(50, 200);

    if let Some(pct) = chart::lookup(round_to_grid(q1), round_to_grid(combined)) {
        return pct;
    }

    interpolate(q1, combined)
}

/// Bilinear interpolation between the four chart corners surrounding the
/// unrounded pair.
///
/// Corners absent from the chart substitute a neutral 50, and a fractional
/// offset is defined as 0 when its bounds coincide. Note the corner
/// coordinates are floor/ceiling of the raw values, not the
/// nearest-multiple rounding the direct path uses; with the chart complete
/// over its grid this path is unreachable from [`physical_percentage`],
/// but the behavior is kept as published.
pub fn interpolate(q1: i32, combined: i32) -> u8 {
    let q1_lower = (f64::from(q1) / 5.0).floor() as i32 * 5;
    let q1_upper = (f64::from(q1) / 5.0).ceil() as i32 * 5;
    let comb_lower = (f64::from(combined) / 5.0).floor() as i32 * 5;
    let comb_upper = (f64::from(combined) / 5.0).ceil() as i32 * 5;

    let v1 = f64::from(chart::lookup(q1_lower, comb_lower).unwrap_or(50));
    let v2 = f64::from(chart::lookup(q1_upper, comb_lower).unwrap_or(50));
    let v3 = f64::from(chart::lookup(q1_lower, comb_upper).unwrap_or(50));
    let v4 = f64::from(chart::lookup(q1_upper, comb_upper).unwrap_or(50));

    let q1_frac = if q1_upper > q1_lower {
        f64::from(q1 - q1_lower) / f64::from(q1_upper - q1_lower)
    } else {
        0.0
    };
    let comb_frac = if comb_upper > comb_lower {
        f64::from(combined - comb_lower) / f64::from(comb_upper - comb_lower)
    } else {
        0.0
    };

    let along_lower = v1 + (v2 - v1) * q1_frac;
    let along_upper = v3 + (v4 - v3) * q1_frac;
    let blended = along_lower + (along_upper - along_lower) * comb_frac;

    blended.round().clamp(0.0, 100.0) as u8
}

/// Round to the nearest multiple of 5. Integer inputs never land on an
/// exact half, so no tie-breaking rule is needed.
fn round_to_grid(value: i32) -> i32 {
    let rem = value.rem_euclid(5);
    if rem < 3 { value - rem } else { value + (5 - rem) }
}

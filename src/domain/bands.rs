//! Threshold Banding
//!
//! The risk engine, rug pull detector, liquidity analyzer and verdict all
//! map a scalar onto an ordered ladder of labels. Keeping the lookup in one
//! place guarantees the components cannot drift apart on boundary handling.

/// Map `value` onto a ladder of ascending `(upper_bound, label)` pairs.
///
/// Returns the label of the first band whose bound is strictly greater than
/// `value` (i.e. `value < bound`), or `fallback` when no band matches. A
/// value sitting exactly on a bound belongs to the band above it.
pub fn pick_band<T: Copy>(value: f64, bands: &[(f64, T)], fallback: T) -> T {
    for (bound, label) in bands {
        if value < *bound {
            return *label;
        }
    }
    fallback
}

/// Map `value` onto a ladder of descending `(lower_bound, label)` pairs.
///
/// Returns the label of the first band whose bound is less than or equal to
/// `value` (i.e. `value >= bound`), or `fallback` when no band matches.
/// Used by ladders expressed as "at least" thresholds, like the liquidity
/// status tiers.
pub fn pick_band_at_least<T: Copy>(value: f64, bands: &[(f64, T)], fallback: T) -> T {
    for (bound, label) in bands {
        if value >= *bound {
            return *label;
        }
    }
    fallback
}

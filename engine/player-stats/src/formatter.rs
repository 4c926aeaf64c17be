//! Numeric formatting helpers shared by the stat surface.

use crate::bundle::PlayerStatsBundle;

/// A formatter applied to a stat value before it is handed to a caller.
pub type StatFormatter = fn(f64) -> f64;

/// Round to the nearest integer, half away from zero.
pub fn int_stat(value: f64) -> f64 {
    value.round()
}

/// Round to two decimal places.
pub fn float_stat(value: f64) -> f64 {
    round_decimal(value, 2)
}

/// Round to `places` decimal places, half away from zero.
pub fn round_decimal(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Look up a stat by its dot-separated path (`elo.rating`,
/// `weightedAverages.cultureContribution`, ...) and format it. Returns `None`
/// for paths the bundle does not carry.
pub fn extract_stat(
    stats: &PlayerStatsBundle,
    path: &str,
    formatter: StatFormatter,
) -> Option<f64> {
    stats.stat_path(path).map(formatter)
}

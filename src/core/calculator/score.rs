//! Performance percentages.

use super::effective::{BASE_EFFECTIVE_HOURS, effective_hours};
use crate::models::entry::Entry;

/// Upper end of the reference band mapped onto 150%.
pub const REFERENCE_TOP: f64 = 10.88;
/// Display band the reference band is mapped onto.
pub const DISPLAY_BOTTOM: f64 = 100.0;
pub const DISPLAY_SPAN: f64 = 50.0;

/// Round to nearest integer, halves going up (-2.5 → -2).
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Raw performance relative to effective hours, in percent.
/// Returns 0 when effective hours are not positive.
pub fn performance_percentage(entry: &Entry) -> i64 {
    let eff = effective_hours(entry.hours, entry.overtime, entry.free_day);
    if eff <= 0.0 {
        return 0;
    }
    round_half_up(entry.performance / eff * 100.0)
}

/// Map a mean performance from `[7.25, 10.88]` onto `[100, 150]`.
/// Values outside the band extrapolate; no clamping.
pub fn rescale_percentage(mean_performance: f64) -> i64 {
    let ratio = (mean_performance - BASE_EFFECTIVE_HOURS) / (REFERENCE_TOP - BASE_EFFECTIVE_HOURS);
    round_half_up(ratio * DISPLAY_SPAN + DISPLAY_BOTTOM)
}

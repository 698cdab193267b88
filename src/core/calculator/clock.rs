//! Clock-time arithmetic wrapping at 24h.

use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use chrono::TimeDelta;

/// Hours between `start` and `end`.
///
/// When the end hour is strictly lower than the start hour, `end` is taken
/// to fall on the following day. Only the hour component decides this, so
/// `10:00 → 09:30` rolls over while `10:30 → 10:00` does not (and clamps
/// to 0). Never negative.
pub fn duration_hours(start: ClockTime, end: ClockTime) -> f64 {
    let mut elapsed = end.as_naive() - start.as_naive();

    if end.hour() < start.hour() {
        elapsed += TimeDelta::days(1);
    }

    (elapsed.num_minutes() as f64 / 60.0).max(0.0)
}

/// Same as [`duration_hours`] on raw "HH:MM" strings.
pub fn duration_hours_str(start: &str, end: &str) -> AppResult<f64> {
    Ok(duration_hours(start.parse()?, end.parse()?))
}

/// Add whole hours (possibly negative) to a clock time, modulo 24h.
pub fn add_hours(time: ClockTime, delta: i64) -> ClockTime {
    let (shifted, _) = time
        .as_naive()
        .overflowing_add_signed(TimeDelta::hours(delta.rem_euclid(24)));
    ClockTime::from_naive(shifted)
}

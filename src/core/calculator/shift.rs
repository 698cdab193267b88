//! Shift classification from a minute of the day.
//!
//! The windows overlap between 13:45 and 14:15; they are checked in order and
//! the first hit wins, so the overlap belongs to the morning shift.

use crate::models::clock_time::ClockTime;
use crate::models::shift::ShiftCategory;

const fn hm(h: u32, m: u32) -> u32 {
    h * 60 + m
}

/// Half-open `[from, to)` windows, evaluated top to bottom.
const SHIFT_WINDOWS: [(u32, u32, ShiftCategory); 2] = [
    (
        ShiftCategory::Morning.start_minute(),
        hm(14, 15),
        ShiftCategory::Morning,
    ),
    (
        ShiftCategory::Evening.start_minute(),
        hm(22, 15),
        ShiftCategory::Evening,
    ),
];

/// Shift for a minute of the day (0..1440). The caller supplies "now".
pub fn classify(minute_of_day: u32) -> ShiftCategory {
    for (from, to, category) in SHIFT_WINDOWS {
        if (from..to).contains(&minute_of_day) {
            return category;
        }
    }
    ShiftCategory::Night
}

pub fn classify_time(time: ClockTime) -> ShiftCategory {
    classify(time.minutes_of_day())
}

/// Sign-in pre-fill for a new entry created at `minute_of_day`.
pub fn default_start_time(minute_of_day: u32) -> ClockTime {
    classify(minute_of_day).start_time()
}

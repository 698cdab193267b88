//! Conversion of worked hours into effective hours.

/// Relative value of an overtime hour versus a standard hour.
pub const OVERTIME_RATE: f64 = 0.967;
/// Standard unpaid break, in hours.
pub const UNPAID_BREAK_HOURS: f64 = 0.75;
/// Nominal shift length, in hours.
pub const BASE_HOURS: f64 = 8.0;
/// Effective value of a nominal shift (8h minus the break).
pub const BASE_EFFECTIVE_HOURS: f64 = BASE_HOURS - UNPAID_BREAK_HOURS;
/// Shifts shorter than this keep their hours untouched.
pub const SHORT_SHIFT_HOURS: f64 = 4.0;
/// Upper bound of the overtime clamp.
pub const MAX_OVERTIME_HOURS: f64 = 16.0;

/// Effective hours for a worked shift.
///
/// Precedence: free day, then overtime, then the regular piecewise rule.
/// Overtime hours are clamped to `[8, 16]` before scaling; nothing else is
/// range-checked here.
pub fn effective_hours(hours: f64, overtime: bool, free_day: bool) -> f64 {
    if free_day {
        return hours * OVERTIME_RATE;
    }

    if overtime {
        let clamped = hours.min(MAX_OVERTIME_HOURS).max(BASE_HOURS);
        return extended_shift(clamped);
    }

    if hours < SHORT_SHIFT_HOURS {
        hours
    } else if hours <= BASE_HOURS {
        hours - UNPAID_BREAK_HOURS
    } else {
        extended_shift(hours)
    }
}

/// First 8 hours count as 7.25, the rest at the overtime rate.
fn extended_shift(hours: f64) -> f64 {
    BASE_EFFECTIVE_HOURS + (hours - BASE_HOURS) * OVERTIME_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn free_day_ignores_overtime() {
        for h in [0.0, 1.0, 3.5, 8.0, 12.25, 16.0] {
            assert_eq!(effective_hours(h, false, true), h * 0.967);
            assert_eq!(effective_hours(h, true, true), h * 0.967);
        }
    }

    #[test]
    fn regular_piecewise() {
        assert_eq!(effective_hours(3.9, false, false), 3.9);
        assert_eq!(effective_hours(4.0, false, false), 3.25);
        assert_eq!(effective_hours(6.0, false, false), 5.25);
        assert_eq!(effective_hours(8.0, false, false), 7.25);
        assert!(close(effective_hours(10.0, false, false), 7.25 + 2.0 * 0.967));
    }

    #[test]
    fn overtime_is_pinned_outside_clamp() {
        for h in [0.0, 1.0, 5.0, 8.0] {
            assert_eq!(effective_hours(h, true, false), 7.25);
        }
        let top = 7.25 + 8.0 * 0.967;
        for h in [16.0, 17.0, 24.0] {
            assert!(close(effective_hours(h, true, false), top));
        }
    }

    #[test]
    fn overtime_non_decreasing_inside_clamp() {
        let mut prev = effective_hours(8.0, true, false);
        let mut h = 8.0;
        while h <= 16.0 {
            let cur = effective_hours(h, true, false);
            assert!(cur >= prev, "dropped at {h}");
            prev = cur;
            h += 0.25;
        }
    }
}

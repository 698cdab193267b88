//! Half-month periods used for aggregation.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Last day of month that still belongs to the first half.
pub const FIRST_HALF_LAST_DAY: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    FirstHalf,
    SecondHalf,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::FirstHalf, Period::SecondHalf];

    /// Period of a day-of-month: 1–15 → first half, 16+ → second half.
    pub fn of(day: u32) -> Self {
        if day <= FIRST_HALF_LAST_DAY {
            Period::FirstHalf
        } else {
            Period::SecondHalf
        }
    }

    pub fn of_date(date: NaiveDate) -> Self {
        Self::of(date.day())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::FirstHalf => "1-15",
            Period::SecondHalf => "16-end",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "1" | "first" => Some(Period::FirstHalf),
            "2" | "second" => Some(Period::SecondHalf),
            _ => None,
        }
    }
}

/// A concrete half-month: year, month and half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub year: i32,
    pub month: u32,
    pub half: Period,
}

impl PeriodRange {
    pub fn new(year: i32, month: u32, half: Period) -> Self {
        Self { year, month, half }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), Period::of_date(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month && Period::of_date(date) == self.half
    }

    /// e.g. "2025-03 (1-15)"
    pub fn label(&self) -> String {
        format!("{:04}-{:02} ({})", self.year, self.month, self.half.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn boundary_days() {
        assert_eq!(Period::of(1), Period::FirstHalf);
        assert_eq!(Period::of(15), Period::FirstHalf);
        assert_eq!(Period::of(16), Period::SecondHalf);
        assert_eq!(Period::of(31), Period::SecondHalf);
    }

    #[test]
    fn range_contains_only_its_half() {
        let r = PeriodRange::new(2025, 2, Period::SecondHalf);
        assert!(r.contains(d(2025, 2, 28)));
        assert!(!r.contains(d(2025, 2, 15)));
        assert!(!r.contains(d(2024, 2, 20)));
        assert_eq!(r.label(), "2025-02 (16-end)");
        assert_eq!(PeriodRange::containing(d(2025, 2, 16)), r);
    }
}

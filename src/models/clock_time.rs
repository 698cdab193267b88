//! Time of day in "HH:MM" form, 00:00–23:59, without timezone.

use crate::errors::AppError;
use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build from minutes since midnight, wrapping at 24h.
    pub fn from_minutes(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        // m < 1440 always yields a valid time
        Self(NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN))
    }

    pub fn from_naive(t: NaiveTime) -> Self {
        Self::from_minutes(t.hour() * 60 + t.minute())
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| AppError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

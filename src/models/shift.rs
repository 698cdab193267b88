use crate::models::clock_time::ClockTime;
use serde::Serialize;

/// Shift a moment of the day belongs to. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftCategory {
    Morning,
    Evening,
    Night,
}

impl ShiftCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftCategory::Morning => "morning",
            ShiftCategory::Evening => "evening",
            ShiftCategory::Night => "night",
        }
    }

    /// Sign-in boundary of the shift, in minutes since midnight.
    pub const fn start_minute(self) -> u32 {
        match self {
            ShiftCategory::Morning => 5 * 60 + 45,
            ShiftCategory::Evening => 13 * 60 + 45,
            ShiftCategory::Night => 21 * 60 + 45,
        }
    }

    pub fn start_time(self) -> ClockTime {
        ClockTime::from_minutes(self.start_minute())
    }
}

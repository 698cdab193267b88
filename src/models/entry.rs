use super::clock_time::ClockTime;
use serde::Serialize;

/// One worked record for one track on one calendar date.
///
/// `sign_in` / `sign_out` are informational and never take part in scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub performance: f64,
    pub hours: f64,
    pub overtime: bool,
    pub free_day: bool,
    pub sign_in: Option<ClockTime>,
    pub sign_out: Option<ClockTime>,
}

impl Entry {
    pub fn new(performance: f64, hours: f64, overtime: bool, free_day: bool) -> Self {
        Self {
            performance,
            hours,
            overtime,
            free_day,
            sign_in: None,
            sign_out: None,
        }
    }

    pub fn with_clock(mut self, sign_in: Option<ClockTime>, sign_out: Option<ClockTime>) -> Self {
        self.sign_in = sign_in;
        self.sign_out = sign_out;
        self
    }

    /// Short flag string used in listings: "OT", "FD", "OT+FD" or "-".
    pub fn flags(&self) -> &'static str {
        match (self.overtime, self.free_day) {
            (true, true) => "OT+FD",
            (true, false) => "OT",
            (false, true) => "FD",
            (false, false) => "-",
        }
    }
}

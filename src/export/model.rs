use crate::core::logic::ScoredEntry;
use crate::utils::formatting::round2;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub date: String,
    pub track: String,
    pub performance: f64,
    pub hours: f64,
    pub overtime: bool,
    pub free_day: bool,
    pub sign_in: String,
    pub sign_out: String,
    pub effective_hours: f64,
    pub percentage: i64,
    pub period: String,
}

impl From<&ScoredEntry> for EntryExport {
    fn from(s: &ScoredEntry) -> Self {
        Self {
            date: s.date.format("%Y-%m-%d").to_string(),
            track: s.track.as_str().to_string(),
            performance: s.entry.performance,
            hours: s.entry.hours,
            overtime: s.entry.overtime,
            free_day: s.entry.free_day,
            sign_in: s.entry.sign_in.map(|t| t.to_string()).unwrap_or_default(),
            sign_out: s.entry.sign_out.map(|t| t.to_string()).unwrap_or_default(),
            effective_hours: round2(s.effective_hours),
            percentage: s.percentage,
            period: s.period.label().to_string(),
        }
    }
}

use crate::core::calculator::effective::effective_hours;
use crate::core::calculator::score::performance_percentage;
use crate::models::daily_record::Records;
use crate::models::entry::Entry;
use crate::models::period::Period;
use crate::models::track::Track;
use chrono::NaiveDate;

/// An entry together with everything derived from it.
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub date: NaiveDate,
    pub track: Track,
    pub entry: Entry,
    pub effective_hours: f64,
    pub percentage: i64,
    pub period: Period,
}

pub struct Core;

impl Core {
    pub fn score(date: NaiveDate, track: Track, entry: &Entry) -> ScoredEntry {
        ScoredEntry {
            date,
            track,
            entry: entry.clone(),
            effective_hours: effective_hours(entry.hours, entry.overtime, entry.free_day),
            percentage: performance_percentage(entry),
            period: Period::of_date(date),
        }
    }

    /// Score every populated track of every record, in date order.
    /// Keys that are not valid dates are skipped.
    pub fn score_records(records: &Records, track: Option<Track>) -> Vec<ScoredEntry> {
        let mut out = Vec::new();

        for (key, rec) in records {
            let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") else {
                continue;
            };

            for (t, entry) in rec.entries() {
                if track.is_none_or(|wanted| wanted == t) {
                    out.push(Self::score(date, t, entry));
                }
            }
        }

        out
    }
}

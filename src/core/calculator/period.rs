//! Aggregation of raw performance over a set of dates.

use crate::models::daily_record::Records;
use crate::models::track::Track;
use chrono::NaiveDate;

fn selected<'a, F>(
    records: &'a Records,
    include: &'a F,
    track: Track,
) -> impl Iterator<Item = f64> + 'a
where
    F: Fn(NaiveDate) -> bool,
{
    records.iter().filter_map(move |(key, rec)| {
        // keys that are not "YYYY-MM-DD" never match
        let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
        if !include(date) {
            return None;
        }
        rec.get(track).map(|e| e.performance)
    })
}

/// Mean raw performance of `track` over every date accepted by `include`.
///
/// Non-finite performance values count as 0. Returns 0 when nothing matches.
pub fn mean_performance<F>(records: &Records, include: F, track: Track) -> f64
where
    F: Fn(NaiveDate) -> bool,
{
    let (sum, count) = selected(records, &include, track).fold((0.0, 0usize), |(s, n), p| {
        (s + if p.is_finite() { p } else { 0.0 }, n + 1)
    });

    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Number of dates that [`mean_performance`] would average over.
pub fn count_matching<F>(records: &Records, include: F, track: Track) -> usize
where
    F: Fn(NaiveDate) -> bool,
{
    selected(records, &include, track).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::daily_record::DailyRecord;
    use crate::models::entry::Entry;
    use crate::models::period::{Period, PeriodRange};

    fn record(normal: Option<f64>, forklift: Option<f64>) -> DailyRecord {
        DailyRecord {
            normal: normal.map(|p| Entry::new(p, 8.0, false, false)),
            forklift: forklift.map(|p| Entry::new(p, 8.0, false, false)),
        }
    }

    fn sample() -> Records {
        let mut r = Records::new();
        r.insert("2025-03-02".into(), record(Some(7.0), None));
        r.insert("2025-03-10".into(), record(Some(9.0), Some(4.0)));
        r.insert("2025-03-20".into(), record(Some(11.0), None));
        r.insert("2025-04-01".into(), record(Some(1.0), None));
        r.insert("not-a-date".into(), record(Some(100.0), Some(100.0)));
        r
    }

    #[test]
    fn mean_over_first_half() {
        let first = PeriodRange::new(2025, 3, Period::FirstHalf);
        let recs = sample();
        assert_eq!(mean_performance(&recs, |d| first.contains(d), Track::Normal), 8.0);
        assert_eq!(count_matching(&recs, |d| first.contains(d), Track::Normal), 2);
        assert_eq!(mean_performance(&recs, |d| first.contains(d), Track::Forklift), 4.0);
    }

    #[test]
    fn empty_selection_is_zero() {
        let recs = sample();
        let second = PeriodRange::new(2025, 3, Period::SecondHalf);
        assert_eq!(mean_performance(&recs, |d| second.contains(d), Track::Forklift), 0.0);
        assert_eq!(mean_performance(&Records::new(), |_| true, Track::Normal), 0.0);
    }

    #[test]
    fn non_finite_counts_as_zero() {
        let mut recs = Records::new();
        recs.insert("2025-05-01".into(), record(Some(f64::NAN), None));
        recs.insert("2025-05-02".into(), record(Some(6.0), None));
        assert_eq!(mean_performance(&recs, |_| true, Track::Normal), 3.0);
    }
}

use crate::core::calculator::period::{count_matching, mean_performance};
use crate::core::calculator::score::rescale_percentage;
use crate::db::pool::DbPool;
use crate::db::queries::load_records_between;
use crate::errors::{AppError, AppResult};
use crate::models::daily_record::Records;
use crate::models::period::{Period, PeriodRange};
use crate::models::track::Track;
use crate::utils::date::{first_day_of_month, last_day_of_month};
use chrono::NaiveDate;

/// Aggregate of one track over one half-month.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub range: PeriodRange,
    pub track: Track,
    pub days: usize,
    pub mean_performance: f64,
    pub rescaled: i64,
}

pub struct SummaryLogic;

impl SummaryLogic {
    /// One summary per (range, track) pair, ranges first.
    pub fn summarize(
        records: &Records,
        ranges: &[PeriodRange],
        tracks: &[Track],
    ) -> Vec<PeriodSummary> {
        let mut out = Vec::new();

        for range in ranges {
            for &track in tracks {
                let include = |d: NaiveDate| range.contains(d);
                let mean = mean_performance(records, include, track);
                out.push(PeriodSummary {
                    range: *range,
                    track,
                    days: count_matching(records, include, track),
                    mean_performance: mean,
                    rescaled: rescale_percentage(mean),
                });
            }
        }

        out
    }

    /// Load one month from the database and summarize the requested halves.
    pub fn for_month(
        pool: &mut DbPool,
        year: i32,
        month: u32,
        halves: &[Period],
        tracks: &[Track],
    ) -> AppResult<Vec<PeriodSummary>> {
        let invalid = || AppError::InvalidPeriod(format!("{:04}-{:02}", year, month));
        let first = first_day_of_month(year, month).ok_or_else(invalid)?;
        let last = last_day_of_month(year, month).ok_or_else(invalid)?;

        let records = load_records_between(&pool.conn, &first, &last)?;
        let ranges: Vec<PeriodRange> = halves
            .iter()
            .map(|&h| PeriodRange::new(year, month, h))
            .collect();

        Ok(Self::summarize(&records, &ranges, tracks))
    }
}

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::daily_record::{DailyRecord, Records};
use crate::models::entry::Entry;
use crate::models::track::Track;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_clock(raw: Option<String>) -> Result<Option<ClockTime>> {
    match raw {
        Some(s) if !s.trim().is_empty() => s.parse().map(Some).map_err(conversion_error),
        _ => Ok(None),
    }
}

/// Map an `entries` row to (date key, track, entry).
pub fn map_row(row: &Row) -> Result<(String, Track, Entry)> {
    let date: String = row.get("date")?;

    let track_str: String = row.get("track")?;
    let track = Track::from_db_str(&track_str)
        .ok_or_else(|| conversion_error(AppError::InvalidTrack(track_str.clone())))?;

    let entry = Entry {
        performance: row.get("performance")?,
        hours: row.get("hours")?,
        overtime: row.get::<_, i32>("overtime")? == 1,
        free_day: row.get::<_, i32>("free_day")? == 1,
        sign_in: parse_clock(row.get("sign_in")?)?,
        sign_out: parse_clock(row.get("sign_out")?)?,
    };

    Ok((date, track, entry))
}

fn collect_records(
    stmt: &mut rusqlite::Statement<'_>,
    params: &[&dyn rusqlite::ToSql],
) -> AppResult<Records> {
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Records::new();
    for r in rows {
        let (date, track, entry) = r?;
        out.entry(date).or_default().set(track, entry);
    }
    Ok(out)
}

/// Insert or replace the entry of `track` on `date`.
pub fn upsert_entry(
    conn: &Connection,
    date: &NaiveDate,
    track: Track,
    entry: &Entry,
) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO entries
            (date, track, performance, hours, overtime, free_day, sign_in, sign_out, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            date.format("%Y-%m-%d").to_string(),
            track.as_str(),
            entry.performance,
            entry.hours,
            if entry.overtime { 1 } else { 0 },
            if entry.free_day { 1 } else { 0 },
            entry.sign_in.map(|t| t.to_string()),
            entry.sign_out.map(|t| t.to_string()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn load_all_records(conn: &Connection) -> AppResult<Records> {
    let mut stmt = conn.prepare("SELECT * FROM entries ORDER BY date ASC, track ASC")?;
    collect_records(&mut stmt, params![])
}

/// Records whose date lies in `[from, to]`, both inclusive.
pub fn load_records_between(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Records> {
    let mut stmt = conn.prepare(
        "SELECT * FROM entries
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC, track ASC",
    )?;

    let from_s = from.format("%Y-%m-%d").to_string();
    let to_s = to.format("%Y-%m-%d").to_string();
    collect_records(&mut stmt, params![from_s, to_s])
}

pub fn load_record(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DailyRecord>> {
    let records = load_records_between(conn, date, date)?;
    Ok(records.into_values().next())
}

/// Delete one track (or every track when `None`) for a date.
/// Returns the number of removed entries.
pub fn delete_entries(
    conn: &Connection,
    date: &NaiveDate,
    track: Option<Track>,
) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let n = match track {
        Some(t) => conn.execute(
            "DELETE FROM entries WHERE date = ?1 AND track = ?2",
            params![date_str, t.as_str()],
        )?,
        None => conn.execute("DELETE FROM entries WHERE date = ?1", params![date_str])?,
    };
    Ok(n)
}

/// Entry counts and covered date span.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DbInfo {
    pub normal: usize,
    pub forklift: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl DbInfo {
    pub fn total(&self) -> usize {
        self.normal + self.forklift
    }
}

pub fn db_info(conn: &Connection) -> AppResult<DbInfo> {
    let count = |track: Track| -> Result<usize> {
        conn.query_row(
            "SELECT COUNT(*) FROM entries WHERE track = ?1",
            [track.as_str()],
            |r| r.get::<_, i64>(0),
        )
        .map(|n| n as usize)
    };

    let (first_date, last_date) =
        conn.query_row("SELECT MIN(date), MAX(date) FROM entries", [], |r| {
            Ok((r.get::<_, Option<String>>(0)?, r.get::<_, Option<String>>(1)?))
        })?;

    Ok(DbInfo {
        normal: count(Track::Normal)?,
        forklift: count(Track::Forklift)?,
        first_date,
        last_date,
    })
}

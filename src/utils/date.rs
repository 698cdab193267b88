use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    first_day_of_month(ny, nm)?.pred_opt()
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_year_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// First and last date covered by a period string:
/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn bounds_of_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    if let Some((y, m)) = parse_year_month(p) {
        let first = first_day_of_month(y, m).ok_or_else(invalid)?;
        let last = last_day_of_month(y, m).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    if let Ok(year) = p.trim().parse::<i32>() {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

/// Resolve the `--period` argument of list/export.
///
/// `None` → current month, `all` → unbounded, `A:B` → from the start of A
/// to the end of B, anything else → [`bounds_of_period`].
pub fn resolve_period(period: Option<&str>) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        None => {
            let t = today();
            bounds_of_period(&t.format("%Y-%m").to_string())
        }
        Some("all") => {
            let invalid = || AppError::InvalidPeriod("all".into());
            // four-digit years keep "YYYY-MM-DD" keys comparable as text
            let first = NaiveDate::from_ymd_opt(1, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(9999, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        Some(p) => {
            if let Some((a, b)) = p.split_once(':') {
                let (start, _) = bounds_of_period(a)?;
                let (_, end) = bounds_of_period(b)?;
                if start > end {
                    return Err(AppError::InvalidPeriod(p.to_string()));
                }
                return Ok((start, end));
            }
            bounds_of_period(p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn month_bounds_handle_leap_years_and_december() {
        assert_eq!(bounds_of_period("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(bounds_of_period("2025-12").unwrap(), (d("2025-12-01"), d("2025-12-31")));
    }

    #[test]
    fn day_and_year() {
        assert_eq!(bounds_of_period("2025-03-07").unwrap(), (d("2025-03-07"), d("2025-03-07")));
        assert_eq!(bounds_of_period("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
    }

    #[test]
    fn ranges() {
        assert_eq!(
            resolve_period(Some("2024-09:2025-02")).unwrap(),
            (d("2024-09-01"), d("2025-02-28"))
        );
        assert!(matches!(
            resolve_period(Some("2025-05:2025-01")),
            Err(AppError::InvalidPeriod(_))
        ));
        let (first, last) = resolve_period(Some("all")).unwrap();
        assert_eq!(date_key(&first), "0001-01-01");
        assert_eq!(date_key(&last), "9999-12-31");
        assert!(matches!(
            resolve_period(Some("last week")),
            Err(AppError::InvalidPeriod(_))
        ));
    }
}

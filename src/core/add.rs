use crate::config::Config;
use crate::core::calculator::clock::{add_hours, duration_hours};
use crate::core::calculator::shift::default_start_time;
use crate::core::logic::{Core, ScoredEntry};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::entry::Entry;
use crate::models::track::Track;
use chrono::NaiveDate;

/// Longest shift the form accepts, in hours.
pub const MAX_HOURS: f64 = 16.0;
/// Shortest overtime / free-day shift the form accepts, in hours.
pub const MIN_FLAGGED_HOURS: f64 = 1.0;

/// Validated user input for one entry.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub date: NaiveDate,
    pub track: Track,
    pub performance: f64,
    pub hours: Option<f64>,
    pub sign_in: Option<ClockTime>,
    pub sign_out: Option<ClockTime>,
    pub overtime: bool,
    pub free_day: bool,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Reject hours outside `[0, 16]`, or below 1 for flagged shifts.
    pub fn validate_hours(hours: f64, overtime: bool, free_day: bool) -> AppResult<()> {
        let min = if overtime || free_day {
            MIN_FLAGGED_HOURS
        } else {
            0.0
        };

        if !hours.is_finite() || hours < min || hours > MAX_HOURS {
            return Err(AppError::OutOfRangeHours(hours));
        }
        Ok(())
    }

    /// Fill in sign-in, sign-out and hours, then validate.
    ///
    /// - sign-in: given, or the start of the shift running at `now`
    ///   (unless `auto_sign_in` is off)
    /// - sign-out: given, or sign-in plus the (rounded) hours, or plus
    ///   `default_shift_hours` when no hours were given
    /// - hours: given, or the duration between sign-in and sign-out
    pub fn build_entry(req: &AddRequest, cfg: &Config, now: ClockTime) -> AppResult<Entry> {
        if !req.performance.is_finite() || req.performance < 0.0 {
            return Err(AppError::InvalidNumericInput(format!(
                "performance = {}",
                req.performance
            )));
        }

        let sign_in = req.sign_in.or_else(|| {
            cfg.auto_sign_in
                .then(|| default_start_time(now.minutes_of_day()))
        });

        let sign_out = req.sign_out.or_else(|| {
            let shift = req
                .hours
                .map(|h| h.round() as i64)
                .unwrap_or(cfg.default_shift_hours);
            sign_in.map(|start| add_hours(start, shift))
        });

        let hours = match (req.hours, sign_in, sign_out) {
            (Some(h), _, _) => h,
            (None, Some(start), Some(end)) => duration_hours(start, end),
            _ => {
                return Err(AppError::InvalidNumericInput(
                    "hours: missing and no sign-in/sign-out to derive them from".into(),
                ));
            }
        };

        Self::validate_hours(hours, req.overtime, req.free_day)?;

        Ok(Entry::new(req.performance, hours, req.overtime, req.free_day)
            .with_clock(sign_in, sign_out))
    }

    /// Build, store (replacing any previous entry for the same date/track)
    /// and score an entry.
    pub fn apply(
        pool: &mut DbPool,
        req: &AddRequest,
        cfg: &Config,
        now: ClockTime,
    ) -> AppResult<ScoredEntry> {
        let entry = Self::build_entry(req, cfg, now)?;

        upsert_entry(&pool.conn, &req.date, req.track, &entry)?;

        let scored = Core::score(req.date, req.track, &entry);

        ttlog(
            &pool.conn,
            "add",
            &format!("{} {}", scored.date, scored.track.as_str()),
            &format!(
                "perf={} hours={} ot={} fd={} → {}%",
                entry.performance, entry.hours, entry.overtime, entry.free_day, scored.percentage
            ),
        )?;

        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::load_record;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn request() -> AddRequest {
        AddRequest {
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            track: Track::Normal,
            performance: 7.25,
            hours: None,
            sign_in: None,
            sign_out: None,
            overtime: false,
            free_day: false,
        }
    }

    #[test]
    fn range_checks() {
        assert!(AddLogic::validate_hours(0.0, false, false).is_ok());
        assert!(AddLogic::validate_hours(16.0, true, false).is_ok());
        assert!(matches!(
            AddLogic::validate_hours(17.0, false, false),
            Err(AppError::OutOfRangeHours(_))
        ));
        assert!(matches!(
            AddLogic::validate_hours(0.5, true, false),
            Err(AppError::OutOfRangeHours(_))
        ));
        assert!(AddLogic::validate_hours(-1.0, false, false).is_err());
    }

    #[test]
    fn negative_performance_is_rejected() {
        let req = AddRequest {
            performance: -5.0,
            hours: Some(8.0),
            ..request()
        };
        assert!(matches!(
            AddLogic::build_entry(&req, &Config::default(), t("12:00")),
            Err(AppError::InvalidNumericInput(_))
        ));

        let zero = AddRequest {
            performance: 0.0,
            hours: Some(8.0),
            ..request()
        };
        assert!(AddLogic::build_entry(&zero, &Config::default(), t("12:00")).is_ok());
    }

    #[test]
    fn defaults_come_from_shift_at_now() {
        let cfg = Config::default();
        let entry = AddLogic::build_entry(&request(), &cfg, t("22:30")).unwrap();
        assert_eq!(entry.sign_in, Some(t("21:45")));
        assert_eq!(entry.sign_out, Some(t("05:45")));
        assert_eq!(entry.hours, 8.0);
    }

    #[test]
    fn explicit_clock_times_give_hours() {
        let req = AddRequest {
            sign_in: Some(t("21:45")),
            sign_out: Some(t("06:15")),
            ..request()
        };
        let entry = AddLogic::build_entry(&req, &Config::default(), t("12:00")).unwrap();
        assert_eq!(entry.hours, 8.5);
    }

    #[test]
    fn given_hours_drive_sign_out() {
        let req = AddRequest {
            hours: Some(10.4),
            sign_in: Some(t("05:45")),
            ..request()
        };
        let entry = AddLogic::build_entry(&req, &Config::default(), t("12:00")).unwrap();
        assert_eq!(entry.hours, 10.4);
        assert_eq!(entry.sign_out, Some(t("15:45")));
    }

    #[test]
    fn no_hours_and_no_auto_sign_in_is_rejected() {
        let cfg = Config {
            auto_sign_in: false,
            ..Config::default()
        };
        assert!(matches!(
            AddLogic::build_entry(&request(), &cfg, t("12:00")),
            Err(AppError::InvalidNumericInput(_))
        ));
    }

    #[test]
    fn rollover_heuristic_can_push_hours_out_of_range() {
        let req = AddRequest {
            sign_in: Some(t("10:00")),
            sign_out: Some(t("09:30")),
            ..request()
        };
        assert!(matches!(
            AddLogic::build_entry(&req, &Config::default(), t("12:00")),
            Err(AppError::OutOfRangeHours(h)) if h == 23.5
        ));
    }

    #[test]
    fn apply_replaces_previous_entry() {
        let mut pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let cfg = Config::default();

        let first = AddRequest {
            hours: Some(8.0),
            ..request()
        };
        let scored = AddLogic::apply(&mut pool, &first, &cfg, t("06:00")).unwrap();
        assert_eq!(scored.percentage, 100);

        let second = AddRequest {
            performance: 9.0,
            hours: Some(10.0),
            overtime: true,
            ..request()
        };
        AddLogic::apply(&mut pool, &second, &cfg, t("06:00")).unwrap();

        let rec = load_record(&pool.conn, &first.date).unwrap().unwrap();
        assert_eq!(rec.normal.as_ref().map(|e| e.performance), Some(9.0));
        assert!(rec.forklift.is_none());
    }
}

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_entries;
use crate::errors::{AppError, AppResult};
use crate::models::track::Track;
use crate::utils::date::date_key;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one track, or the whole record when `track` is `None`.
    /// Returns how many entries were removed.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, track: Option<Track>) -> AppResult<usize> {
        let date_str = date_key(&date);
        let removed = delete_entries(&pool.conn, &date, track)?;

        if removed == 0 {
            return Err(AppError::NoRecordForDate(match track {
                Some(t) => format!("{} ({})", date_str, t.as_str()),
                None => date_str,
            }));
        }

        let target = match track {
            Some(t) => format!("{} {}", date_str, t.as_str()),
            None => date_str,
        };
        ttlog(
            &pool.conn,
            "del",
            &target,
            &format!("Deleted {} entr{}", removed, if removed == 1 { "y" } else { "ies" }),
        )?;

        Ok(removed)
    }
}

pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod shift;
pub mod summary;

use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::track::Track;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let path = cfg.database_path();
    let pool = DbPool::new(&path.to_string_lossy())?;
    run_pending_migrations(&pool.conn)?;
    Ok(pool)
}

/// Parse an optional `--track` value.
pub(crate) fn parse_track(track: Option<&String>) -> AppResult<Option<Track>> {
    track
        .map(|t| Track::from_code(t).ok_or_else(|| AppError::InvalidTrack(t.to_string())))
        .transpose()
}

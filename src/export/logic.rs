use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::load_records_between;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::EntryExport;
use crate::export::notify_export_success;
use crate::models::track::Track;
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Scored rows for `period` (`None` or `"all"` → everything).
    pub fn collect(
        pool: &mut DbPool,
        period: Option<&str>,
        track: Option<Track>,
    ) -> AppResult<Vec<EntryExport>> {
        let (from, to) = resolve_period(Some(period.unwrap_or("all")))?;
        let records = load_records_between(&pool.conn, &from, &to)?;

        Ok(Core::score_records(&records, track)
            .iter()
            .map(EntryExport::from)
            .collect())
    }

    /// Export scored entries to `file`. Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        period: Option<&str>,
        track: Option<Track>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = Self::collect(pool, period, track)?;

        if rows.is_empty() {
            warning("No entries found for the selected period.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} entries → {}", rows.len(), path.display()),
        )?;
        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);

        Ok(rows.len())
    }
}

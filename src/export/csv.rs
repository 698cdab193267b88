use super::model::EntryExport;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write rows as CSV with a header line.
pub(crate) fn export_csv(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for r in rows {
        wtr.serialize(r).map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

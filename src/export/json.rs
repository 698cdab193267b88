use super::model::EntryExport;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write rows as a pretty-printed JSON array.
pub(crate) fn export_json(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

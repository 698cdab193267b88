//! Configuration file checks: detect keys missing from an older file and
//! rewrite it with defaults filled in.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

const KNOWN_KEYS: [&str; 4] = [
    "database",
    "default_track",
    "default_shift_hours",
    "auto_sign_in",
];

/// Keys from [`KNOWN_KEYS`] that `content` does not define.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

    let map = match yaml.as_mapping() {
        Some(m) => m,
        None => return Ok(KNOWN_KEYS.to_vec()),
    };

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Print which keys are missing from the file at `path`.
pub fn check_config(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        warning(format!("No configuration file at {}", path.display()));
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let missing = missing_keys(&content)?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        for k in &missing {
            warning(format!("Missing configuration key: {}", k));
        }
    }
    Ok(missing)
}

/// Rewrite the file at `path` with every missing key set to its default.
/// Returns true when the file was changed.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let missing = if path.exists() {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        missing_keys(&content)?
    } else {
        KNOWN_KEYS.to_vec()
    };

    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(false);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    success(format!("Configuration migrated: added {}", missing.join(", ")));
    Ok(true)
}

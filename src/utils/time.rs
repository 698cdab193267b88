//! Time utilities: parsing optional clock times and numeric CLI fields.

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<ClockTime>> {
    match input {
        Some(s) => Ok(Some(s.parse()?)),
        None => Ok(None),
    }
}

/// Parse a user-supplied number. Accepts a decimal comma ("7,5").
pub fn parse_number(field: &str, raw: &str) -> AppResult<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::InvalidNumericInput(format!("{field} = '{raw}'"))),
    }
}

pub fn parse_optional_number(field: &str, raw: Option<&String>) -> AppResult<Option<f64>> {
    raw.map(|r| parse_number(field, r)).transpose()
}

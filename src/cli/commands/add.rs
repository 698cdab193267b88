use crate::cli::commands::{open_pool, parse_track};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddRequest};
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::fmt_optional;
use crate::utils::time::{parse_number, parse_optional_number, parse_optional_time};
use chrono::Local;

/// Add or replace an entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        track,
        performance,
        hours,
        start,
        end,
        overtime,
        free_day,
    } = cmd
    {
        //
        // 1. Parse and validate raw input
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let track = match parse_track(track.as_ref())? {
            Some(t) => t,
            None => cfg.preferred_track()?,
        };

        let req = AddRequest {
            date: d,
            track,
            performance: parse_number("performance", performance)?,
            hours: parse_optional_number("hours", hours.as_ref())?,
            sign_in: parse_optional_time(start.as_ref())?,
            sign_out: parse_optional_time(end.as_ref())?,
            overtime: *overtime,
            free_day: *free_day,
        };

        //
        // 2. Store and score
        //
        let mut pool = open_pool(cfg)?;
        let now = ClockTime::from_naive(Local::now().time());
        let scored = AddLogic::apply(&mut pool, &req, cfg, now)?;

        success(format!(
            "Saved {} [{}]: {:.2}h ({} → {}) → {:.2} effective hours, {}%",
            scored.date,
            scored.track.as_str(),
            scored.entry.hours,
            fmt_optional(scored.entry.sign_in),
            fmt_optional(scored.entry.sign_out),
            scored.effective_hours,
            scored.percentage
        ));
    }

    Ok(())
}

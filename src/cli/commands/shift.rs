use crate::cli::parser::Commands;
use crate::core::calculator::shift::{classify_time, default_start_time};
use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use crate::utils::formatting::bold;
use crate::utils::time::parse_optional_time;
use chrono::Local;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Shift { at } = cmd {
        let time = match parse_optional_time(at.as_ref())? {
            Some(t) => t,
            None => ClockTime::from_naive(Local::now().time()),
        };

        let category = classify_time(time);
        println!(
            "🕒 {} → {} shift (sign-in {})",
            time,
            bold(category.label()),
            default_start_time(time.minutes_of_day())
        );
    }

    Ok(())
}

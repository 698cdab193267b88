use crate::cli::commands::{open_pool, parse_track};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, ScoredEntry};
use crate::db::queries::load_records_between;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, colorize_percentage};
use crate::utils::date::resolve_period;
use crate::utils::formatting::{fmt_hours, fmt_optional};
use crate::utils::table::Table;

const HEADERS: [&str; 10] = [
    "Date", "Period", "Track", "Perf", "Hours", "Flags", "In", "Out", "Effective", "%",
];

fn to_row(s: &ScoredEntry) -> Vec<String> {
    vec![
        s.date.to_string(),
        s.period.label().to_string(),
        s.track.as_str().to_string(),
        format!("{:.2}", s.entry.performance),
        fmt_hours(s.entry.hours),
        colorize_optional(s.entry.flags()),
        colorize_optional(&fmt_optional(s.entry.sign_in)),
        colorize_optional(&fmt_optional(s.entry.sign_out)),
        fmt_hours(s.effective_hours),
        colorize_percentage(s.percentage),
    ]
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, track } = cmd {
        let track = parse_track(track.as_ref())?;
        let (from, to) = resolve_period(period.as_deref())?;

        let pool = open_pool(cfg)?;
        let records = load_records_between(&pool.conn, &from, &to)?;
        let scored = Core::score_records(&records, track);

        if scored.is_empty() {
            info("No entries for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(&HEADERS);
        for s in &scored {
            table.add_row(to_row(s));
        }
        print!("{}", table.render());
    }

    Ok(())
}

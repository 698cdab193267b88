use crate::cli::commands::{open_pool, parse_track};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{PeriodSummary, SummaryLogic};
use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::models::track::Track;
use crate::ui::messages::header;
use crate::utils::colors::colorize_percentage;
use crate::utils::date::{parse_year_month, today};
use crate::utils::table::Table;
use chrono::Datelike;

fn print_summaries(summaries: &[PeriodSummary]) {
    let mut current = None;
    let mut table: Option<Table> = None;

    for s in summaries {
        if current != Some(s.range) {
            if let Some(t) = table.take() {
                print!("{}", t.render());
            }
            header(s.range.label());
            current = Some(s.range);
            table = Some(Table::new(&["Track", "Days", "Mean perf", "Score"]));
        }

        if let Some(t) = table.as_mut() {
            t.add_row(vec![
                s.track.as_str().to_string(),
                s.days.to_string(),
                format!("{:.2}", s.mean_performance),
                if s.days == 0 {
                    "-".to_string()
                } else {
                    colorize_percentage(s.rescaled)
                },
            ]);
        }
    }

    if let Some(t) = table {
        print!("{}", t.render());
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month, half, track } = cmd {
        let (year, month) = match month {
            Some(m) => parse_year_month(m).ok_or_else(|| AppError::InvalidPeriod(m.to_string()))?,
            None => {
                let t = today();
                (t.year(), t.month())
            }
        };

        let halves: Vec<Period> = match half {
            Some(h) => {
                vec![Period::from_code(h).ok_or_else(|| AppError::InvalidPeriod(h.to_string()))?]
            }
            None => Period::ALL.to_vec(),
        };

        let tracks: Vec<Track> = match parse_track(track.as_ref())? {
            Some(t) => vec![t],
            None => Track::ALL.to_vec(),
        };

        let mut pool = open_pool(cfg)?;
        let summaries = SummaryLogic::for_month(&mut pool, year, month, &halves, &tracks)?;
        print_summaries(&summaries);
    }

    Ok(())
}

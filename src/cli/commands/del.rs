use crate::cli::commands::{open_pool, parse_track};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        track,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let track = parse_track(track.as_ref())?;

        let prompt = match track {
            Some(t) => format!(
                "Delete the {} entry for {}? This action is irreversible.",
                t.as_str(),
                d
            ),
            None => format!("Delete ALL entries for {}? This action is irreversible.", d),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_pool(cfg)?;
        let removed = DeleteLogic::apply(&mut pool, d, track)?;

        match track {
            Some(t) => success(format!("The {} entry for {} has been deleted.", t.as_str(), d)),
            None => success(format!("{} entries for {} have been deleted.", removed, d)),
        }
    }

    Ok(())
}

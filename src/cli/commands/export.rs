use crate::cli::commands::{open_pool, parse_track};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        track,
        force,
    } = cmd
    {
        let track = parse_track(track.as_ref())?;
        let mut pool = open_pool(cfg)?;
        ExportLogic::export(&mut pool, *format, file, period.as_deref(), track, *force)?;
    }

    Ok(())
}

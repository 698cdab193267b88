use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_config, migrate_config};
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *check {
            check_config(&path)?;
        }

        if *migrate {
            migrate_config(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

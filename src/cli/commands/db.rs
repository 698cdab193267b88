use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::db_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let path = cfg.database_path();
        let pool = DbPool::new(&path.to_string_lossy())?;

        if *migrate {
            info("Running migrations…");
            run_pending_migrations(&pool.conn)?;
            success("Migration completed.");
        }

        if *show_info {
            let stats = db_info(&pool.conn)?;
            println!("🗄️  Database : {}", path.display());
            println!(
                "   Entries  : {} (normal {}, forklift {})",
                stats.total(),
                stats.normal,
                stats.forklift
            );
            match (&stats.first_date, &stats.last_date) {
                (Some(a), Some(b)) => println!("   Dates    : {} → {}", a, b),
                _ => println!("   Dates    : -"),
            }
        }

        if *check {
            info("Running integrity check…");
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}

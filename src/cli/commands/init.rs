use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database_path();
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rShiftPerf…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_str);

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&db_str)?;
    init_db(&pool.conn)?;

    println!("✅ Database initialized at {}", db_str);

    // internal log is best effort
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", db_str),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rShiftPerf initialization completed!");
    Ok(())
}

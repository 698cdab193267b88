use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `entries` table: one row per (date, track).
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            date         TEXT NOT NULL,
            track        TEXT NOT NULL CHECK(track IN ('normal','forklift')),
            performance  REAL NOT NULL,
            hours        REAL NOT NULL,
            overtime     INTEGER NOT NULL DEFAULT 0,
            free_day     INTEGER NOT NULL DEFAULT 0,
            sign_in      TEXT,
            sign_out     TEXT,
            created_at   TEXT NOT NULL,
            PRIMARY KEY (date, track)
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    )?;
    Ok(())
}

/// Older databases stored a single untracked entry per date in `records`.
/// Those rows become `normal` entries.
fn migrate_legacy_records(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_split_records_by_track";

    if !table_exists(conn, "records")? || table_has_column(conn, "records", "track")? {
        return Ok(());
    }
    if migration_applied(conn, version)? {
        return Ok(());
    }

    warning("Legacy 'records' table detected — moving rows to the 'normal' track...");

    conn.execute_batch(
        r#"
        BEGIN;

        INSERT OR REPLACE INTO entries
            (date, track, performance, hours, overtime, free_day, created_at)
        SELECT date, 'normal', IFNULL(performance, 0), IFNULL(hours, 0),
               IFNULL(overtime, 0), IFNULL(free_day, 0), datetime('now')
        FROM records;

        DROP TABLE records;

        COMMIT;
        "#,
    )?;

    mark_applied(conn, version, "Moved legacy records to the normal track")?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Entries created before sign-in/sign-out tracking lack the clock columns.
fn migrate_add_clock_columns(conn: &Connection) -> Result<()> {
    let version = "20250402_0003_add_clock_columns";

    if table_has_column(conn, "entries", "sign_in")? {
        return Ok(());
    }
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE entries ADD COLUMN sign_in TEXT;
        ALTER TABLE entries ADD COLUMN sign_out TEXT;
        "#,
    )?;

    mark_applied(conn, version, "Added sign_in/sign_out to entries")?;
    success(format!(
        "Migration applied: {} → added clock columns to entries table",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db() and before every command that touches the DB.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_entries_table(conn)?;
    migrate_add_clock_columns(conn)?;
    migrate_legacy_records(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_gets_both_tables() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        assert!(table_exists(&conn, "log").unwrap());
        assert!(table_exists(&conn, "entries").unwrap());
        assert!(table_has_column(&conn, "entries", "sign_out").unwrap());
        // idempotent
        run_pending_migrations(&conn).unwrap();
    }

    #[test]
    fn legacy_records_become_normal_entries() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE records (
                date TEXT PRIMARY KEY,
                performance REAL,
                hours REAL,
                overtime INTEGER,
                free_day INTEGER
            );
            INSERT INTO records VALUES ('2025-01-05', 8.1, 8.0, 0, 0);
            INSERT INTO records VALUES ('2025-01-06', NULL, 10.0, 1, 0);
            "#,
        )
        .unwrap();

        run_pending_migrations(&conn).unwrap();

        assert!(!table_exists(&conn, "records").unwrap());
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM entries WHERE track = 'normal'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(n, 2);
        assert!(migration_applied(&conn, "20250310_0002_split_records_by_track").unwrap());
    }

    #[test]
    fn clock_columns_are_added_to_old_entries() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE entries (
                date TEXT NOT NULL,
                track TEXT NOT NULL,
                performance REAL NOT NULL,
                hours REAL NOT NULL,
                overtime INTEGER NOT NULL DEFAULT 0,
                free_day INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                PRIMARY KEY (date, track)
            );
            "#,
        )
        .unwrap();

        run_pending_migrations(&conn).unwrap();
        assert!(table_has_column(&conn, "entries", "sign_in").unwrap());
    }
}

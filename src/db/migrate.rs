use crate::ui::messages::{success, warning};
use log::debug;
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

/// Check if the `special_days` table exists.
fn special_days_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='special_days'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `special_days` table with the current schema.
fn create_special_days_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS special_days (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            title       TEXT,
            note        TEXT,
            kind        TEXT NOT NULL DEFAULT 'other'
                        CHECK(kind IN ('birthday','anniversary','other')),
            author      TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_special_days_date ON special_days(date);
        "#,
    )?;
    Ok(())
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

/// Early databases had no `author` column: shared calendars need one.
fn migrate_add_author_column(conn: &Connection) -> Result<()> {
    let version = "20250904_0001_add_author_to_special_days";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "special_days", "author")? {
        warning("Adding 'author' column to special_days table...");
        conn.execute("ALTER TABLE special_days ADD COLUMN author TEXT;", [])?;
    }

    mark_applied(conn, version, "Added author to special_days")?;
    success(format!(
        "Migration applied: {} → 'author' on special_days",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !special_days_table_exists(conn)? {
        create_special_days_table(conn)?;
        debug!("event=schema_created table=special_days");
        success("Created special_days table.");
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_special_days_date ON special_days(date);",
        )?;
    }

    migrate_add_author_column(conn)?;

    Ok(())
}

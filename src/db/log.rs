//! Audit trail: every mutating command leaves one row in `log`.

use crate::errors::AppResult;
use chrono::{Local, SecondsFormat};
use log::debug;
use rusqlite::{Connection, params};

/// Write an audit line into the `log` table, stamped with local time.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let stamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);

    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        params![stamp, operation, target, message],
    )?;
    debug!("event=audit op={operation} target={target}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn audit_row_carries_rfc3339_stamp() {
        let conn = Connection::open_in_memory().expect("memory db");
        init_db(&conn).expect("schema");
        ttlog(&conn, "add", "2025-09-03", "Added other #1").expect("log");

        let (date, target): (String, String) = conn
            .query_row(
                "SELECT date, target FROM log WHERE operation = 'add'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .expect("row");
        assert!(chrono::DateTime::parse_from_rfc3339(&date).is_ok());
        assert_eq!(target, "2025-09-03");
    }
}

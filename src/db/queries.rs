use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{DayKind, SpecialDay};
use log::warn;
use rusqlite::{OptionalExtension, Result, Row, params};

const COLUMNS: &str = "id, date, title, note, kind, author, created_at";

pub fn map_row(row: &Row) -> Result<SpecialDay> {
    let kind_str: String = row.get("kind")?;
    let kind = DayKind::from_db_str(&kind_str).unwrap_or_else(|| {
        warn!("event=unknown_kind value={kind_str} fallback=other");
        DayKind::Other
    });

    Ok(SpecialDay {
        id: row.get("id")?,
        date: row.get("date")?,
        title: row.get("title")?,
        note: row.get("note")?,
        kind,
        author: row.get("author")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a special day and return its new id.
pub fn insert_special_day(pool: &mut DbPool, day: &SpecialDay) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO special_days (date, title, note, kind, author, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            day.date,
            day.title,
            day.note,
            day.kind.to_db_str(),
            day.author,
            day.created_at,
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// Overwrite date/title/note/kind/author of the row `id`.
/// Returns the number of rows touched (0 when the id does not exist).
pub fn update_special_day(pool: &mut DbPool, id: i64, day: &SpecialDay) -> AppResult<usize> {
    let n = pool.conn.execute(
        "UPDATE special_days
         SET date = ?1, title = ?2, note = ?3, kind = ?4, author = ?5
         WHERE id = ?6",
        params![
            day.date,
            day.title,
            day.note,
            day.kind.to_db_str(),
            day.author,
            id
        ],
    )?;
    Ok(n)
}

pub fn delete_special_day(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM special_days WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn get_special_day(pool: &mut DbPool, id: i64) -> AppResult<Option<SpecialDay>> {
    let mut stmt = pool
        .conn
        .prepare_cached(&format!("SELECT {COLUMNS} FROM special_days WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Events stored on exactly `date`, oldest first.
pub fn load_by_date(pool: &mut DbPool, date: &str) -> AppResult<Vec<SpecialDay>> {
    let mut stmt = pool.conn.prepare_cached(&format!(
        "SELECT {COLUMNS} FROM special_days WHERE date = ?1 ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map([date], map_row)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

/// Events with `from <= date <= to` (string comparison), ordered by date.
pub fn load_range(pool: &mut DbPool, from: &str, to: &str) -> AppResult<Vec<SpecialDay>> {
    let mut stmt = pool.conn.prepare_cached(&format!(
        "SELECT {COLUMNS} FROM special_days
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC, id ASC"
    ))?;
    let rows = stmt.query_map([from, to], map_row)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn load_all(pool: &mut DbPool) -> AppResult<Vec<SpecialDay>> {
    let mut stmt = pool.conn.prepare_cached(&format!(
        "SELECT {COLUMNS} FROM special_days ORDER BY date ASC, id ASC"
    ))?;
    let rows = stmt.query_map([], map_row)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

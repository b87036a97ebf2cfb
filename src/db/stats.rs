//! Numbers behind `db --info`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::DayKind;
use crate::utils::colors::{CYAN, GREEN, YELLOW, paint};
use crate::utils::formatting::{describe_kind, dim};
use std::fs;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DbInfo {
    pub size_bytes: u64,
    pub total: i64,
    pub per_kind: Vec<(DayKind, i64)>,
    pub audit_rows: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn collect(pool: &DbPool, db_path: &str) -> AppResult<DbInfo> {
    let conn = &pool.conn;

    let mut stmt = conn.prepare("SELECT kind, COUNT(*) FROM special_days GROUP BY kind")?;
    let mut per_kind = Vec::new();
    for row in stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?)))? {
        let (kind, n) = row?;
        per_kind.push((DayKind::from_db_str(&kind).unwrap_or_default(), n));
    }
    per_kind.sort_by_key(|(k, _)| k.to_db_str());

    let (total, first_date, last_date): (i64, Option<String>, Option<String>) = conn.query_row(
        "SELECT COUNT(*), MIN(date), MAX(date) FROM special_days",
        [],
        |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
    )?;
    let audit_rows: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |r| r.get(0))?;

    Ok(DbInfo {
        size_bytes: fs::metadata(db_path).map(|m| m.len()).unwrap_or(0),
        total,
        per_kind,
        audit_rows,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let info = collect(pool, db_path)?;
    let label = |s: &str| paint(CYAN, &format!("• {s}:"));

    println!();
    println!("{} {}", label("File"), paint(YELLOW, db_path));
    println!("{} {:.1} KB", label("Size"), info.size_bytes as f64 / 1024.0);
    println!("{} {}", label("Special days"), paint(GREEN, &info.total.to_string()));
    for (kind, n) in &info.per_kind {
        println!("    {:<12} {} {}", kind.to_db_str(), n, dim(describe_kind(*kind).0));
    }
    println!(
        "{} {} .. {}",
        label("Dates"),
        info.first_date.as_deref().unwrap_or("--"),
        info.last_date.as_deref().unwrap_or("--")
    );
    println!("{} {}", label("Audit rows"), info.audit_rows);
    println!();

    Ok(())
}

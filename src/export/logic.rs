use super::{ExportFormat, csv, fs_utils::ensure_writable, json, notify_export_success};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all, load_range};
use crate::errors::{AppError, AppResult};
use crate::models::SpecialDay;
use crate::utils::date::parse_date;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole store, or `FROM:TO` (inclusive `YYYY-MM-DD`), to `file`.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output path must be absolute: {file}"
            )));
        }

        let days = load_days(pool, range)?;

        ensure_writable(path, force)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => csv::write_csv(path, &days)?,
            ExportFormat::Json => json::write_json(path, &days)?,
        }

        ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {} special day(s) to {}", days.len(), file),
        )?;
        notify_export_success(&format.as_str().to_uppercase(), days.len(), path);

        Ok(days.len())
    }
}

fn load_days(pool: &mut DbPool, range: Option<&str>) -> AppResult<Vec<SpecialDay>> {
    match range {
        None | Some("all") => load_all(pool),
        Some(r) => {
            let (from, to) = parse_range(r)?;
            load_range(pool, &from, &to)
        }
    }
}

/// `FROM:TO` with both ends valid `YYYY-MM-DD` dates and `FROM <= TO`.
pub fn parse_range(r: &str) -> AppResult<(String, String)> {
    let (from, to) = r
        .split_once(':')
        .ok_or_else(|| AppError::InvalidRange(r.to_string()))?;
    let from = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
    let to = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;
    if from > to {
        return Err(AppError::InvalidRange(r.to_string()));
    }
    Ok((
        from.format("%Y-%m-%d").to_string(),
        to.format("%Y-%m-%d").to_string(),
    ))
}

use crate::errors::AppResult;
use crate::models::SpecialDay;
use std::path::Path;

/// Write special days as pretty-printed JSON.
pub fn write_json(path: &Path, days: &[SpecialDay]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(days)?;
    std::fs::write(path, json)?;
    Ok(())
}

use crate::errors::AppResult;
use crate::models::SpecialDay;
use csv::Writer;
use std::path::Path;

/// Write special days as CSV, one row per event.
pub fn write_csv(path: &Path, days: &[SpecialDay]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "date", "kind", "title", "note", "author", "created_at"])?;

    for d in days {
        wtr.write_record([
            d.id.to_string().as_str(),
            d.date.as_str(),
            d.kind.to_db_str(),
            d.title.as_deref().unwrap_or(""),
            d.note.as_deref().unwrap_or(""),
            d.author.as_deref().unwrap_or(""),
            d.created_at.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
